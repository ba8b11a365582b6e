use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Where shop records are loaded from.
#[derive(Clone, PartialEq, Eq)]
pub enum ShopSource {
    /// A CSV file on the local filesystem.
    CsvFile(PathBuf),
    /// A CSV file served over HTTP(S).
    CsvUrl(String),
    /// A hosted table exposing a PostgREST-style REST interface.
    RemoteTable {
        base_url: String,
        api_key: String,
        table: String,
    },
}

impl ShopSource {
    /// Interpret a CSV location: `http://` and `https://` values are URLs,
    /// everything else is a filesystem path.
    #[must_use]
    pub fn csv(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            ShopSource::CsvUrl(location.to_string())
        } else {
            ShopSource::CsvFile(PathBuf::from(location))
        }
    }

    /// Human-readable label for logs and API metadata. Never includes the key.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            ShopSource::CsvFile(path) => format!("csv:{}", path.display()),
            ShopSource::CsvUrl(url) => format!("csv:{url}"),
            ShopSource::RemoteTable {
                base_url, table, ..
            } => format!("remote:{}/{table}", base_url.trim_end_matches('/')),
        }
    }
}

impl std::fmt::Debug for ShopSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShopSource::CsvFile(path) => f.debug_tuple("CsvFile").field(path).finish(),
            ShopSource::CsvUrl(url) => f.debug_tuple("CsvUrl").field(url).finish(),
            ShopSource::RemoteTable {
                base_url, table, ..
            } => f
                .debug_struct("RemoteTable")
                .field("base_url", base_url)
                .field("api_key", &"[redacted]")
                .field("table", table)
                .finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub source: ShopSource,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
