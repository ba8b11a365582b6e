//! Retrieve → parse → normalize, producing the session's shop collection.

use std::path::PathBuf;
use std::time::Duration;

use motoshops_core::{AppConfig, ShopCollection, ShopRecord, ShopSource};
use reqwest::Client;
use tokio::sync::Mutex;

use crate::error::IngestError;
use crate::fetch::{fetch_text, read_text};
use crate::parse::parse_shops_csv;
use crate::remote::RemoteTableClient;

/// Owns the configured source and the HTTP client used to reach it.
///
/// Build one per session and share it by reference. Calling
/// [`load`](Self::load) again (e.g. a manual refresh) repeats the whole
/// retrieval and returns a new collection; at most one retrieval per
/// pipeline runs at a time.
pub struct IngestionPipeline {
    source: ShopSource,
    retriever: Retriever,
    in_flight: Mutex<()>,
}

enum Retriever {
    File(PathBuf),
    Url { client: Client, url: String },
    Remote(RemoteTableClient),
}

impl IngestionPipeline {
    /// Creates a pipeline for `source`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] if an HTTP client cannot be built, or
    /// [`IngestError::InvalidUrl`] if a remote table URL does not parse.
    pub fn new(
        source: ShopSource,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, IngestError> {
        let retriever = match &source {
            ShopSource::CsvFile(path) => Retriever::File(path.clone()),
            ShopSource::CsvUrl(url) => Retriever::Url {
                client: Client::builder()
                    .timeout(Duration::from_secs(timeout_secs))
                    .connect_timeout(Duration::from_secs(10))
                    .user_agent(user_agent)
                    .build()?,
                url: url.clone(),
            },
            ShopSource::RemoteTable {
                base_url,
                api_key,
                table,
            } => Retriever::Remote(RemoteTableClient::new(
                base_url,
                api_key,
                table,
                timeout_secs,
                user_agent,
            )?),
        };

        Ok(Self {
            source,
            retriever,
            in_flight: Mutex::new(()),
        })
    }

    /// Creates a pipeline from application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`IngestionPipeline::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, IngestError> {
        Self::new(
            config.source.clone(),
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    #[must_use]
    pub fn source(&self) -> &ShopSource {
        &self.source
    }

    /// Retrieve and normalize every shop, surfacing retrieval failures.
    ///
    /// Waits for any retrieval already running on this pipeline to finish
    /// before starting its own.
    ///
    /// # Errors
    ///
    /// Returns the [`IngestError`] from whichever retrieval step failed.
    /// Malformed rows are never errors.
    pub async fn try_load(&self) -> Result<Vec<ShopRecord>, IngestError> {
        let _guard = self.in_flight.lock().await;
        self.retrieve().await
    }

    async fn retrieve(&self) -> Result<Vec<ShopRecord>, IngestError> {
        match &self.retriever {
            Retriever::File(path) => {
                let text = read_text(path).await?;
                Ok(parse_shops_csv(&text))
            }
            Retriever::Url { client, url } => {
                let text = fetch_text(client, url).await?;
                Ok(parse_shops_csv(&text))
            }
            Retriever::Remote(remote) => remote.fetch_shops().await,
        }
    }

    /// Retrieve the collection, degrading any failure to an empty one.
    ///
    /// Failures are logged, never returned: to the caller a broken source
    /// looks like a directory with no shops.
    pub async fn load(&self) -> ShopCollection {
        let label = self.source.label();

        match self.try_load().await {
            Ok(shops) => {
                let located = shops.iter().filter(|s| s.coordinates.is_some()).count();
                tracing::info!(
                    source = %label,
                    count = shops.len(),
                    located,
                    "loaded shops"
                );
                ShopCollection::new(shops, label)
            }
            Err(error) => {
                tracing::error!(source = %label, error = %error, "shop ingestion failed");
                ShopCollection::empty(label)
            }
        }
    }
}
