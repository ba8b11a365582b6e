pub mod app_config;
pub mod config;
pub mod countries;
pub mod filter;
pub mod map_view;
pub mod shop;

pub use app_config::{AppConfig, Environment, ShopSource};
pub use config::{load_app_config, load_app_config_from_env, load_app_config_with_csv};
pub use countries::{country_by_code, country_code_for_name, Country, EU_COUNTRIES};
pub use filter::{filter_shops, ShopFilter};
pub use map_view::{
    country_summary, map_pins, map_view, CountryCount, CountrySummary, MapCenter, MapView,
};
pub use shop::{Address, Contact, Coordinates, ShopCollection, ShopRecord};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
