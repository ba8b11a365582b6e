pub mod error;
mod fetch;
pub mod normalize;
pub mod parse;
pub mod pipeline;
pub mod remote;

pub use error::IngestError;
pub use normalize::normalize_row;
pub use parse::{parse_delimited, parse_shops_csv, ParsedTable, RawRow};
pub use pipeline::IngestionPipeline;
pub use remote::{RemoteShopRow, RemoteTableClient};
