//! Low-level retrieval helpers for CSV sources.

use std::path::Path;

use crate::error::IngestError;

/// Fetch a plain-text body, treating any non-2xx status as a failure.
pub(crate) async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String, IngestError> {
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "text/csv,text/plain;q=0.9,*/*;q=0.8")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_owned(),
        });
    }

    Ok(response.text().await?)
}

/// Read a local file as UTF-8 text.
pub(crate) async fn read_text(path: &Path) -> Result<String, IngestError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| IngestError::Io {
            path: path.display().to_string(),
            source,
        })
}
