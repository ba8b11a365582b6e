//! Client for the hosted shop table.
//!
//! The table is exposed through a PostgREST-style interface and already
//! returns structured shop objects, so no CSV parsing happens on this path.
//! Rows are still decoded into a permissive boundary type and converted with
//! the same blank-is-absent rules the CSV normalizer applies.

use std::collections::BTreeMap;
use std::time::Duration;

use motoshops_core::{Address, Contact, Coordinates, ShopRecord};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::IngestError;

/// Client for one remote table.
///
/// Use [`RemoteTableClient::new`] with the project base URL; tests point it at
/// a mock server the same way.
pub struct RemoteTableClient {
    client: Client,
    base_url: Url,
    api_key: String,
    table: String,
}

impl RemoteTableClient {
    /// Creates a client for `table` under the project at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`IngestError::InvalidUrl`] if `base_url`
    /// does not parse.
    pub fn new(
        base_url: &str,
        api_key: &str,
        table: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, IngestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Ensure exactly one trailing slash so `join` appends instead of
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| IngestError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_owned(),
            table: table.to_owned(),
        })
    }

    fn table_url(&self) -> Result<Url, IngestError> {
        let mut url = self
            .base_url
            .join(&format!("rest/v1/{}", self.table))
            .map_err(|e| IngestError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut().append_pair("select", "*");
        Ok(url)
    }

    /// Fetches every row of the table as decoded boundary rows.
    ///
    /// # Errors
    ///
    /// - [`IngestError::Http`] on network failure.
    /// - [`IngestError::Remote`] when the service answers with an error body.
    /// - [`IngestError::UnexpectedStatus`] for other non-2xx statuses.
    /// - [`IngestError::Deserialize`] if the body is not an array of rows.
    pub async fn fetch_rows(&self) -> Result<Vec<RemoteShopRow>, IngestError> {
        let url = self.table_url()?;
        let response = self
            .client
            .get(url.clone())
            .header("apikey", &self.api_key)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.api_key),
            )
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if let Ok(err) = serde_json::from_str::<RemoteErrorBody>(&body) {
                return Err(IngestError::Remote {
                    code: err.code.unwrap_or_else(|| status.as_u16().to_string()),
                    message: err.message,
                });
            }
            return Err(IngestError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|source| IngestError::Deserialize {
            context: format!("table {}", self.table),
            source,
        })
    }

    /// Fetches the table and converts every row into a [`ShopRecord`].
    ///
    /// # Errors
    ///
    /// Same as [`RemoteTableClient::fetch_rows`].
    pub async fn fetch_shops(&self) -> Result<Vec<ShopRecord>, IngestError> {
        let rows = self.fetch_rows().await?;
        Ok(rows.into_iter().map(RemoteShopRow::into_record).collect())
    }
}

#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    code: Option<String>,
    message: String,
}

/// One row as the remote table stores it.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteShopRow {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub address: Option<RemoteAddress>,
    #[serde(default)]
    pub contact: Option<RemoteContact>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub shop_tags: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteAddress {
    pub city: Option<String>,
    pub street: Option<String>,
    pub housenumber: Option<String>,
    pub postcode: Option<String>,
    pub suburb: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteContact {
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
}

impl RemoteShopRow {
    /// Convert into the canonical record.
    #[must_use]
    pub fn into_record(self) -> ShopRecord {
        let coordinates = match (self.lat, self.lon) {
            (Some(latitude), Some(longitude)) if latitude.is_finite() && longitude.is_finite() => {
                Some(Coordinates {
                    latitude,
                    longitude,
                })
            }
            _ => None,
        };

        let address = self.address.unwrap_or_default();
        let contact = self.contact.unwrap_or_default();

        ShopRecord {
            id: self.id,
            name: non_blank(self.name),
            coordinates,
            address: Address {
                city: non_blank(address.city),
                street: non_blank(address.street),
                house_number: non_blank(address.housenumber),
                postcode: non_blank(address.postcode),
                suburb: non_blank(address.suburb),
            },
            contact: Contact {
                phone: non_blank(contact.phone),
                fax: non_blank(contact.fax),
                website: non_blank(contact.website).filter(|w| w != "N/A"),
                email: non_blank(contact.email),
            },
            country_code: non_blank(self.country_code).map(|c| c.to_ascii_uppercase()),
            tags: self.shop_tags.filter(|t| !t.is_empty()),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(value: serde_json::Value) -> RemoteShopRow {
        serde_json::from_value(value).expect("valid row")
    }

    #[test]
    fn minimal_row_converts_to_bare_record() {
        let shop = row(serde_json::json!({ "id": 5 })).into_record();
        assert_eq!(shop, ShopRecord::bare(5));
    }

    #[test]
    fn nested_fields_are_mapped() {
        let shop = row(serde_json::json!({
            "id": 1,
            "name": "Moto Atelier",
            "lat": 45.76,
            "lon": 4.84,
            "address": { "city": "Lyon", "street": "Rue Garibaldi", "housenumber": "12" },
            "contact": { "phone": "+33 4", "website": "N/A" },
            "country_code": "fr",
            "shop_tags": { "shop": "motorcycle" }
        }))
        .into_record();

        assert_eq!(shop.name.as_deref(), Some("Moto Atelier"));
        assert!(shop.coordinates.is_some());
        assert_eq!(shop.address.house_number.as_deref(), Some("12"));
        assert_eq!(shop.contact.phone.as_deref(), Some("+33 4"));
        assert!(shop.contact.website.is_none());
        assert_eq!(shop.country_code.as_deref(), Some("FR"));
        assert_eq!(
            shop.tags.as_ref().and_then(|t| t.get("shop")).map(String::as_str),
            Some("motorcycle")
        );
    }

    #[test]
    fn null_and_blank_values_become_absent() {
        let shop = row(serde_json::json!({
            "id": 2,
            "name": "",
            "lat": 45.0,
            "lon": null,
            "address": null,
            "contact": { "email": "  " },
            "shop_tags": {}
        }))
        .into_record();
        assert_eq!(shop, ShopRecord::bare(2));
    }

    #[test]
    fn table_url_appends_rest_path_and_select() {
        let client =
            RemoteTableClient::new("https://abc.example.co/", "key", "motorcycle_shops", 5, "t")
                .expect("client");
        assert_eq!(
            client.table_url().expect("url").as_str(),
            "https://abc.example.co/rest/v1/motorcycle_shops?select=*"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = RemoteTableClient::new("not a url", "key", "t", 5, "t");
        assert!(matches!(result, Err(IngestError::InvalidUrl { .. })));
    }
}
