use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A motorcycle repair shop, normalized from whichever source it was loaded
/// from.
///
/// Only `id` is guaranteed. Every other field is optional and consumers must
/// omit the corresponding UI element when it is absent; serialization skips
/// absent fields for the same reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopRecord {
    /// Source ID, or the 1-based data-row ordinal when the source had none.
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Address::is_empty")]
    pub address: Address,
    #[serde(default, skip_serializing_if = "Contact::is_empty")]
    pub contact: Contact,
    /// Uppercase ISO 3166-1 alpha-2 code, e.g. `"FR"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Free-form attributes; only the remote table source provides them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

impl ShopRecord {
    /// A record carrying nothing but its ID.
    #[must_use]
    pub fn bare(id: i64) -> Self {
        Self {
            id,
            name: None,
            coordinates: None,
            address: Address::default(),
            contact: Contact::default(),
            country_code: None,
            tags: None,
        }
    }

    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.address.city.as_deref()
    }

    #[must_use]
    pub fn street(&self) -> Option<&str> {
        self.address.street.as_deref()
    }

    /// Single-line address for popups and cards: `"street, city, postcode"`,
    /// skipping absent parts. `None` when the shop has no city, matching how
    /// list cards and map popups hide the address line entirely.
    #[must_use]
    pub fn display_address(&self) -> Option<String> {
        let city = self.city()?;
        let mut parts = Vec::with_capacity(3);
        if let Some(street) = self.street() {
            match self.address.house_number.as_deref() {
                Some(number) => parts.push(format!("{street} {number}")),
                None => parts.push(street.to_string()),
            }
        }
        parts.push(city.to_string());
        if let Some(postcode) = self.address.postcode.as_deref() {
            parts.push(postcode.to_string());
        }
        Some(parts.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
}

impl Address {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.street.is_none()
            && self.house_number.is_none()
            && self.postcode.is_none()
            && self.suburb.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Contact {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.fax.is_none() && self.website.is_none() && self.email.is_none()
    }
}

/// The full set of shops for one session, as produced by one ingestion run.
///
/// Never mutated after construction; a refresh builds a new collection and
/// swaps it in.
#[derive(Debug, Clone, Serialize)]
pub struct ShopCollection {
    pub shops: Vec<ShopRecord>,
    pub loaded_at: DateTime<Utc>,
    /// Where the shops came from, e.g. a file path or table name.
    pub source: String,
}

impl ShopCollection {
    #[must_use]
    pub fn new(shops: Vec<ShopRecord>, source: impl Into<String>) -> Self {
        Self {
            shops,
            loaded_at: Utc::now(),
            source: source.into(),
        }
    }

    #[must_use]
    pub fn empty(source: impl Into<String>) -> Self {
        Self::new(Vec::new(), source)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&ShopRecord> {
        self.shops.iter().find(|shop| shop.id == id)
    }
}
