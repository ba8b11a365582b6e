//! Country and free-text filtering over a loaded shop collection.
//!
//! Filtering never mutates or clones records: the result borrows from the
//! input slice and keeps the original relative order, so it is cheap to
//! recompute on every keystroke.

use serde::Deserialize;

use crate::shop::ShopRecord;

/// Current selection state of the directory UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShopFilter {
    /// Exact country code to keep; `None` keeps every country.
    #[serde(default)]
    pub country: Option<String>,
    /// Case-insensitive substring matched against name, city, street and
    /// country code. Blank text disables the text filter.
    #[serde(default, alias = "q")]
    pub search: Option<String>,
}

impl ShopFilter {
    #[must_use]
    pub fn new(country: Option<&str>, search: Option<&str>) -> Self {
        Self {
            country: country.map(str::to_string),
            search: search.map(str::to_string),
        }
    }

    /// The selected country, treating an empty selection as none.
    fn selected_country(&self) -> Option<&str> {
        self.country.as_deref().filter(|c| !c.is_empty())
    }

    /// Lowercased, trimmed search text, or `None` when blank.
    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

/// Apply `filter` to `shops`: country first, then search text (AND).
#[must_use]
pub fn filter_shops<'a>(shops: &'a [ShopRecord], filter: &ShopFilter) -> Vec<&'a ShopRecord> {
    let country = filter.selected_country();
    let needle = filter.needle();

    shops
        .iter()
        .filter(|shop| country.is_none_or(|code| shop.country_code.as_deref() == Some(code)))
        .filter(|shop| {
            needle
                .as_deref()
                .is_none_or(|needle| matches_search(shop, needle))
        })
        .collect()
}

fn matches_search(shop: &ShopRecord, needle: &str) -> bool {
    [
        shop.name.as_deref(),
        shop.city(),
        shop.street(),
        shop.country_code.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}
