//! Conversion from an untyped [`RawRow`] to a canonical [`ShopRecord`].
//!
//! This is the only place loosely-typed CSV data becomes typed. Every rule
//! here degrades to "field absent" rather than failing, so a row always
//! produces a record.

use motoshops_core::{country_code_for_name, Coordinates, ShopRecord};

use crate::parse::RawRow;

/// Column aliases, highest priority first.
const LATITUDE: &[&str] = &["latitude", "lat"];
const LONGITUDE: &[&str] = &["longitude", "lon"];
const STREET: &[&str] = &["address", "street"];
const HOUSE_NUMBER: &[&str] = &["housenumber", "house_number"];

/// Website placeholder some exports use instead of leaving the cell empty.
const WEBSITE_SENTINEL: &str = "N/A";

/// Normalize one parsed CSV row.
///
/// `row_index` is the 1-based position of the row among data rows; it stands
/// in for the ID when the `id` column is missing or not an integer.
#[must_use]
pub fn normalize_row(row: &RawRow, row_index: usize) -> ShopRecord {
    let id = row
        .get("id")
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or_else(|| i64::try_from(row_index).unwrap_or(i64::MAX));

    let (city, country_name) = split_city_country(row.get("city"));

    let country_code = row
        .get("country_code")
        .map(str::to_ascii_uppercase)
        .or_else(|| {
            country_name
                .and_then(country_code_for_name)
                .map(str::to_string)
        });

    let mut shop = ShopRecord::bare(id);
    shop.name = owned(row.get("name"));
    shop.coordinates = parse_coordinates(row);
    shop.country_code = country_code;

    shop.address.city = owned(city);
    shop.address.street = owned(row.first_of(STREET));
    shop.address.house_number = owned(row.first_of(HOUSE_NUMBER));
    shop.address.postcode = owned(row.get("postcode"));
    shop.address.suburb = owned(row.get("suburb"));

    shop.contact.phone = owned(row.get("phone"));
    shop.contact.fax = owned(row.get("fax"));
    shop.contact.website = owned(row.get("website").filter(|w| *w != WEBSITE_SENTINEL));
    shop.contact.email = owned(row.get("email"));

    shop
}

/// Split a `"City, Country"` value on its first comma.
///
/// Returns the city (falling back to the whole value when nothing precedes
/// the comma) and the country name, if any.
pub(crate) fn split_city_country(raw: Option<&str>) -> (Option<&str>, Option<&str>) {
    let Some(raw) = raw else {
        return (None, None);
    };

    match raw.split_once(',') {
        Some((city, country)) => {
            let city = city.trim();
            let country = country.trim();
            (
                Some(if city.is_empty() { raw } else { city }),
                Some(country).filter(|c| !c.is_empty()),
            )
        }
        None => (Some(raw), None),
    }
}

/// Both halves must parse to finite numbers, otherwise the shop is unplaced.
fn parse_coordinates(row: &RawRow) -> Option<Coordinates> {
    let latitude = parse_f64(row.first_of(LATITUDE)?)?;
    let longitude = parse_f64(row.first_of(LONGITUDE)?)?;
    Some(Coordinates {
        latitude,
        longitude,
    })
}

fn parse_f64(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
