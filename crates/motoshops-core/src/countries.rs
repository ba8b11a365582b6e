//! Static reference data for the 27 EU member states.
//!
//! Adding a country means adding a row to [`EU_COUNTRIES`]; name lookup and
//! the country summary both read from this table.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    /// English short name, as it appears in `"City, Country"` source values.
    pub name: &'static str,
    pub flag: &'static str,
}

const fn country(code: &'static str, name: &'static str, flag: &'static str) -> Country {
    Country { code, name, flag }
}

pub const EU_COUNTRIES: &[Country] = &[
    country("AT", "Austria", "🇦🇹"),
    country("BE", "Belgium", "🇧🇪"),
    country("BG", "Bulgaria", "🇧🇬"),
    country("HR", "Croatia", "🇭🇷"),
    country("CY", "Cyprus", "🇨🇾"),
    country("CZ", "Czech Republic", "🇨🇿"),
    country("DK", "Denmark", "🇩🇰"),
    country("EE", "Estonia", "🇪🇪"),
    country("FI", "Finland", "🇫🇮"),
    country("FR", "France", "🇫🇷"),
    country("DE", "Germany", "🇩🇪"),
    country("GR", "Greece", "🇬🇷"),
    country("HU", "Hungary", "🇭🇺"),
    country("IE", "Ireland", "🇮🇪"),
    country("IT", "Italy", "🇮🇹"),
    country("LV", "Latvia", "🇱🇻"),
    country("LT", "Lithuania", "🇱🇹"),
    country("LU", "Luxembourg", "🇱🇺"),
    country("MT", "Malta", "🇲🇹"),
    country("NL", "Netherlands", "🇳🇱"),
    country("PL", "Poland", "🇵🇱"),
    country("PT", "Portugal", "🇵🇹"),
    country("RO", "Romania", "🇷🇴"),
    country("SK", "Slovakia", "🇸🇰"),
    country("SI", "Slovenia", "🇸🇮"),
    country("ES", "Spain", "🇪🇸"),
    country("SE", "Sweden", "🇸🇪"),
];

/// Resolve an English country name to its code, ignoring ASCII case and
/// surrounding whitespace.
///
/// Returns `None` for names outside the EU table.
#[must_use]
pub fn country_code_for_name(name: &str) -> Option<&'static str> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    EU_COUNTRIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .map(|c| c.code)
}

/// Look up a table entry by its exact (uppercase) code.
#[must_use]
pub fn country_by_code(code: &str) -> Option<&'static Country> {
    EU_COUNTRIES.iter().find(|c| c.code == code)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn table_covers_all_member_states_once() {
        assert_eq!(EU_COUNTRIES.len(), 27);
        let codes: HashSet<_> = EU_COUNTRIES.iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), 27);
    }

    #[test]
    fn codes_are_two_uppercase_letters() {
        for c in EU_COUNTRIES {
            assert_eq!(c.code.len(), 2, "{c:?}");
            assert!(c.code.chars().all(|ch| ch.is_ascii_uppercase()), "{c:?}");
        }
    }

    #[test]
    fn name_lookup_resolves_known_names() {
        assert_eq!(country_code_for_name("France"), Some("FR"));
        assert_eq!(country_code_for_name("Germany"), Some("DE"));
        assert_eq!(country_code_for_name("Czech Republic"), Some("CZ"));
        assert_eq!(country_code_for_name("Greece"), Some("GR"));
    }

    #[test]
    fn name_lookup_ignores_case_and_whitespace() {
        assert_eq!(country_code_for_name("  netherlands "), Some("NL"));
        assert_eq!(country_code_for_name("SPAIN"), Some("ES"));
    }

    #[test]
    fn name_lookup_rejects_non_eu_and_empty() {
        assert_eq!(country_code_for_name("Switzerland"), None);
        assert_eq!(country_code_for_name(""), None);
    }

    #[test]
    fn code_lookup_is_exact() {
        assert_eq!(country_by_code("PT").map(|c| c.name), Some("Portugal"));
        assert!(country_by_code("pt").is_none());
    }
}
