//! Derived summaries the presentation layer needs alongside a filtered view:
//! map framing, pins, and per-country counts for the country selector.

use serde::Serialize;

use crate::countries::{Country, EU_COUNTRIES};
use crate::shop::ShopRecord;

/// Centre of Europe, used when nothing in the view can be placed on the map.
pub const DEFAULT_CENTER: MapCenter = MapCenter {
    lat: 50.0,
    lng: 10.0,
};
pub const DEFAULT_ZOOM: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub center: MapCenter,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Frame the map around `shops`.
///
/// The centre is the mean position of the shops that have coordinates. Zoom
/// tightens as the view shrinks: 12 for a single shop, 8 below ten, 6
/// otherwise. The zoom thresholds count every shop in the view, located or
/// not.
#[must_use]
pub fn map_view(shops: &[&ShopRecord]) -> MapView {
    let located: Vec<_> = shops.iter().filter_map(|s| s.coordinates).collect();
    if located.is_empty() {
        return MapView::default();
    }

    // Shop counts are far below f64's exact-integer range.
    #[allow(clippy::cast_precision_loss)]
    let n = located.len() as f64;
    let lat = located.iter().map(|c| c.latitude).sum::<f64>() / n;
    let lng = located.iter().map(|c| c.longitude).sum::<f64>() / n;

    let zoom = match shops.len() {
        1 => 12,
        2..=9 => 8,
        _ => 6,
    };

    MapView {
        center: MapCenter { lat, lng },
        zoom,
    }
}

/// The subset of `shops` that can be pinned on the map.
#[must_use]
pub fn map_pins<'a>(shops: &[&'a ShopRecord]) -> Vec<&'a ShopRecord> {
    shops
        .iter()
        .copied()
        .filter(|s| s.coordinates.is_some())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryCount {
    #[serde(flatten)]
    pub country: Country,
    pub shop_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountrySummary {
    pub total: usize,
    /// One entry per EU country, in table order, including zero counts.
    pub countries: Vec<CountryCount>,
    /// Shops whose country code is absent or outside the EU table.
    pub unassigned: usize,
}

/// Count shops per EU country for the country selector.
#[must_use]
pub fn country_summary(shops: &[ShopRecord]) -> CountrySummary {
    let countries: Vec<CountryCount> = EU_COUNTRIES
        .iter()
        .map(|country| CountryCount {
            country: *country,
            shop_count: shops
                .iter()
                .filter(|s| s.country_code.as_deref() == Some(country.code))
                .count(),
        })
        .collect();

    let assigned: usize = countries.iter().map(|c| c.shop_count).sum();

    CountrySummary {
        total: shops.len(),
        countries,
        unassigned: shops.len() - assigned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::Coordinates;

    fn located(id: i64, latitude: f64, longitude: f64) -> ShopRecord {
        let mut shop = ShopRecord::bare(id);
        shop.coordinates = Some(Coordinates {
            latitude,
            longitude,
        });
        shop
    }

    fn with_country(id: i64, code: &str) -> ShopRecord {
        let mut shop = ShopRecord::bare(id);
        shop.country_code = Some(code.to_string());
        shop
    }

    #[test]
    fn empty_view_uses_europe_default() {
        assert_eq!(map_view(&[]), MapView::default());
    }

    #[test]
    fn view_without_coordinates_uses_default() {
        let shops = [ShopRecord::bare(1), ShopRecord::bare(2)];
        let refs: Vec<_> = shops.iter().collect();
        assert_eq!(map_view(&refs), MapView::default());
    }

    #[test]
    fn single_shop_is_centered_closely() {
        let shop = located(1, 45.76, 4.84);
        let view = map_view(&[&shop]);
        assert_eq!(view.zoom, 12);
        assert!((view.center.lat - 45.76).abs() < 1e-9);
        assert!((view.center.lng - 4.84).abs() < 1e-9);
    }

    #[test]
    fn center_is_mean_of_located_shops() {
        let shops = [located(1, 40.0, 0.0), located(2, 50.0, 10.0), ShopRecord::bare(3)];
        let refs: Vec<_> = shops.iter().collect();
        let view = map_view(&refs);
        assert!((view.center.lat - 45.0).abs() < 1e-9);
        assert!((view.center.lng - 5.0).abs() < 1e-9);
        assert_eq!(view.zoom, 8);
    }

    #[test]
    fn large_view_zooms_out() {
        let shops: Vec<_> = (1..=12).map(|i| located(i, 48.0, 2.0)).collect();
        let refs: Vec<_> = shops.iter().collect();
        assert_eq!(map_view(&refs).zoom, 6);
    }

    #[test]
    fn pins_skip_unlocated_shops() {
        let shops = [located(1, 1.0, 1.0), ShopRecord::bare(2), located(3, 2.0, 2.0)];
        let refs: Vec<_> = shops.iter().collect();
        let pins: Vec<_> = map_pins(&refs).iter().map(|s| s.id).collect();
        assert_eq!(pins, vec![1, 3]);
    }

    #[test]
    fn country_summary_counts_per_country_and_unassigned() {
        let shops = vec![
            with_country(1, "DE"),
            with_country(2, "FR"),
            with_country(3, "DE"),
            with_country(4, "CH"),
            ShopRecord::bare(5),
        ];
        let summary = country_summary(&shops);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.countries.len(), 27);
        let count = |code: &str| {
            summary
                .countries
                .iter()
                .find(|c| c.country.code == code)
                .map(|c| c.shop_count)
        };
        assert_eq!(count("DE"), Some(2));
        assert_eq!(count("FR"), Some(1));
        assert_eq!(count("IT"), Some(0));
        assert_eq!(summary.unassigned, 2);
    }
}
