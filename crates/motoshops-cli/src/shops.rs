//! Read-only directory commands.
//!
//! Each `run_*` function prints to stdout; the matching `render_*` function
//! builds the text so it can be checked without capturing output.

use std::fmt::Write as _;

use motoshops_core::{
    country_summary, filter_shops, map_pins, map_view, ShopCollection, ShopFilter, ShopRecord,
};

const NAME_WIDTH: usize = 40;

/// Print shops matching `filter`, as a table or as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn run_list(
    collection: &ShopCollection,
    filter: &ShopFilter,
    json: bool,
) -> anyhow::Result<()> {
    let shops = filter_shops(&collection.shops, filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&shops)?);
        return Ok(());
    }

    if shops.is_empty() {
        if collection.is_empty() {
            println!("no shops loaded from {}", collection.source);
        } else {
            println!("no shops match the current filter");
        }
        return Ok(());
    }

    print!("{}", render_shop_table(&shops));
    println!("{} of {} shops", shops.len(), collection.len());
    Ok(())
}

pub(crate) fn run_countries(collection: &ShopCollection) {
    print!("{}", render_country_table(collection));
}

pub(crate) fn run_map(collection: &ShopCollection, filter: &ShopFilter) {
    let visible = filter_shops(&collection.shops, filter);
    print!("{}", render_map(&visible));
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        format!("{}...", value.chars().take(width - 3).collect::<String>())
    } else {
        value.to_string()
    }
}

pub(crate) fn render_shop_table(shops: &[&ShopRecord]) -> String {
    let mut out = format!("{:<8}{:<9}{:<42}ADDRESS\n", "ID", "COUNTRY", "NAME");
    for shop in shops {
        let name = truncate(shop.name.as_deref().unwrap_or("-"), NAME_WIDTH);
        let _ = writeln!(
            out,
            "{:<8}{:<9}{:<42}{}",
            shop.id,
            shop.country_code.as_deref().unwrap_or("-"),
            name,
            shop.display_address().unwrap_or_default()
        );
    }
    out
}

pub(crate) fn render_country_table(collection: &ShopCollection) -> String {
    let summary = country_summary(&collection.shops);
    let mut out = format!("{:<6}{:<6}{:<14}SHOPS\n", "CODE", "FLAG", "NAME");
    for entry in &summary.countries {
        let _ = writeln!(
            out,
            "{:<6}{:<6}{:<14}{}",
            entry.country.code, entry.country.flag, entry.country.name, entry.shop_count
        );
    }
    let _ = writeln!(
        out,
        "total {} shops, {} without an EU country",
        summary.total, summary.unassigned
    );
    out
}

pub(crate) fn render_map(shops: &[&ShopRecord]) -> String {
    let view = map_view(shops);
    let pins = map_pins(shops);

    let mut out = format!(
        "center {:.4}, {:.4} zoom {}\n",
        view.center.lat, view.center.lng, view.zoom
    );
    let _ = writeln!(out, "{} of {} shops pinned", pins.len(), shops.len());
    for pin in pins {
        if let Some(coords) = pin.coordinates {
            let _ = writeln!(
                out,
                "{:>10.4} {:>10.4}  {}",
                coords.latitude,
                coords.longitude,
                pin.name.as_deref().unwrap_or("-")
            );
        }
    }
    out
}
