use super::*;

// -----------------------------------------------------------------------
// id
// -----------------------------------------------------------------------

#[test]
fn id_is_parsed_from_column() {
    let row = RawRow::from([("id", "4021"), ("name", "Moto A")]);
    assert_eq!(normalize_row(&row, 1).id, 4021);
}

#[test]
fn missing_id_falls_back_to_row_index() {
    let row = RawRow::from([("name", "Moto A")]);
    assert_eq!(normalize_row(&row, 3).id, 3);
}

#[test]
fn non_numeric_id_falls_back_to_row_index() {
    let row = RawRow::from([("id", "node/123"), ("name", "Moto A")]);
    assert_eq!(normalize_row(&row, 3).id, 3);
}

#[test]
fn blank_row_still_produces_a_record() {
    let shop = normalize_row(&RawRow::default(), 9);
    assert_eq!(shop, ShopRecord::bare(9));
}

// -----------------------------------------------------------------------
// coordinates
// -----------------------------------------------------------------------

#[test]
fn lat_lon_columns_are_parsed() {
    let row = RawRow::from([("lat", "45.764"), ("lon", "4.8357")]);
    let coords = normalize_row(&row, 1).coordinates.expect("coordinates");
    assert!((coords.latitude - 45.764).abs() < 1e-9);
    assert!((coords.longitude - 4.8357).abs() < 1e-9);
}

#[test]
fn latitude_longitude_columns_win_over_lat_lon() {
    let row = RawRow::from([
        ("latitude", "52.52"),
        ("longitude", "13.405"),
        ("lat", "1.0"),
        ("lon", "2.0"),
    ]);
    let coords = normalize_row(&row, 1).coordinates.expect("coordinates");
    assert!((coords.latitude - 52.52).abs() < 1e-9);
    assert!((coords.longitude - 13.405).abs() < 1e-9);
}

#[test]
fn blank_latitude_falls_back_to_lat() {
    let row = RawRow::from([("latitude", ""), ("lat", "48.85"), ("lon", "2.35")]);
    assert!(normalize_row(&row, 1).coordinates.is_some());
}

#[test]
fn unparseable_coordinate_drops_both() {
    let row = RawRow::from([("lat", "north-ish"), ("lon", "2.35")]);
    assert!(normalize_row(&row, 1).coordinates.is_none());
}

#[test]
fn missing_longitude_drops_both() {
    let row = RawRow::from([("lat", "48.85")]);
    assert!(normalize_row(&row, 1).coordinates.is_none());
}

#[test]
fn non_finite_coordinate_is_rejected() {
    let row = RawRow::from([("lat", "NaN"), ("lon", "2.35")]);
    assert!(normalize_row(&row, 1).coordinates.is_none());
}

// -----------------------------------------------------------------------
// city / country
// -----------------------------------------------------------------------

#[test]
fn city_with_country_name_resolves_code() {
    let row = RawRow::from([("city", "Lyon, France")]);
    let shop = normalize_row(&row, 1);
    assert_eq!(shop.address.city.as_deref(), Some("Lyon"));
    assert_eq!(shop.country_code.as_deref(), Some("FR"));
}

#[test]
fn explicit_country_code_wins_over_city_suffix() {
    let row = RawRow::from([("city", "Lyon, France"), ("country_code", "BE")]);
    let shop = normalize_row(&row, 1);
    assert_eq!(shop.address.city.as_deref(), Some("Lyon"));
    assert_eq!(shop.country_code.as_deref(), Some("BE"));
}

#[test]
fn explicit_country_code_is_uppercased() {
    let row = RawRow::from([("country_code", " de ")]);
    assert_eq!(normalize_row(&row, 1).country_code.as_deref(), Some("DE"));
}

#[test]
fn unknown_country_name_leaves_code_absent() {
    let row = RawRow::from([("city", "Zürich, Switzerland")]);
    let shop = normalize_row(&row, 1);
    assert_eq!(shop.address.city.as_deref(), Some("Zürich"));
    assert!(shop.country_code.is_none());
}

#[test]
fn city_without_comma_is_kept_verbatim() {
    let row = RawRow::from([("city", "Den Haag")]);
    let shop = normalize_row(&row, 1);
    assert_eq!(shop.address.city.as_deref(), Some("Den Haag"));
    assert!(shop.country_code.is_none());
}

#[test]
fn city_split_happens_on_first_comma_only() {
    assert_eq!(
        split_city_country(Some("Lyon, Rhône, France")),
        (Some("Lyon"), Some("Rhône, France"))
    );
}

#[test]
fn empty_city_part_falls_back_to_raw_value() {
    assert_eq!(
        split_city_country(Some(", Germany")),
        (Some(", Germany"), Some("Germany"))
    );
}

#[test]
fn trailing_comma_yields_no_country_name() {
    assert_eq!(split_city_country(Some("Lyon,")), (Some("Lyon"), None));
}

#[test]
fn multi_word_country_names_resolve() {
    let row = RawRow::from([("city", "Brno, Czech Republic")]);
    assert_eq!(normalize_row(&row, 1).country_code.as_deref(), Some("CZ"));
}

// -----------------------------------------------------------------------
// aliases and optional fields
// -----------------------------------------------------------------------

#[test]
fn address_column_wins_over_street() {
    let row = RawRow::from([("address", "Rue A"), ("street", "Rue B")]);
    assert_eq!(normalize_row(&row, 1).address.street.as_deref(), Some("Rue A"));
}

#[test]
fn street_used_when_address_blank() {
    let row = RawRow::from([("address", ""), ("street", "Rue B")]);
    assert_eq!(normalize_row(&row, 1).address.street.as_deref(), Some("Rue B"));
}

#[test]
fn website_sentinel_is_absent() {
    let row = RawRow::from([("website", "N/A")]);
    assert!(normalize_row(&row, 1).contact.website.is_none());
}

#[test]
fn real_website_is_kept() {
    let row = RawRow::from([("website", "https://moto.example.fr")]);
    assert_eq!(
        normalize_row(&row, 1).contact.website.as_deref(),
        Some("https://moto.example.fr")
    );
}

#[test]
fn blank_optional_fields_are_absent_not_empty() {
    let row = RawRow::from([
        ("name", ""),
        ("phone", "  "),
        ("email", ""),
        ("postcode", ""),
        ("housenumber", ""),
    ]);
    let shop = normalize_row(&row, 1);
    assert!(shop.name.is_none());
    assert!(shop.address.is_empty());
    assert!(shop.contact.is_empty());
}

#[test]
fn full_row_is_copied_into_record() {
    let row = RawRow::from([
        ("id", "12"),
        ("name", "Moto Atelier"),
        ("lat", "45.76"),
        ("lon", "4.84"),
        ("city", "Lyon, France"),
        ("street", "Rue Garibaldi"),
        ("housenumber", "12"),
        ("postcode", "69003"),
        ("phone", "+33 4 00 00 00 00"),
        ("website", "https://atelier.example.fr"),
        ("email", "contact@atelier.example.fr"),
    ]);
    let shop = normalize_row(&row, 1);
    assert_eq!(shop.id, 12);
    assert_eq!(shop.name.as_deref(), Some("Moto Atelier"));
    assert_eq!(shop.address.house_number.as_deref(), Some("12"));
    assert_eq!(shop.address.postcode.as_deref(), Some("69003"));
    assert_eq!(shop.contact.phone.as_deref(), Some("+33 4 00 00 00 00"));
    assert_eq!(
        shop.contact.email.as_deref(),
        Some("contact@atelier.example.fr")
    );
    assert!(shop.contact.fax.is_none());
    assert!(shop.tags.is_none());
}
