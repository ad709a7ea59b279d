//! Price-list loading.
//!
//! The accepted format is two comma-separated columns, `name,price`, with an
//! optional `Material,Price` header row. A malformed row rejects the whole
//! file: a partially loaded price list would silently misprice the bid.

use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::CatalogError;

use super::MaterialCatalog;

/// Parse a price list from text.
pub fn parse_price_list(text: &str) -> Result<MaterialCatalog, CatalogError> {
    let mut catalog = MaterialCatalog::new();
    let mut saw_row = false;

    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if !saw_row && is_header(line) {
            continue;
        }

        let (name, price) = parse_row(line).map_err(|reason| CatalogError::MalformedRow {
            line: line_no,
            reason,
        })?;
        catalog.insert(name, price);
        saw_row = true;
    }

    if !saw_row {
        return Err(CatalogError::EmptyPriceList);
    }

    tracing::debug!(materials = catalog.len(), "parsed price list");
    Ok(catalog)
}

/// Load a price list from a file.
pub fn load_price_list(path: &Path) -> Result<MaterialCatalog, CatalogError> {
    let text = std::fs::read_to_string(path)?;
    parse_price_list(&text)
}

fn is_header(line: &str) -> bool {
    let mut fields = line.split(',').map(str::trim);
    matches!(
        (fields.next(), fields.next(), fields.next()),
        (Some(name), Some(price), None)
            if name.eq_ignore_ascii_case("material") && price.eq_ignore_ascii_case("price")
    )
}

fn parse_row(line: &str) -> Result<(&str, Decimal), String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let &[name, price_field] = fields.as_slice() else {
        return Err(format!("expected 2 columns, got {}", fields.len()));
    };

    if name.is_empty() {
        return Err("empty material name".to_string());
    }

    let price = Decimal::from_str(price_field.trim_start_matches('$'))
        .map_err(|_| format!("unparseable price {price_field:?}"))?;
    if price.is_sign_negative() {
        return Err(format!("negative price {price_field:?}"));
    }

    Ok((name, price))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parses_rows_with_header() {
        let catalog = parse_price_list("Material,Price\n2x4,3.75\nRebar (per ft),0.80\n").unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.price_of("2x4"), Some(dec!(3.75)));
        assert_eq!(catalog.price_of("rebar (per ft)"), Some(dec!(0.80)));
    }

    #[test]
    fn header_is_optional() {
        let catalog = parse_price_list("2x4,3.75\n").unwrap();
        assert_eq!(catalog.price_of("2x4"), Some(dec!(3.75)));
    }

    #[test]
    fn dollar_signs_and_blank_lines_are_tolerated() {
        let catalog = parse_price_list("\n2x4, $3.75\n\npaint (per gallon), 35.00\n").unwrap();
        assert_eq!(catalog.price_of("2x4"), Some(dec!(3.75)));
        assert_eq!(catalog.price_of("paint (per gallon)"), Some(dec!(35.00)));
    }

    #[test]
    fn malformed_row_rejects_file_with_line_number() {
        let err = parse_price_list("Material,Price\n2x4,3.75\ndrywall sheet\n").unwrap_err();

        match err {
            CatalogError::MalformedRow { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = parse_price_list("2x4,-3.75\n").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRow { line: 1, .. }));
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let err = parse_price_list("2x4,cheap\n").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRow { line: 1, .. }));
    }

    #[test]
    fn header_only_file_is_empty() {
        let err = parse_price_list("Material,Price\n").unwrap_err();
        assert!(matches!(err, CatalogError::EmptyPriceList));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.csv");
        std::fs::write(&path, "Material,Price\n2x4,4.10\n").unwrap();

        let catalog = load_price_list(&path).unwrap();
        assert_eq!(catalog.price_of("2x4"), Some(dec!(4.10)));
    }
}
