//! Leaf value encoding.
//!
//! Every function here is pure: the same value always yields the same text.
//! Failures carry the schema path of the leaf being written.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::core::lookup;
use crate::core::{CodeList, FacturXError};

/// UNTDID 2379 format qualifier for `CCYYMMDD`.
pub const DATE_FORMAT_102: &str = "102";

const MAX_AMOUNT_SCALE: u32 = 2;
const MAX_PRICE_SCALE: u32 = 4;

fn encoding(path: &str, reason: impl Into<String>) -> FacturXError {
    FacturXError::Encoding {
        path: path.to_string(),
        reason: reason.into(),
    }
}

/// Encode a date as `CCYYMMDD` (format 102).
pub fn encode_date(date: NaiveDate, path: &str) -> Result<String, FacturXError> {
    if !(0..=9999).contains(&date.year()) {
        return Err(encoding(
            path,
            format!("year {} outside the four digit range", date.year()),
        ));
    }
    Ok(date.format("%Y%m%d").to_string())
}

/// Encode a monetary amount with exactly two decimals.
///
/// Amounts that need more precision are rejected rather than rounded.
pub fn encode_amount(amount: Decimal, path: &str) -> Result<String, FacturXError> {
    let mut normalized = amount.normalize();
    if normalized.scale() > MAX_AMOUNT_SCALE {
        return Err(encoding(
            path,
            format!("amount {amount} has more than {MAX_AMOUNT_SCALE} decimals"),
        ));
    }
    normalized.rescale(MAX_AMOUNT_SCALE);
    // rescale keeps a lower scale when the mantissa has no room left
    if normalized.scale() != MAX_AMOUNT_SCALE {
        return Err(encoding(
            path,
            format!("amount {amount} cannot carry {MAX_AMOUNT_SCALE} decimals"),
        ));
    }
    Ok(normalized.to_string())
}

/// Encode a unit price: at least two and at most four decimals.
pub fn encode_price(price: Decimal, path: &str) -> Result<String, FacturXError> {
    bounded(price, MAX_PRICE_SCALE, "price", path)
}

/// Encode a quantity: at least two and at most four decimals.
pub fn encode_quantity(quantity: Decimal, path: &str) -> Result<String, FacturXError> {
    bounded(quantity, MAX_PRICE_SCALE, "quantity", path)
}

/// Encode a percentage (tax rate, allowance percent).
pub fn encode_percent(percent: Decimal) -> String {
    format_decimal(percent)
}

fn bounded(value: Decimal, max_scale: u32, what: &str, path: &str) -> Result<String, FacturXError> {
    if value.normalize().scale() > max_scale {
        return Err(encoding(
            path,
            format!("{what} {value} has more than {max_scale} decimals"),
        ));
    }
    Ok(format_decimal(value))
}

/// Format a Decimal with at least 2 decimal places, trailing zeros beyond
/// that stripped.
pub fn format_decimal(d: Decimal) -> String {
    let s = d.normalize().to_string();
    match s.find('.') {
        Some(dot) => {
            let decimals = s.len() - dot - 1;
            if decimals < 2 {
                format!("{s}{}", "0".repeat(2 - decimals))
            } else {
                s
            }
        }
        None => format!("{s}.00"),
    }
}

/// `udt:Indicator` value.
pub fn encode_indicator(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Check a string-typed code against its list and return it unchanged.
pub fn encode_code<'a>(list: CodeList, code: &'a str, path: &str) -> Result<&'a str, FacturXError> {
    lookup::check_code(list, code).map_err(|e| e.at_path(path))?;
    Ok(code)
}

/// Check that an attachment payload is non-empty base64 text.
pub fn encode_binary<'a>(payload: &'a str, path: &str) -> Result<&'a str, FacturXError> {
    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return Err(encoding(path, "empty attachment payload"));
    }
    if let Some(c) = trimmed
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=') || c.is_whitespace()))
    {
        return Err(encoding(path, format!("invalid base64 character {c:?}")));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn format_decimal_cases() {
        assert_eq!(format_decimal(dec!(100)), "100.00");
        assert_eq!(format_decimal(dec!(1500.0)), "1500.00");
        assert_eq!(format_decimal(dec!(49.90)), "49.90");
        assert_eq!(format_decimal(dec!(0.005)), "0.005");
        assert_eq!(format_decimal(dec!(19)), "19.00");
        assert_eq!(format_decimal(dec!(-3.5)), "-3.50");
    }

    #[test]
    fn amounts_have_two_decimals() {
        assert_eq!(encode_amount(dec!(100), "/a").unwrap(), "100.00");
        assert_eq!(encode_amount(dec!(99.9), "/a").unwrap(), "99.90");
        assert_eq!(encode_amount(dec!(12.3400), "/a").unwrap(), "12.34");
        assert_eq!(encode_amount(dec!(-50), "/a").unwrap(), "-50.00");
        assert_eq!(encode_amount(Decimal::ZERO, "/a").unwrap(), "0.00");
    }

    #[test]
    fn amount_with_excess_precision() {
        let err = encode_amount(dec!(1.005), "/x/ram:GrandTotalAmount").unwrap_err();
        assert_eq!(err.path(), Some("/x/ram:GrandTotalAmount"));
        assert!(matches!(err, FacturXError::Encoding { .. }));
    }

    #[test]
    fn amount_too_large_for_two_decimals() {
        let err = encode_amount(Decimal::MAX, "/x/ram:GrandTotalAmount").unwrap_err();
        assert_eq!(err.path(), Some("/x/ram:GrandTotalAmount"));
        assert!(matches!(err, FacturXError::Encoding { .. }));
        assert!(encode_amount(Decimal::MIN, "/a").is_err());
    }

    #[test]
    fn price_precision() {
        assert_eq!(encode_price(dec!(12.3456), "/p").unwrap(), "12.3456");
        assert_eq!(encode_price(dec!(10), "/p").unwrap(), "10.00");
        assert!(encode_price(dec!(0.00001), "/p").is_err());
        assert_eq!(encode_quantity(dec!(2.5), "/q").unwrap(), "2.50");
    }

    #[test]
    fn dates() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(encode_date(d, "/d").unwrap(), "20240305");

        let far = NaiveDate::from_ymd_opt(12345, 1, 1).unwrap();
        let err = encode_date(far, "/d").unwrap_err();
        assert!(matches!(err, FacturXError::Encoding { .. }));
    }

    #[test]
    fn codes_are_checked() {
        assert_eq!(encode_code(CodeList::Currency, "EUR", "/c").unwrap(), "EUR");
        let err = encode_code(CodeList::Currency, "EURO", "/c").unwrap_err();
        assert_eq!(
            err,
            FacturXError::UnknownCode {
                list: CodeList::Currency,
                value: "EURO".into(),
                path: Some("/c".into()),
            }
        );
    }

    #[test]
    fn indicator() {
        assert_eq!(encode_indicator(true), "true");
        assert_eq!(encode_indicator(false), "false");
    }

    #[test]
    fn binary_payload() {
        assert_eq!(encode_binary(" SGVsbG8= ", "/b").unwrap(), "SGVsbG8=");
        assert!(encode_binary("   ", "/b").is_err());
        assert!(encode_binary("not base64!", "/b").is_err());
    }
}
