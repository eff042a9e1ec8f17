//! Per-field validation rules shared by the form schemas.
//!
//! Numeric form fields arrive as a [`NumberOrText`] union: a number, or text
//! whose trimmed-empty form is the "not entered yet" sentinel. Submission
//! rejects the sentinel with the field's own "is required" message, which is
//! deliberately distinct from the positivity message.

use merkato_core::NumberOrText;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::issue::Issues;

/// A required free-text field: the raw value must be non-empty.
pub fn required_text(
    issues: &mut Issues,
    field: &str,
    value: &str,
    message: &str,
) -> Option<String> {
    if value.is_empty() {
        issues.push(field, message);
        None
    } else {
        Some(value.to_string())
    }
}

/// A required positive numeric field.
///
/// The union accepts a positive number or the blank sentinel, nothing else.
/// Blank text fails with `required_message`; non-positive numbers and
/// non-blank text both fail with `positive_message`.
pub fn required_positive(
    issues: &mut Issues,
    field: &str,
    value: &NumberOrText,
    required_message: &str,
    positive_message: &str,
) -> Option<Decimal> {
    if value.is_blank() {
        issues.push(field, required_message);
        return None;
    }

    match value {
        NumberOrText::Number(_) => match positive_decimal(value) {
            Some(amount) => Some(amount),
            None => {
                issues.push(field, positive_message);
                None
            }
        },
        NumberOrText::Text(_) => {
            issues.push(field, positive_message);
            None
        }
    }
}

/// An optional positive numeric field.
///
/// Absent values and the blank sentinel both validate to `None`. Non-numeric
/// text fails with `type_message`; non-positive numbers fail with
/// `positive_message`.
pub fn optional_positive(
    issues: &mut Issues,
    field: &str,
    value: Option<&NumberOrText>,
    type_message: &str,
    positive_message: &str,
) -> Option<Decimal> {
    let value = value?;
    if value.is_blank() {
        return None;
    }

    match value {
        NumberOrText::Number(_) => match positive_decimal(value) {
            Some(amount) => Some(amount),
            None => {
                issues.push(field, positive_message);
                None
            }
        },
        NumberOrText::Text(_) => {
            issues.push(field, type_message);
            None
        }
    }
}

/// A required stock amount, transformed to a whole count.
///
/// Accepts a positive number or non-blank text; text is parsed as an integer
/// and unparsable text becomes 0, matching the legacy form behavior.
pub fn stock_amount(
    issues: &mut Issues,
    field: &str,
    value: &NumberOrText,
    required_message: &str,
    positive_message: &str,
) -> Option<u32> {
    if value.is_blank() {
        issues.push(field, required_message);
        return None;
    }

    match value {
        NumberOrText::Number(_) => match positive_decimal(value) {
            Some(amount) => amount.trunc().to_u32(),
            None => {
                issues.push(field, positive_message);
                None
            }
        },
        NumberOrText::Text(s) => Some(s.trim().parse::<u32>().unwrap_or(0)),
    }
}

/// The positive decimal value of the union, if it has one.
fn positive_decimal(value: &NumberOrText) -> Option<Decimal> {
    value.as_decimal().filter(|d| *d > Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(value: f64) -> NumberOrText {
        NumberOrText::Number(value)
    }

    fn text(value: &str) -> NumberOrText {
        NumberOrText::Text(value.to_string())
    }

    #[test]
    fn required_text_rejects_empty() {
        let mut issues = Issues::new();
        assert!(required_text(&mut issues, "name", "", "Name is required").is_none());
        assert_eq!(issues.field_messages("name"), vec!["Name is required"]);
    }

    #[test]
    fn required_text_passes_value_through() {
        let mut issues = Issues::new();
        let value = required_text(&mut issues, "name", "Boots", "Name is required");
        assert_eq!(value.as_deref(), Some("Boots"));
        assert!(issues.is_empty());
    }

    #[test]
    fn required_positive_blank_uses_required_message() {
        let mut issues = Issues::new();
        let value = required_positive(
            &mut issues,
            "price",
            &text("  "),
            "Price is required",
            "Price must be a positive number",
        );
        assert!(value.is_none());
        assert_eq!(issues.field_messages("price"), vec!["Price is required"]);
    }

    #[test]
    fn required_positive_rejects_non_positive() {
        let mut issues = Issues::new();
        required_positive(
            &mut issues,
            "price",
            &num(0.0),
            "Price is required",
            "Price must be a positive number",
        );
        required_positive(
            &mut issues,
            "price",
            &num(-3.0),
            "Price is required",
            "Price must be a positive number",
        );
        assert_eq!(
            issues.field_messages("price"),
            vec![
                "Price must be a positive number",
                "Price must be a positive number"
            ]
        );
    }

    #[test]
    fn required_positive_rejects_numeric_text() {
        let mut issues = Issues::new();
        let value = required_positive(
            &mut issues,
            "price",
            &text("49.99"),
            "Price is required",
            "Price must be a positive number",
        );
        assert!(value.is_none());
        assert_eq!(
            issues.field_messages("price"),
            vec!["Price must be a positive number"]
        );
    }

    #[test]
    fn required_positive_accepts_positive_number() {
        let mut issues = Issues::new();
        let value = required_positive(
            &mut issues,
            "price",
            &num(49.99),
            "Price is required",
            "Price must be a positive number",
        );
        assert_eq!(value, Some(Decimal::new(4999, 2)));
        assert!(issues.is_empty());
    }

    #[test]
    fn optional_positive_absent_and_blank_are_none() {
        let mut issues = Issues::new();
        assert!(optional_positive(&mut issues, "bust", None, "t", "p").is_none());
        assert!(optional_positive(&mut issues, "bust", Some(&text("")), "t", "p").is_none());
        assert!(issues.is_empty());
    }

    #[test]
    fn optional_positive_non_numeric_text_uses_type_message() {
        let mut issues = Issues::new();
        let value = optional_positive(
            &mut issues,
            "bust",
            Some(&text("wide")),
            "Bust size must be a number",
            "Size must be a positive number",
        );
        assert!(value.is_none());
        assert_eq!(
            issues.field_messages("bust"),
            vec!["Bust size must be a number"]
        );
    }

    #[test]
    fn optional_positive_rejects_non_positive_number() {
        let mut issues = Issues::new();
        optional_positive(
            &mut issues,
            "bust",
            Some(&num(-1.0)),
            "Bust size must be a number",
            "Size must be a positive number",
        );
        assert_eq!(
            issues.field_messages("bust"),
            vec!["Size must be a positive number"]
        );
    }

    #[test]
    fn stock_amount_parses_text() {
        let mut issues = Issues::new();
        assert_eq!(
            stock_amount(&mut issues, "stock", &text("12"), "req", "pos"),
            Some(12)
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn stock_amount_unparsable_text_becomes_zero() {
        let mut issues = Issues::new();
        assert_eq!(
            stock_amount(&mut issues, "stock", &text("dozen"), "req", "pos"),
            Some(0)
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn stock_amount_blank_is_required() {
        let mut issues = Issues::new();
        assert!(stock_amount(
            &mut issues,
            "stock",
            &text(""),
            "Stock amount is required",
            "pos"
        )
        .is_none());
        assert_eq!(
            issues.field_messages("stock"),
            vec!["Stock amount is required"]
        );
    }

    #[test]
    fn stock_amount_truncates_fractional_numbers() {
        let mut issues = Issues::new();
        assert_eq!(
            stock_amount(&mut issues, "stock", &num(7.9), "req", "pos"),
            Some(7)
        );
    }
}
