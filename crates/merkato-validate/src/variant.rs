//! Variant entry schemas: the admin table row and the variant detail form.

use merkato_core::NumberOrText;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::issue::Issues;
use crate::rules::{required_positive, required_text, stock_amount};

/// Raw state of a variant row in the admin product table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRowForm {
    #[serde(default)]
    pub color_amount: NumberOrText,
    #[serde(default)]
    pub stock: NumberOrText,
}

/// A validated variant row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRow {
    pub color_amount: Decimal,
    pub stock: Decimal,
}

impl VariantRowForm {
    /// Validates the row. Both amounts are required positive numbers; the
    /// blank sentinel fails with the field's own "is required" message.
    ///
    /// # Errors
    ///
    /// Returns every field-scoped issue found.
    pub fn validate(&self) -> Result<VariantRow, Issues> {
        let mut issues = Issues::new();

        let color_amount = required_positive(
            &mut issues,
            "colorAmount",
            &self.color_amount,
            "Color amount is required",
            "Color amount must be a positive number",
        );
        let stock = required_positive(
            &mut issues,
            "stock",
            &self.stock,
            "Stock amount is required",
            "Stock amount must be a positive number",
        );

        match (color_amount, stock) {
            (Some(color_amount), Some(stock)) => {
                issues.into_result(VariantRow {
                    color_amount,
                    stock,
                })
            }
            _ => Err(issues),
        }
    }
}

/// Raw state of the variant detail form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantForm {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub color_name: String,
    // The legacy form state mixes conventions: this one key is snake_case.
    #[serde(default, rename = "stock_quantity")]
    pub stock_quantity: NumberOrText,
}

/// A validated variant entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantEntry {
    pub color: Option<String>,
    pub color_name: String,
    pub stock_quantity: u32,
}

impl VariantForm {
    /// Validates the form, transforming the stock amount to a whole count.
    ///
    /// # Errors
    ///
    /// Returns every field-scoped issue found.
    pub fn validate(&self) -> Result<VariantEntry, Issues> {
        let mut issues = Issues::new();

        let color_name = required_text(
            &mut issues,
            "colorName",
            &self.color_name,
            "Color name is required",
        );
        let stock_quantity = stock_amount(
            &mut issues,
            "stock_quantity",
            &self.stock_quantity,
            "Stock amount is required",
            "Stock amount must be a positive number",
        );

        match (color_name, stock_quantity) {
            (Some(color_name), Some(stock_quantity)) => issues.into_result(VariantEntry {
                color: self.color.clone(),
                color_name,
                stock_quantity,
            }),
            _ => Err(issues),
        }
    }
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
    fn variant_row_valid() {
        let form = VariantRowForm {
            color_amount: num(3.0),
            stock: num(24.0),
        };
        let row = form.validate().unwrap();
        assert_eq!(row.color_amount, Decimal::from(3));
        assert_eq!(row.stock, Decimal::from(24));
    }

    #[test]
    fn variant_row_blank_fields_use_required_messages() {
        let issues = VariantRowForm::default().validate().unwrap_err();
        assert_eq!(
            issues.field_messages("colorAmount"),
            vec!["Color amount is required"]
        );
        assert_eq!(
            issues.field_messages("stock"),
            vec!["Stock amount is required"]
        );
    }

    #[test]
    fn variant_row_non_positive_uses_positive_messages() {
        let form = VariantRowForm {
            color_amount: num(0.0),
            stock: num(-2.0),
        };
        let issues = form.validate().unwrap_err();
        assert_eq!(
            issues.field_messages("colorAmount"),
            vec!["Color amount must be a positive number"]
        );
        assert_eq!(
            issues.field_messages("stock"),
            vec!["Stock amount must be a positive number"]
        );
    }

    #[test]
    fn variant_form_valid_with_numeric_stock() {
        let form = VariantForm {
            color: Some("#aa0000".to_string()),
            color_name: "Maroon".to_string(),
            stock_quantity: num(12.0),
        };
        let entry = form.validate().unwrap();
        assert_eq!(entry.color_name, "Maroon");
        assert_eq!(entry.stock_quantity, 12);
    }

    #[test]
    fn variant_form_parses_text_stock() {
        let form = VariantForm {
            color: None,
            color_name: "Ivory".to_string(),
            stock_quantity: text("8"),
        };
        assert_eq!(form.validate().unwrap().stock_quantity, 8);
    }

    #[test]
    fn variant_form_unparsable_stock_becomes_zero() {
        let form = VariantForm {
            color: None,
            color_name: "Ivory".to_string(),
            stock_quantity: text("a few"),
        };
        assert_eq!(form.validate().unwrap().stock_quantity, 0);
    }

    #[test]
    fn variant_form_missing_color_name_fails() {
        let form = VariantForm {
            color: None,
            color_name: String::new(),
            stock_quantity: num(5.0),
        };
        let issues = form.validate().unwrap_err();
        assert_eq!(
            issues.field_messages("colorName"),
            vec!["Color name is required"]
        );
    }

    #[test]
    fn variant_form_blank_stock_is_required() {
        let form = VariantForm {
            color: None,
            color_name: "Ivory".to_string(),
            stock_quantity: text("  "),
        };
        let issues = form.validate().unwrap_err();
        assert_eq!(
            issues.field_messages("stock_quantity"),
            vec!["Stock amount is required"]
        );
    }
}
