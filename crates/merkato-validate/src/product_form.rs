//! The product creation form: the top-level submission gate.

use merkato_core::NumberOrText;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::issue::Issues;
use crate::rules::{required_positive, required_text};

/// Raw product-creation form state.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub variant: NumberOrText,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub return_policy: String,
    #[serde(default)]
    pub price: NumberOrText,
}

/// A validated product submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSubmission {
    pub name: String,
    pub variant: Decimal,
    pub description: String,
    pub brand: Option<String>,
    pub category: String,
    pub sub_category: String,
    pub material: Option<String>,
    pub return_policy: String,
    pub price: Decimal,
}

impl ProductForm {
    /// Validates the form.
    ///
    /// # Errors
    ///
    /// Returns every field-scoped issue found, in form order.
    pub fn validate(&self) -> Result<ProductSubmission, Issues> {
        let mut issues = Issues::new();

        let name = required_text(
            &mut issues,
            "name",
            &self.name,
            "Name of the product is required",
        );
        let variant = required_positive(
            &mut issues,
            "variant",
            &self.variant,
            "Variant is required",
            "Variant must be a positive number",
        );
        let description = required_text(
            &mut issues,
            "description",
            &self.description,
            "Description is required",
        );
        let category = required_text(&mut issues, "category", &self.category, "Category is required");
        let sub_category = required_text(
            &mut issues,
            "subCategory",
            &self.sub_category,
            "Sub Category is required",
        );
        let return_policy = required_text(
            &mut issues,
            "returnPolicy",
            &self.return_policy,
            "Return Policy is required",
        );
        let price = required_positive(
            &mut issues,
            "price",
            &self.price,
            "Price is required",
            "Price must be a positive number",
        );

        match (
            name,
            variant,
            description,
            category,
            sub_category,
            return_policy,
            price,
        ) {
            (
                Some(name),
                Some(variant),
                Some(description),
                Some(category),
                Some(sub_category),
                Some(return_policy),
                Some(price),
            ) => issues.into_result(ProductSubmission {
                name,
                variant,
                description,
                brand: self.brand.clone(),
                category,
                sub_category,
                material: self.material.clone(),
                return_policy,
                price,
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

    fn full_form() -> ProductForm {
        ProductForm {
            name: "Leather Boots".to_string(),
            variant: num(2.0),
            description: "Ankle-high leather boots".to_string(),
            brand: Some("Kancha".to_string()),
            category: "SHOES".to_string(),
            sub_category: "Boots".to_string(),
            material: Some("Leather".to_string()),
            return_policy: "14 days".to_string(),
            price: num(149.99),
        }
    }

    #[test]
    fn full_form_validates() {
        let submission = full_form().validate().unwrap();
        assert_eq!(submission.name, "Leather Boots");
        assert_eq!(submission.variant, Decimal::from(2));
        assert_eq!(submission.price, Decimal::new(14999, 2));
        assert_eq!(submission.brand.as_deref(), Some("Kancha"));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let form = ProductForm {
            brand: None,
            material: None,
            ..full_form()
        };
        let submission = form.validate().unwrap();
        assert!(submission.brand.is_none());
        assert!(submission.material.is_none());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let issues = ProductForm::default().validate().unwrap_err();
        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "name",
                "variant",
                "description",
                "category",
                "subCategory",
                "returnPolicy",
                "price"
            ]
        );
    }

    #[test]
    fn blank_price_is_required_not_positive() {
        let form = ProductForm {
            price: text(" "),
            ..full_form()
        };
        let issues = form.validate().unwrap_err();
        assert_eq!(issues.field_messages("price"), vec!["Price is required"]);
    }

    #[test]
    fn non_positive_price_gets_positivity_message() {
        let form = ProductForm {
            price: num(0.0),
            ..full_form()
        };
        let issues = form.validate().unwrap_err();
        assert_eq!(
            issues.field_messages("price"),
            vec!["Price must be a positive number"]
        );
    }

    #[test]
    fn blank_variant_is_required() {
        let form = ProductForm {
            variant: text(""),
            ..full_form()
        };
        let issues = form.validate().unwrap_err();
        assert_eq!(issues.field_messages("variant"), vec!["Variant is required"]);
    }

    #[test]
    fn deserializes_camel_case_form_state() {
        let form: ProductForm = serde_json::from_value(serde_json::json!({
            "name": "Silk Scarf",
            "variant": 1,
            "description": "Hand-rolled silk scarf",
            "category": "ACCESSORIES",
            "subCategory": "Scarves",
            "returnPolicy": "7 days",
            "price": "49.99"
        }))
        .unwrap();
        let issues = form.validate().unwrap_err();
        // String prices come from unconverted form state and are rejected.
        assert_eq!(
            issues.field_messages("price"),
            vec!["Price must be a positive number"]
        );
    }
}
