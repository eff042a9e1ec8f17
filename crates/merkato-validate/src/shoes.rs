//! Shoe size entry: a size standard plus a numeric size, required together.
//!
//! This schema also backs the general size step of the product form; the two
//! were historically identical and are defined once here.

use merkato_core::NumberOrText;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::issue::Issues;

/// Raw shoe-size form state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShoeSizeForm {
    #[serde(default)]
    pub metric: String,
    #[serde(default)]
    pub size: NumberOrText,
}

/// A validated shoe size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoeSize {
    pub metric: String,
    pub size: Decimal,
}

impl ShoeSizeForm {
    /// Validates the form.
    ///
    /// `metric` and `size` are mutually required: the cross-field pass runs
    /// after the per-field type checks and attaches its message to whichever
    /// field is missing.
    ///
    /// # Errors
    ///
    /// Returns every field-scoped issue found.
    pub fn validate(&self) -> Result<ShoeSize, Issues> {
        let mut issues = Issues::new();

        let size = parse_size(&mut issues, &self.size);
        let metric_present = !self.metric.is_empty();

        match (metric_present, size) {
            (true, Some(size)) => issues.into_result(ShoeSize {
                metric: self.metric.clone(),
                size,
            }),
            (true, None) => {
                if issues.is_empty() {
                    issues.push("size", "Size is required when size standard is provided");
                }
                Err(issues)
            }
            (false, Some(_)) => {
                issues.push("metric", "Size standard is required when size is provided");
                Err(issues)
            }
            (false, None) => {
                issues.push("metric", "Size standard is required");
                if issues.field_messages("size").is_empty() {
                    issues.push("size", "Size is required");
                }
                Err(issues)
            }
        }
    }
}

/// Type-checks the size slot: a positive number, or text parsed to one.
///
/// Blank and unparsable text both leave the slot empty for the cross-field
/// pass to report; a non-positive number is a type-level issue here.
fn parse_size(issues: &mut Issues, value: &NumberOrText) -> Option<Decimal> {
    match value {
        NumberOrText::Number(_) => {
            let parsed = value.as_decimal().filter(|d| *d > Decimal::ZERO);
            if parsed.is_none() {
                issues.push("size", "Size must be a positive number");
            }
            parsed
        }
        NumberOrText::Text(s) => s
            .trim()
            .parse::<Decimal>()
            .ok()
            .filter(|d| *d > Decimal::ZERO),
    }
}
