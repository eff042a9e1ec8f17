//! Cosmetic size entry: both fields optional, but mutually required.

use merkato_core::NumberOrText;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::issue::Issues;
use crate::rules::optional_positive;

/// Raw cosmetic-size form state.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticSizeForm {
    #[serde(default)]
    pub metric: Option<String>,
    #[serde(default)]
    pub size: Option<NumberOrText>,
    #[serde(default)]
    pub custom_size: Option<String>,
}

/// A validated cosmetic size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CosmeticSize {
    pub metric: Option<String>,
    pub size: Option<Decimal>,
    pub custom_size: Option<String>,
}

impl CosmeticSizeForm {
    /// Validates the form.
    ///
    /// Leaving both `metric` and `size` empty is fine; providing one makes
    /// the other required. The cross-field pass runs after the per-field
    /// type checks.
    ///
    /// # Errors
    ///
    /// Returns every field-scoped issue found.
    pub fn validate(&self) -> Result<CosmeticSize, Issues> {
        let mut issues = Issues::new();

        let size = optional_positive(
            &mut issues,
            "size",
            self.size.as_ref(),
            "Size must be a number",
            "Size must be a positive number",
        );

        let metric = self
            .metric
            .as_deref()
            .filter(|m| !m.is_empty())
            .map(ToString::to_string);

        if size.is_some() && metric.is_none() {
            issues.push("metric", "Metric is required when size value is provided");
        }
        if metric.is_some() && size.is_none() && issues.field_messages("size").is_empty() {
            issues.push("size", "Size value is required when metric is provided");
        }

        issues.into_result(CosmeticSize {
            metric,
            size,
            custom_size: self.custom_size.clone(),
        })
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
    fn both_empty_is_valid() {
        let validated = CosmeticSizeForm::default().validate().unwrap();
        assert!(validated.metric.is_none());
        assert!(validated.size.is_none());
    }

    #[test]
    fn both_present_is_valid() {
        let form = CosmeticSizeForm {
            metric: Some("ml".to_string()),
            size: Some(num(50.0)),
            custom_size: None,
        };
        let validated = form.validate().unwrap();
        assert_eq!(validated.metric.as_deref(), Some("ml"));
        assert_eq!(validated.size, Some(Decimal::from(50)));
    }

    #[test]
    fn size_without_metric_fails_on_metric() {
        let form = CosmeticSizeForm {
            metric: None,
            size: Some(num(50.0)),
            custom_size: None,
        };
        let issues = form.validate().unwrap_err();
        assert_eq!(
            issues.field_messages("metric"),
            vec!["Metric is required when size value is provided"]
        );
    }

    #[test]
    fn metric_without_size_fails_on_size() {
        let form = CosmeticSizeForm {
            metric: Some("ml".to_string()),
            size: None,
            custom_size: None,
        };
        let issues = form.validate().unwrap_err();
        assert_eq!(
            issues.field_messages("size"),
            vec!["Size value is required when metric is provided"]
        );
    }

    #[test]
    fn blank_size_counts_as_absent() {
        let form = CosmeticSizeForm {
            metric: Some("ml".to_string()),
            size: Some(text("")),
            custom_size: None,
        };
        let issues = form.validate().unwrap_err();
        assert_eq!(
            issues.field_messages("size"),
            vec!["Size value is required when metric is provided"]
        );
    }

    #[test]
    fn non_positive_size_keeps_type_issue_only() {
        let form = CosmeticSizeForm {
            metric: Some("ml".to_string()),
            size: Some(num(-5.0)),
            custom_size: None,
        };
        let issues = form.validate().unwrap_err();
        assert_eq!(
            issues.field_messages("size"),
            vec!["Size must be a positive number"]
        );
    }

    #[test]
    fn custom_size_passes_through() {
        let form = CosmeticSizeForm {
            metric: None,
            size: None,
            custom_size: Some("Travel".to_string()),
        };
        let validated = form.validate().unwrap();
        assert_eq!(validated.custom_size.as_deref(), Some("Travel"));
    }
}
