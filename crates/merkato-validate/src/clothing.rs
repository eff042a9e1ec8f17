//! Clothing size entry: a required letter size plus optional measurements.

use merkato_core::NumberOrText;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::issue::Issues;
use crate::rules::{optional_positive, required_text};

/// Raw clothing-size form state.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingSizeForm {
    #[serde(default)]
    pub size_letters: String,
    #[serde(default)]
    pub bust: Option<NumberOrText>,
    #[serde(default)]
    pub waist: Option<NumberOrText>,
    #[serde(default)]
    pub hips: Option<NumberOrText>,
    #[serde(default)]
    pub length: Option<NumberOrText>,
    #[serde(default)]
    pub sleeve: Option<NumberOrText>,
    #[serde(default)]
    pub fit: Option<String>,
    #[serde(default)]
    pub custom_size: Option<String>,
}

/// A validated clothing size. Measurements are centimetres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClothingSize {
    pub size_letters: String,
    pub bust: Option<Decimal>,
    pub waist: Option<Decimal>,
    pub hips: Option<Decimal>,
    pub length: Option<Decimal>,
    pub sleeve: Option<Decimal>,
    pub fit: Option<String>,
    pub custom_size: Option<String>,
}

impl ClothingSizeForm {
    /// Validates the form.
    ///
    /// # Errors
    ///
    /// Returns every field-scoped issue found.
    pub fn validate(&self) -> Result<ClothingSize, Issues> {
        let mut issues = Issues::new();

        let size_letters = required_text(
            &mut issues,
            "sizeLetters",
            &self.size_letters,
            "Size letter is required",
        );

        let bust = optional_positive(
            &mut issues,
            "bust",
            self.bust.as_ref(),
            "Bust size must be a number",
            "Size must be a positive number",
        );
        let waist = optional_positive(
            &mut issues,
            "waist",
            self.waist.as_ref(),
            "Waist Size must be a number",
            "Size must be a positive number",
        );
        let hips = optional_positive(
            &mut issues,
            "hips",
            self.hips.as_ref(),
            "Hips size must be a number",
            "Size must be a positive number",
        );
        let length = optional_positive(
            &mut issues,
            "length",
            self.length.as_ref(),
            "Length must be a number",
            "Size must be a positive number",
        );
        let sleeve = optional_positive(
            &mut issues,
            "sleeve",
            self.sleeve.as_ref(),
            "Sleeve size must be a number",
            "Size must be a positive number",
        );

        let Some(size_letters) = size_letters else {
            return Err(issues);
        };

        issues.into_result(ClothingSize {
            size_letters,
            bust,
            waist,
            hips,
            length,
            sleeve,
            fit: self.fit.clone(),
            custom_size: self.custom_size.clone(),
        })
    }
}
