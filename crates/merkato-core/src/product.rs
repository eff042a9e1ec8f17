//! Canonical catalog entities shared across the workspace.
//!
//! ## Observed shapes from the storefront API
//!
//! ### `size` / `color` on variants
//! Older products carry a plain string (`"M"`, `"Red"`); newer ones carry a
//! structured record. Both shapes are live on the wire, so the fields are
//! modeled as tagged unions ([`SizeField`], [`ColorField`]) and callers must
//! discriminate explicitly. `#[serde(untagged)]` keeps the wire format
//! unchanged in both directions.
//!
//! ### `price`
//! Sent as either a JSON number or its string form depending on the endpoint.
//! [`NumberOrText`] captures that union once; conversion to [`Decimal`] is the
//! single place the two forms converge.
//!
//! ### Size records
//! [`ProductSize`] is a superset of every category's measurement fields; only
//! the subset relevant to the product's category is populated. Interpretation
//! is category-dispatched in [`crate::format::format_size`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog list item in its canonical display shape.
///
/// Built by the normalizer from a raw listing payload, never persisted, and
/// recreated on every fetch. `colors` holds unique non-empty entries in
/// first-seen order; `price` is always a two-decimal string, `"0.00"` when
/// the source value was absent or unparsable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Resolved absolute asset URL, or the placeholder path.
    pub image: String,
    pub sub_category: String,
    pub colors: Vec<String>,
    pub price: String,
}

/// Full product detail fetched by id on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub material: String,
    pub price: Decimal,
    pub status: ProductStatus,
    #[serde(default)]
    pub product_images: Vec<ProductImage>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
}

impl ProductDetail {
    /// Returns `true` if the product is visible to shoppers.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status == ProductStatus::Online
    }

    /// Total stock across all variants.
    #[must_use]
    pub fn total_stock(&self) -> u64 {
        self.variants
            .iter()
            .map(|v| u64::from(v.stock_quantity))
            .sum()
    }
}

/// Publication state of a [`ProductDetail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductStatus {
    Online,
    Offline,
    Draft,
    Archived,
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductStatus::Online => write!(f, "ONLINE"),
            ProductStatus::Offline => write!(f, "OFFLINE"),
            ProductStatus::Draft => write!(f, "DRAFT"),
            ProductStatus::Archived => write!(f, "ARCHIVED"),
        }
    }
}

/// An image attached to a product. `id` is absent for images that were
/// staged client-side and not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// A purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    #[serde(default)]
    pub id: Option<String>,
    pub size: SizeField,
    pub color: ColorField,
    pub stock_quantity: u32,
}

/// Variant size: legacy plain string or structured measurement record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeField {
    Legacy(String),
    Structured(ProductSize),
}

impl SizeField {
    /// The structured record, if this is not a legacy string.
    #[must_use]
    pub fn as_structured(&self) -> Option<&ProductSize> {
        match self {
            SizeField::Legacy(_) => None,
            SizeField::Structured(size) => Some(size),
        }
    }
}

/// Variant color: legacy plain string or structured record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorField {
    Legacy(String),
    Structured(ProductColor),
}

impl ColorField {
    /// The structured record, if this is not a legacy string.
    #[must_use]
    pub fn as_structured(&self) -> Option<&ProductColor> {
        match self {
            ColorField::Legacy(_) => None,
            ColorField::Structured(color) => Some(color),
        }
    }
}

/// Superset of the category-specific size fields. Only the subset relevant
/// to the product's category is populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductSize {
    pub metric: Option<String>,
    pub size: Option<Decimal>,
    /// Free-form size for accessories.
    pub custom_size: Option<String>,
    /// Letter size for clothing (S, M, L, XL).
    pub size_letter: Option<String>,
    pub bust: Option<Decimal>,
    pub waist: Option<Decimal>,
    pub hips: Option<Decimal>,
    pub length: Option<Decimal>,
    pub sleeve: Option<Decimal>,
    pub fit: Option<String>,
}

/// Structured variant color record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductColor {
    /// Hex or CSS color value.
    pub color: String,
    /// Human-readable color name.
    pub name: String,
}

/// A wire value that may arrive as either a JSON number or its string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

/// The form sentinel for "not entered yet" is empty text.
impl Default for NumberOrText {
    fn default() -> Self {
        NumberOrText::Text(String::new())
    }
}

impl NumberOrText {
    /// Returns `true` for trimmed-empty text, the form sentinel standing in
    /// for a value not yet entered. Blank values must be indistinguishable
    /// from absent ones downstream.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            NumberOrText::Number(_) => false,
            NumberOrText::Text(s) => s.trim().is_empty(),
        }
    }

    /// Converts to a [`Decimal`], accepting both representations.
    ///
    /// Returns `None` for non-numeric text and non-finite numbers.
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            NumberOrText::Number(n) => Decimal::try_from(*n).ok(),
            NumberOrText::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Renders the value as display text: numbers drop a zero fractional
    /// part, text passes through unchanged.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        match self {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => s.clone(),
        }
    }
}
