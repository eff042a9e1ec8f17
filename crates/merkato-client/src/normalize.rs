//! Normalization of raw listing payloads into canonical [`Product`]s.
//!
//! Per-item isolation: one malformed record must not abort the rest of the
//! page, so each item is processed independently and a failing item is
//! replaced wholesale by a fixed error placeholder. Output length always
//! equals input length.

use rust_decimal::RoundingStrategy;
use serde_json::Value;

use merkato_core::{NumberOrText, Product};

use crate::error::ClientError;
use crate::types::RawProductItem;

/// Image path used when a product has no usable image record.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.jpg";

/// Converts raw listing items into canonical products.
///
/// `api_base` is the configured API endpoint, used to resolve stored image
/// names to absolute asset URLs. Resolution is purely structural; no
/// existence check is made against the file store.
#[must_use]
pub fn normalize_products(items: &[Value], api_base: &str) -> Vec<Product> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match normalize_item(item, api_base) {
            Ok(product) => product,
            Err(error) => {
                tracing::warn!(%error, index, "error processing listing item");
                error_product()
            }
        })
        .collect()
}

fn normalize_item(item: &Value, api_base: &str) -> Result<Product, ClientError> {
    let raw: RawProductItem =
        serde_json::from_value(item.clone()).map_err(|e| ClientError::Deserialize {
            context: "listing item".to_string(),
            source: e,
        })?;

    let image = resolve_image(&raw, api_base);
    let colors = resolve_colors(&raw);
    let price = resolve_price(raw.price.as_ref());

    Ok(Product {
        id: display_or(raw.id.as_ref(), "unknown-id"),
        name: display_or(raw.name.as_ref(), "Unnamed Product"),
        image,
        sub_category: display_or(raw.sub_category.as_ref(), ""),
        colors,
        price,
    })
}

/// First image record with a non-empty `url` wins; otherwise the placeholder.
fn resolve_image(raw: &RawProductItem, api_base: &str) -> String {
    raw.product_images
        .first()
        .and_then(|record| record.get("url"))
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map_or_else(
            || PLACEHOLDER_IMAGE.to_string(),
            |url| format!("{}/file/{url}", api_base.trim_end_matches('/')),
        )
}

/// Harvests structured variant color names: non-empty after trimming,
/// deduplicated in first-seen order. Legacy plain-string colors carry no
/// nested name and contribute nothing.
fn resolve_colors(raw: &RawProductItem) -> Vec<String> {
    let mut colors: Vec<String> = Vec::new();
    for variant in &raw.variants {
        let Some(color) = variant
            .get("color")
            .and_then(|c| c.get("color"))
            .and_then(Value::as_str)
        else {
            continue;
        };
        if color.trim().is_empty() {
            continue;
        }
        if !colors.iter().any(|seen| seen == color) {
            colors.push(color.to_string());
        }
    }
    colors
}

/// Formats the price to exactly two decimals, defaulting to `"0.00"` when
/// the value is absent or unparsable.
fn resolve_price(price: Option<&NumberOrText>) -> String {
    price.and_then(NumberOrText::as_decimal).map_or_else(
        || "0.00".to_string(),
        |amount| {
            format!(
                "{:.2}",
                amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            )
        },
    )
}

/// Stringifies a scalar, falling back to the sentinel when the value is
/// absent or renders empty.
fn display_or(value: Option<&NumberOrText>, fallback: &str) -> String {
    value
        .map(NumberOrText::to_display_string)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// The fixed substitute for an item that failed normalization.
fn error_product() -> Product {
    Product {
        id: "error-id".to_string(),
        name: "Error Loading Product".to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
        sub_category: String::new(),
        colors: Vec::new(),
        price: "0.00".to_string(),
    }
}
