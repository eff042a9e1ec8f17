//! Wire shapes for the storefront API.
//!
//! ## Observed shapes from the live backend
//!
//! ### Listing items
//! The `/product` listing returns partially-trusted records: scalar fields
//! may be numbers or strings (or missing entirely), and `variants` entries
//! from older products carry plain-string `size`/`color` values. Listing
//! items are therefore kept as loose values ([`RawProductItem`]) and firmed
//! up in [`crate::normalize`].
//!
//! ### Pagination envelope
//! Every listing response is wrapped in `{data, page, pageSize, total,
//! totalPages}`. `data` is the structural gate: a response without it is
//! treated as invalid wholesale. The paging fields have been observed
//! missing on some error-ish responses and default to zero.

use merkato_core::NumberOrText;
use serde::{Deserialize, Serialize};

/// Pagination envelope wrapping every listing response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> ApiResponse<T> {
    /// The fixed fallback envelope returned when a listing call fails.
    #[must_use]
    pub fn empty() -> Self {
        ApiResponse {
            data: Vec::new(),
            page: 1,
            page_size: 8,
            total: 0,
            total_pages: 0,
        }
    }
}

/// Optional filters for the product listing endpoint.
///
/// `created_at` and `price` carry a sort direction (`"asc"` / `"desc"`),
/// not a value filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub search: Option<String>,
    pub created_at: Option<String>,
    pub price: Option<String>,
}

impl ProductQuery {
    /// Query pairs in wire order. Absent filters are omitted; empty values
    /// are dropped later, at URL build time.
    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            params.push(("pageSize", page_size.to_string()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(sub_category) = &self.sub_category {
            params.push(("sub_category", sub_category.clone()));
        }
        if let Some(min_price) = self.min_price {
            params.push(("min_price", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            params.push(("max_price", max_price.to_string()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(created_at) = &self.created_at {
            params.push(("created_at", created_at.clone()));
        }
        if let Some(price) = &self.price {
            params.push(("price", price.clone()));
        }
        params
    }
}

/// A raw product listing item, before normalization.
///
/// Every scalar is optional and may arrive as either a number or a string;
/// nested collections stay untyped so one malformed field cannot poison the
/// fields around it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProductItem {
    #[serde(default)]
    pub id: Option<NumberOrText>,
    #[serde(default)]
    pub name: Option<NumberOrText>,
    #[serde(default)]
    pub sub_category: Option<NumberOrText>,
    #[serde(default)]
    pub price: Option<NumberOrText>,
    #[serde(default)]
    pub product_images: Vec<serde_json::Value>,
    #[serde(default)]
    pub variants: Vec<serde_json::Value>,
}

/// A category as returned by the categories endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub image: String,
}

/// A sub-category as returned by the sub-categories endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategoryRecord {
    pub id: String,
    pub name: String,
    pub image: String,
}
