//! HTTP client for the storefront catalog API.
//!
//! Wraps `reqwest` with URL building and the fail-soft fetch contract:
//! listing and reference lookups never surface an error to the caller. Any
//! network or shape failure is logged and replaced with a well-formed empty
//! fallback, so browsing flows degrade instead of crash.
//!
//! The client deliberately sets no request timeout; a request that never
//! completes blocks its calling flow. No call is ever retried.

use reqwest::{Client, Url};

use merkato_core::{AppConfig, ProductDetail};

use crate::error::ClientError;
use crate::types::{ApiResponse, CategoryRecord, ProductQuery, SubCategoryRecord};

/// Client for the storefront catalog API.
///
/// Manages the HTTP client and base URL. Use [`CatalogClient::new`] with
/// loaded configuration, or [`CatalogClient::with_base_url`] to point at a
/// mock server in tests.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a new client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if the
    /// configured endpoint is not a valid URL.
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(&config.api_endpoint, &config.user_agent)
    }

    /// Creates a new client with an explicit base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` is not a valid absolute URL.
    pub fn with_base_url(base_url: &str, user_agent: &str) -> Result<Self, ClientError> {
        let client = Client::builder().user_agent(user_agent).build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // appended path segments extend the path instead of replacing its
        // last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            });
        }

        Ok(Self { client, base_url })
    }

    /// The configured base URL, with its trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches a page of the product listing.
    ///
    /// Returns the typed envelope when the response is structurally valid
    /// (carries a `data` field). Any network failure or shape mismatch is
    /// logged and replaced with [`ApiResponse::empty`]; this method never
    /// fails.
    pub async fn fetch_products(&self, query: &ProductQuery) -> ApiResponse<serde_json::Value> {
        match self.try_fetch_products(query).await {
            Ok(envelope) => envelope,
            Err(error) => {
                tracing::warn!(%error, "error fetching products");
                ApiResponse::empty()
            }
        }
    }

    /// Fetches full product detail by id.
    ///
    /// Returns `None` both when the product does not exist and when the
    /// response is malformed; the two cases are not distinguished.
    pub async fn fetch_product_by_id(&self, id: &str) -> Option<ProductDetail> {
        match self.try_fetch_product_by_id(id).await {
            Ok(detail) => detail,
            Err(error) => {
                tracing::warn!(%error, product_id = id, "error fetching product");
                None
            }
        }
    }

    /// Fetches the category reference list. Failure yields an empty list.
    pub async fn fetch_categories(&self) -> Vec<CategoryRecord> {
        match self.try_fetch_list(&["categories"], "categories").await {
            Ok(categories) => categories,
            Err(error) => {
                tracing::warn!(%error, "error fetching categories");
                Vec::new()
            }
        }
    }

    /// Fetches the sub-categories of a category by name. Failure yields an
    /// empty list.
    pub async fn fetch_sub_categories(&self, category_name: &str) -> Vec<SubCategoryRecord> {
        let segments = ["sub-categories", "category-name", category_name];
        match self.try_fetch_list(&segments, "sub-categories").await {
            Ok(sub_categories) => sub_categories,
            Err(error) => {
                tracing::warn!(%error, category = category_name, "error fetching subcategories");
                Vec::new()
            }
        }
    }

    /// Resolves a stored file name to its absolute asset URL.
    #[must_use]
    pub fn file_url(&self, stored: &str) -> String {
        self.build_url(&["file", stored], &[]).to_string()
    }

    async fn try_fetch_products(
        &self,
        query: &ProductQuery,
    ) -> Result<ApiResponse<serde_json::Value>, ClientError> {
        let url = self.build_url(&["product"], &query.to_params());
        let body = self.request_json(&url).await?;
        serde_json::from_value(body).map_err(|e| ClientError::Deserialize {
            context: "product listing".to_string(),
            source: e,
        })
    }

    async fn try_fetch_product_by_id(&self, id: &str) -> Result<Option<ProductDetail>, ClientError> {
        let url = self.build_url(&["product", id], &[]);
        let body = self.request_json(&url).await?;

        // The id field is the structural gate; a body without one covers
        // both "not found" and "malformed".
        if body.get("id").is_none() {
            return Ok(None);
        }
        Ok(serde_json::from_value(body).ok())
    }

    async fn try_fetch_list<T: serde::de::DeserializeOwned>(
        &self,
        segments: &[&str],
        context: &str,
    ) -> Result<Vec<T>, ClientError> {
        let url = self.build_url(segments, &[]);
        let body = self.request_json(&url).await?;
        serde_json::from_value(body).map_err(|e| ClientError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }

    /// Builds the full request URL from path segments and query parameters.
    ///
    /// Parameters are appended in insertion order and percent-encoded;
    /// empty values are skipped entirely.
    fn build_url(&self, segments: &[&str], params: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                if !value.is_empty() {
                    pairs.append_pair(key, value);
                }
            }
        }
        // query_pairs_mut leaves an empty query marker when nothing was
        // appended.
        if url.query() == Some("") {
            url.set_query(None);
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, ClientError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}
