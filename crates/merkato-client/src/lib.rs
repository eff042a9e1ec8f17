pub mod client;
pub mod error;
pub mod normalize;
pub mod types;
pub mod upload;

pub use client::CatalogClient;
pub use error::{ClientError, UploadError};
pub use normalize::{normalize_products, PLACEHOLDER_IMAGE};
pub use types::{ApiResponse, CategoryRecord, ProductQuery, RawProductItem, SubCategoryRecord};
pub use upload::{StagedImage, UploadStaging, MAX_FILE_SIZE, MAX_IMAGES};
