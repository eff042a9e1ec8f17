pub mod app_config;
pub mod categories;
pub mod config;
pub mod format;
pub mod product;

pub use app_config::AppConfig;
pub use categories::{category_image_path, sub_categories, Category, SubCategoryEntry};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use format::{format_price, format_size};
pub use product::{
    ColorField, NumberOrText, Product, ProductColor, ProductDetail, ProductImage, ProductSize,
    ProductStatus, ProductVariant, SizeField,
};
