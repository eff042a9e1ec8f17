//! Command-line catalog browser for the merkato storefront API.

use clap::{Parser, Subcommand};

use merkato_client::{normalize_products, CatalogClient, ProductQuery};
use merkato_core::categories::{price_range, sort_option, SortField, CATEGORIES};
use merkato_core::{
    category_image_path, format_price, format_size, load_app_config, sub_categories, ColorField,
    NumberOrText, ProductDetail, SizeField,
};

#[derive(Debug, Parser)]
#[command(name = "merkato-cli")]
#[command(about = "Merkato storefront catalog browser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the product listing.
    Products {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        sub_category: Option<String>,
        #[arg(long)]
        min_price: Option<u32>,
        #[arg(long)]
        max_price: Option<u32>,
        #[arg(long)]
        search: Option<String>,
        /// Price bracket id, e.g. "50-100" (overridden by explicit bounds).
        #[arg(long)]
        price_range: Option<String>,
        /// Sort key: none, newest, oldest, price-high, price-low.
        #[arg(long)]
        sort: Option<String>,
    },
    /// Show a single product.
    Product {
        id: String,
        /// Category name used for size display (e.g. SHOES).
        #[arg(long)]
        category: Option<String>,
    },
    /// List the top-level categories.
    Categories {
        /// Fetch from the API instead of the built-in tables.
        #[arg(long)]
        remote: bool,
    },
    /// List sub-categories of a category.
    SubCategories {
        category: String,
        /// Fetch from the API instead of the built-in tables.
        #[arg(long)]
        remote: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_level))
        .init();

    let client = CatalogClient::new(&config)?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Products {
            page,
            page_size,
            category,
            sub_category,
            min_price,
            max_price,
            search,
            price_range: range_id,
            sort,
        } => {
            let mut query = ProductQuery {
                page,
                page_size,
                category,
                sub_category,
                min_price,
                max_price,
                search,
                ..ProductQuery::default()
            };

            if let Some(range) = range_id.as_deref().and_then(price_range) {
                query.min_price = query.min_price.or(range.min);
                query.max_price = query.max_price.or(range.max);
            }
            if let Some(option) = sort.as_deref().and_then(sort_option) {
                if let (Some(field), Some(order)) = (option.field, option.order) {
                    let direction = Some(order.as_str().to_string());
                    match field {
                        SortField::CreatedAt => query.created_at = direction,
                        SortField::Price => query.price = direction,
                    }
                }
            }

            let envelope = client.fetch_products(&query).await;
            let products = normalize_products(&envelope.data, &config.api_endpoint);

            println!(
                "page {} of {} ({} products total)",
                envelope.page, envelope.total_pages, envelope.total
            );
            for product in products {
                let colors = if product.colors.is_empty() {
                    "-".to_string()
                } else {
                    product.colors.join(", ")
                };
                println!(
                    "{:<12} {:<32} {:>10} Birr  {}",
                    product.id, product.name, product.price, colors
                );
            }
        }
        Commands::Product { id, category } => match client.fetch_product_by_id(&id).await {
            Some(detail) => print_detail(&detail, category.as_deref()),
            None => println!("product not found: {id}"),
        },
        Commands::Categories { remote } => {
            if remote {
                for category in client.fetch_categories().await {
                    println!(
                        "{:<16} {}",
                        category.display_name,
                        category_image_path(&category.name, &category.image, None)
                    );
                }
            } else {
                for category in &CATEGORIES {
                    println!(
                        "{:<16} {}",
                        category.display_name,
                        category_image_path(category.name, category.image, None)
                    );
                }
            }
        }
        Commands::SubCategories { category, remote } => {
            if remote {
                for sub in client.fetch_sub_categories(&category).await {
                    println!(
                        "{:<24} {}",
                        sub.name,
                        category_image_path(&sub.name, &sub.image, Some(&category))
                    );
                }
            } else {
                for sub in sub_categories(&category) {
                    println!(
                        "{:<24} {}",
                        sub.display_name,
                        category_image_path(sub.name, sub.image, Some(&category))
                    );
                }
            }
        }
    }

    Ok(())
}

fn print_detail(detail: &ProductDetail, category_name: Option<&str>) {
    println!("{}  [{}]", detail.name, detail.status);
    if !detail.brand.is_empty() {
        println!("brand:    {}", detail.brand);
    }
    if !detail.material.is_empty() {
        println!("material: {}", detail.material);
    }
    println!(
        "price:    {} Birr",
        format_price(&NumberOrText::Text(detail.price.to_string()))
    );
    if !detail.description.is_empty() {
        println!("\n{}", detail.description);
    }

    if !detail.product_images.is_empty() {
        println!("\nimages:");
        for image in &detail.product_images {
            println!("  {}", image.url);
        }
    }

    if !detail.variants.is_empty() {
        println!("\nvariants:");
        for variant in &detail.variants {
            let size = match &variant.size {
                SizeField::Legacy(size) => size.clone(),
                SizeField::Structured(record) => {
                    format_size(Some(record), category_name.unwrap_or(""))
                }
            };
            let color = match &variant.color {
                ColorField::Legacy(color) => color.clone(),
                ColorField::Structured(record) => record.name.clone(),
            };
            println!(
                "  {:<20} {:<16} stock {}",
                size, color, variant.stock_quantity
            );
        }
        println!("\ntotal stock: {}", detail.total_stock());
    }
}
