//! Static category reference tables and asset-path resolution.
//!
//! These tables predate the remote category endpoints and remain the single
//! source of truth for category taxonomy on the client side: the CLI, the
//! formatters, and the filter/sort plumbing all read from here. The remote
//! endpoints exist alongside them and are fetched separately.

/// A top-level catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    /// Canonical uppercase name used by the API (`"SHOES"`).
    pub name: &'static str,
    pub display_name: &'static str,
    pub image: &'static str,
}

/// A sub-category within a top-level category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubCategoryEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub display_name: &'static str,
    pub image: &'static str,
}

/// An entry in the listing-page category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCategory {
    pub id: &'static str,
    pub name: &'static str,
}

/// A price bracket for the listing-page price filter, in Birr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub id: &'static str,
    pub name: &'static str,
    pub min: Option<u32>,
    pub max: Option<u32>,
}

/// A listing sort choice, mapped to its query parameter and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub field: Option<SortField>,
    pub order: Option<SortOrder>,
}

/// The product field a sort applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Price,
}

impl SortField {
    /// The query-parameter name carrying the sort direction.
    #[must_use]
    pub fn query_key(self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::Price => "price",
        }
    }
}

/// Sort direction as sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

pub const CATEGORIES: [Category; 4] = [
    Category {
        id: "shoes",
        name: "SHOES",
        display_name: "Shoes",
        image: "shoes-cat.png",
    },
    Category {
        id: "clothing",
        name: "CLOTHING",
        display_name: "Clothing",
        image: "clothings-cat.png",
    },
    Category {
        id: "accessories",
        name: "ACCESSORIES",
        display_name: "Accessories",
        image: "accessories-cat.png",
    },
    Category {
        id: "cosmetics",
        name: "COSMETICS",
        display_name: "Cosmetics",
        image: "cosmetics-cat.png",
    },
];

pub const SHOES_SUB_CATEGORIES: [SubCategoryEntry; 6] = [
    SubCategoryEntry {
        id: "heel",
        name: "Heels",
        display_name: "Heels",
        image: "heel.png",
    },
    SubCategoryEntry {
        id: "sneaker",
        name: "Sneakers",
        display_name: "Sneakers",
        image: "sneaker.png",
    },
    SubCategoryEntry {
        id: "slipper",
        name: "Slippers",
        display_name: "Slippers",
        image: "slipper.png",
    },
    SubCategoryEntry {
        id: "sandal",
        name: "Sandals",
        display_name: "Sandals",
        image: "sandal.png",
    },
    SubCategoryEntry {
        id: "boots",
        name: "Boots",
        display_name: "Boots",
        image: "boots.png",
    },
    SubCategoryEntry {
        id: "flat",
        name: "Flats",
        display_name: "Flats",
        image: "flat.png",
    },
];

pub const CLOTHING_SUB_CATEGORIES: [SubCategoryEntry; 10] = [
    SubCategoryEntry {
        id: "dresses",
        name: "Dresses",
        display_name: "Dresses",
        image: "women-dresses.webp",
    },
    SubCategoryEntry {
        id: "tops",
        name: "Tops",
        display_name: "Tops",
        image: "women-shirt.webp",
    },
    SubCategoryEntry {
        id: "bottoms",
        name: "Bottoms",
        display_name: "Bottoms",
        image: "women-pants.webp",
    },
    SubCategoryEntry {
        id: "sweatshirts",
        name: "Sweatshirts & Hoodies",
        display_name: "Sweatshirts & Hoodies",
        image: "women-jacket.webp",
    },
    SubCategoryEntry {
        id: "outerwear",
        name: "Outerwear",
        display_name: "Outerwear",
        image: "women-coat.webp",
    },
    SubCategoryEntry {
        id: "sports",
        name: "Sports",
        display_name: "Sports",
        image: "women-sports.webp",
    },
    SubCategoryEntry {
        id: "swimwear",
        name: "Swimwear",
        display_name: "Swimwear",
        image: "swimwear.webp",
    },
    SubCategoryEntry {
        id: "sleepwear",
        name: "Sleepwear",
        display_name: "Sleepwear",
        image: "women-pjs.webp",
    },
    SubCategoryEntry {
        id: "undergarments",
        name: "Undergarments",
        display_name: "Undergarments",
        image: "women-shorts.webp",
    },
    SubCategoryEntry {
        id: "others",
        name: "Others",
        display_name: "Others",
        image: "others.webp",
    },
];

pub const ACCESSORIES_SUB_CATEGORIES: [SubCategoryEntry; 9] = [
    SubCategoryEntry {
        id: "jewelry",
        name: "Jewelry",
        display_name: "Jewelry",
        image: "jewelry.png",
    },
    SubCategoryEntry {
        id: "bags",
        name: "Bags",
        display_name: "Bags",
        image: "bag.png",
    },
    SubCategoryEntry {
        id: "hats",
        name: "Hats",
        display_name: "Hats",
        image: "hats.png",
    },
    SubCategoryEntry {
        id: "belts",
        name: "Belts",
        display_name: "Belts",
        image: "belts.png",
    },
    SubCategoryEntry {
        id: "scarves",
        name: "Scarves",
        display_name: "Scarves",
        image: "scarves.png",
    },
    SubCategoryEntry {
        id: "sunglasses",
        name: "Sunglasses",
        display_name: "Sunglasses",
        image: "sunglasses.png",
    },
    SubCategoryEntry {
        id: "watches",
        name: "Watches",
        display_name: "Watches",
        image: "watches.png",
    },
    SubCategoryEntry {
        id: "hair",
        name: "Hair Accessories",
        display_name: "Hair Accessories",
        image: "hair.png",
    },
    SubCategoryEntry {
        id: "others",
        name: "Others",
        display_name: "Others",
        image: "others.png",
    },
];

pub const COSMETICS_SUB_CATEGORIES: [SubCategoryEntry; 8] = [
    SubCategoryEntry {
        id: "face",
        name: "Face",
        display_name: "Face",
        image: "face.png",
    },
    SubCategoryEntry {
        id: "eyes",
        name: "Eyes",
        display_name: "Eyes",
        image: "eyes.png",
    },
    SubCategoryEntry {
        id: "lips",
        name: "Lips",
        display_name: "Lips",
        image: "lips.png",
    },
    SubCategoryEntry {
        id: "nails",
        name: "Nails",
        display_name: "Nails",
        image: "nails.png",
    },
    SubCategoryEntry {
        id: "skincare",
        name: "Skincare",
        display_name: "Skincare",
        image: "skincare.png",
    },
    SubCategoryEntry {
        id: "haircare",
        name: "Haircare",
        display_name: "Haircare",
        image: "haircare.png",
    },
    SubCategoryEntry {
        id: "tools",
        name: "Tools",
        display_name: "Tools",
        image: "tools.png",
    },
    SubCategoryEntry {
        id: "others",
        name: "Others",
        display_name: "Others",
        image: "others.png",
    },
];

pub const FILTER_CATEGORIES: [FilterCategory; 5] = [
    FilterCategory {
        id: "all",
        name: "All Categories",
    },
    FilterCategory {
        id: "SHOES",
        name: "Shoes",
    },
    FilterCategory {
        id: "COSMETICS",
        name: "Cosmetics",
    },
    FilterCategory {
        id: "CLOTHING",
        name: "Clothing",
    },
    FilterCategory {
        id: "ACCESSORIES",
        name: "Accessories",
    },
];

pub const PRICE_RANGES: [PriceRange; 5] = [
    PriceRange {
        id: "all",
        name: "All Prices",
        min: None,
        max: None,
    },
    PriceRange {
        id: "0-50",
        name: "Under 50 Birr",
        min: None,
        max: Some(50),
    },
    PriceRange {
        id: "50-100",
        name: "50 - 100 Birr",
        min: Some(50),
        max: Some(100),
    },
    PriceRange {
        id: "100-200",
        name: "100 - 200 Birr",
        min: Some(100),
        max: Some(200),
    },
    PriceRange {
        id: "200+",
        name: "Over 200 Birr",
        min: Some(200),
        max: None,
    },
];

pub const SORT_OPTIONS: [SortOption; 5] = [
    SortOption {
        value: "none",
        label: "None",
        field: None,
        order: None,
    },
    SortOption {
        value: "newest",
        label: "Newest",
        field: Some(SortField::CreatedAt),
        order: Some(SortOrder::Desc),
    },
    SortOption {
        value: "oldest",
        label: "Oldest",
        field: Some(SortField::CreatedAt),
        order: Some(SortOrder::Asc),
    },
    SortOption {
        value: "price-high",
        label: "Price: High to Low",
        field: Some(SortField::Price),
        order: Some(SortOrder::Desc),
    },
    SortOption {
        value: "price-low",
        label: "Price: Low to High",
        field: Some(SortField::Price),
        order: Some(SortOrder::Asc),
    },
];

/// Looks up the sub-category table for a category name (case-insensitive).
///
/// Returns an empty slice for unknown categories.
#[must_use]
pub fn sub_categories(category_name: &str) -> &'static [SubCategoryEntry] {
    match category_name.to_uppercase().as_str() {
        "SHOES" => &SHOES_SUB_CATEGORIES,
        "CLOTHING" => &CLOTHING_SUB_CATEGORIES,
        "ACCESSORIES" => &ACCESSORIES_SUB_CATEGORIES,
        "COSMETICS" => &COSMETICS_SUB_CATEGORIES,
        _ => &[],
    }
}

/// Looks up a sort option by its `value` key.
#[must_use]
pub fn sort_option(value: &str) -> Option<&'static SortOption> {
    SORT_OPTIONS.iter().find(|o| o.value == value)
}

/// Looks up a price range by its `id`.
#[must_use]
pub fn price_range(id: &str) -> Option<&'static PriceRange> {
    PRICE_RANGES.iter().find(|r| r.id == id)
}

/// Resolves the static asset path for a category or sub-category image.
///
/// A literal `"Others"` name always maps to the shared others image,
/// regardless of category. Without a category the path is top-level;
/// with one it is namespaced by the lower-cased category name.
#[must_use]
pub fn category_image_path(name: &str, image: &str, category: Option<&str>) -> String {
    if name == "Others" {
        return "/categories/others.png".to_string();
    }

    match category {
        Some(c) if !c.is_empty() => format!("/categories/{}/{image}", c.to_lowercase()),
        _ => format!("/categories/{image}"),
    }
}
