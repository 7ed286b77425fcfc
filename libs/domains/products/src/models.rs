use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};

/// Sizes a product variant can be sold in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum VariantSize {
    Small,
    Medium,
    Large,
    #[serde(rename = "XL")]
    #[strum(serialize = "XL")]
    Xl,
    #[serde(rename = "250g")]
    #[strum(serialize = "250g")]
    G250,
    #[serde(rename = "500g")]
    #[strum(serialize = "500g")]
    G500,
    #[serde(rename = "1kg")]
    #[strum(serialize = "1kg")]
    Kg1,
    #[serde(rename = "2kg")]
    #[strum(serialize = "2kg")]
    Kg2,
}

/// A size/color/SKU combination with its own price and stock.
///
/// Owned by its parent product; written only as part of a product write.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub size: VariantSize,
    #[serde(default)]
    pub color: Option<String>,
    pub price: f64,
    pub stock: i32,
    /// Stock keeping unit, unique across all products
    pub sku: String,
}

/// One user's score and optional review text.
///
/// Owned by its parent product; written only as part of a product write.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub user: Uuid,
    pub rating: i32,
    #[serde(default)]
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Product entity - stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    /// URL-safe identifier, unique, always lowercase
    pub slug: String,
    pub description: String,
    pub price: f64,
    /// Between 1 and 10 image URLs
    pub images: Vec<String>,
    /// Owning category; existence is not enforced on write
    pub category: Uuid,
    pub stock: i32,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category fields denormalized onto a product at read time.
///
/// Deserialized straight from the categories collection; fields the
/// summary does not carry are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategorySummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
}

/// Product with its category reference expanded for read responses
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
    /// Expanded category; null when the reference dangles
    pub category: Option<CategorySummary>,
    pub stock: i32,
    pub variants: Vec<Variant>,
    pub ratings: Vec<Rating>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductDetail {
    pub fn from_parts(product: Product, category: Option<CategorySummary>) -> Self {
        Self {
            id: product.id,
            name: product.name,
            slug: product.slug,
            description: product.description,
            price: product.price,
            images: product.images,
            category,
            stock: product.stock,
            variants: product.variants,
            ratings: product.ratings,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(
        required(message = "Product name is required"),
        length(max = 200, message = "Product name cannot exceed 200 characters")
    )]
    pub name: Option<String>,
    #[validate(required(message = "Product slug is required"))]
    pub slug: Option<String>,
    #[validate(
        required(message = "Product description is required"),
        length(max = 2000, message = "Description cannot exceed 2000 characters")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "Product price is required"),
        range(min = 0.0, message = "Price cannot be negative")
    )]
    pub price: Option<f64>,
    #[validate(
        required(message = "At least one product image is required"),
        length(min = 1, max = 10, message = "Product must have between 1 and 10 images")
    )]
    pub images: Option<Vec<String>>,
    #[validate(required(message = "Product category is required"))]
    pub category: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,
    #[serde(default)]
    #[validate(nested)]
    pub variants: Vec<VariantInput>,
    #[serde(default)]
    #[validate(nested)]
    pub ratings: Vec<RatingInput>,
}

impl CreateProduct {
    /// Names of required fields absent from the request
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.slug.is_none() {
            missing.push("slug");
        }
        if self.description.is_none() {
            missing.push("description");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        if self.images.is_none() {
            missing.push("images");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        missing
    }
}

/// DTO for a variant supplied on a product write
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariantInput {
    pub size: VariantSize,
    #[serde(default)]
    pub color: Option<String>,
    #[validate(range(min = 0.0, message = "Variant price cannot be negative"))]
    pub price: f64,
    #[serde(default)]
    #[validate(range(min = 0, message = "Variant stock cannot be negative"))]
    pub stock: i32,
    #[validate(length(min = 1, message = "Variant SKU is required"))]
    pub sku: String,
}

/// DTO for a rating supplied on a product write
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingInput {
    pub user: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    #[serde(default)]
    #[validate(length(max = 500, message = "Review cannot exceed 500 characters"))]
    pub review: Option<String>,
}

/// DTO for updating an existing product
///
/// Only supplied fields change; the rest keep their stored values.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(length(max = 200, message = "Product name cannot exceed 200 characters"))]
    pub name: Option<String>,
    pub slug: Option<String>,
    #[validate(length(max = 2000, message = "Description cannot exceed 2000 characters"))]
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    #[validate(length(min = 1, max = 10, message = "Product must have between 1 and 10 images"))]
    pub images: Option<Vec<String>>,
    pub category: Option<String>,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: Option<i32>,
    #[validate(nested)]
    pub variants: Option<Vec<VariantInput>>,
    #[validate(nested)]
    pub ratings: Option<Vec<RatingInput>>,
}

impl Variant {
    /// Materialize a variant from its input DTO, assigning an identity
    pub fn new(input: VariantInput) -> Self {
        Self {
            id: Uuid::now_v7(),
            size: input.size,
            color: input.color,
            price: input.price,
            stock: input.stock,
            sku: input.sku.trim().to_string(),
        }
    }
}

impl Rating {
    /// Materialize a rating from its input DTO, assigning an identity
    pub fn new(input: RatingInput) -> ProductResult<Self> {
        let user = Uuid::parse_str(&input.user)
            .map_err(|_| ProductError::Validation("Invalid user ID".to_string()))?;

        Ok(Self {
            id: Uuid::now_v7(),
            user,
            rating: input.rating,
            review: input.review.map(|r| r.trim().to_string()),
            created_at: Utc::now(),
        })
    }
}

impl Product {
    /// Build a new product from a validated CreateProduct DTO
    ///
    /// Trims string fields, lowercases the slug, and assigns identities
    /// to embedded sub-records.
    pub fn new(input: CreateProduct) -> ProductResult<Self> {
        let CreateProduct {
            name: Some(name),
            slug: Some(slug),
            description: Some(description),
            price: Some(price),
            images: Some(images),
            category: Some(category),
            stock,
            variants,
            ratings,
        } = input
        else {
            return Err(ProductError::Validation(
                "Please provide all required fields: name, slug, description, price, images, category"
                    .to_string(),
            ));
        };

        let category = Uuid::parse_str(&category)
            .map_err(|_| ProductError::Validation("Invalid category ID".to_string()))?;

        let ratings = ratings
            .into_iter()
            .map(Rating::new)
            .collect::<ProductResult<Vec<_>>>()?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::now_v7(),
            name: name.trim().to_string(),
            slug: slug.trim().to_lowercase(),
            description: description.trim().to_string(),
            price,
            images,
            category,
            stock,
            variants: variants.into_iter().map(Variant::new).collect(),
            ratings,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update, refreshing `updated_at`
    ///
    /// Supplied variant/rating lists replace the stored lists wholesale;
    /// sub-records have no lifecycle outside their product.
    pub fn apply_update(&mut self, update: UpdateProduct) -> ProductResult<()> {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(slug) = update.slug {
            self.slug = slug.trim().to_lowercase();
        }
        if let Some(description) = update.description {
            self.description = description.trim().to_string();
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(images) = update.images {
            self.images = images;
        }
        if let Some(category) = update.category {
            self.category = Uuid::parse_str(&category)
                .map_err(|_| ProductError::Validation("Invalid category ID".to_string()))?;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(variants) = update.variants {
            self.variants = variants.into_iter().map(Variant::new).collect();
        }
        if let Some(ratings) = update.ratings {
            self.ratings = ratings
                .into_iter()
                .map(Rating::new)
                .collect::<ProductResult<Vec<_>>>()?;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}
