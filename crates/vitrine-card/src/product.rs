//! Product record types.
//!
//! These mirror the catalog's read-only view of a sellable item: the product
//! itself, its ordered media, the active offer, and the parent product group
//! that carries the display name and the fallback description.

use crate::ids::{ProductGroupId, ProductId};
use serde::{Deserialize, Serialize};

/// A product as delivered by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Canonical product URL (may carry a `?sku=` suffix).
    pub url: String,
    /// Product-level description, falls back to the group description.
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered media; the first image is the card front, the second the back.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Active offer for this product.
    #[serde(default)]
    pub offer: Option<Offer>,
    /// Parent product group (name, shared description).
    #[serde(default)]
    pub group: Option<ProductGroup>,
}

/// A single product image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductImage {
    /// URL to the image file.
    pub url: String,
    /// Alt text for accessibility.
    #[serde(default)]
    pub alt: Option<String>,
}

/// Offer data attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Offer {
    /// Original list price.
    #[serde(default)]
    pub list_price: Option<f64>,
    /// Current selling price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Number of installments offered.
    #[serde(default)]
    pub installments: Option<u32>,
    /// ISO 4217 currency code (e.g., "USD").
    #[serde(default)]
    pub currency: Option<String>,
}

/// The product group a product variant belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductGroup {
    /// Unique product group identifier.
    pub id: ProductGroupId,
    /// Group display name, used as the card name.
    #[serde(default)]
    pub name: Option<String>,
    /// Shared description.
    #[serde(default)]
    pub description: Option<String>,
}
