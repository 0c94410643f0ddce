//! Input normalization and the per-render resolved view.
//!
//! [`CardView`] is the consistent internal view derived from the raw product
//! record. [`ResolvedView`] layers the resolved layout and computed display
//! values on top. Both are ephemeral: built fresh for every render, consumed
//! by composition, never cached.

use crate::format::CurrencyFormatter;
use crate::ids::{ProductGroupId, ProductId};
use crate::layout::CardLayout;
use crate::product::{Product, ProductImage};
use crate::resolve::{resolve, ResolvedLayout};
use crate::url::{canonical, relative};
use crate::values::{compact_name, discount_percent, show_old_price, wide_name};
use serde::{Deserialize, Serialize};

/// Normalized view of a product record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardView {
    pub id: ProductId,
    pub group_id: Option<ProductGroupId>,
    /// Display name, taken from the product group.
    pub name: Option<String>,
    /// Product description, falling back to the group description.
    pub description: Option<String>,
    /// First image in the sequence, if any.
    pub primary_image: Option<ProductImage>,
    /// Second image, falling back to the primary so a hover swap never
    /// shows a broken image.
    pub secondary_image: Option<ProductImage>,
    /// Product URL with the `?sku` suffix stripped.
    pub href: String,
    /// Site-relative form of `href`, used for internal links.
    pub relative_href: String,
    pub list_price: Option<f64>,
    pub price: Option<f64>,
    pub installments: Option<u32>,
    pub currency: Option<String>,
}

/// Derive the normalized card view from a product record.
pub fn normalize(product: &Product) -> CardView {
    let href = canonical(&product.url).to_string();
    let relative_href = relative(&href);
    let offer = product.offer.as_ref();

    CardView {
        id: product.id.clone(),
        group_id: product.group.as_ref().map(|g| g.id.clone()),
        name: product.group.as_ref().and_then(|g| g.name.clone()),
        description: product
            .description
            .clone()
            .or_else(|| product.group.as_ref().and_then(|g| g.description.clone())),
        primary_image: product.images.first().cloned(),
        secondary_image: product.images.get(1).or(product.images.first()).cloned(),
        href,
        relative_href,
        list_price: offer.and_then(|o| o.list_price),
        price: offer.and_then(|o| o.price),
        installments: offer.and_then(|o| o.installments),
        currency: offer.and_then(|o| o.currency.clone()),
    }
}

/// Everything composition needs for one render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedView {
    pub card: CardView,
    pub layout: ResolvedLayout,
    /// Compact name variant for narrow viewports.
    pub name_compact: String,
    /// Wide name variant for wide viewports.
    pub name_wide: String,
    pub discount_percent: Option<i64>,
    pub show_old_price: bool,
    /// Formatted current price.
    pub price_text: String,
    /// Formatted list price.
    pub old_price_text: String,
    /// Installments line ("ou 4x de $20.00"), when the offer carries more
    /// than one installment.
    pub installment_text: Option<String>,
}

impl ResolvedView {
    /// Build the resolved view for a single render.
    pub fn build(
        product: &Product,
        layout: Option<&CardLayout>,
        currency: &dyn CurrencyFormatter,
    ) -> Self {
        let card = normalize(product);
        let name = card.name.as_deref().unwrap_or("");
        let code = card.currency.as_deref();

        let installment_text = card.installments.filter(|&n| n > 1).map(|n| match card.price {
            Some(price) => format!(
                "ou {}x de {}",
                n,
                currency.format(Some(price / f64::from(n)), code)
            ),
            None => format!("ou {}x", n),
        });

        Self {
            name_compact: compact_name(name),
            name_wide: wide_name(name),
            discount_percent: discount_percent(card.list_price, card.price),
            show_old_price: show_old_price(card.list_price, card.price),
            price_text: currency.format(card.price, code),
            old_price_text: currency.format(card.list_price, code),
            installment_text,
            layout: resolve(layout),
            card,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::SymbolFormatter;
    use crate::product::{Offer, ProductGroup};

    fn product() -> Product {
        Product {
            id: ProductId::new("p-1"),
            url: "https://shop.example/tee?sku=42&utm=x".to_string(),
            description: None,
            images: vec![
                ProductImage {
                    url: "front.jpg".to_string(),
                    alt: Some("front".to_string()),
                },
                ProductImage {
                    url: "back.jpg".to_string(),
                    alt: Some("back".to_string()),
                },
            ],
            offer: Some(Offer {
                list_price: Some(100.0),
                price: Some(80.0),
                installments: Some(4),
                currency: Some("USD".to_string()),
            }),
            group: Some(ProductGroup {
                id: ProductGroupId::new("g-1"),
                name: Some("Plain white tee".to_string()),
                description: Some("Group description".to_string()),
            }),
        }
    }

    #[test]
    fn test_name_comes_from_group() {
        let view = normalize(&product());
        assert_eq!(view.name.as_deref(), Some("Plain white tee"));
    }

    #[test]
    fn test_description_falls_back_to_group() {
        let mut p = product();
        assert_eq!(normalize(&p).description.as_deref(), Some("Group description"));
        p.description = Some("Own description".to_string());
        assert_eq!(normalize(&p).description.as_deref(), Some("Own description"));
    }

    #[test]
    fn test_image_selection_and_fallback() {
        let mut p = product();
        let view = normalize(&p);
        assert_eq!(view.primary_image.as_ref().unwrap().url, "front.jpg");
        assert_eq!(view.secondary_image.as_ref().unwrap().url, "back.jpg");

        p.images.truncate(1);
        let view = normalize(&p);
        assert_eq!(view.secondary_image.as_ref().unwrap().url, "front.jpg");

        p.images.clear();
        let view = normalize(&p);
        assert!(view.primary_image.is_none());
        assert!(view.secondary_image.is_none());
    }

    #[test]
    fn test_href_strips_sku_suffix() {
        let view = normalize(&product());
        assert_eq!(view.href, "https://shop.example/tee");
        assert_eq!(view.relative_href, "/tee");
    }

    #[test]
    fn test_resolved_view_computes_values() {
        let p = product();
        let view = ResolvedView::build(&p, None, &SymbolFormatter);
        assert_eq!(view.discount_percent, Some(20));
        assert!(view.show_old_price);
        assert_eq!(view.price_text, "$80.00");
        assert_eq!(view.old_price_text, "$100.00");
        assert_eq!(view.name_compact, "Plain white tee");
        assert_eq!(view.installment_text.as_deref(), Some("ou 4x de $20.00"));
    }

    #[test]
    fn test_resolved_view_tolerates_missing_offer() {
        let mut p = product();
        p.offer = None;
        let view = ResolvedView::build(&p, None, &SymbolFormatter);
        assert_eq!(view.discount_percent, None);
        assert!(!view.show_old_price);
        assert_eq!(view.price_text, "");
        assert!(view.installment_text.is_none());
    }
}
