//! Visibility/layout resolution.
//!
//! `resolve` is a total, pure function from an optional [`CardLayout`] to a
//! flat set of booleans and enums. Every default lives here, once; nothing
//! downstream inspects the raw configuration tree again.

use crate::layout::{
    CardLayout, ContentAlignment, FavoritePosition, HoverCard, HoverImage, OldPriceSize,
};
use serde::{Deserialize, Serialize};

/// Default call-to-action label when the layout does not override it.
pub const DEFAULT_CTA_LABEL: &str = "Comprar";

/// Flattened rendering decisions derived from the layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedLayout {
    pub alignment: ContentAlignment,
    pub old_price_size: OldPriceSize,
    pub cta_label: String,
    pub favorite_position: FavoritePosition,

    // Block visibility (hide.* inverted, absent means shown).
    pub show_name: bool,
    pub show_description: bool,
    pub show_prices: bool,
    pub show_discount: bool,
    pub show_installments: bool,
    pub show_sku_selector: bool,
    pub show_cta: bool,
    pub show_favorite: bool,

    /// Hover image behavior. Zoom and swap are mutually exclusive.
    pub hover_image: HoverImage,
    /// Whether the secondary image is emitted at all.
    pub swap_on_hover: bool,
    /// Card lifts on hover.
    pub lift_on_hover: bool,

    // Independent hover-reveal toggles, each default off.
    pub reveal_favorite_on_hover: bool,
    pub reveal_shadow_on_hover: bool,
    pub reveal_cta_on_hover: bool,
}

/// Resolve an optional layout tree into flat rendering decisions.
pub fn resolve(layout: Option<&CardLayout>) -> ResolvedLayout {
    let default = CardLayout::default();
    let l = layout.unwrap_or(&default);

    let hover_image = l.on_mouse_over.image;

    ResolvedLayout {
        alignment: l.basics.content_alignment,
        old_price_size: l.basics.old_price_size,
        cta_label: l
            .basics
            .cta_text
            .clone()
            .unwrap_or_else(|| DEFAULT_CTA_LABEL.to_string()),
        favorite_position: l.elements_positions.favorite_icon,

        show_name: !l.hide.product_name,
        show_description: !l.hide.product_description,
        show_prices: !l.hide.all_prices,
        show_discount: !l.hide.discount,
        show_installments: !l.hide.installments,
        show_sku_selector: !l.hide.sku_selector,
        show_cta: !l.hide.cta,
        show_favorite: !l.hide.favorite_icon,

        hover_image,
        swap_on_hover: hover_image == HoverImage::ChangeImage,
        lift_on_hover: l.on_mouse_over.card == HoverCard::MoveUp,

        reveal_favorite_on_hover: l.on_mouse_over.show_favorite_icon,
        reveal_shadow_on_hover: l.on_mouse_over.show_card_shadow,
        reveal_cta_on_hover: l.on_mouse_over.show_cta,
    }
}
