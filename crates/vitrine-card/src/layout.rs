//! Declarative card layout configuration.
//!
//! Every field is optional from the caller's point of view: the whole tree
//! deserializes from an empty JSON object, and each absent field carries the
//! documented default. Enum values keep the wire names the CMS emits
//! (`"Zoom image"`, `"Top left"`, ...). Default resolution into flat flags
//! lives in [`crate::resolve`], not here.

use serde::{Deserialize, Serialize};

/// Full card layout configuration tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CardLayout {
    /// Content alignment, old-price size and CTA label.
    pub basics: Basics,
    /// Placement of movable elements.
    pub elements_positions: ElementsPositions,
    /// Per-block visibility toggles.
    pub hide: Hide,
    /// Hover interaction behavior.
    pub on_mouse_over: OnMouseOver,
}

/// Basic presentation knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Basics {
    pub content_alignment: ContentAlignment,
    pub old_price_size: OldPriceSize,
    /// Call-to-action label override.
    pub cta_text: Option<String>,
}

/// Content alignment inside the card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ContentAlignment {
    #[default]
    Left,
    Center,
}

/// Size variant for the strikethrough old price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OldPriceSize {
    #[default]
    Small,
    Normal,
}

/// Placement of movable card elements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementsPositions {
    pub favorite_icon: FavoritePosition,
}

/// Corner the favorite/wishlist icon sits in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FavoritePosition {
    #[default]
    #[serde(rename = "Top right")]
    TopRight,
    #[serde(rename = "Top left")]
    TopLeft,
}

/// Per-block visibility toggles. Absent means shown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Hide {
    pub product_name: bool,
    pub product_description: bool,
    pub all_prices: bool,
    pub discount: bool,
    pub installments: bool,
    pub sku_selector: bool,
    pub cta: bool,
    pub favorite_icon: bool,
}

/// Hover interaction configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct OnMouseOver {
    pub image: HoverImage,
    pub card: HoverCard,
    pub show_favorite_icon: bool,
    pub show_card_shadow: bool,
    pub show_cta: bool,
}

/// What the product image does on hover.
///
/// Anything other than an explicit `"Zoom image"` selects the swap behavior,
/// including an absent field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum HoverImage {
    #[default]
    #[serde(rename = "Change image")]
    ChangeImage,
    #[serde(rename = "Zoom image")]
    ZoomImage,
}

/// What the card body does on hover.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum HoverCard {
    #[default]
    None,
    #[serde(rename = "Move up")]
    MoveUp,
}
