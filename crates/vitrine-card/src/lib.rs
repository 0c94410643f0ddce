//! Configuration-driven product card rendering for storefront surfaces.
//!
//! This crate is the decision engine behind a single merchandising unit:
//! given a catalog product, an optional declarative layout tree, and the
//! display context, it decides what shows, what hides, which truncation and
//! formatting apply, and which hover behavior is attached, then composes the
//! card markup plus its analytics select event.
//!
//! The pipeline is strictly one-directional and stateless:
//!
//! 1. **Normalization** ([`view`]) - consistent internal view of the product.
//! 2. **Resolution** ([`resolve`]) - layout tree to flat decisions, defaults
//!    centralized.
//! 3. **Value computation** ([`values`]) - discount percentage, name
//!    variants, price strings.
//! 4. **Composition** ([`compose`]) - final markup and the select event.
//!
//! Everything with I/O lives behind a collaborator trait: image delivery,
//! currency formatting, analytics mapping, and the per-platform wishlist
//! backends.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_card::prelude::*;
//!
//! let layout: CardLayout = serde_json::from_str(layout_json)?;
//! let ctx = DisplayContext {
//!     surface: Surface::Listing,
//!     platform: Some("vtex".to_string()),
//!     item_list_name: Some("summer-shelf".to_string()),
//!     ..Default::default()
//! };
//!
//! let card = compose(&product, Some(&layout), &ctx, &Collaborators::default_set())?;
//! page.push_str(&card.html);
//! emitter.emit(&card.event);
//! ```

pub mod analytics;
pub mod compose;
pub mod context;
pub mod error;
pub mod format;
pub mod ids;
pub mod image;
pub mod layout;
pub mod product;
pub mod resolve;
pub mod url;
pub mod values;
pub mod view;
pub mod wishlist;

pub use compose::{compose, Collaborators, ComposedCard};
pub use error::CardError;
pub use ids::{ProductGroupId, ProductId};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::analytics::{
        AnalyticsItem, AnalyticsMapper, DefaultItemMapper, SelectItemEvent,
    };
    pub use crate::compose::{compose, Collaborators, ComposedCard};
    pub use crate::context::{DisplayContext, Surface};
    pub use crate::error::CardError;
    pub use crate::format::{CurrencyFormatter, SymbolFormatter};
    pub use crate::ids::{ProductGroupId, ProductId};
    pub use crate::image::{BasicImageTag, ImageDelivery, ImageRequest};
    pub use crate::layout::{
        Basics, CardLayout, ContentAlignment, ElementsPositions, FavoritePosition, Hide,
        HoverCard, HoverImage, OldPriceSize, OnMouseOver,
    };
    pub use crate::product::{Offer, Product, ProductGroup, ProductImage};
    pub use crate::resolve::{resolve, ResolvedLayout};
    pub use crate::view::{normalize, CardView, ResolvedView};
    pub use crate::wishlist::{
        VtexWishlistButton, WakeWishlistButton, WishlistRegistry, WishlistRenderer,
    };
}
