//! Display context for a card render.

use serde::{Deserialize, Serialize};

/// Surface the card is being rendered into.
///
/// Only affects the semantic heading level of the name block, never content
/// or decision logic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Surface {
    /// Home page grid.
    #[default]
    Home,
    /// Product listing page.
    Listing,
    /// Related items on a product detail page.
    Detail,
}

impl Surface {
    /// Heading tag used for the product name block.
    pub fn heading_tag(&self) -> &'static str {
        match self {
            Surface::Home => "h3",
            Surface::Listing => "h2",
            Surface::Detail => "h3",
        }
    }
}

/// Caller-supplied context for a single card render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DisplayContext {
    /// Surface type.
    pub surface: Surface,
    /// Preload the card image (eager loading).
    pub preload: bool,
    /// Position of the card in its list.
    pub index: Option<u32>,
    /// List name for the analytics select event.
    pub item_list_name: Option<String>,
    /// Commerce platform identifier, picks the wishlist backend.
    pub platform: Option<String>,
}
