//! Platform-specific wishlist delegation.
//!
//! The card never touches wishlist state. It looks the platform identifier
//! up in a capability registry and splices in whatever the matching renderer
//! produces; an unsupported platform renders nothing.

use crate::ids::{ProductGroupId, ProductId};
use std::collections::HashMap;

/// Renders a wishlist toggle for one commerce platform.
pub trait WishlistRenderer: Send + Sync {
    /// Produce the wishlist button markup for a product.
    fn render(
        &self,
        product_group_id: Option<&ProductGroupId>,
        product_id: &ProductId,
        class_hint: &str,
    ) -> String;
}

/// Registry mapping platform identifiers to wishlist renderers.
pub struct WishlistRegistry {
    renderers: HashMap<String, Box<dyn WishlistRenderer>>,
}

impl WishlistRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Registry with the built-in platform backends.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("vtex", VtexWishlistButton);
        registry.register("wake", WakeWishlistButton);
        registry
    }

    /// Register a renderer for a platform identifier.
    pub fn register(&mut self, platform: impl Into<String>, renderer: impl WishlistRenderer + 'static) {
        self.renderers.insert(platform.into(), Box::new(renderer));
    }

    /// Render the wishlist toggle for a platform.
    ///
    /// Returns an empty string when the platform is absent or unsupported.
    pub fn render_for(
        &self,
        platform: Option<&str>,
        product_group_id: Option<&ProductGroupId>,
        product_id: &ProductId,
        class_hint: &str,
    ) -> String {
        platform
            .and_then(|p| self.renderers.get(p))
            .map(|r| r.render(product_group_id, product_id, class_hint))
            .unwrap_or_default()
    }
}

impl Default for WishlistRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Wishlist toggle backed by the VTEX wishlist app.
#[derive(Debug, Clone, Copy, Default)]
pub struct VtexWishlistButton;

impl WishlistRenderer for VtexWishlistButton {
    fn render(
        &self,
        product_group_id: Option<&ProductGroupId>,
        product_id: &ProductId,
        class_hint: &str,
    ) -> String {
        render_button("vtex", product_group_id, product_id, class_hint)
    }
}

/// Wishlist toggle backed by the Wake storefront API.
#[derive(Debug, Clone, Copy, Default)]
pub struct WakeWishlistButton;

impl WishlistRenderer for WakeWishlistButton {
    fn render(
        &self,
        product_group_id: Option<&ProductGroupId>,
        product_id: &ProductId,
        class_hint: &str,
    ) -> String {
        render_button("wake", product_group_id, product_id, class_hint)
    }
}

fn render_button(
    platform: &str,
    product_group_id: Option<&ProductGroupId>,
    product_id: &ProductId,
    class_hint: &str,
) -> String {
    let group_attr = match product_group_id {
        Some(id) => format!(r#" data-product-group-id="{}""#, html_escape(id.as_str())),
        None => String::new(),
    };
    format!(
        r#"<button class="wishlist-toggle {}" data-wishlist="{}" data-product-id="{}"{} aria-label="add to wishlist">&#9825;</button>"#,
        html_escape(class_hint),
        platform,
        html_escape(product_id.as_str()),
        group_attr,
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vtex_platform_selects_vtex_backend() {
        let registry = WishlistRegistry::with_defaults();
        let html = registry.render_for(
            Some("vtex"),
            Some(&ProductGroupId::new("g-1")),
            &ProductId::new("p-1"),
            "favorite-toggle",
        );
        assert!(html.contains(r#"data-wishlist="vtex""#));
        assert!(html.contains(r#"data-product-id="p-1""#));
        assert!(html.contains(r#"data-product-group-id="g-1""#));
    }

    #[test]
    fn test_unsupported_platform_renders_nothing() {
        let registry = WishlistRegistry::with_defaults();
        let html = registry.render_for(Some("shopify"), None, &ProductId::new("p-1"), "");
        assert!(html.is_empty());
        let html = registry.render_for(None, None, &ProductId::new("p-1"), "");
        assert!(html.is_empty());
    }

    #[test]
    fn test_custom_renderer_registration() {
        struct Stub;
        impl WishlistRenderer for Stub {
            fn render(
                &self,
                _: Option<&ProductGroupId>,
                _: &ProductId,
                _: &str,
            ) -> String {
                "<span>stub</span>".to_string()
            }
        }

        let mut registry = WishlistRegistry::new();
        registry.register("custom", Stub);
        let html = registry.render_for(Some("custom"), None, &ProductId::new("p"), "");
        assert_eq!(html, "<span>stub</span>");
    }
}
