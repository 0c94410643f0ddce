//! Card composition.
//!
//! Assembles the final card markup from the resolved view and returns the
//! analytics select event alongside it. Pure per invocation: identical
//! inputs compose identical output, and missing optional data omits the
//! corresponding block instead of raising.

use crate::analytics::{AnalyticsMapper, DefaultItemMapper, SelectItemEvent};
use crate::context::DisplayContext;
use crate::error::CardError;
use crate::format::{CurrencyFormatter, SymbolFormatter};
use crate::image::{BasicImageTag, ImageDelivery, ImageRequest};
use crate::layout::{CardLayout, ContentAlignment, FavoritePosition, HoverImage, OldPriceSize};
use crate::product::Product;
use crate::view::ResolvedView;
use crate::wishlist::WishlistRegistry;
use std::sync::OnceLock;
use tracing::debug;

/// Card image dimensions.
const WIDTH: u32 = 304;
const HEIGHT: u32 = 304;

/// Responsive sizes hint for card images.
const IMAGE_SIZES: &str = "(max-width: 640px) 50vw, 20vw";

const BAG_ICON: &str = r#"<svg class="cta-icon" width="14" height="16" viewBox="0 0 14 16" fill="none" stroke="currentColor" stroke-width="1.5" aria-hidden="true"><path d="M2 5h10l-1 10H3L2 5z"/><path d="M5 5V3a2 2 0 0 1 4 0v2"/></svg>"#;

/// The collaborators composition delegates to.
pub struct Collaborators<'a> {
    pub images: &'a dyn ImageDelivery,
    pub currency: &'a dyn CurrencyFormatter,
    pub analytics: &'a dyn AnalyticsMapper,
    pub wishlist: &'a WishlistRegistry,
}

impl Collaborators<'static> {
    /// The bundled default collaborators.
    pub fn default_set() -> Self {
        static IMAGES: BasicImageTag = BasicImageTag;
        static CURRENCY: SymbolFormatter = SymbolFormatter;
        static ANALYTICS: DefaultItemMapper = DefaultItemMapper;
        static WISHLIST: OnceLock<WishlistRegistry> = OnceLock::new();

        Self {
            images: &IMAGES,
            currency: &CURRENCY,
            analytics: &ANALYTICS,
            wishlist: WISHLIST.get_or_init(WishlistRegistry::with_defaults),
        }
    }
}

impl Default for Collaborators<'static> {
    fn default() -> Self {
        Self::default_set()
    }
}

/// Output of one card render.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedCard {
    /// Card markup.
    pub html: String,
    /// Select event attached to the whole card.
    pub event: SelectItemEvent,
}

/// Compose a product card.
///
/// The only failure is a product record without an identifier; every other
/// missing input degrades to an omitted block.
pub fn compose(
    product: &Product,
    layout: Option<&CardLayout>,
    ctx: &DisplayContext,
    collab: &Collaborators<'_>,
) -> Result<ComposedCard, CardError> {
    if product.id.is_empty() {
        return Err(CardError::MissingProductId);
    }

    let view = ResolvedView::build(product, layout, collab.currency);
    let l = &view.layout;

    debug!(
        card = %view.card.id,
        surface = ?ctx.surface,
        hover = ?l.hover_image,
        "composing product card"
    );

    let card_id = format!("product-card-{}", view.card.id);
    let href = view.card.relative_href.as_str();

    let mut classes = vec!["product-card"];
    classes.push(match l.alignment {
        ContentAlignment::Center => "product-card--center",
        ContentAlignment::Left => "product-card--left",
    });
    if l.reveal_shadow_on_hover {
        classes.push("product-card--hover-shadow");
    }
    if l.lift_on_hover {
        classes.push("product-card--hover-lift");
    }

    let cta = format!(
        r#"<a href="{}" aria-label="view product" class="card-cta">{}<span class="cta-label">{}</span></a>"#,
        html_escape(href),
        BAG_ICON,
        html_escape(&l.cta_label),
    );

    let figure = render_figure(&view, ctx, collab, href, &cta);
    let body = render_body(&view, ctx, &cta);

    let html = format!(
        r#"<article id="{id}" class="{classes}" data-product-id="{pid}">
{figure}
<div class="card-body">
{body}</div>
</article>"#,
        id = html_escape(&card_id),
        classes = classes.join(" "),
        pid = html_escape(view.card.id.as_str()),
        figure = figure,
        body = body,
    );

    let item = collab
        .analytics
        .map(product, view.card.price, view.card.list_price, ctx.index);
    let event = SelectItemEvent::new(ctx.item_list_name.clone(), item);

    Ok(ComposedCard { html, event })
}

fn render_figure(
    view: &ResolvedView,
    ctx: &DisplayContext,
    collab: &Collaborators<'_>,
    href: &str,
    cta: &str,
) -> String {
    let l = &view.layout;

    // Favorite toggle and discount badge share the top strip. A hidden icon
    // with the hover reveal enabled still renders, hidden at rest.
    let favorite = if l.show_favorite || l.reveal_favorite_on_hover {
        let markup = collab.wishlist.render_for(
            ctx.platform.as_deref(),
            view.card.group_id.as_ref(),
            &view.card.id,
            "favorite-toggle",
        );
        if markup.is_empty() {
            String::new()
        } else {
            let mut slot_classes = String::from("favorite-slot");
            if !l.show_favorite {
                slot_classes.push_str(" favorite-slot--hidden");
            }
            if l.reveal_favorite_on_hover {
                slot_classes.push_str(" favorite-slot--reveal-on-hover");
            }
            format!(r#"<div class="{}">{}</div>"#, slot_classes, markup)
        }
    } else {
        String::new()
    };

    let badge = match (l.show_discount, view.discount_percent) {
        (true, Some(percent)) => format!(
            r#"<div class="discount-badge"><span>{}%</span></div>"#,
            percent
        ),
        _ => String::new(),
    };

    let strip_side = match l.favorite_position {
        FavoritePosition::TopLeft => "card-strip--left",
        FavoritePosition::TopRight => "card-strip--right",
    };
    let strip = format!(
        r#"<div class="card-strip {}">{}{}</div>"#,
        strip_side, favorite, badge
    );

    let front = match &view.card.primary_image {
        Some(image) => {
            let class = match l.hover_image {
                HoverImage::ZoomImage => "image-front image-front--zoom-on-hover",
                HoverImage::ChangeImage => "image-front",
            };
            collab.images.render(&ImageRequest {
                src: &image.url,
                alt: image.alt.as_deref().unwrap_or(""),
                width: WIDTH,
                height: HEIGHT,
                sizes: IMAGE_SIZES,
                eager: ctx.preload,
                class,
            })
        }
        None => String::new(),
    };

    // Secondary image only exists in swap mode; zoom suppresses it.
    let back = match (l.swap_on_hover, &view.card.secondary_image) {
        (true, Some(image)) => collab.images.render(&ImageRequest {
            src: &image.url,
            alt: image.alt.as_deref().unwrap_or(""),
            width: WIDTH,
            height: HEIGHT,
            sizes: IMAGE_SIZES,
            eager: false,
            class: "image-back",
        }),
        _ => String::new(),
    };

    let media = format!(
        r#"<a href="{}" aria-label="view product" class="card-media">{}{}</a>"#,
        html_escape(href),
        front,
        back
    );

    let overlay = if l.reveal_cta_on_hover {
        format!(r#"<figcaption class="cta-overlay">{}</figcaption>"#, cta)
    } else {
        String::new()
    };

    format!(
        r#"<figure class="card-figure">{}{}{}</figure>"#,
        strip, media, overlay
    )
}

fn render_body(view: &ResolvedView, ctx: &DisplayContext, cta: &str) -> String {
    let l = &view.layout;
    let mut out = String::new();

    if l.show_name || l.show_description {
        out.push_str(r#"<div class="card-text">"#);
        if l.show_name {
            let tag = ctx.surface.heading_tag();
            out.push_str(&format!(
                r#"<{tag} class="product-name product-name--compact">{}</{tag}><{tag} class="product-name product-name--wide">{}</{tag}>"#,
                html_escape(&view.name_compact),
                html_escape(&view.name_wide),
            ));
        }
        if l.show_description {
            // Catalog descriptions may carry markup; inserted as-is.
            out.push_str(&format!(
                r#"<div class="product-description">{}</div>"#,
                view.card.description.as_deref().unwrap_or("")
            ));
        }
        out.push_str("</div>\n");
    }

    if l.show_prices {
        let old = if view.show_old_price {
            let size = match l.old_price_size {
                OldPriceSize::Normal => "price-old--normal",
                OldPriceSize::Small => "price-old--small",
            };
            format!(
                r#"<span class="price-old {}">{}</span>"#,
                size,
                html_escape(&view.old_price_text)
            )
        } else {
            String::new()
        };
        out.push_str(&format!(
            r#"<div class="price-row">{}<span class="price-current">{}</span></div>
"#,
            old,
            html_escape(&view.price_text)
        ));
    }

    if l.show_installments {
        if let Some(text) = &view.installment_text {
            out.push_str(&format!(
                r#"<div class="installments">{}</div>
"#,
                html_escape(text)
            ));
        }
    }

    if l.show_cta {
        let hidden = if l.reveal_cta_on_hover {
            " cta-bottom--desktop-hidden"
        } else {
            ""
        };
        out.push_str(&format!(
            r#"<div class="cta-bottom{}">{}</div>
"#,
            hidden, cta
        ));
    }

    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
