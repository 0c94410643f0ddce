//! Image delivery collaborator.
//!
//! The card describes the image it needs; delivery (CDN transforms,
//! responsive srcsets, caching) is owned by the implementation.

/// A request for a renderable image element.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest<'a> {
    /// Source URL.
    pub src: &'a str,
    /// Alt text.
    pub alt: &'a str,
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// Responsive sizes hint.
    pub sizes: &'a str,
    /// Eager loading (above-the-fold cards).
    pub eager: bool,
    /// CSS class for the element.
    pub class: &'a str,
}

/// Produces image markup for an [`ImageRequest`].
pub trait ImageDelivery {
    fn render(&self, request: &ImageRequest<'_>) -> String;
}

/// Plain `<img>` tag renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicImageTag;

impl ImageDelivery for BasicImageTag {
    fn render(&self, request: &ImageRequest<'_>) -> String {
        let loading = if request.eager { "eager" } else { "lazy" };
        format!(
            r#"<img src="{}" alt="{}" width="{}" height="{}" sizes="{}" loading="{}" decoding="async" class="{}">"#,
            html_escape(request.src),
            html_escape(request.alt),
            request.width,
            request.height,
            html_escape(request.sizes),
            loading,
            html_escape(request.class),
        )
    }
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
    fn test_lazy_by_default() {
        let html = BasicImageTag.render(&ImageRequest {
            src: "https://cdn.example/tee.jpg",
            alt: "White tee",
            width: 304,
            height: 304,
            sizes: "20vw",
            eager: false,
            class: "image-front",
        });
        assert!(html.contains(r#"loading="lazy""#));
        assert!(html.contains(r#"src="https://cdn.example/tee.jpg""#));
        assert!(html.contains(r#"width="304""#));
    }

    #[test]
    fn test_eager_hint() {
        let html = BasicImageTag.render(&ImageRequest {
            src: "a.jpg",
            alt: "",
            width: 10,
            height: 10,
            sizes: "",
            eager: true,
            class: "",
        });
        assert!(html.contains(r#"loading="eager""#));
    }

    #[test]
    fn test_attributes_are_escaped() {
        let html = BasicImageTag.render(&ImageRequest {
            src: r#"a.jpg"onerror="x"#,
            alt: "<b>",
            width: 1,
            height: 1,
            sizes: "",
            eager: false,
            class: "",
        });
        assert!(html.contains("&quot;onerror=&quot;x"));
        assert!(html.contains("&lt;b&gt;"));
    }
}
