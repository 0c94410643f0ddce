//! URL helpers.

/// Strip the `?sku` query suffix from a product URL.
///
/// Everything from the literal substring `?sku` onward is discarded. This is
/// the exact transformation the storefront relies on, not a general
/// querystring parser.
pub fn canonical(url: &str) -> &str {
    match url.find("?sku") {
        Some(idx) => &url[..idx],
        None => url,
    }
}

/// Canonicalize an absolute URL to a site-relative path for internal links.
///
/// URLs that are already relative (or not http/https) pass through unchanged.
pub fn relative(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(rest) => match rest.find('/') {
            Some(idx) => rest[idx..].to_string(),
            None => "/".to_string(),
        },
        None => url.to_string(),
    }
}
