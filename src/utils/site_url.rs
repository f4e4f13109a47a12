//! Site URL parsing.
//!
//! The base URL is only used to describe the sitemap marker in logs and in
//! the admin tool, but a malformed value usually means a broken `.env`, so
//! it is checked at startup.

use url::Url;

/// Errors that can occur while parsing the site base URL.
#[derive(Debug, thiserror::Error)]
pub enum SiteUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Base URL must not contain a query or fragment")]
    UnexpectedSuffix,
}

/// Parses and checks the site base URL.
///
/// # Rules
///
/// 1. **Protocol**: only HTTP and HTTPS
/// 2. **Suffix**: no query string or fragment
/// 3. **Path**: always ends with `/` so pages can be joined onto it
///
/// # Errors
///
/// Returns [`SiteUrlError::InvalidFormat`] for malformed URLs,
/// [`SiteUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes and
/// [`SiteUrlError::UnexpectedSuffix`] when a query or fragment is present.
pub fn parse_base_url(input: &str) -> Result<Url, SiteUrlError> {
    let mut url = Url::parse(input).map_err(|e| SiteUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(SiteUrlError::UnsupportedProtocol),
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(SiteUrlError::UnexpectedSuffix);
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Absolute URL of a site page, e.g. the sitemap marker's expected `<loc>`.
///
/// # Errors
///
/// Returns [`SiteUrlError::InvalidFormat`] if the page cannot be joined.
pub fn page_url(base: &Url, page: &str) -> Result<Url, SiteUrlError> {
    base.join(page.trim_start_matches('/'))
        .map_err(|e| SiteUrlError::InvalidFormat(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_adds_trailing_slash() {
        let url = parse_base_url("https://www.example.com").unwrap();
        assert_eq!(url.as_str(), "https://www.example.com/");

        let url = parse_base_url("https://example.com/blog").unwrap();
        assert_eq!(url.as_str(), "https://example.com/blog/");
    }

    #[test]
    fn test_parse_base_url_rejects_other_schemes() {
        assert!(matches!(
            parse_base_url("ftp://example.com"),
            Err(SiteUrlError::UnsupportedProtocol)
        ));
        assert!(matches!(
            parse_base_url("file:///var/www"),
            Err(SiteUrlError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(SiteUrlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_base_url_rejects_query() {
        assert!(matches!(
            parse_base_url("https://example.com/?a=b"),
            Err(SiteUrlError::UnexpectedSuffix)
        ));
        assert!(matches!(
            parse_base_url("https://example.com/#top"),
            Err(SiteUrlError::UnexpectedSuffix)
        ));
    }

    #[test]
    fn test_page_url() {
        let base = parse_base_url("https://www.example.com").unwrap();
        assert_eq!(
            page_url(&base, "insights.html").unwrap().as_str(),
            "https://www.example.com/insights.html"
        );
        assert_eq!(
            page_url(&base, "/insights.html").unwrap().as_str(),
            "https://www.example.com/insights.html"
        );

        let nested = parse_base_url("https://example.com/blog").unwrap();
        assert_eq!(
            page_url(&nested, "insights.html").unwrap().as_str(),
            "https://example.com/blog/insights.html"
        );
    }
}
