//! HTML-to-text extraction
//!
//! Two extractors implement [`Extract`]: [`DomExtractor`] builds a real DOM
//! with html5ever, [`ScanExtractor`] is a single-pass character scanner.
//! [`select`] wires them into a composite that degrades to the scanner when
//! the DOM parse fails, so the rest of the browser only ever sees the trait.

mod dom;
mod scan;

pub use dom::DomExtractor;
pub use scan::ScanExtractor;

use crate::utils::{BrowseError, Result};

/// A navigable link extracted from a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Absolute http/https URL.
    pub url: String,
    /// Anchor text, never empty.
    pub label: String,
}

/// Readable content extracted from one page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Document title, `"untitled"` when absent.
    pub title: String,
    /// Plain text body: tags stripped, entities decoded, blank runs collapsed.
    pub text: String,
    /// Navigable links in document order.
    pub links: Vec<Link>,
    /// Meta description, empty when absent.
    pub description: String,
}

/// HTML-to-text extraction interface.
pub trait Extract {
    /// Extract readable content from `html`, resolving links against `base_url`.
    fn extract(&self, html: &str, base_url: &str) -> Result<Page>;
}

/// Pick the extractor stack for this session: enhanced DOM extraction with
/// the basic scanner as the degraded path.
pub fn select() -> Box<dyn Extract> {
    Box::new(FallbackExtractor::new(
        DomExtractor::new(),
        ScanExtractor::new(),
    ))
}

/// Composite extractor: tries the primary, falls back to the secondary.
pub struct FallbackExtractor<P, S> {
    primary: P,
    secondary: S,
}

impl<P: Extract, S: Extract> FallbackExtractor<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: Extract, S: Extract> Extract for FallbackExtractor<P, S> {
    fn extract(&self, html: &str, base_url: &str) -> Result<Page> {
        match self.primary.extract(html, base_url) {
            Ok(page) => Ok(page),
            Err(e) => {
                log::warn!("enhanced extraction failed ({}), using basic extraction", e);
                self.secondary.extract(html, base_url)
            }
        }
    }
}

/// Resolve a 1-based link number against a page's link list.
pub fn pick_link(links: &[Link], n: usize) -> Result<&Link> {
    if n == 0 || n > links.len() {
        return Err(BrowseError::InvalidLinkIndex(n));
    }
    Ok(&links[n - 1])
}

/// Join an href against the page URL.
///
/// Only absolute http/https results are navigable; fragment-only hrefs and
/// non-web schemes (`mailto:`, `javascript:`, `data:`) are dropped.
pub(crate) fn resolve_href(base_url: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }
    let joined = match url::Url::parse(base_url) {
        Ok(base) => base.join(href).ok()?,
        // No usable base: the href must stand on its own.
        Err(_) => url::Url::parse(href).ok()?,
    };
    match joined.scheme() {
        "http" | "https" => Some(String::from(joined)),
        _ => None,
    }
}

/// Trim every line and collapse runs of blank lines to a single blank line.
pub(crate) fn tidy_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut blank_run = 0usize;
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            blank_run += 1;
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if blank_run > 0 {
                out.push('\n');
            }
        }
        blank_run = 0;
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> Vec<Link> {
        vec![
            Link {
                url: "https://a.example/".to_string(),
                label: "x".to_string(),
            },
            Link {
                url: "https://b.example/".to_string(),
                label: "y".to_string(),
            },
        ]
    }

    #[test]
    fn test_pick_link_in_range() {
        let links = links();
        assert_eq!(pick_link(&links, 1).unwrap().url, "https://a.example/");
        assert_eq!(pick_link(&links, 2).unwrap().url, "https://b.example/");
    }

    #[test]
    fn test_pick_link_out_of_range() {
        let links = links();
        assert!(matches!(
            pick_link(&links, 0),
            Err(BrowseError::InvalidLinkIndex(0))
        ));
        assert!(matches!(
            pick_link(&links, 3),
            Err(BrowseError::InvalidLinkIndex(3))
        ));
    }

    #[test]
    fn test_resolve_href_joining() {
        let base = "https://a.example/dir/page";
        assert_eq!(
            resolve_href(base, "/x").as_deref(),
            Some("https://a.example/x")
        );
        assert_eq!(
            resolve_href(base, "y").as_deref(),
            Some("https://a.example/dir/y")
        );
        assert_eq!(
            resolve_href(base, "https://b.example/z").as_deref(),
            Some("https://b.example/z")
        );
    }

    #[test]
    fn test_resolve_href_drops_non_web_schemes() {
        let base = "https://a.example/";
        assert_eq!(resolve_href(base, "mailto:foo@bar.com"), None);
        assert_eq!(resolve_href(base, "javascript:void(0)"), None);
        assert_eq!(resolve_href(base, "#section"), None);
        assert_eq!(resolve_href(base, ""), None);
    }

    #[test]
    fn test_tidy_text_collapses_blank_runs() {
        let raw = "  first  \n\n\n\nsecond\n   \n\t\nthird\n";
        assert_eq!(tidy_text(raw), "first\n\nsecond\n\nthird");
    }

    #[test]
    fn test_fallback_uses_secondary_on_error() {
        struct Failing;
        impl Extract for Failing {
            fn extract(&self, _: &str, _: &str) -> Result<Page> {
                Err(BrowseError::Extract("boom".to_string()))
            }
        }

        let composite = FallbackExtractor::new(Failing, ScanExtractor::new());
        let page = composite
            .extract("<title>ok</title><p>body</p>", "https://a.example/")
            .unwrap();
        assert_eq!(page.title, "ok");
    }
}
