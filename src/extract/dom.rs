//! DOM-based extraction built on html5ever
//!
//! Parses the full document into an rcdom tree, then walks it collecting the
//! title, readable text, navigable links, and the meta description.

use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever::Attribute;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use super::{Extract, Link, Page, resolve_href, tidy_text};
use crate::utils::{BrowseError, Result};

/// Enhanced extractor: a real HTML5 parse.
pub struct DomExtractor;

impl DomExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DomExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extract for DomExtractor {
    fn extract(&self, html: &str, base_url: &str) -> Result<Page> {
        let dom = parse_document(RcDom::default(), ParseOpts::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(|e| BrowseError::Extract(e.to_string()))?;

        let mut walk = Walk::new(base_url);
        walk.node(&dom.document);

        Ok(Page {
            title: if walk.title.is_empty() {
                "untitled".to_string()
            } else {
                walk.title
            },
            text: tidy_text(&walk.text),
            links: walk.links,
            description: walk.description,
        })
    }
}

/// Accumulator for one document walk.
struct Walk<'a> {
    base_url: &'a str,
    title: String,
    text: String,
    links: Vec<Link>,
    description: String,
}

impl<'a> Walk<'a> {
    fn new(base_url: &'a str) -> Self {
        Self {
            base_url,
            title: String::new(),
            text: String::new(),
            links: Vec::new(),
            description: String::new(),
        }
    }

    fn node(&mut self, handle: &Handle) {
        match &handle.data {
            NodeData::Document => self.children(handle),
            NodeData::Text { contents } => {
                let contents = contents.borrow();
                let trimmed = contents.trim();
                if !trimmed.is_empty() {
                    if !self.text.is_empty() && !self.text.ends_with('\n') {
                        self.text.push(' ');
                    }
                    self.text.push_str(trimmed);
                }
            }
            NodeData::Element { name, attrs, .. } => {
                let tag = name.local.as_ref();
                match tag {
                    "script" | "style" | "noscript" | "template" => return,
                    "title" => {
                        let text = text_of(handle);
                        if !text.is_empty() {
                            self.title = text;
                        }
                        return;
                    }
                    "meta" => {
                        self.meta(&attrs.borrow());
                        return;
                    }
                    "a" => {
                        self.anchor(handle, &attrs.borrow());
                        // fall through so the anchor text flows into the body
                    }
                    "br" => {
                        self.break_line();
                        return;
                    }
                    _ => {}
                }

                let block = is_block(tag);
                if block {
                    self.break_line();
                }
                self.children(handle);
                if block {
                    self.break_line();
                }
            }
            _ => self.children(handle),
        }
    }

    fn children(&mut self, handle: &Handle) {
        for child in handle.children.borrow().iter() {
            self.node(child);
        }
    }

    fn anchor(&mut self, handle: &Handle, attrs: &[Attribute]) {
        let label = text_of(handle);
        if label.is_empty() {
            return;
        }
        if let Some(href) = attr(attrs, "href") {
            if let Some(url) = resolve_href(self.base_url, &href) {
                self.links.push(Link { url, label });
            }
        }
    }

    fn meta(&mut self, attrs: &[Attribute]) {
        let is_description = attrs.iter().any(|a| {
            a.name.local.as_ref() == "name" && a.value.eq_ignore_ascii_case("description")
        });
        if is_description {
            if let Some(content) = attr(attrs, "content") {
                self.description = content.trim().to_string();
            }
        }
    }

    fn break_line(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
    }
}

fn attr(attrs: &[Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| a.name.local.as_ref() == name)
        .map(|a| a.value.to_string())
}

fn is_block(tag: &str) -> bool {
    matches!(
        tag,
        "p" | "div"
            | "section"
            | "article"
            | "main"
            | "header"
            | "footer"
            | "nav"
            | "aside"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "ul"
            | "ol"
            | "li"
            | "table"
            | "tr"
            | "blockquote"
            | "pre"
            | "form"
            | "hr"
    )
}

/// Collect the text content of a subtree, skipping script/style.
fn text_of(handle: &Handle) -> String {
    fn collect(handle: &Handle, text: &mut String) {
        match &handle.data {
            NodeData::Text { contents } => {
                let contents = contents.borrow();
                let trimmed = contents.trim();
                if !trimmed.is_empty() {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(trimmed);
                }
            }
            NodeData::Element { name, .. } => {
                let tag = name.local.as_ref();
                if tag != "script" && tag != "style" {
                    for child in handle.children.borrow().iter() {
                        collect(child, text);
                    }
                }
            }
            _ => {
                for child in handle.children.borrow().iter() {
                    collect(child, text);
                }
            }
        }
    }

    let mut text = String::new();
    collect(handle, &mut text);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str, base: &str) -> Page {
        DomExtractor::new().extract(html, base).unwrap()
    }

    #[test]
    fn test_example_domain() {
        let html = r#"<!doctype html><html lang="en"><head><title>Example Domain</title></head><body><div><h1>Example Domain</h1><p>This domain is for use in documentation examples.</p><p><a href="https://iana.org/domains/example">Learn more</a></p></div></body></html>"#;

        let page = extract(html, "https://example.com");
        assert_eq!(page.title, "Example Domain");
        assert!(page.text.contains("Example Domain"));
        assert!(page.text.contains("documentation examples"));
        assert_eq!(page.links.len(), 1);
        assert_eq!(page.links[0].url, "https://iana.org/domains/example");
        assert_eq!(page.links[0].label, "Learn more");
    }

    #[test]
    fn test_missing_title_defaults_to_untitled() {
        let page = extract("<html><body><p>hi</p></body></html>", "https://example.com");
        assert_eq!(page.title, "untitled");
    }

    #[test]
    fn test_script_and_style_excluded() {
        let html = r#"<html><head><style>body { color: red; }</style></head>
            <body><script>var hidden = 1;</script><p>visible</p></body></html>"#;
        let page = extract(html, "https://example.com");
        assert!(page.text.contains("visible"));
        assert!(!page.text.contains("hidden"));
        assert!(!page.text.contains("color"));
    }

    #[test]
    fn test_relative_links_resolved_against_base() {
        let html = r##"<html><body>
            <a href="/x">root</a>
            <a href="y">sibling</a>
            <a href="mailto:foo@bar.com">mail</a>
            <a href="#top">fragment</a>
            <a href="https://b.example/z">absolute</a>
            <a href="/empty"></a>
        </body></html>"##;
        let page = extract(html, "https://a.example/dir/page");

        let urls: Vec<&str> = page.links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://a.example/x",
                "https://a.example/dir/y",
                "https://b.example/z",
            ]
        );
    }

    #[test]
    fn test_meta_description() {
        let html = r#"<html><head>
            <meta name="description" content="  a test page  ">
            <meta name="keywords" content="ignored">
        </head><body></body></html>"#;
        let page = extract(html, "https://example.com");
        assert_eq!(page.description, "a test page");
    }

    #[test]
    fn test_nested_anchor_text() {
        let html = r#"<html><body><a href="/go"><span>click</span> <b>here</b></a></body></html>"#;
        let page = extract(html, "https://example.com");
        assert_eq!(page.links.len(), 1);
        assert_eq!(page.links[0].label, "click here");
    }

    #[test]
    fn test_blocks_separated_by_newlines() {
        let html = "<html><body><h1>Head</h1><p>one</p><p>two</p></body></html>";
        let page = extract(html, "https://example.com");
        let lines: Vec<&str> = page.text.lines().collect();
        assert_eq!(lines, vec!["Head", "one", "two"]);
    }
}
