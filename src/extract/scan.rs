//! Basic extraction: a single-pass character scanner, no DOM
//!
//! The degraded path when the DOM parse is unavailable. Strips tags, decodes
//! the common HTML entities, and pulls anchors out by scanning for `<a>`
//! pairs. Good enough for readable text; it makes no attempt to recover from
//! pathological markup.

use super::{Extract, Link, Page, resolve_href, tidy_text};
use crate::utils::Result;

/// Basic extractor: tag stripping without a parse tree.
pub struct ScanExtractor;

impl ScanExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ScanExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extract for ScanExtractor {
    fn extract(&self, html: &str, base_url: &str) -> Result<Page> {
        let title = find_tag_text(html, "title").unwrap_or_else(|| "untitled".to_string());
        let description = find_meta_description(html).unwrap_or_default();

        let without_scripts = drop_element(html, "script");
        let without_styles = drop_element(&without_scripts, "style");
        let text = decode_entities(&strip_tags(&without_styles));

        Ok(Page {
            title,
            text: tidy_text(&text),
            links: scan_links(html, base_url),
            description,
        })
    }
}

/// Remove every `<name ...>...</name>` element, content included.
fn drop_element(html: &str, name: &str) -> String {
    let lower = html.to_ascii_lowercase();
    let open = format!("<{}", name);
    let close = format!("</{}", name);

    let mut out = String::with_capacity(html.len());
    let mut pos = 0;
    while let Some(found) = lower[pos..].find(&open) {
        let start = pos + found;
        // Require a real tag boundary so `<scripture>` is not a `<script>`.
        let boundary = lower
            .as_bytes()
            .get(start + open.len())
            .is_some_and(|b| b.is_ascii_whitespace() || *b == b'>' || *b == b'/');
        if !boundary {
            out.push_str(&html[pos..start + open.len()]);
            pos = start + open.len();
            continue;
        }
        out.push_str(&html[pos..start]);
        pos = match lower[start..].find(&close) {
            Some(rel) => {
                let close_start = start + rel;
                match lower[close_start..].find('>') {
                    Some(gt) => close_start + gt + 1,
                    None => lower.len(),
                }
            }
            None => lower.len(),
        };
    }
    out.push_str(&html[pos..]);
    out
}

/// Drop everything between `<` and `>`.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Decode named and numeric HTML entities; unknown entities pass through.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(found) = text[pos..].find('&') {
        let amp = pos + found;
        out.push_str(&text[pos..amp]);

        // An entity is short; look for the terminator within a few chars.
        let semi = text[amp + 1..]
            .char_indices()
            .take(9)
            .find(|(_, c)| *c == ';')
            .map(|(off, _)| amp + 1 + off);

        if let Some(semi) = semi {
            if let Some(decoded) = decode_entity(&text[amp + 1..semi]) {
                out.push(decoded);
                pos = semi + 1;
                continue;
            }
        }
        out.push('&');
        pos = amp + 1;
    }
    out.push_str(&text[pos..]);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = if let Some(hex) = entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse().ok()?
            } else {
                return None;
            };
            char::from_u32(code)
        }
    }
}

/// Text content of the first `<name>...</name>` element.
fn find_tag_text(html: &str, name: &str) -> Option<String> {
    let lower = html.to_ascii_lowercase();
    let open = format!("<{}", name);
    let mut pos = 0;
    while let Some(found) = lower[pos..].find(&open) {
        let start = pos + found;
        // Same boundary rule as drop_element: `<titlebar>` is not a `<title>`.
        let boundary = lower
            .as_bytes()
            .get(start + open.len())
            .is_some_and(|b| b.is_ascii_whitespace() || *b == b'>');
        if !boundary {
            pos = start + open.len();
            continue;
        }
        let content_start = start + lower[start..].find('>')? + 1;
        let content_end = content_start + lower[content_start..].find(&format!("</{}", name))?;
        let text = decode_entities(html[content_start..content_end].trim());
        return if text.is_empty() { None } else { Some(text) };
    }
    None
}

/// Content of `<meta name="description" content="...">`, if present.
fn find_meta_description(html: &str) -> Option<String> {
    let lower = html.to_ascii_lowercase();
    let mut pos = 0;
    while let Some(found) = lower[pos..].find("<meta") {
        let start = pos + found;
        let end = match lower[start..].find('>') {
            Some(gt) => start + gt,
            None => break,
        };
        let tag = &html[start..end];
        if tag_attr(tag, "name").is_some_and(|n| n.eq_ignore_ascii_case("description")) {
            if let Some(content) = tag_attr(tag, "content") {
                return Some(decode_entities(content.trim()));
            }
        }
        pos = end + 1;
    }
    None
}

/// Pull a quoted attribute value out of a tag's text.
///
/// Walks the tag byte-wise tracking quote state, so an attribute name
/// occurring inside another attribute's quoted value never matches.
fn tag_attr(tag: &str, attr: &str) -> Option<String> {
    let lower = tag.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let pattern = attr.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == q {
                quote = None;
            }
            i += 1;
            continue;
        }
        if b == b'"' || b == b'\'' {
            quote = Some(b);
            i += 1;
            continue;
        }
        if bytes[i..].starts_with(pattern) {
            let preceded = i == 0 || bytes[i - 1].is_ascii_whitespace();
            let mut j = i + pattern.len();
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if preceded && bytes.get(j) == Some(&b'=') {
                j += 1;
                while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                    j += 1;
                }
                if let Some(&q) = bytes.get(j).filter(|b| **b == b'"' || **b == b'\'') {
                    // lowercasing is length-preserving, so offsets map back
                    // 1:1 and the quote bytes are valid slice boundaries
                    let value_start = j + 1;
                    let value_len = bytes[value_start..].iter().position(|&b| b == q)?;
                    return Some(tag[value_start..value_start + value_len].to_string());
                }
            }
            i += pattern.len();
            continue;
        }
        i += 1;
    }
    None
}

/// Scan for `<a href=...>label</a>` pairs and resolve them against the base.
fn scan_links(html: &str, base_url: &str) -> Vec<Link> {
    let lower = html.to_ascii_lowercase();
    let mut links = Vec::new();
    let mut pos = 0;

    while let Some(found) = lower[pos..].find("<a") {
        let start = pos + found;
        let boundary = lower
            .as_bytes()
            .get(start + 2)
            .is_some_and(|b| b.is_ascii_whitespace() || *b == b'>');
        if !boundary {
            pos = start + 2;
            continue;
        }
        let Some(gt) = lower[start..].find('>') else {
            break;
        };
        let tag_end = start + gt;
        let Some(close) = lower[tag_end..].find("</a") else {
            pos = tag_end + 1;
            continue;
        };
        let inner = &html[tag_end + 1..tag_end + close];
        let tag = &html[start..tag_end];
        pos = tag_end + close + 3;

        let Some(href) = tag_attr(tag, "href") else {
            continue;
        };
        let label = squash_spaces(&decode_entities(&strip_tags(inner)));
        if label.is_empty() {
            continue;
        }
        if let Some(url) = resolve_href(base_url, &decode_entities(&href)) {
            links.push(Link { url, label });
        }
    }
    links
}

fn squash_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
