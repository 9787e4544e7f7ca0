//! Terminal rendering of pages, history, and bookmarks

use crate::extract::Page;
use crate::session::bookmarks::Bookmark;

const RULE_WIDTH: usize = 80;
/// Body lines shown before the trailer.
const MAX_BODY_LINES: usize = 150;
/// Per-line truncation column.
const MAX_LINE_WIDTH: usize = 120;
/// Links listed before the trailer.
const MAX_LINKS: usize = 25;

/// Render a fetched page: header, body text, numbered link list.
pub fn page(page: &Page, url: &str) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", page.title);
    println!("{}", url);
    if !page.description.is_empty() {
        println!("{}", clip(&page.description, 100));
    }
    println!("{}", "=".repeat(RULE_WIDTH));

    let total_lines = page.text.lines().count();
    for line in page.text.lines().take(MAX_BODY_LINES) {
        println!("{}", clip(line, MAX_LINE_WIDTH));
    }
    if total_lines > MAX_BODY_LINES {
        println!("\n... ({} of {} lines shown)", MAX_BODY_LINES, total_lines);
    }

    println!("{}", "-".repeat(RULE_WIDTH));
    if !page.links.is_empty() {
        println!("Links:");
        for (i, link) in page.links.iter().take(MAX_LINKS).enumerate() {
            println!("  {:2}. {}", i + 1, clip(&link.label, 70));
            println!("      -> {}", link.url);
        }
        if page.links.len() > MAX_LINKS {
            println!("  ... {} more links", page.links.len() - MAX_LINKS);
        }
        println!("{}", "-".repeat(RULE_WIDTH));
    }
}

/// Render the history list with a marker on the cursor row.
pub fn history(entries: &[String], cursor: Option<usize>) {
    if entries.is_empty() {
        println!("History is empty.");
        return;
    }
    println!("History:");
    for (i, url) in entries.iter().enumerate() {
        let marker = if Some(i) == cursor { " -> " } else { "    " };
        println!("{}{}. {}", marker, i + 1, url);
    }
}

/// Render the bookmark list.
pub fn bookmarks(entries: &[Bookmark]) {
    if entries.is_empty() {
        println!("No bookmarks yet.");
        return;
    }
    println!("Bookmarks:");
    for (i, bookmark) in entries.iter().enumerate() {
        println!("  {:2}. {}", i + 1, bookmark.title);
        println!("      -> {}", bookmark.url);
    }
}

/// Static command summary.
pub fn help() {
    println!("Commands:");
    println!("  <url>            open a URL (https assumed when no scheme)");
    println!("  <number>         follow a numbered link from the current page");
    println!("  back             go to the previous page");
    println!("  forward          go to the next page");
    println!("  history          show navigation history");
    println!("  bookmark         bookmark the current page");
    println!("  bookmarks        list bookmarks");
    println!("  search <query>   web search");
    println!("  help             this summary");
    println!("  quit             exit");
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}
