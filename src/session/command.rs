//! Command grammar for the prompt
//!
//! Keywords are case-insensitive; anything that is not a keyword, a digit
//! string, or a `search` invocation is treated as a URL.

/// One parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty input, re-prompt.
    Empty,
    Quit,
    Help,
    Back,
    Forward,
    History,
    Bookmark,
    Bookmarks,
    /// `search <query>`; the query keeps its original casing and may be
    /// empty, in which case the session prints a usage line.
    Search(String),
    /// All-digit input: follow the numbered link on the current page.
    Link(usize),
    /// Anything else: open it as a URL.
    Open(String),
}

impl Command {
    /// Parse one prompt line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }

        let lower = line.to_ascii_lowercase();
        match lower.as_str() {
            "quit" | "exit" | "q" => return Self::Quit,
            "help" => return Self::Help,
            "back" => return Self::Back,
            "forward" => return Self::Forward,
            "history" => return Self::History,
            "bookmark" => return Self::Bookmark,
            "bookmarks" => return Self::Bookmarks,
            _ => {}
        }

        if lower == "search" || lower.starts_with("search ") {
            let query = line.get(6..).unwrap_or("").trim();
            return Self::Search(query.to_string());
        }

        if let Ok(n) = line.parse::<usize>() {
            if line.bytes().all(|b| b.is_ascii_digit()) {
                return Self::Link(n);
            }
        }

        Self::Open(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(Command::parse("QUIT"), Command::Quit);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("Exit"), Command::Quit);
        assert_eq!(Command::parse("Back"), Command::Back);
        assert_eq!(Command::parse("FORWARD"), Command::Forward);
        assert_eq!(Command::parse("History"), Command::History);
        assert_eq!(Command::parse("bookmark"), Command::Bookmark);
        assert_eq!(Command::parse("Bookmarks"), Command::Bookmarks);
        assert_eq!(Command::parse("help"), Command::Help);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   \t"), Command::Empty);
    }

    #[test]
    fn test_search_keeps_query_casing() {
        assert_eq!(
            Command::parse("SEARCH Rust Browser"),
            Command::Search("Rust Browser".to_string())
        );
        assert_eq!(Command::parse("search"), Command::Search(String::new()));
        assert_eq!(Command::parse("search   "), Command::Search(String::new()));
    }

    #[test]
    fn test_digits_become_link() {
        assert_eq!(Command::parse("3"), Command::Link(3));
        assert_eq!(Command::parse(" 12 "), Command::Link(12));
        assert_eq!(Command::parse("0"), Command::Link(0));
    }

    #[test]
    fn test_everything_else_is_a_url() {
        assert_eq!(
            Command::parse("example.com"),
            Command::Open("example.com".to_string())
        );
        assert_eq!(
            Command::parse("https://a.example/p?q=1"),
            Command::Open("https://a.example/p?q=1".to_string())
        );
        // mixed digits and letters is a URL, not a link number
        assert_eq!(Command::parse("4chan.org"), Command::Open("4chan.org".to_string()));
    }
}
