//! Interactive browsing session
//!
//! One session exclusively owns the fetcher, extractor, navigation history,
//! and bookmarks; there is no shared or global state. The prompt loop is an
//! explicit state machine with a single terminal state reached by quit or
//! EOF; every other command maps the loop back onto itself, and any fetch or
//! extraction failure is converted to a printed line at the dispatch
//! boundary.

pub mod bookmarks;
pub mod command;
pub mod history;
pub mod render;

pub use bookmarks::{Bookmark, BookmarkStore};
pub use command::Command;
pub use history::History;

use std::io::{self, BufRead, Write};

use crate::extract::{self, Extract, Page, pick_link};
use crate::network::Fetcher;
use crate::utils::{BrowseError, Result};

/// Outcome of one prompt-loop step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// One interactive browsing session.
pub struct Session {
    fetcher: Fetcher,
    extractor: Box<dyn Extract>,
    history: History,
    bookmarks: BookmarkStore,
    /// Title of the most recently rendered page, used when bookmarking.
    last_title: Option<String>,
}

impl Session {
    /// Build a session with the default fetcher and extractor stack.
    pub fn new() -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new()?,
            extractor: extract::select(),
            history: History::new(),
            bookmarks: BookmarkStore::new(),
            last_title: None,
        })
    }

    /// Run the interactive loop, optionally opening an initial URL first.
    pub fn run(&mut self, initial_url: Option<&str>) -> io::Result<()> {
        println!("{} v{} - text-mode web browser", crate::NAME, crate::VERSION);
        println!("Type 'help' for commands.");

        if let Some(url) = initial_url {
            if let Err(e) = self.open(url) {
                println!("{}", e);
            }
        }

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("\n> ");
            io::stdout().flush()?;
            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }
            if self.step(&line) == LoopState::Stopped {
                break;
            }
        }
        Ok(())
    }

    /// Process one prompt line to completion.
    pub fn step(&mut self, line: &str) -> LoopState {
        match Command::parse(line) {
            Command::Empty => LoopState::Running,
            Command::Quit => {
                println!("Bye.");
                LoopState::Stopped
            }
            command => {
                if let Err(e) = self.dispatch(command) {
                    println!("{}", e);
                }
                LoopState::Running
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Empty | Command::Quit => Ok(()),
            Command::Help => {
                render::help();
                Ok(())
            }
            Command::Back => {
                let url = self.history.back()?.to_string();
                self.show(&url)
            }
            Command::Forward => {
                let url = self.history.forward()?.to_string();
                self.show(&url)
            }
            Command::History => {
                let (entries, cursor) = self.history.list();
                render::history(entries, cursor);
                Ok(())
            }
            Command::Bookmark => {
                let url = self
                    .history
                    .current()
                    .ok_or(BrowseError::NoActivePage)?
                    .to_string();
                let title = self.last_title.clone().unwrap_or_default();
                self.bookmarks.add(&url, title);
                println!("Bookmarked: {}", url);
                Ok(())
            }
            Command::Bookmarks => {
                render::bookmarks(self.bookmarks.entries());
                Ok(())
            }
            Command::Search(query) => {
                if query.is_empty() {
                    println!("Usage: search <query>");
                    return Ok(());
                }
                self.open(&search_url(&query))
            }
            Command::Link(n) => {
                let url = self.resolve_link(n)?;
                self.open(&url)
            }
            Command::Open(input) => self.open(&input),
        }
    }

    /// Fetch, extract, record the visit, render.
    fn open(&mut self, url: &str) -> Result<()> {
        let (page, final_url) = self.load(url)?;
        self.history.visit(&final_url);
        self.last_title = Some(page.title.clone());
        render::page(&page, &final_url);
        Ok(())
    }

    /// Re-fetch and render a URL already in history, without recording a new
    /// visit. Used by back/forward.
    fn show(&mut self, url: &str) -> Result<()> {
        let (page, final_url) = self.load(url)?;
        self.last_title = Some(page.title.clone());
        render::page(&page, &final_url);
        Ok(())
    }

    fn load(&self, url: &str) -> Result<(Page, String)> {
        let (final_url, body) = self.fetcher.fetch(url)?;
        let page = self.extractor.extract(&body, &final_url)?;
        Ok((page, final_url))
    }

    /// Resolve a 1-based link number against the current page.
    ///
    /// The link list is not retained across commands, so the current page is
    /// re-fetched to regenerate it; the number always maps to content fresh
    /// at click time.
    fn resolve_link(&self, n: usize) -> Result<String> {
        let current = self.history.current().ok_or(BrowseError::NoActivePage)?;
        let (page, _) = self.load(current)?;
        let link = pick_link(&page.links, n)?;
        Ok(link.url.clone())
    }
}

/// Build a search-engine query URL from free text.
pub fn search_url(query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("https://www.google.com/search?q={}", encoded)
}
