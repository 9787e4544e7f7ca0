//! Error types for Termweb
//!
//! Every error here is caught at the command-dispatch boundary and printed
//! as a single line; nothing propagates past the prompt loop.

use thiserror::Error;

/// Main error type for browser operations
#[derive(Debug, Error)]
pub enum BrowseError {
    /// Fetching a page failed
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// `back` with nothing earlier in history
    #[error("No earlier page in history.")]
    NoPriorEntry,
    /// `forward` with nothing later in history
    #[error("No later page in history.")]
    NoNextEntry,
    /// A link number or bookmark was requested before any page was opened
    #[error("No page is open yet.")]
    NoActivePage,
    /// Link number out of range for the current page
    #[error("No link numbered {0} on this page.")]
    InvalidLinkIndex(usize),
    /// HTML extraction failed (triggers the basic-extractor fallback)
    #[error("Page extraction failed: {0}")]
    Extract(String),
}

/// Fetch-specific errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL could not be parsed into a request
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// The request exceeded the per-request timeout
    #[error("Timed out fetching {0}")]
    Timeout(String),
    /// The server answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    /// Connection-level failure
    #[error("Network error: {0}")]
    Network(String),
}

/// Convenience Result type for browser operations
pub type Result<T> = std::result::Result<T, BrowseError>;
