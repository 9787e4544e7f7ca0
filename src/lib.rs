//! # Termweb - Text-Mode Terminal Web Browser
//!
//! A small interactive browser for the terminal: fetch a page, strip the
//! HTML down to readable text plus a numbered link list, and navigate from
//! a prompt.
//!
//! ## Architecture
//!
//! The browser is organized into the following modules:
//!
//! - **network**: blocking HTTP fetch with a fixed user-agent and timeout
//! - **extract**: HTML-to-text extraction (DOM-based with a scanner fallback)
//! - **session**: the prompt loop, navigation history, and bookmarks
//! - **utils**: shared utilities and error types

pub mod extract;
pub mod network;
pub mod session;
pub mod utils;

// Re-export main types for convenience
pub use session::Session;
pub use utils::error::{BrowseError, Result};

/// Browser version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "Termweb";

/// User-agent header sent with every request.
pub const USER_AGENT: &str = concat!("Termweb/", env!("CARGO_PKG_VERSION"), " (terminal browser)");
