//! Blocking HTTP fetch layer
//!
//! One client is built per session with a fixed user-agent and a 30-second
//! timeout; redirects are followed by the client itself. There is no retry
//! logic: a failed fetch is reported once and the session returns to the
//! prompt.

use std::time::Duration;

use crate::utils::error::FetchError;
use crate::utils::Result;

/// Timeout applied to every request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP fetcher.
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    /// Build the shared client with the fixed user-agent and timeout.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(crate::USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    /// Fetch a page. Returns the normalized URL actually requested and the
    /// body text; non-2xx statuses are failures.
    pub fn fetch(&self, url: &str) -> Result<(String, String)> {
        let url = normalize_url(url);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| classify(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            }
            .into());
        }

        let body = response.text().map_err(|e| classify(&url, e))?;
        log::debug!("received {} bytes from {}", body.len(), url);
        Ok((url, body))
    }
}

/// Default to `https` when the input carries no scheme.
pub fn normalize_url(input: &str) -> String {
    let input = input.trim();
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}

fn classify(url: &str, err: reqwest::Error) -> crate::utils::BrowseError {
    let fetch_err = if err.is_timeout() {
        FetchError::Timeout(url.to_string())
    } else if err.is_builder() {
        FetchError::InvalidUrl {
            url: url.to_string(),
            reason: err.to_string(),
        }
    } else {
        FetchError::Network(err.to_string())
    };
    fetch_err.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_host() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("  example.com/page "), "https://example.com/page");
    }

    #[test]
    fn test_normalize_keeps_scheme() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }

    #[test]
    #[ignore] // Integration test - requires network
    fn test_fetch_example_com() {
        let fetcher = Fetcher::new().unwrap();
        let (url, body) = fetcher.fetch("example.com").unwrap();
        assert_eq!(url, "https://example.com");
        assert!(body.contains("Example Domain"));
    }
}
