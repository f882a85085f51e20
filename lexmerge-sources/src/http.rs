//! Shared HTTP client and the single GET used by every source.
//!
//! The dictionary site rejects requests without a browser-like User-Agent,
//! so [`browser_user_agent`] supplies one; the API and the Bangla site are
//! queried with the client defaults.

use crate::config::LookupConfig;
use crate::error::SourceError;
use crate::types::Source;
use rand::seq::SliceRandom;
use reqwest::header::USER_AGENT;
use std::time::Duration;
use url::Url;

/// Realistic browser User-Agent strings, one picked per lookup.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Build the [`reqwest::Client`] shared by the three sources of one lookup.
///
/// The client has:
/// - Per-request timeout from config
/// - Cookie store enabled (consent cookies on the dictionary site)
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`SourceError::Http`] if the client cannot be constructed.
pub fn build_client(config: &LookupConfig) -> Result<reqwest::Client, SourceError> {
    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SourceError::Http(format!("failed to build HTTP client: {e}")))
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // SAFETY: USER_AGENTS is a non-empty const array, choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}

/// The User-Agent for the dictionary site: the configured one, or a random browser UA.
pub fn browser_user_agent(config: &LookupConfig) -> String {
    match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => random_user_agent().to_owned(),
    }
}

/// GET `url` and return the body as text.
///
/// Any transport failure, timeout, non-success status or unreadable body
/// is reported as [`SourceError::Http`].
pub async fn get_text(
    client: &reqwest::Client,
    source: Source,
    url: Url,
    user_agent: Option<&str>,
) -> Result<String, SourceError> {
    let mut request = client.get(url);
    if let Some(ua) = user_agent {
        request = request.header(USER_AGENT, ua);
    }

    let response = request
        .send()
        .await
        .map_err(|e| SourceError::Http(format!("{source} request failed: {e}")))?
        .error_for_status()
        .map_err(|e| SourceError::Http(format!("{source} HTTP error: {e}")))?;

    let body = response
        .text()
        .await
        .map_err(|e| SourceError::Http(format!("{source} response read failed: {e}")))?;

    tracing::trace!(%source, bytes = body.len(), "response received");
    Ok(body)
}
