//! Chat link construction.
//!
//! The generated prompt is appended to the configured base URL as a single
//! form-encoded query parameter, followed by any fixed extra parameters:
//!
//! ```text
//! https://chat.openai.com/?q=Generate+4+distinct+answers...&temporary-chat=true
//! ```

use crate::error::{ArgstoneError, Result};
use url::Url;

/// Where and how a prompt is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSettings {
    /// Base URL of the chat service.
    pub base_url: String,
    /// Name of the query parameter carrying the prompt.
    pub prompt_param: String,
    /// Fixed parameters appended after the prompt, in order.
    pub extra_params: Vec<(String, String)>,
}

/// Parse and check a base URL.
///
/// Only absolute `http`/`https` URLs are accepted.
pub fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url)
        .map_err(|e| ArgstoneError::UserError(format!("invalid base_url '{}': {}", base_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ArgstoneError::UserError(format!(
            "invalid base_url '{}': scheme must be http or https",
            base_url
        )));
    }

    Ok(url)
}

/// Build the chat URL carrying `prompt`.
///
/// Query parameters already present on the base URL are kept. The prompt is
/// `application/x-www-form-urlencoded`, so spaces become `+`.
pub fn build_chat_url(settings: &LinkSettings, prompt: &str) -> Result<Url> {
    let mut url = parse_base_url(&settings.base_url)?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair(&settings.prompt_param, prompt);
        for (key, value) in &settings.extra_params {
            query.append_pair(key, value);
        }
    }

    Ok(url)
}

/// Read the prompt back out of a chat URL.
#[allow(dead_code)]
pub fn extract_prompt(url: &Url, prompt_param: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == prompt_param)
        .map(|(_, value)| value.into_owned())
}
