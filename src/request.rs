//! Validated prompt requests.
//!
//! Both the HTTP endpoint and the `link` command funnel their raw input
//! through [`PromptRequest::new`], so the two share the same rules:
//!
//! - the question is trimmed and must not be empty
//! - `stones` and `kernels` must both be at least 1

use crate::error::{ArgstoneError, Result};
use crate::prompt::Category;

/// Message returned when the question is blank.
pub const EMPTY_PROMPT: &str = "Empty prompt";

/// Message returned when a count is below 1.
pub const COUNTS_TOO_SMALL: &str = "stones and kernels must be >= 1";

/// A prompt request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    /// The trimmed question text.
    pub text: String,
    /// Number of browser tabs to open.
    pub stones: u32,
    /// Number of answers the prompt asks for.
    pub kernels: u32,
    pub category: Category,
}

impl PromptRequest {
    /// Validate raw input.
    ///
    /// The empty-prompt check runs first, so a blank question is reported
    /// even when the counts are also invalid.
    pub fn new(text: &str, stones: i64, kernels: i64, category: Category) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ArgstoneError::BadRequest(EMPTY_PROMPT.to_string()));
        }

        if stones < 1 || kernels < 1 {
            return Err(ArgstoneError::BadRequest(COUNTS_TOO_SMALL.to_string()));
        }

        let (Ok(stones), Ok(kernels)) = (u32::try_from(stones), u32::try_from(kernels)) else {
            return Err(ArgstoneError::BadRequest(format!(
                "stones and kernels must be <= {}",
                u32::MAX
            )));
        };

        Ok(Self {
            text: text.to_string(),
            stones,
            kernels,
            category,
        })
    }
}
