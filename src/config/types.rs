//! Configuration types and defaults for argstone.

use serde::{Deserialize, Serialize};

/// Who opens the browser tabs for a generated link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TabMode {
    /// Return the link and let the page open the tabs (default).
    #[default]
    Client,
    /// Open the tabs from the server process.
    Server,
}

impl TabMode {
    /// Parse a tab mode from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "client" => Some(Self::Client),
            "server" => Some(Self::Server),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
        }
    }
}

/// A fixed query parameter appended to every chat link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    pub name: String,
    pub value: String,
}

// Default value functions for serde
pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}
pub(crate) fn default_port() -> u16 {
    5000
}
pub(crate) fn default_base_url() -> String {
    "https://chat.openai.com/".to_string()
}
pub(crate) fn default_prompt_param() -> String {
    "q".to_string()
}
pub(crate) fn default_extra_params() -> Vec<QueryParam> {
    vec![QueryParam {
        name: "temporary-chat".to_string(),
        value: "true".to_string(),
    }]
}
