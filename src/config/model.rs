//! Config struct definition and default implementation.

use super::types::*;
use crate::prompt::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for argstone.
///
/// Every field is optional in the YAML file; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Server settings
    // =========================================================================
    /// Address to listen on.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on. `--port` and `PORT` take precedence.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether the page or the server opens the browser tabs.
    #[serde(default)]
    pub tab_mode: TabMode,

    // =========================================================================
    // Link settings
    // =========================================================================
    /// Base URL of the chat service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Query parameter that carries the generated prompt.
    #[serde(default = "default_prompt_param")]
    pub prompt_param: String,

    /// Fixed parameters appended after the prompt, in order.
    #[serde(default = "default_extra_params")]
    pub extra_params: Vec<QueryParam>,

    // =========================================================================
    // Prompt settings
    // =========================================================================
    /// Category used when a request does not name one.
    #[serde(default)]
    pub default_category: Category,

    /// Per-category template overrides.
    #[serde(default)]
    pub templates: HashMap<Category, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            tab_mode: TabMode::default(),
            base_url: default_base_url(),
            prompt_param: default_prompt_param(),
            extra_params: default_extra_params(),
            default_category: Category::default(),
            templates: HashMap::new(),
        }
    }
}
