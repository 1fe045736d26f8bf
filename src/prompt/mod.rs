//! Prompt generation.
//!
//! This module provides:
//!
//! - **Category**: the kind of question, which selects a template
//! - **Template**: `{variable}` substitution engine
//! - **Generator**: per-category templates and the values they embed
//!
//! # Example
//!
//! ```text
//! question: "x^2 = 4", kernels: 50, category: math
//!
//! Generate exactly 50 unique answers divided as follows: 5.0 correct,
//! 25.0 sign variations, 20.0 uncertain. Question: x^2 = 4
//! ```

mod category;
mod generator;
mod template;

pub use category::Category;
pub use generator::{GeneratedPrompt, PromptTemplates};
pub use template::TemplateError;
