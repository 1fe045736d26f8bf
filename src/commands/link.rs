//! Implementation of the `argstone link` command.
//!
//! Builds the same link `POST /open` would return and prints it. With
//! `--open`, the link is also opened `stones` times.

use crate::browser::{BrowserLauncher, open_tabs};
use crate::cli::LinkArgs;
use crate::config::Config;
use crate::error::{ArgstoneError, Result};
use crate::link::build_chat_url;
use crate::prompt::Category;
use crate::request::PromptRequest;
use std::io::Write;
use tracing::info;

/// Execute the `argstone link` command.
pub fn cmd_link(
    config: &Config,
    args: LinkArgs,
    launcher: &dyn BrowserLauncher,
    out: &mut dyn Write,
) -> Result<()> {
    let category = Category::resolve(args.category.as_deref(), config.default_category);
    let request = PromptRequest::new(&args.question, args.stones, args.kernels, category)
        .map_err(|e| ArgstoneError::UserError(e.to_string()))?;

    let prompt = config
        .prompt_templates()
        .generate(&request.text, request.kernels, request.category)?;
    let url = build_chat_url(&config.link_settings(), &prompt.text)?;

    if args.show_prompt {
        writeln!(out, "{}", prompt.text).map_err(write_error)?;
    }
    writeln!(out, "{}", url).map_err(write_error)?;

    if args.open {
        let opened = open_tabs(launcher, url.as_str(), request.stones)?;
        info!(opened, "opened_tabs");
    }

    Ok(())
}

fn write_error(e: std::io::Error) -> ArgstoneError {
    ArgstoneError::UserError(format!("failed to write output: {}", e))
}
