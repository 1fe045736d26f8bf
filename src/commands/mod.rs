//! Command implementations for argstone.
//!
//! This module provides the dispatcher that loads configuration and routes
//! CLI commands to their implementations.

mod link;
mod serve;

use crate::browser::SystemBrowser;
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;
use tracing::debug;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    debug!(config = ?cli.config, "configuration loaded");

    match cli.command {
        Command::Serve(args) => serve::cmd_serve(config, args),
        Command::Link(args) => link::cmd_link(&config, args, &SystemBrowser, &mut std::io::stdout()),
    }
}
