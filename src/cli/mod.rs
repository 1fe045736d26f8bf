//! CLI argument parsing for argstone.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use crate::config::TabMode;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Argstone: turn a question into a templated chat link.
///
/// Serves a small editor page, or builds links directly from the command line.
#[derive(Parser, Debug)]
#[command(name = "argstone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` overrides this.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Path to a YAML config file.
    #[arg(long, global = true, env = "ARGSTONE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for argstone.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the editor page and the `/open` endpoint.
    Serve(ServeArgs),

    /// Print the chat link for a question.
    ///
    /// Uses the same templates and validation as the server.
    Link(LinkArgs),
}

/// Arguments for the `serve` command.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to listen on (overrides config).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config).
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Who opens the browser tabs: `client` or `server` (overrides config).
    #[arg(long, value_parser = parse_tab_mode)]
    pub tab_mode: Option<TabMode>,
}

/// Arguments for the `link` command.
#[derive(Parser, Debug)]
pub struct LinkArgs {
    /// The question to ask.
    pub question: String,

    /// Number of answers the prompt asks for.
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub kernels: i64,

    /// Number of tabs to open with `--open`.
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub stones: i64,

    /// Question category: math, logic, mcq or other. Defaults to the configured category.
    #[arg(short = 't', long = "type")]
    pub category: Option<String>,

    /// Open the link in the system browser `stones` times.
    #[arg(long)]
    pub open: bool,

    /// Also print the generated prompt before the link.
    #[arg(long)]
    pub show_prompt: bool,
}

fn parse_tab_mode(s: &str) -> Result<TabMode, String> {
    TabMode::from_str(s).ok_or_else(|| format!("invalid tab mode '{}': expected client or server", s))
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: tests touching the environment run under #[serial].
        unsafe {
            std::env::remove_var("PORT");
            std::env::remove_var("ARGSTONE_CONFIG");
        }
    }

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    #[serial]
    fn parse_serve_defaults() {
        clear_env();
        let cli = Cli::try_parse_from(["argstone", "serve"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.host, None);
            assert_eq!(args.port, None);
            assert_eq!(args.tab_mode, None);
        } else {
            panic!("Expected Serve command");
        }
        assert_eq!(cli.config, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    #[serial]
    fn parse_serve_full() {
        clear_env();
        let cli = Cli::try_parse_from([
            "argstone",
            "-vv",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--tab-mode",
            "server",
            "--config",
            "argstone.yaml",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("argstone.yaml")));
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
            assert_eq!(args.port, Some(8080));
            assert_eq!(args.tab_mode, Some(TabMode::Server));
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    #[serial]
    fn parse_serve_port_from_env() {
        clear_env();
        // SAFETY: serialized with the other env tests.
        unsafe { std::env::set_var("PORT", "9123") };
        let cli = Cli::try_parse_from(["argstone", "serve"]).unwrap();
        clear_env();

        if let Command::Serve(args) = cli.command {
            assert_eq!(args.port, Some(9123));
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    #[serial]
    fn parse_config_from_env() {
        clear_env();
        // SAFETY: serialized with the other env tests.
        unsafe { std::env::set_var("ARGSTONE_CONFIG", "/etc/argstone.yaml") };
        let cli = Cli::try_parse_from(["argstone", "serve"]).unwrap();
        clear_env();

        assert_eq!(cli.config, Some(PathBuf::from("/etc/argstone.yaml")));
    }

    #[test]
    fn parse_serve_rejects_bad_tab_mode() {
        let result = Cli::try_parse_from(["argstone", "serve", "--tab-mode", "both"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_link_minimal() {
        let cli = Cli::try_parse_from(["argstone", "link", "What is 2+2?"]).unwrap();
        if let Command::Link(args) = cli.command {
            assert_eq!(args.question, "What is 2+2?");
            assert_eq!(args.kernels, 1);
            assert_eq!(args.stones, 1);
            assert_eq!(args.category, None);
            assert!(!args.open);
            assert!(!args.show_prompt);
        } else {
            panic!("Expected Link command");
        }
    }

    #[test]
    fn parse_link_full() {
        let cli = Cli::try_parse_from([
            "argstone",
            "link",
            "x^2 = 4",
            "--kernels",
            "50",
            "--stones",
            "3",
            "--type",
            "math",
            "--open",
            "--show-prompt",
        ])
        .unwrap();
        if let Command::Link(args) = cli.command {
            assert_eq!(args.kernels, 50);
            assert_eq!(args.stones, 3);
            assert_eq!(args.category.as_deref(), Some("math"));
            assert!(args.open);
            assert!(args.show_prompt);
        } else {
            panic!("Expected Link command");
        }
    }

    #[test]
    fn parse_link_negative_count_reaches_validation() {
        let cli = Cli::try_parse_from(["argstone", "link", "q", "-k", "-1"]).unwrap();
        if let Command::Link(args) = cli.command {
            assert_eq!(args.kernels, -1);
        } else {
            panic!("Expected Link command");
        }
    }
}
