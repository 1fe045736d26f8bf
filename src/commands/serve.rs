//! Implementation of the `argstone serve` command.

use crate::browser::SystemBrowser;
use crate::cli::ServeArgs;
use crate::config::Config;
use crate::error::{ArgstoneError, Result};
use crate::server::{AppState, listen_addr, serve};
use std::sync::Arc;

/// Apply command line overrides on top of the loaded config.
///
/// `--port` (or `PORT`) wins over the config file, which wins over the default.
fn apply_overrides(mut config: Config, args: &ServeArgs) -> Result<Config> {
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        if port == 0 {
            return Err(ArgstoneError::UserError(
                "port must be greater than 0".to_string(),
            ));
        }
        config.port = port;
    }
    if let Some(tab_mode) = args.tab_mode {
        config.tab_mode = tab_mode;
    }
    Ok(config)
}

/// Execute the `argstone serve` command.
pub fn cmd_serve(config: Config, args: ServeArgs) -> Result<()> {
    let config = apply_overrides(config, &args)?;
    let addr = listen_addr(&config.host, config.port);
    let state = AppState::new(&config, Arc::new(SystemBrowser));

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| ArgstoneError::ServerError(format!("failed to start runtime: {}", e)))?
        .block_on(serve(state, &addr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TabMode;

    fn args(host: Option<&str>, port: Option<u16>, tab_mode: Option<TabMode>) -> ServeArgs {
        ServeArgs {
            host: host.map(str::to_string),
            port,
            tab_mode,
        }
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = apply_overrides(Config::default(), &args(None, None, None)).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.tab_mode, TabMode::Client);
    }

    #[test]
    fn test_cli_overrides_config() {
        let base = Config::from_yaml("port: 7000\nhost: 10.0.0.1").unwrap();
        let config = apply_overrides(
            base,
            &args(Some("127.0.0.1"), Some(8080), Some(TabMode::Server)),
        )
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.tab_mode, TabMode::Server);
    }

    #[test]
    fn test_config_port_used_without_flag() {
        let base = Config::from_yaml("port: 7000").unwrap();
        let config = apply_overrides(base, &args(None, None, None)).unwrap();
        assert_eq!(config.port, 7000);
    }

    #[test]
    fn test_zero_port_rejected() {
        let err = apply_overrides(Config::default(), &args(None, Some(0), None)).unwrap_err();
        assert!(err.to_string().contains("port must be greater than 0"));
    }
}
