//! CLI-specific configuration for the terminal console.
use std::env;

/// CLI terminal configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_COLOR` - Colour output by message level (default: true)
    /// - `CLI_ECHO_INPUT` - Print each answer after reading it, useful when
    ///   stdin is piped (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(color) = read_env_bool("CLI_COLOR") {
            config.ui.color = color;
        }

        if let Some(echo) = read_env_bool("CLI_ECHO_INPUT") {
            config.ui.echo_input = echo;
        }

        config
    }
}

/// Terminal display configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    pub color: bool,
    pub echo_input: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            echo_input: false,
        }
    }
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
