use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub patterns: Patterns,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    /// Tool whose `command` input is gated. Events for any other tool pass through.
    #[serde(default = "default_shell_tool")]
    pub shell_tool: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shell_tool: default_shell_tool(),
        }
    }
}

fn default_shell_tool() -> String {
    "Bash".into()
}

/// Ordered regex sources. The first one that matches decides.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Patterns {
    #[serde(default)]
    pub deny: Vec<String>,
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }
}
