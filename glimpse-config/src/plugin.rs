use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PluginConfig {
    /// Whether this plugin is enabled or not.
    pub enabled: Option<bool>,
    /// Whether to include this plugin in results in global queries.
    pub include_in_global_results: Option<bool>,
    /// Direct activation command for this plugin.
    pub direct_activation_command: Option<String>,

    /// An opaque type represnting plugin config options.
    #[serde(flatten)]
    pub inner: Option<toml::Table>,
}

impl PluginConfig {
    /// Whether this plugin is enabled or not.
    ///
    /// Default: `true`
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Whether to include this plugin in results in global queries.
    ///
    /// Default: `true`
    pub fn include_in_global_results(&self) -> bool {
        self.include_in_global_results.unwrap_or(true)
    }

    /// Direct activation command for this plugin.
    pub fn direct_activation_command(&self) -> Option<String> {
        self.direct_activation_command.clone()
    }
}
