use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

mod error;
mod general;
mod plugin;

pub use error::*;
pub use general::*;
pub use plugin::*;

/// Glimpse configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// General configuration.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Plugins configuration.
    #[serde(default)]
    pub plugins: HashMap<String, PluginConfig>,
}

impl Config {
    /// Default config path: `$HOME/.config/glimpse.toml`
    pub fn path() -> Result<PathBuf> {
        dirs::home_dir()
            .ok_or(Error::HomeDirNotFound)
            .map(|p| p.join(".config").join("glimpse.toml"))
    }

    /// Loads config from a toml string
    fn from_toml(toml: &str) -> Result<Self> {
        let span = tracing::debug_span!("config::from_toml");
        let _enter = span.enter();

        toml::from_str(toml).map_err(Into::into)
    }

    /// Loads config from path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let span = tracing::debug_span!("config::load_from_path", ?path);
        let _enter = span.enter();

        let toml = std::fs::read_to_string(path)?;
        Self::from_toml(&toml)
    }

    /// Loads config from a canonical path, see [`Self::path`]
    pub fn load() -> Result<Self> {
        let span = tracing::debug_span!("config::load");
        let _enter = span.enter();

        let path = Self::path()?;
        let toml = std::fs::read_to_string(path)?;
        Self::from_toml(&toml)
    }

    /// Loads config from a canonical path, see [`Self::path`]
    pub fn load_with_fallback() -> Self {
        Self::load()
            .inspect_err(|e| tracing::error!("failed to load config, falling back to default: {e}"))
            .unwrap_or_default()
    }

    /// Gets the inner config for specified plugin,
    /// falling back to default if not found or failing to deserialize.
    pub fn plugin_config<T>(&self, name: &str) -> T
    where
        T: Default,
        for<'de> T: Deserialize<'de>,
    {
        self.plugins
            .get(name)
            .and_then(|c| c.inner.clone())
            .and_then(|c| {
                toml::Table::try_into(c)
                    .inspect_err(|e| {
                        tracing::error!(
                            "Failed to deserialize {name} config, failling back to default: {e}"
                        );
                    })
                    .ok()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plugin_tables() {
        let config = Config::from_toml(
            r#"
            [general]
            maxResults = 10

            [plugins.JetbrainsProjects]
            enabled = true
            direct_activation_command = "jb"
            "#,
        )
        .unwrap();

        assert_eq!(config.general.max_results, 10);

        let plugin = &config.plugins["JetbrainsProjects"];
        assert!(plugin.enabled());
        assert_eq!(plugin.direct_activation_command().as_deref(), Some("jb"));
    }

    #[test]
    fn missing_plugin_config_falls_back_to_default() {
        #[derive(serde::Deserialize, Default, PartialEq, Debug)]
        struct Inner {
            paths: Vec<String>,
        }

        let config = Config::from_toml("").unwrap();
        assert_eq!(config.plugin_config::<Inner>("Nonexistent"), Inner::default());
    }
}
