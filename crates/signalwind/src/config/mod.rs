//! Theme configuration: the `content`, `theme.extend` and `plugins` shape.
//!
//! A configuration is an immutable value. It is loaded once (from YAML,
//! JSON, or the built-in [`ThemeConfig::signal`]) and handed to
//! [`Theme::resolve`](crate::Theme::resolve) and the plugin registry.
//!
//! ```yaml
//! content:
//!   - ./index.html
//!   - ./src/**/*.{vue,js,ts,jsx,tsx}
//! theme:
//!   extend:
//!     colors:
//!       bullish: '#10b981'
//!     spacing:
//!       18: 4.5rem
//! plugins:
//!   - signal-components
//!   - utilities:
//!       .panel: '@apply rounded-xl border border-purple-500/20'
//! ```

mod error;
mod extend;
mod signal;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use error::{ConfigError, ConfigResult};
pub use extend::{ColorEntry, ThemeExtension};

use crate::tokens::TokenMap;

/// File names probed by [`ThemeConfig::discover`], in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "signalwind.config.yaml",
    "signalwind.config.yml",
    "signalwind.config.json",
];

/// One entry of the `plugins` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PluginSpec {
    /// A built-in plugin referenced by name, e.g. `signal-components`.
    Builtin(String),
    /// Inline utility classes: selector to `@apply` shorthand.
    Utilities { utilities: TokenMap<String> },
}

/// The `theme` section. Only `extend` is supported; base tokens are never
/// replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSection {
    #[serde(default)]
    pub extend: ThemeExtension,
}

/// A complete theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Glob patterns of files scanned for class-name usage.
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default)]
    pub theme: ThemeSection,
    /// Synthesis plugins, run in order.
    #[serde(default)]
    pub plugins: Vec<PluginSpec>,
}

impl ThemeConfig {
    pub fn from_yaml_str(source: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads a configuration file, choosing the format by extension.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&source)?,
            Some("json") => Self::from_json_str(&source)?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };
        tracing::debug!(
            path = %path.display(),
            content = config.content.len(),
            plugins = config.plugins.len(),
            "loaded theme config"
        );
        Ok(config)
    }

    /// Finds the first conventional config file under `root`.
    pub fn discover(root: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| root.join(name))
            .find(|path| path.is_file())
    }

    /// Loads the config discovered under `root`, or the built-in one.
    pub fn discover_or_builtin(root: &Path) -> ConfigResult<Self> {
        match Self::discover(root) {
            Some(path) => Self::load(&path),
            None => {
                tracing::info!(root = %root.display(), "no config file found; using built-in signal theme");
                Ok(Self::signal())
            }
        }
    }
}
