//! Synthesis plugins.
//!
//! A plugin contributes composed classes through a [`PluginApi`]. Each call
//! to [`PluginApi::add_utilities`] hands over a complete mapping of selector
//! to `@apply` shorthand, which is registered all or nothing.
//!
//! # Plugins in configuration
//!
//! The `plugins` list of a [`ThemeConfig`] names built-in plugins or carries
//! inline `utilities` maps. [`build_registry`] instantiates them in order,
//! runs each once, and validates the resulting registry against the theme:
//!
//! ```rust
//! use signalwind::{build_registry, Theme, ThemeConfig};
//!
//! let config = ThemeConfig::signal();
//! let theme = Theme::resolve(&config).unwrap();
//! let registry = build_registry(&config, &theme).unwrap();
//! assert!(registry.contains("signal-card"));
//! ```

mod signal;

use crate::compose::{ComponentDecl, ComponentRegistry};
use crate::config::{ConfigError, PluginSpec, ThemeConfig};
use crate::theme::Theme;
use crate::utility::UtilityResolver;
use crate::Result;

pub use signal::{SignalComponents, SIGNAL_COMPONENTS};

/// A source of composed classes.
pub trait Plugin {
    /// Name used in logs and configuration.
    fn name(&self) -> &str;

    /// Registers this plugin's classes.
    fn register(&self, api: &mut PluginApi<'_>) -> Result<()>;
}

/// Registration surface handed to plugins.
pub struct PluginApi<'t> {
    theme: &'t Theme,
    registry: ComponentRegistry,
}

impl<'t> PluginApi<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            registry: ComponentRegistry::new(),
        }
    }

    /// The resolved theme, for plugins that derive classes from tokens.
    pub fn theme(&self) -> &'t Theme {
        self.theme
    }

    /// Registers a mapping of `.selector` to `@apply` shorthand.
    ///
    /// Every entry is checked before anything is registered. A malformed
    /// selector or shorthand, a name repeated within the mapping, or a name
    /// already registered fails the whole call.
    pub fn add_utilities<I, K, V>(&mut self, utilities: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut batch = Vec::new();
        for (selector, shorthand) in utilities {
            let name = class_name(selector.as_ref())?;
            batch.push(ComponentDecl::parse_apply(name, shorthand.as_ref())?);
        }
        let count = batch.len();
        self.registry.insert_batch(batch)?;
        tracing::debug!(count, "registered utilities");
        Ok(())
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> ComponentRegistry {
        self.registry
    }
}

/// Inline utilities from a configuration `plugins` entry.
#[derive(Debug, Clone)]
pub struct UtilitiesPlugin {
    name: String,
    utilities: Vec<(String, String)>,
}

impl UtilitiesPlugin {
    pub fn new<I, K, V>(name: impl Into<String>, utilities: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            utilities: utilities
                .into_iter()
                .map(|(selector, shorthand)| (selector.into(), shorthand.into()))
                .collect(),
        }
    }
}

impl Plugin for UtilitiesPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn register(&self, api: &mut PluginApi<'_>) -> Result<()> {
        api.add_utilities(self.utilities.iter().map(|(s, a)| (s.as_str(), a.as_str())))
    }
}

/// Instantiates the plugins a configuration lists, in order.
pub fn plugins_from_config(config: &ThemeConfig) -> Result<Vec<Box<dyn Plugin>>> {
    config
        .plugins
        .iter()
        .enumerate()
        .map(|(index, spec)| -> Result<Box<dyn Plugin>> {
            match spec {
                PluginSpec::Builtin(name) if name == SIGNAL_COMPONENTS => {
                    Ok(Box::new(SignalComponents))
                }
                PluginSpec::Builtin(name) => {
                    Err(ConfigError::UnknownPlugin { name: name.clone() }.into())
                }
                PluginSpec::Utilities { utilities } => Ok(Box::new(UtilitiesPlugin::new(
                    format!("utilities#{}", index),
                    utilities.iter().map(|(k, v)| (k.clone(), v.clone())),
                ))),
            }
        })
        .collect()
}

/// Runs plugins against a theme and validates the resulting registry.
pub fn run_plugins(plugins: &[Box<dyn Plugin>], theme: &Theme) -> Result<ComponentRegistry> {
    let mut api = PluginApi::new(theme);
    for plugin in plugins {
        let before = api.registry().len();
        plugin.register(&mut api)?;
        tracing::debug!(
            plugin = plugin.name(),
            classes = api.registry().len() - before,
            "plugin registered"
        );
    }
    let registry = api.into_registry();
    registry.validate(&UtilityResolver::new(theme))?;
    tracing::info!(classes = registry.len(), "component registry ready");
    Ok(registry)
}

/// Builds and validates the component registry a configuration describes.
pub fn build_registry(config: &ThemeConfig, theme: &Theme) -> Result<ComponentRegistry> {
    run_plugins(&plugins_from_config(config)?, theme)
}

/// Extracts the class name from a `.class` selector.
fn class_name(selector: &str) -> std::result::Result<&str, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        reason: reason.to_string(),
    };
    let name = selector
        .strip_prefix('.')
        .ok_or_else(|| invalid("expected a class selector starting with '.'"))?;
    let mut chars = name.chars();
    match chars.next() {
        None => return Err(invalid("empty class name")),
        Some(c) if c.is_ascii_digit() || !(c.is_ascii_alphanumeric() || c == '_' || c == '-') => {
            return Err(invalid("class name must start with a letter, '_' or '-'"))
        }
        Some(_) => {}
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-')) {
        return Err(invalid(&format!("unexpected character '{}'", bad)));
    }
    Ok(name)
}
