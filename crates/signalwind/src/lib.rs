//! # signalwind
//!
//! Theme resolution, utility-class synthesis and stylesheet generation for
//! the Signal AI trading dashboard, plus the bootstrap that mounts the
//! dashboard's root component into its host page.
//!
//! ## Pipeline
//!
//! 1. A [`ThemeConfig`] is loaded from YAML/JSON or taken from
//!    [`ThemeConfig::signal`].
//! 2. [`Theme::resolve`] merges its extension tokens over the base set and
//!    validates every value.
//! 3. Plugins register composed classes (`.signal-card`, badges, ...) into a
//!    [`ComponentRegistry`]; [`build_registry`] runs them and rejects
//!    unresolved references and cycles.
//! 4. Content files are scanned for class-name candidates
//!    ([`content::ContentSources`]).
//! 5. [`StylesheetGenerator`] emits keyframes, component classes and used
//!    utilities, rendered to CSS text.
//!
//! ```rust
//! use signalwind::{build_registry, StylesheetGenerator, Theme, ThemeConfig};
//!
//! let config = ThemeConfig::signal();
//! let theme = Theme::resolve(&config)?;
//! let registry = build_registry(&config, &theme)?;
//! let css = StylesheetGenerator::new(&theme, &registry)
//!     .generate(["p-4", "hover:bg-purple-700"])?
//!     .to_css()?;
//! assert!(css.contains(".signal-card {"));
//! # Ok::<(), signalwind::Error>(())
//! ```
//!
//! ## Mounting
//!
//! See [`mount`]: an [`App`] wraps a root [`Component`] and attaches its
//! rendered tree as the only child of the `#id` element of a [`Document`].

pub mod compose;
pub mod config;
pub mod content;
mod error;
pub mod mount;
pub mod plugin;
pub mod stylesheet;
pub mod theme;
pub mod tokens;
pub mod utility;

pub use compose::{ComponentDecl, ComponentRegistry, CompositionError, ResolvedComponent};
pub use config::{ConfigError, PluginSpec, ThemeConfig, ThemeExtension};
pub use error::{Error, Result};
pub use mount::{App, Component, Document, DocumentError, Element, MountError, RootHandle};
pub use plugin::{build_registry, Plugin, PluginApi, SignalComponents};
pub use stylesheet::{Stylesheet, StylesheetGenerator};
pub use theme::Theme;
pub use tokens::{TokenCategory, TokenMap, TokenSet, TokenValue};
pub use utility::{Declaration, UtilityResolver, VariantKey};
