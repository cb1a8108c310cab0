//! Resolved themes.
//!
//! A [`Theme`] is the base token set with a configuration's extension tokens
//! merged over it, validated once. It is immutable afterwards and is the
//! only token source the utility resolver and stylesheet generator read.

mod keyframes;

use serde::Serialize;

pub use keyframes::{css_property_name, RenderedFrame, RenderedKeyframes};

use crate::config::{ConfigError, ConfigResult, ThemeConfig, ThemeExtension};
use crate::tokens::{
    base_tokens, check_css_value, check_keyframe_offset, Keyframes, TokenCategory, TokenMap,
    TokenSet, TokenValue,
};

/// A validated design token set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    tokens: TokenSet,
}

impl Theme {
    /// Resolves a configuration against the base token set.
    pub fn resolve(config: &ThemeConfig) -> ConfigResult<Self> {
        Self::from_extension(&config.theme.extend)
    }

    /// Merges an extension over the base set and validates the result.
    pub fn from_extension(extension: &ThemeExtension) -> ConfigResult<Self> {
        let additions = extension.to_token_set()?;
        let mut tokens = base_tokens().clone();
        let overridden = additions
            .tables()
            .flat_map(|(category, table)| table.keys().map(move |name| (category, name)))
            .filter(|(category, name)| tokens.get(*category, name).is_some())
            .count();
        tokens.merge(&additions);

        let theme = Self::from_tokens(tokens)?;
        tracing::debug!(
            added = additions.token_count(),
            overridden,
            total = theme.tokens.token_count(),
            keyframes = theme.tokens.keyframes().len(),
            "resolved theme"
        );
        Ok(theme)
    }

    /// Wraps an already merged token set, validating it.
    pub fn from_tokens(tokens: TokenSet) -> ConfigResult<Self> {
        validate(&tokens)?;
        Ok(Self { tokens })
    }

    /// The base token set alone.
    pub fn base() -> Self {
        Self {
            tokens: base_tokens().clone(),
        }
    }

    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    pub fn table(&self, category: TokenCategory) -> Option<&TokenMap<TokenValue>> {
        self.tokens.table(category)
    }

    /// Looks up a token and renders it as CSS.
    pub fn value(&self, category: TokenCategory, name: &str) -> Option<String> {
        self.tokens.get(category, name).map(TokenValue::to_css)
    }

    pub fn keyframes(&self, name: &str) -> Option<&Keyframes> {
        self.tokens.keyframes().get(name)
    }

    /// Returns the keyframes name an animation token plays, if any.
    ///
    /// This is the first word of the animation shorthand; `none` plays
    /// nothing.
    pub fn animation_keyframes(&self, animation: &str) -> Option<&str> {
        let value = self.tokens.get(TokenCategory::Animation, animation)?;
        value
            .as_literal()
            .and_then(|literal| literal.split_whitespace().next())
            .filter(|name| *name != "none")
    }

    /// Renders a keyframes definition with kebab-case property names.
    pub fn render_keyframes(&self, name: &str) -> Option<RenderedKeyframes> {
        self.keyframes(name)
            .map(|frames| RenderedKeyframes::new(name, frames))
    }
}

fn validate(tokens: &TokenSet) -> ConfigResult<()> {
    for (category, table) in tokens.tables() {
        for (name, value) in table {
            match value {
                TokenValue::Literal(literal) => {
                    check_css_value(literal).map_err(|reason| ConfigError::InvalidToken {
                        category,
                        name: name.clone(),
                        reason,
                    })?;
                }
                TokenValue::FontStack(families) => {
                    if families.is_empty() || families.iter().any(|f| f.trim().is_empty()) {
                        return Err(ConfigError::InvalidToken {
                            category,
                            name: name.clone(),
                            reason: "font stack has an empty family".to_string(),
                        });
                    }
                    if category != TokenCategory::FontFamily {
                        return Err(ConfigError::InvalidToken {
                            category,
                            name: name.clone(),
                            reason: "only fontFamily tokens may be lists".to_string(),
                        });
                    }
                }
            }
        }
    }

    for (name, frames) in tokens.keyframes() {
        if frames.is_empty() {
            return Err(ConfigError::InvalidKeyframes {
                keyframes: name.clone(),
                reason: "no frames".to_string(),
            });
        }
        for (offset, properties) in frames {
            check_keyframe_offset(offset).map_err(|reason| ConfigError::InvalidKeyframes {
                keyframes: name.clone(),
                reason,
            })?;
            for (property, value) in properties {
                check_css_value(value).map_err(|reason| ConfigError::InvalidKeyframes {
                    keyframes: name.clone(),
                    reason: format!("{} at {}: {}", property, offset, reason),
                })?;
            }
        }
    }

    if let Some(animations) = tokens.table(TokenCategory::Animation) {
        for (animation, value) in animations {
            let Some(played) = value.as_literal().and_then(|v| v.split_whitespace().next()) else {
                continue;
            };
            if played != "none" && !tokens.keyframes().contains(played) {
                return Err(ConfigError::UnknownKeyframes {
                    animation: animation.clone(),
                    keyframes: played.to_string(),
                });
            }
        }
    }

    Ok(())
}
