//! The `theme.extend` section: token tables that extend the base set.

use serde::Deserialize;

use super::error::{ConfigError, ConfigResult};
use crate::tokens::{Keyframes, TokenCategory, TokenMap, TokenSet, TokenValue};

/// A color entry: either one color or a scale of named steps.
///
/// A scale flattens to `<name>-<step>`; its `DEFAULT` step flattens to the
/// bare `<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    Single(String),
    Scale(TokenMap<String>),
}

/// Extension tokens, keyed like the build tool's `theme.extend` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeExtension {
    #[serde(default)]
    pub colors: TokenMap<ColorEntry>,
    #[serde(default)]
    pub font_family: TokenMap<TokenValue>,
    #[serde(default)]
    pub font_size: TokenMap<String>,
    #[serde(default)]
    pub font_weight: TokenMap<String>,
    #[serde(default)]
    pub spacing: TokenMap<String>,
    #[serde(default)]
    pub border_radius: TokenMap<String>,
    #[serde(default)]
    pub animation: TokenMap<String>,
    #[serde(default)]
    pub keyframes: TokenMap<Keyframes>,
    #[serde(default)]
    pub transition_duration: TokenMap<String>,
    #[serde(default)]
    pub transition_timing_function: TokenMap<String>,
    #[serde(default)]
    pub backdrop_blur: TokenMap<String>,
    #[serde(default)]
    pub blur: TokenMap<String>,
    #[serde(default)]
    pub background_image: TokenMap<String>,
    #[serde(default)]
    pub box_shadow: TokenMap<String>,
    #[serde(default)]
    pub screens: TokenMap<String>,
    #[serde(default)]
    pub opacity: TokenMap<String>,
}

impl ThemeExtension {
    /// Flattens the extension into a [`TokenSet`].
    ///
    /// Fails if flattening produces two tokens with the same name, e.g. a
    /// `purple` scale next to a literal `purple-500` color.
    pub fn to_token_set(&self) -> ConfigResult<TokenSet> {
        let mut set = TokenSet::new();

        let mut colors: TokenMap<TokenValue> = TokenMap::new();
        for (name, entry) in &self.colors {
            match entry {
                ColorEntry::Single(value) => {
                    insert_unique(&mut colors, TokenCategory::Colors, name, value.clone())?;
                }
                ColorEntry::Scale(steps) => {
                    for (step, value) in steps {
                        let flat = if step == "DEFAULT" {
                            name.clone()
                        } else {
                            format!("{}-{}", name, step)
                        };
                        insert_unique(&mut colors, TokenCategory::Colors, &flat, value.clone())?;
                    }
                }
            }
        }
        for (name, value) in colors {
            set.set(TokenCategory::Colors, name, value);
        }

        for (name, value) in &self.font_family {
            set.set(TokenCategory::FontFamily, name.clone(), value.clone());
        }

        for (category, table) in self.literal_tables() {
            for (name, value) in table {
                set.set(category, name.clone(), TokenValue::Literal(value.clone()));
            }
        }

        for (name, frames) in &self.keyframes {
            set.set_keyframes(name.clone(), frames.clone());
        }

        Ok(set)
    }

    fn literal_tables(&self) -> [(TokenCategory, &TokenMap<String>); 13] {
        [
            (TokenCategory::FontSize, &self.font_size),
            (TokenCategory::FontWeight, &self.font_weight),
            (TokenCategory::Spacing, &self.spacing),
            (TokenCategory::BorderRadius, &self.border_radius),
            (TokenCategory::Animation, &self.animation),
            (TokenCategory::TransitionDuration, &self.transition_duration),
            (
                TokenCategory::TransitionTimingFunction,
                &self.transition_timing_function,
            ),
            (TokenCategory::BackdropBlur, &self.backdrop_blur),
            (TokenCategory::Blur, &self.blur),
            (TokenCategory::BackgroundImage, &self.background_image),
            (TokenCategory::BoxShadow, &self.box_shadow),
            (TokenCategory::Screens, &self.screens),
            (TokenCategory::Opacity, &self.opacity),
        ]
    }
}

fn insert_unique(
    table: &mut TokenMap<TokenValue>,
    category: TokenCategory,
    name: &str,
    value: String,
) -> ConfigResult<()> {
    table
        .try_insert(name, TokenValue::Literal(value))
        .map_err(|_| ConfigError::DuplicateToken {
            category,
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_scale_flattens() {
        let ext: ThemeExtension = serde_yaml::from_str(
            "colors:\n  signal:\n    50: '#f8fafc'\n    DEFAULT: '#64748b'\n  bullish: '#10b981'\n",
        )
        .unwrap();
        let set = ext.to_token_set().unwrap();
        assert_eq!(
            set.get(TokenCategory::Colors, "signal-50"),
            Some(&TokenValue::from("#f8fafc"))
        );
        assert_eq!(
            set.get(TokenCategory::Colors, "signal"),
            Some(&TokenValue::from("#64748b"))
        );
        assert!(set.get(TokenCategory::Colors, "bullish").is_some());
    }

    #[test]
    fn test_flattening_collision_is_an_error() {
        let ext: ThemeExtension = serde_yaml::from_str(
            "colors:\n  purple:\n    500: '#a855f7'\n  purple-500: '#000000'\n",
        )
        .unwrap();
        let err = ext.to_token_set().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateToken { ref name, .. } if name == "purple-500"
        ));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let result: Result<ThemeExtension, _> = serde_yaml::from_str("gradients:\n  a: b\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_keyframes_deserialize() {
        let ext: ThemeExtension = serde_yaml::from_str(
            "keyframes:\n  fadeIn:\n    '0%': { opacity: '0' }\n    '100%': { opacity: '1' }\n",
        )
        .unwrap();
        let set = ext.to_token_set().unwrap();
        let frames = set.keyframes().get("fadeIn").unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(
            frames.get("100%").and_then(|bag| bag.get("opacity")).map(String::as_str),
            Some("1")
        );
    }
}
