//! Token categories.

use serde::Serialize;

/// The semantic category a design token belongs to.
///
/// Each variant corresponds to one key under `theme.extend` in a
/// configuration file, spelled the same way (`fontFamily`, `boxShadow`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenCategory {
    Colors,
    FontFamily,
    FontSize,
    FontWeight,
    Spacing,
    BorderRadius,
    Animation,
    TransitionDuration,
    TransitionTimingFunction,
    BackdropBlur,
    Blur,
    BackgroundImage,
    BoxShadow,
    Screens,
    Opacity,
}

impl TokenCategory {
    /// All categories in canonical order.
    pub const ALL: [TokenCategory; 15] = [
        TokenCategory::Colors,
        TokenCategory::FontFamily,
        TokenCategory::FontSize,
        TokenCategory::FontWeight,
        TokenCategory::Spacing,
        TokenCategory::BorderRadius,
        TokenCategory::Animation,
        TokenCategory::TransitionDuration,
        TokenCategory::TransitionTimingFunction,
        TokenCategory::BackdropBlur,
        TokenCategory::Blur,
        TokenCategory::BackgroundImage,
        TokenCategory::BoxShadow,
        TokenCategory::Screens,
        TokenCategory::Opacity,
    ];

    /// Returns the configuration key for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Colors => "colors",
            TokenCategory::FontFamily => "fontFamily",
            TokenCategory::FontSize => "fontSize",
            TokenCategory::FontWeight => "fontWeight",
            TokenCategory::Spacing => "spacing",
            TokenCategory::BorderRadius => "borderRadius",
            TokenCategory::Animation => "animation",
            TokenCategory::TransitionDuration => "transitionDuration",
            TokenCategory::TransitionTimingFunction => "transitionTimingFunction",
            TokenCategory::BackdropBlur => "backdropBlur",
            TokenCategory::Blur => "blur",
            TokenCategory::BackgroundImage => "backgroundImage",
            TokenCategory::BoxShadow => "boxShadow",
            TokenCategory::Screens => "screens",
            TokenCategory::Opacity => "opacity",
        }
    }

    /// Looks up a category by its configuration key.
    ///
    /// Kebab-case spellings (`font-family`) are accepted as well, which is
    /// convenient on the command line.
    pub fn from_key(key: &str) -> Option<TokenCategory> {
        let normalized: String = key
            .split('-')
            .enumerate()
            .map(|(i, part)| {
                if i == 0 {
                    part.to_string()
                } else {
                    let mut chars = part.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect(),
                        None => String::new(),
                    }
                }
            })
            .collect();
        TokenCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
    }
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
