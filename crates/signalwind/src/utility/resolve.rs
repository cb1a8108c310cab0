//! Resolving utility class names against a theme.

use super::{Candidate, Declaration, VariantKey};
use crate::theme::Theme;
use crate::tokens::{Rgba, TokenCategory};

/// A utility resolved to declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUtility {
    pub key: VariantKey,
    pub declarations: Vec<Declaration>,
    /// Keyframes the declarations play, for `animate-*` utilities.
    pub keyframes: Option<String>,
}

/// Fixed-value utilities.
const STATIC_UTILITIES: &[(&str, &[(&str, &str)])] = &[
    ("block", &[("display", "block")]),
    ("inline-block", &[("display", "inline-block")]),
    ("inline", &[("display", "inline")]),
    ("flex", &[("display", "flex")]),
    ("inline-flex", &[("display", "inline-flex")]),
    ("grid", &[("display", "grid")]),
    ("hidden", &[("display", "none")]),
    ("flex-row", &[("flex-direction", "row")]),
    ("flex-col", &[("flex-direction", "column")]),
    ("flex-wrap", &[("flex-wrap", "wrap")]),
    ("flex-1", &[("flex", "1 1 0%")]),
    ("shrink-0", &[("flex-shrink", "0")]),
    ("items-start", &[("align-items", "flex-start")]),
    ("items-center", &[("align-items", "center")]),
    ("items-end", &[("align-items", "flex-end")]),
    ("items-baseline", &[("align-items", "baseline")]),
    ("items-stretch", &[("align-items", "stretch")]),
    ("justify-start", &[("justify-content", "flex-start")]),
    ("justify-center", &[("justify-content", "center")]),
    ("justify-end", &[("justify-content", "flex-end")]),
    ("justify-between", &[("justify-content", "space-between")]),
    ("justify-around", &[("justify-content", "space-around")]),
    ("static", &[("position", "static")]),
    ("relative", &[("position", "relative")]),
    ("absolute", &[("position", "absolute")]),
    ("fixed", &[("position", "fixed")]),
    ("sticky", &[("position", "sticky")]),
    ("overflow-hidden", &[("overflow", "hidden")]),
    ("overflow-auto", &[("overflow", "auto")]),
    ("text-left", &[("text-align", "left")]),
    ("text-center", &[("text-align", "center")]),
    ("text-right", &[("text-align", "right")]),
    ("uppercase", &[("text-transform", "uppercase")]),
    ("lowercase", &[("text-transform", "lowercase")]),
    ("capitalize", &[("text-transform", "capitalize")]),
    ("italic", &[("font-style", "italic")]),
    ("tracking-tight", &[("letter-spacing", "-0.025em")]),
    ("tracking-normal", &[("letter-spacing", "0em")]),
    ("tracking-wide", &[("letter-spacing", "0.025em")]),
    ("tracking-wider", &[("letter-spacing", "0.05em")]),
    ("leading-none", &[("line-height", "1")]),
    ("leading-tight", &[("line-height", "1.25")]),
    ("leading-normal", &[("line-height", "1.5")]),
    ("leading-relaxed", &[("line-height", "1.625")]),
    (
        "truncate",
        &[
            ("overflow", "hidden"),
            ("text-overflow", "ellipsis"),
            ("white-space", "nowrap"),
        ],
    ),
    (
        "bg-clip-text",
        &[
            ("-webkit-background-clip", "text"),
            ("background-clip", "text"),
        ],
    ),
    ("border-solid", &[("border-style", "solid")]),
    ("border-dashed", &[("border-style", "dashed")]),
    ("cursor-pointer", &[("cursor", "pointer")]),
    ("select-none", &[("user-select", "none")]),
];

/// Transition utilities: name to `transition-property` value. Timing and
/// duration come from the theme's `DEFAULT` tokens.
const TRANSITIONS: &[(&str, &str)] = &[
    (
        "transition",
        "color, background-color, border-color, text-decoration-color, fill, stroke, opacity, box-shadow, transform, filter, backdrop-filter",
    ),
    ("transition-all", "all"),
    (
        "transition-colors",
        "color, background-color, border-color, text-decoration-color, fill, stroke",
    ),
    ("transition-opacity", "opacity"),
    ("transition-shadow", "box-shadow"),
    ("transition-transform", "transform"),
    ("transition-none", "none"),
];

const BORDER_WIDTHS: &[(&str, &str)] = &[
    ("DEFAULT", "1px"),
    ("0", "0px"),
    ("2", "2px"),
    ("4", "4px"),
    ("8", "8px"),
];

const Z_INDEX: &[(&str, &str)] = &[
    ("0", "0"),
    ("10", "10"),
    ("20", "20"),
    ("30", "30"),
    ("40", "40"),
    ("50", "50"),
    ("auto", "auto"),
];

/// How the value part of a functional utility is interpreted.
#[derive(Debug, Clone, Copy)]
enum Kind {
    Padding(&'static [&'static str]),
    Margin(&'static [&'static str]),
    Gap(&'static str),
    Width,
    Height,
    MinHeight,
    BackgroundImage,
    BackgroundColor,
    TextColor,
    BorderColor,
    GradientFrom,
    GradientVia,
    GradientTo,
    FontSize,
    FontWeight,
    FontFamily,
    BorderRadius,
    BorderWidth,
    Blur,
    BackdropBlur,
    BoxShadow,
    Animation,
    Duration,
    Ease,
    Opacity,
    GridColumns,
    ZIndex,
}

impl Kind {
    fn takes_modifier(self) -> bool {
        matches!(
            self,
            Kind::BackgroundColor
                | Kind::TextColor
                | Kind::BorderColor
                | Kind::GradientFrom
                | Kind::GradientVia
                | Kind::GradientTo
        )
    }
}

/// Functional utilities by prefix. Several kinds may share a prefix; they
/// are tried in order and the first that resolves wins.
const FUNCTIONAL: &[(&str, Kind)] = &[
    ("p", Kind::Padding(&["padding"])),
    ("px", Kind::Padding(&["padding-left", "padding-right"])),
    ("py", Kind::Padding(&["padding-top", "padding-bottom"])),
    ("pt", Kind::Padding(&["padding-top"])),
    ("pr", Kind::Padding(&["padding-right"])),
    ("pb", Kind::Padding(&["padding-bottom"])),
    ("pl", Kind::Padding(&["padding-left"])),
    ("m", Kind::Margin(&["margin"])),
    ("mx", Kind::Margin(&["margin-left", "margin-right"])),
    ("my", Kind::Margin(&["margin-top", "margin-bottom"])),
    ("mt", Kind::Margin(&["margin-top"])),
    ("mr", Kind::Margin(&["margin-right"])),
    ("mb", Kind::Margin(&["margin-bottom"])),
    ("ml", Kind::Margin(&["margin-left"])),
    ("gap-x", Kind::Gap("column-gap")),
    ("gap-y", Kind::Gap("row-gap")),
    ("gap", Kind::Gap("gap")),
    ("w", Kind::Width),
    ("h", Kind::Height),
    ("min-h", Kind::MinHeight),
    ("bg", Kind::BackgroundImage),
    ("bg", Kind::BackgroundColor),
    ("text", Kind::FontSize),
    ("text", Kind::TextColor),
    ("border", Kind::BorderWidth),
    ("border", Kind::BorderColor),
    ("from", Kind::GradientFrom),
    ("via", Kind::GradientVia),
    ("to", Kind::GradientTo),
    ("font", Kind::FontWeight),
    ("font", Kind::FontFamily),
    ("rounded", Kind::BorderRadius),
    ("backdrop-blur", Kind::BackdropBlur),
    ("blur", Kind::Blur),
    ("shadow", Kind::BoxShadow),
    ("animate", Kind::Animation),
    ("duration", Kind::Duration),
    ("ease", Kind::Ease),
    ("opacity", Kind::Opacity),
    ("grid-cols", Kind::GridColumns),
    ("z", Kind::ZIndex),
];

/// Resolves class names to declarations using a [`Theme`].
///
/// # Example
///
/// ```rust
/// use signalwind::{Theme, ThemeConfig, UtilityResolver};
///
/// let theme = Theme::resolve(&ThemeConfig::signal()).unwrap();
/// let resolver = UtilityResolver::new(&theme);
/// let resolved = resolver.resolve_str("bg-black/30").unwrap();
/// assert_eq!(resolved.declarations[0].value, "rgb(0 0 0 / 0.3)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UtilityResolver<'t> {
    theme: &'t Theme,
}

impl<'t> UtilityResolver<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &'t Theme {
        self.theme
    }

    /// Parses and resolves a raw class name.
    pub fn resolve_str(&self, raw: &str) -> Option<ResolvedUtility> {
        Candidate::parse(raw).and_then(|candidate| self.resolve(&candidate))
    }

    /// Resolves a parsed candidate, or `None` if it names no utility.
    pub fn resolve(&self, candidate: &Candidate) -> Option<ResolvedUtility> {
        let key = VariantKey::from_variants(&candidate.variants, self.theme)?;
        let (declarations, keyframes) = self.declarations(&candidate.utility, candidate.modifier)?;
        Some(ResolvedUtility {
            key,
            declarations,
            keyframes,
        })
    }

    fn declarations(
        &self,
        utility: &str,
        modifier: Option<u8>,
    ) -> Option<(Vec<Declaration>, Option<String>)> {
        if modifier.is_none() {
            if let Some((_, entries)) = STATIC_UTILITIES.iter().find(|(name, _)| *name == utility)
            {
                return Some((to_declarations(entries), None));
            }
            if let Some((_, property)) = TRANSITIONS.iter().find(|(name, _)| *name == utility) {
                return Some((self.transition(property), None));
            }
        }

        FUNCTIONAL.iter().find_map(|(prefix, kind)| {
            let value = if utility == *prefix {
                "DEFAULT"
            } else {
                utility.strip_prefix(prefix)?.strip_prefix('-')?
            };
            if modifier.is_some() && !kind.takes_modifier() {
                return None;
            }
            self.functional(*kind, value, modifier)
        })
    }

    fn functional(
        &self,
        kind: Kind,
        value: &str,
        modifier: Option<u8>,
    ) -> Option<(Vec<Declaration>, Option<String>)> {
        let theme = self.theme;
        let single = |property: &str, value: String| Some((vec![Declaration::new(property, value)], None));

        match kind {
            Kind::Padding(properties) => {
                let length = theme.value(TokenCategory::Spacing, value)?;
                Some((fan_out(properties, &length), None))
            }
            Kind::Margin(properties) => {
                let length = if value == "auto" {
                    "auto".to_string()
                } else {
                    theme.value(TokenCategory::Spacing, value)?
                };
                Some((fan_out(properties, &length), None))
            }
            Kind::Gap(property) => single(property, theme.value(TokenCategory::Spacing, value)?),
            Kind::Width => single("width", self.size(value, "100vw")?),
            Kind::Height => single("height", self.size(value, "100vh")?),
            Kind::MinHeight => single("min-height", self.size(value, "100vh")?),
            Kind::BackgroundImage => {
                single("background-image", theme.value(TokenCategory::BackgroundImage, value)?)
            }
            Kind::BackgroundColor => single("background-color", self.color(value, modifier)?),
            Kind::TextColor => single("color", self.color(value, modifier)?),
            Kind::BorderColor => single("border-color", self.color(value, modifier)?),
            Kind::GradientFrom => {
                let color = self.color(value, modifier)?;
                Some((
                    vec![
                        Declaration::new("--tw-gradient-from", color),
                        Declaration::new("--tw-gradient-to", self.transparent(value)?),
                        Declaration::new(
                            "--tw-gradient-stops",
                            "var(--tw-gradient-from), var(--tw-gradient-to)",
                        ),
                    ],
                    None,
                ))
            }
            Kind::GradientVia => {
                let color = self.color(value, modifier)?;
                Some((
                    vec![
                        Declaration::new("--tw-gradient-to", self.transparent(value)?),
                        Declaration::new(
                            "--tw-gradient-stops",
                            format!("var(--tw-gradient-from), {}, var(--tw-gradient-to)", color),
                        ),
                    ],
                    None,
                ))
            }
            Kind::GradientTo => single("--tw-gradient-to", self.color(value, modifier)?),
            Kind::FontSize => single("font-size", theme.value(TokenCategory::FontSize, value)?),
            Kind::FontWeight => {
                single("font-weight", theme.value(TokenCategory::FontWeight, value)?)
            }
            Kind::FontFamily => {
                single("font-family", theme.value(TokenCategory::FontFamily, value)?)
            }
            Kind::BorderRadius => {
                single("border-radius", theme.value(TokenCategory::BorderRadius, value)?)
            }
            Kind::BorderWidth => single("border-width", lookup(BORDER_WIDTHS, value)?),
            Kind::Blur => single(
                "filter",
                format!("blur({})", theme.value(TokenCategory::Blur, value)?),
            ),
            Kind::BackdropBlur => {
                let filter = format!("blur({})", theme.value(TokenCategory::BackdropBlur, value)?);
                Some((
                    vec![
                        Declaration::new("-webkit-backdrop-filter", filter.clone()),
                        Declaration::new("backdrop-filter", filter),
                    ],
                    None,
                ))
            }
            Kind::BoxShadow => single("box-shadow", theme.value(TokenCategory::BoxShadow, value)?),
            Kind::Animation => {
                let animation = theme.value(TokenCategory::Animation, value)?;
                let keyframes = theme.animation_keyframes(value).map(str::to_string);
                Some((vec![Declaration::new("animation", animation)], keyframes))
            }
            Kind::Duration => single(
                "transition-duration",
                theme.value(TokenCategory::TransitionDuration, value)?,
            ),
            Kind::Ease => single(
                "transition-timing-function",
                theme.value(TokenCategory::TransitionTimingFunction, value)?,
            ),
            Kind::Opacity => single("opacity", theme.value(TokenCategory::Opacity, value)?),
            Kind::GridColumns => {
                let columns = if value == "none" {
                    "none".to_string()
                } else {
                    let count: u8 = value.parse().ok().filter(|n| (1..=12).contains(n))?;
                    format!("repeat({}, minmax(0, 1fr))", count)
                };
                single("grid-template-columns", columns)
            }
            Kind::ZIndex => single("z-index", lookup(Z_INDEX, value)?),
        }
    }

    fn transition(&self, property: &str) -> Vec<Declaration> {
        let mut declarations = vec![Declaration::new("transition-property", property)];
        if let Some(timing) = self
            .theme
            .value(TokenCategory::TransitionTimingFunction, "DEFAULT")
        {
            declarations.push(Declaration::new("transition-timing-function", timing));
        }
        if let Some(duration) = self.theme.value(TokenCategory::TransitionDuration, "DEFAULT") {
            declarations.push(Declaration::new("transition-duration", duration));
        }
        declarations
    }

    fn size(&self, value: &str, screen: &str) -> Option<String> {
        let keyword = match value {
            "full" => "100%",
            "screen" => screen,
            "auto" => "auto",
            "min" => "min-content",
            "max" => "max-content",
            "fit" => "fit-content",
            _ => return self.theme.value(TokenCategory::Spacing, value),
        };
        Some(keyword.to_string())
    }

    fn color(&self, name: &str, modifier: Option<u8>) -> Option<String> {
        let value = self.theme.value(TokenCategory::Colors, name)?;
        match modifier {
            None => Some(value),
            Some(percent) => Rgba::from_hex(&value)?.with_opacity(percent),
        }
    }

    fn transparent(&self, name: &str) -> Option<String> {
        let value = self.theme.value(TokenCategory::Colors, name)?;
        Some(match Rgba::from_hex(&value) {
            Some(rgba) => rgba.transparent(),
            None => "transparent".to_string(),
        })
    }
}

fn to_declarations(entries: &[(&str, &str)]) -> Vec<Declaration> {
    entries
        .iter()
        .map(|(property, value)| Declaration::new(*property, *value))
        .collect()
}

fn fan_out(properties: &[&str], value: &str) -> Vec<Declaration> {
    properties
        .iter()
        .map(|property| Declaration::new(*property, value))
        .collect()
}

fn lookup(table: &[(&str, &str)], key: &str) -> Option<String> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value.to_string())
}
