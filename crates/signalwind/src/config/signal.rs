//! The built-in Signal AI dashboard theme.

use super::{ColorEntry, PluginSpec, ThemeConfig, ThemeExtension, ThemeSection};
use crate::plugin::SIGNAL_COMPONENTS;
use crate::tokens::{keyframes_from, TokenMap, TokenValue, COLOR_STEPS};

const SIGNAL_SCALE: [&str; 11] = [
    "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569", "#334155",
    "#1e293b", "#0f172a", "#020617",
];

const PURPLE_SCALE: [&str; 11] = [
    "#faf5ff", "#f3e8ff", "#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7", "#9333ea", "#7c3aed",
    "#6b21a8", "#581c87", "#3b0764",
];

// Trading colors: green-500, red-500 and amber-500 of the stock palette.
const TRADING_COLORS: &[(&str, &str)] = &[
    ("bullish", "#10b981"),
    ("bearish", "#ef4444"),
    ("neutral", "#f59e0b"),
];

const FONT_SIZE: &[(&str, &str)] = &[
    ("xs", "0.75rem"),
    ("sm", "0.875rem"),
    ("base", "1rem"),
    ("lg", "1.125rem"),
    ("xl", "1.25rem"),
    ("2xl", "1.5rem"),
    ("3xl", "1.875rem"),
    ("4xl", "2.25rem"),
    ("5xl", "3rem"),
    ("6xl", "3.75rem"),
];

const SPACING: &[(&str, &str)] = &[("18", "4.5rem"), ("88", "22rem"), ("128", "32rem")];

const ANIMATION: &[(&str, &str)] = &[
    ("pulse-slow", "pulse 3s ease-in-out infinite"),
    ("bounce-slow", "bounce 2s infinite"),
    ("fade-in", "fadeIn 0.5s ease-in-out"),
    ("slide-up", "slideUp 0.3s ease-out"),
    ("glow", "glow 2s ease-in-out infinite alternate"),
];

const BACKDROP_BLUR: &[(&str, &str)] = &[
    ("xs", "2px"),
    ("sm", "4px"),
    ("md", "8px"),
    ("lg", "16px"),
    ("xl", "24px"),
    ("2xl", "40px"),
    ("3xl", "64px"),
];

const BACKGROUND_IMAGE: &[(&str, &str)] = &[
    ("gradient-radial", "radial-gradient(var(--tw-gradient-stops))"),
    (
        "gradient-conic",
        "conic-gradient(from 180deg at 50% 50%, var(--tw-gradient-stops))",
    ),
    (
        "signal-gradient",
        "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    ),
    (
        "bullish-gradient",
        "linear-gradient(135deg, #10b981 0%, #059669 100%)",
    ),
    (
        "bearish-gradient",
        "linear-gradient(135deg, #ef4444 0%, #dc2626 100%)",
    ),
    (
        "neutral-gradient",
        "linear-gradient(135deg, #f59e0b 0%, #d97706 100%)",
    ),
];

const BOX_SHADOW: &[(&str, &str)] = &[
    ("glow", "0 0 20px rgba(168, 85, 247, 0.3)"),
    ("glow-lg", "0 0 40px rgba(168, 85, 247, 0.4)"),
    ("signal", "0 4px 14px 0 rgba(168, 85, 247, 0.2)"),
    ("signal-lg", "0 10px 25px -3px rgba(168, 85, 247, 0.3)"),
];

const CONTENT: &[&str] = &["./index.html", "./src/**/*.{vue,js,ts,jsx,tsx}"];

fn literal_table(entries: &[(&str, &str)]) -> TokenMap<String> {
    let mut table = TokenMap::new();
    for (name, value) in entries {
        table.upsert(*name, value.to_string());
    }
    table
}

fn scale(values: &[&str; 11]) -> ColorEntry {
    let mut steps = TokenMap::new();
    for (step, value) in COLOR_STEPS.iter().zip(values.iter()) {
        steps.upsert(*step, value.to_string());
    }
    ColorEntry::Scale(steps)
}

fn signal_extension() -> ThemeExtension {
    let mut colors = TokenMap::new();
    colors.upsert("signal", scale(&SIGNAL_SCALE));
    colors.upsert("purple", scale(&PURPLE_SCALE));
    for (name, value) in TRADING_COLORS {
        colors.upsert(*name, ColorEntry::Single(value.to_string()));
    }

    let mut font_family = TokenMap::new();
    font_family.upsert(
        "sans",
        TokenValue::from(&["Inter", "ui-sans-serif", "system-ui"][..]),
    );
    font_family.upsert(
        "mono",
        TokenValue::from(&["JetBrains Mono", "ui-monospace", "monospace"][..]),
    );

    let mut keyframes = TokenMap::new();
    keyframes.upsert(
        "fadeIn",
        keyframes_from(&[("0%", &[("opacity", "0")]), ("100%", &[("opacity", "1")])]),
    );
    keyframes.upsert(
        "slideUp",
        keyframes_from(&[
            ("0%", &[("opacity", "0"), ("transform", "translateY(20px)")]),
            ("100%", &[("opacity", "1"), ("transform", "translateY(0)")]),
        ]),
    );
    keyframes.upsert(
        "glow",
        keyframes_from(&[
            ("0%", &[("boxShadow", "0 0 5px rgba(168, 85, 247, 0.3)")]),
            (
                "100%",
                &[(
                    "boxShadow",
                    "0 0 20px rgba(168, 85, 247, 0.8), 0 0 30px rgba(168, 85, 247, 0.4)",
                )],
            ),
        ]),
    );

    ThemeExtension {
        colors,
        font_family,
        font_size: literal_table(FONT_SIZE),
        spacing: literal_table(SPACING),
        animation: literal_table(ANIMATION),
        keyframes,
        backdrop_blur: literal_table(BACKDROP_BLUR),
        background_image: literal_table(BACKGROUND_IMAGE),
        box_shadow: literal_table(BOX_SHADOW),
        ..ThemeExtension::default()
    }
}

impl ThemeConfig {
    /// The Signal AI dashboard configuration.
    ///
    /// Two 11-step palettes (`signal`, `purple`), the trading colors, the
    /// Inter / JetBrains Mono font stacks, extra spacing, five animations
    /// with their keyframes, backdrop blur radii, gradients and glow
    /// shadows; plus the `signal-components` synthesis plugin.
    pub fn signal() -> Self {
        ThemeConfig {
            content: CONTENT.iter().map(|pattern| pattern.to_string()).collect(),
            theme: ThemeSection {
                extend: signal_extension(),
            },
            plugins: vec![PluginSpec::Builtin(SIGNAL_COMPONENTS.to_string())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{is_hex6, TokenCategory};

    #[test]
    fn test_two_eleven_step_palettes_of_hex6() {
        let set = ThemeConfig::signal().theme.extend.to_token_set().unwrap();
        for palette in ["signal", "purple"] {
            for step in COLOR_STEPS {
                let name = format!("{}-{}", palette, step);
                let value = set
                    .get(TokenCategory::Colors, &name)
                    .and_then(TokenValue::as_literal)
                    .unwrap_or_else(|| panic!("missing {}", name));
                assert!(is_hex6(value), "{} = {}", name, value);
            }
        }
    }

    #[test]
    fn test_trading_colors() {
        let set = ThemeConfig::signal().theme.extend.to_token_set().unwrap();
        assert_eq!(
            set.get(TokenCategory::Colors, "bullish"),
            Some(&TokenValue::from("#10b981"))
        );
        assert_eq!(
            set.get(TokenCategory::Colors, "bearish"),
            Some(&TokenValue::from("#ef4444"))
        );
        assert_eq!(
            set.get(TokenCategory::Colors, "neutral"),
            Some(&TokenValue::from("#f59e0b"))
        );
    }

    #[test]
    fn test_content_patterns() {
        let config = ThemeConfig::signal();
        assert_eq!(config.content.len(), 2);
        assert!(config.content[1].ends_with("*.{vue,js,ts,jsx,tsx}"));
    }
}
