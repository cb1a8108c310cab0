//! The base design token set that configuration extends.
//!
//! These are the stock values of the utility-class vocabulary the dashboard
//! builds on. Extension tokens are merged over them name by name.

use once_cell::sync::Lazy;

use super::{Keyframes, TokenCategory, TokenMap, TokenSet, TokenValue};

/// Steps of every numeric color scale.
pub const COLOR_STEPS: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

const PALETTES: &[(&str, [&str; 11])] = &[
    (
        "slate",
        [
            "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569", "#334155",
            "#1e293b", "#0f172a", "#020617",
        ],
    ),
    (
        "gray",
        [
            "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151",
            "#1f2937", "#111827", "#030712",
        ],
    ),
    (
        "red",
        [
            "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
            "#991b1b", "#7f1d1d", "#450a0a",
        ],
    ),
    (
        "amber",
        [
            "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706", "#b45309",
            "#92400e", "#78350f", "#451a03",
        ],
    ),
    (
        "yellow",
        [
            "#fefce8", "#fef9c3", "#fef08a", "#fde047", "#facc15", "#eab308", "#ca8a04", "#a16207",
            "#854d0e", "#713f12", "#422006",
        ],
    ),
    (
        "green",
        [
            "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d",
            "#166534", "#14532d", "#052e16",
        ],
    ),
    (
        "emerald",
        [
            "#ecfdf5", "#d1fae5", "#a7f3d0", "#6ee7b7", "#34d399", "#10b981", "#059669", "#047857",
            "#065f46", "#064e3b", "#022c22",
        ],
    ),
    (
        "blue",
        [
            "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
            "#1e40af", "#1e3a8a", "#172554",
        ],
    ),
    (
        "purple",
        [
            "#faf5ff", "#f3e8ff", "#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7", "#9333ea", "#7e22ce",
            "#6b21a8", "#581c87", "#3b0764",
        ],
    ),
    (
        "pink",
        [
            "#fdf2f8", "#fce7f3", "#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899", "#db2777", "#be185d",
            "#9d174d", "#831843", "#500724",
        ],
    ),
];

const SPECIAL_COLORS: &[(&str, &str)] = &[
    ("inherit", "inherit"),
    ("current", "currentColor"),
    ("transparent", "transparent"),
    ("black", "#000"),
    ("white", "#fff"),
];

const SPACING: &[(&str, &str)] = &[
    ("0", "0px"),
    ("px", "1px"),
    ("0.5", "0.125rem"),
    ("1", "0.25rem"),
    ("1.5", "0.375rem"),
    ("2", "0.5rem"),
    ("2.5", "0.625rem"),
    ("3", "0.75rem"),
    ("3.5", "0.875rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("7", "1.75rem"),
    ("8", "2rem"),
    ("9", "2.25rem"),
    ("10", "2.5rem"),
    ("11", "2.75rem"),
    ("12", "3rem"),
    ("14", "3.5rem"),
    ("16", "4rem"),
    ("20", "5rem"),
    ("24", "6rem"),
    ("28", "7rem"),
    ("32", "8rem"),
    ("36", "9rem"),
    ("40", "10rem"),
    ("44", "11rem"),
    ("48", "12rem"),
    ("52", "13rem"),
    ("56", "14rem"),
    ("60", "15rem"),
    ("64", "16rem"),
    ("72", "18rem"),
    ("80", "20rem"),
    ("96", "24rem"),
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
    ("7xl", "4.5rem"),
    ("8xl", "6rem"),
    ("9xl", "8rem"),
];

const FONT_WEIGHT: &[(&str, &str)] = &[
    ("thin", "100"),
    ("extralight", "200"),
    ("light", "300"),
    ("normal", "400"),
    ("medium", "500"),
    ("semibold", "600"),
    ("bold", "700"),
    ("extrabold", "800"),
    ("black", "900"),
];

const FONT_FAMILY: &[(&str, &[&str])] = &[
    (
        "sans",
        &[
            "ui-sans-serif",
            "system-ui",
            "sans-serif",
            "Apple Color Emoji",
            "Segoe UI Emoji",
        ],
    ),
    (
        "serif",
        &["ui-serif", "Georgia", "Cambria", "Times New Roman", "Times", "serif"],
    ),
    (
        "mono",
        &[
            "ui-monospace",
            "SFMono-Regular",
            "Menlo",
            "Monaco",
            "Consolas",
            "Liberation Mono",
            "Courier New",
            "monospace",
        ],
    ),
];

const BORDER_RADIUS: &[(&str, &str)] = &[
    ("none", "0px"),
    ("sm", "0.125rem"),
    ("DEFAULT", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("full", "9999px"),
];

const BLUR: &[(&str, &str)] = &[
    ("0", "0"),
    ("sm", "4px"),
    ("DEFAULT", "8px"),
    ("md", "12px"),
    ("lg", "16px"),
    ("xl", "24px"),
    ("2xl", "40px"),
    ("3xl", "64px"),
];

const ANIMATION: &[(&str, &str)] = &[
    ("none", "none"),
    ("spin", "spin 1s linear infinite"),
    ("ping", "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite"),
    ("pulse", "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite"),
    ("bounce", "bounce 1s infinite"),
];

const TRANSITION_DURATION: &[(&str, &str)] = &[
    ("DEFAULT", "150ms"),
    ("0", "0s"),
    ("75", "75ms"),
    ("100", "100ms"),
    ("150", "150ms"),
    ("200", "200ms"),
    ("300", "300ms"),
    ("500", "500ms"),
    ("700", "700ms"),
    ("1000", "1000ms"),
];

const TRANSITION_TIMING: &[(&str, &str)] = &[
    ("DEFAULT", "cubic-bezier(0.4, 0, 0.2, 1)"),
    ("linear", "linear"),
    ("in", "cubic-bezier(0.4, 0, 1, 1)"),
    ("out", "cubic-bezier(0, 0, 0.2, 1)"),
    ("in-out", "cubic-bezier(0.4, 0, 0.2, 1)"),
];

const BACKGROUND_IMAGE: &[(&str, &str)] = &[
    ("none", "none"),
    ("gradient-to-t", "linear-gradient(to top, var(--tw-gradient-stops))"),
    ("gradient-to-tr", "linear-gradient(to top right, var(--tw-gradient-stops))"),
    ("gradient-to-r", "linear-gradient(to right, var(--tw-gradient-stops))"),
    ("gradient-to-br", "linear-gradient(to bottom right, var(--tw-gradient-stops))"),
    ("gradient-to-b", "linear-gradient(to bottom, var(--tw-gradient-stops))"),
    ("gradient-to-bl", "linear-gradient(to bottom left, var(--tw-gradient-stops))"),
    ("gradient-to-l", "linear-gradient(to left, var(--tw-gradient-stops))"),
    ("gradient-to-tl", "linear-gradient(to top left, var(--tw-gradient-stops))"),
];

const BOX_SHADOW: &[(&str, &str)] = &[
    ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    (
        "DEFAULT",
        "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
    ),
    (
        "md",
        "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    ),
    (
        "lg",
        "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    ),
    (
        "xl",
        "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    ),
    ("2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
    ("inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
    ("none", "none"),
];

const SCREENS: &[(&str, &str)] = &[
    ("sm", "640px"),
    ("md", "768px"),
    ("lg", "1024px"),
    ("xl", "1280px"),
    ("2xl", "1536px"),
];

const OPACITY: &[(&str, &str)] = &[
    ("0", "0"),
    ("5", "0.05"),
    ("10", "0.1"),
    ("20", "0.2"),
    ("25", "0.25"),
    ("30", "0.3"),
    ("40", "0.4"),
    ("50", "0.5"),
    ("60", "0.6"),
    ("70", "0.7"),
    ("75", "0.75"),
    ("80", "0.8"),
    ("90", "0.9"),
    ("95", "0.95"),
    ("100", "1"),
];

type Frame<'a> = (&'a str, &'a [(&'a str, &'a str)]);

const KEYFRAMES: &[(&str, &[Frame<'static>])] = &[
    ("spin", &[("to", &[("transform", "rotate(360deg)")])]),
    (
        "ping",
        &[("75%, 100%", &[("transform", "scale(2)"), ("opacity", "0")])],
    ),
    ("pulse", &[("50%", &[("opacity", ".5")])]),
    (
        "bounce",
        &[
            (
                "0%, 100%",
                &[
                    ("transform", "translateY(-25%)"),
                    ("animationTimingFunction", "cubic-bezier(0.8, 0, 1, 1)"),
                ],
            ),
            (
                "50%",
                &[
                    ("transform", "none"),
                    ("animationTimingFunction", "cubic-bezier(0, 0, 0.2, 1)"),
                ],
            ),
        ],
    ),
];

static BASE_TOKENS: Lazy<TokenSet> = Lazy::new(build_base_tokens);

/// Returns the shared base token set.
pub fn base_tokens() -> &'static TokenSet {
    &BASE_TOKENS
}

/// Builds a [`Keyframes`] table from static frame data.
pub(crate) fn keyframes_from(frames: &[Frame<'_>]) -> Keyframes {
    let mut table = Keyframes::new();
    for (offset, properties) in frames {
        let mut bag = TokenMap::new();
        for (property, value) in properties.iter() {
            bag.upsert(*property, value.to_string());
        }
        table.upsert(*offset, bag);
    }
    table
}

fn build_base_tokens() -> TokenSet {
    let mut set = TokenSet::new();

    for (name, value) in SPECIAL_COLORS {
        set.set(TokenCategory::Colors, *name, TokenValue::from(*value));
    }
    for (palette, values) in PALETTES {
        for (step, value) in COLOR_STEPS.iter().zip(values.iter()) {
            set.set(
                TokenCategory::Colors,
                format!("{}-{}", palette, step),
                TokenValue::from(*value),
            );
        }
    }
    for (name, families) in FONT_FAMILY {
        set.set(TokenCategory::FontFamily, *name, TokenValue::from(*families));
    }

    let literal_tables: [(TokenCategory, &[(&str, &str)]); 13] = [
        (TokenCategory::FontSize, FONT_SIZE),
        (TokenCategory::FontWeight, FONT_WEIGHT),
        (TokenCategory::Spacing, SPACING),
        (TokenCategory::BorderRadius, BORDER_RADIUS),
        (TokenCategory::Animation, ANIMATION),
        (TokenCategory::TransitionDuration, TRANSITION_DURATION),
        (TokenCategory::TransitionTimingFunction, TRANSITION_TIMING),
        (TokenCategory::BackdropBlur, BLUR),
        (TokenCategory::Blur, BLUR),
        (TokenCategory::BackgroundImage, BACKGROUND_IMAGE),
        (TokenCategory::BoxShadow, BOX_SHADOW),
        (TokenCategory::Screens, SCREENS),
        (TokenCategory::Opacity, OPACITY),
    ];
    for (category, entries) in literal_tables {
        for (name, value) in entries {
            set.set(category, *name, TokenValue::from(*value));
        }
    }

    for (name, frames) in KEYFRAMES {
        set.set_keyframes(*name, keyframes_from(frames));
    }

    set
}
