//! The dashboard's static root frame.

use super::{Component, Element};

/// Static frame of the Signal AI dashboard.
///
/// Views and live data are attached elsewhere; this renders only the
/// header, a placeholder signal card with the three trading badges, and an
/// action button.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalShell;

impl SignalShell {
    pub const NAME: &'static str = "SignalShell";
}

fn badge(kind: &str, label: &str) -> Element {
    Element::new("span")
        .with_class(&format!("signal-badge-{}", kind))
        .with_text(label)
}

impl Component for SignalShell {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render(&self) -> Element {
        let header = Element::new("header")
            .with_class("flex items-center justify-between px-6 py-4")
            .with_child(
                Element::new("h1")
                    .with_class("gradient-text text-2xl font-bold")
                    .with_text("Signal AI"),
            )
            .with_child(
                Element::new("button")
                    .with_attr("type", "button")
                    .with_class("signal-button px-4 py-2")
                    .with_text("Refresh"),
            );

        let card = Element::new("section")
            .with_class("signal-card p-6")
            .with_child(
                Element::new("h2")
                    .with_class("text-lg font-semibold text-white mb-4")
                    .with_text("Market signals"),
            )
            .with_child(
                Element::new("div")
                    .with_class("flex items-center gap-2")
                    .with_child(badge("bullish", "Bullish"))
                    .with_child(badge("bearish", "Bearish"))
                    .with_child(badge("neutral", "Neutral")),
            );

        Element::new("div")
            .with_class("market-bg text-white")
            .with_child(header)
            .with_child(
                Element::new("main")
                    .with_class("mx-auto px-6 py-8 grid gap-6")
                    .with_child(card),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_dashboard_classes() {
        let classes = SignalShell.render().class_names();
        for name in [
            "market-bg",
            "signal-card",
            "signal-button",
            "signal-badge-bullish",
            "signal-badge-bearish",
            "signal-badge-neutral",
            "gradient-text",
        ] {
            assert!(classes.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn test_render_is_static() {
        assert_eq!(SignalShell.render(), SignalShell.render());
    }
}
