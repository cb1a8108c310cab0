//! The built-in dashboard component classes.

use super::{Plugin, PluginApi};
use crate::Result;

/// Configuration name of [`SignalComponents`].
pub const SIGNAL_COMPONENTS: &str = "signal-components";

const COMPONENTS: &[(&str, &str)] = &[
    (
        ".signal-card",
        "@apply bg-black/30 backdrop-blur-lg rounded-xl border border-purple-500/20 hover:border-purple-400/40 transition-all duration-300",
    ),
    (
        ".signal-button",
        "@apply bg-gradient-to-r from-purple-600 to-pink-600 text-white font-medium rounded-lg transition-all duration-200 hover:from-purple-700 hover:to-pink-700",
    ),
    (
        ".signal-badge",
        "@apply inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium",
    ),
    (
        ".signal-badge-bullish",
        "@apply signal-badge bg-green-400/20 text-green-400 border border-green-400/30",
    ),
    (
        ".signal-badge-bearish",
        "@apply signal-badge bg-red-400/20 text-red-400 border border-red-400/30",
    ),
    (
        ".signal-badge-neutral",
        "@apply signal-badge bg-yellow-400/20 text-yellow-400 border border-yellow-400/30",
    ),
    (
        ".gradient-text",
        "@apply bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent",
    ),
    (
        ".market-bg",
        "@apply bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 min-h-screen",
    ),
];

/// Cards, buttons, trading badges and gradient helpers for the dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalComponents;

impl SignalComponents {
    /// The class names this plugin registers, in order.
    pub fn class_names() -> impl Iterator<Item = &'static str> {
        COMPONENTS
            .iter()
            .map(|(selector, _)| selector.trim_start_matches('.'))
    }
}

impl Plugin for SignalComponents {
    fn name(&self) -> &str {
        SIGNAL_COMPONENTS
    }

    fn register(&self, api: &mut PluginApi<'_>) -> Result<()> {
        api.add_utilities(COMPONENTS.iter().copied())
    }
}
