//! Stylesheet generation.
//!
//! The generator turns a resolved theme, a validated component registry and
//! a set of content candidates into a [`Stylesheet`]:
//!
//! 1. `@keyframes` blocks for every animation that is emitted, in order of
//!    first use.
//! 2. Component classes in registration order, one rule per variant.
//! 3. Utility classes used in content, sorted by class name, with
//!    responsive rules after plain ones in ascending screen order.
//!
//! Candidates that name no utility are skipped. Generation reads nothing
//! but its inputs, so the same inputs always give the same text.

mod render;

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

pub use render::escape_class;

use crate::compose::{ComponentRegistry, ResolvedComponent};
use crate::config::ThemeConfig;
use crate::content::ContentSources;
use crate::plugin::build_registry;
use crate::theme::{RenderedKeyframes, Theme};
use crate::tokens::TokenCategory;
use crate::utility::{Declaration, UtilityResolver};
use crate::Result;

/// One CSS rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub selector: String,
    pub media: Option<String>,
    pub declarations: Vec<Declaration>,
}

/// A generated stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stylesheet {
    pub keyframes: Vec<RenderedKeyframes>,
    pub components: Vec<Rule>,
    pub utilities: Vec<Rule>,
}

impl Stylesheet {
    /// Component rules followed by utility rules.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.components.iter().chain(self.utilities.iter())
    }

    pub fn rule(&self, selector: &str) -> Option<&Rule> {
        self.rules()
            .find(|rule| rule.selector == selector && rule.media.is_none())
    }

    /// Renders the stylesheet as CSS text.
    pub fn to_css(&self) -> Result<String> {
        render::render(self)
    }
}

/// Builds stylesheets from a theme and component registry.
#[derive(Debug, Clone, Copy)]
pub struct StylesheetGenerator<'a> {
    theme: &'a Theme,
    registry: &'a ComponentRegistry,
}

impl<'a> StylesheetGenerator<'a> {
    pub fn new(theme: &'a Theme, registry: &'a ComponentRegistry) -> Self {
        Self { theme, registry }
    }

    /// Generates a stylesheet for the given candidates.
    ///
    /// Every registered component is emitted whether or not it is used.
    pub fn generate<I, S>(&self, candidates: I) -> Result<Stylesheet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let resolver = UtilityResolver::new(self.theme);
        let resolved = self.registry.resolve(&resolver)?;

        let mut used_keyframes: Vec<String> = Vec::new();
        let mut note = |name: &str| {
            if !used_keyframes.iter().any(|k| k == name) {
                used_keyframes.push(name.to_string());
            }
        };

        let mut components = Vec::new();
        for component in &resolved {
            component.keyframes.iter().for_each(|k| note(k));
            components.extend(component_rules(component));
        }

        let candidates: BTreeSet<String> = candidates
            .into_iter()
            .map(|c| c.as_ref().to_string())
            .filter(|c| !self.registry.contains(c))
            .collect();
        let mut skipped = 0usize;
        let mut utilities = Vec::new();
        for candidate in &candidates {
            let Some(utility) = resolver.resolve_str(candidate) else {
                skipped += 1;
                continue;
            };
            if let Some(keyframes) = &utility.keyframes {
                note(keyframes);
            }
            utilities.push((
                self.screen_rank(utility.key.media.as_deref()),
                Rule {
                    selector: utility.key.selector(&format!(".{}", escape_class(candidate))),
                    media: utility.key.media,
                    declarations: utility.declarations,
                },
            ));
        }
        // Stable: ties keep candidate order.
        utilities.sort_by_key(|(rank, _)| *rank);
        let utilities: Vec<Rule> = utilities.into_iter().map(|(_, rule)| rule).collect();

        let mut keyframes = Vec::with_capacity(used_keyframes.len());
        for name in &used_keyframes {
            match self.theme.render_keyframes(name) {
                Some(block) => keyframes.push(block),
                None => tracing::warn!(keyframes = %name, "animation keyframes not defined"),
            }
        }

        tracing::debug!(
            keyframes = keyframes.len(),
            components = components.len(),
            utilities = utilities.len(),
            skipped,
            "generated stylesheet"
        );
        Ok(Stylesheet {
            keyframes,
            components,
            utilities,
        })
    }

    fn screen_rank(&self, media: Option<&str>) -> usize {
        let Some(media) = media else {
            return 0;
        };
        self.theme
            .table(TokenCategory::Screens)
            .and_then(|screens| {
                screens
                    .iter()
                    .position(|(_, width)| format!("(min-width: {})", width.to_css()) == media)
            })
            .map_or(usize::MAX, |index| index + 1)
    }
}

fn component_rules(component: &ResolvedComponent) -> impl Iterator<Item = Rule> + '_ {
    let base = format!(".{}", escape_class(&component.name));
    component.groups.iter().map(move |(key, declarations)| Rule {
        selector: key.selector(&base),
        media: key.media.clone(),
        declarations: declarations.clone(),
    })
}

/// Runs the whole pipeline for a configuration rooted at `root`.
///
/// `extra` candidates (class names of components rendered in code rather
/// than found in content files) are added to the scanned ones.
pub fn build<I, S>(config: &ThemeConfig, root: &Path, extra: I) -> Result<Stylesheet>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let theme = Theme::resolve(config)?;
    let registry = build_registry(config, &theme)?;
    let mut candidates = ContentSources::new(config.content.as_slice())?.scan(root)?;
    candidates.extend(extra.into_iter().map(Into::into));
    StylesheetGenerator::new(&theme, &registry).generate(&candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal() -> (Theme, ComponentRegistry) {
        let config = ThemeConfig::signal();
        let theme = Theme::resolve(&config).unwrap();
        let registry = build_registry(&config, &theme).unwrap();
        (theme, registry)
    }

    #[test]
    fn test_components_in_registration_order() {
        let (theme, registry) = signal();
        let sheet = StylesheetGenerator::new(&theme, &registry)
            .generate(Vec::<String>::new())
            .unwrap();
        let plain: Vec<&str> = sheet
            .components
            .iter()
            .filter(|r| !r.selector.contains(':'))
            .map(|r| r.selector.as_str())
            .collect();
        assert_eq!(
            plain,
            vec![
                ".signal-card",
                ".signal-button",
                ".signal-badge",
                ".signal-badge-bullish",
                ".signal-badge-bearish",
                ".signal-badge-neutral",
                ".gradient-text",
                ".market-bg",
            ]
        );
        assert!(sheet.rule(".signal-card:hover").is_some());
        assert!(sheet.utilities.is_empty());
    }

    #[test]
    fn test_signal_card_declarations() {
        let (theme, registry) = signal();
        let sheet = StylesheetGenerator::new(&theme, &registry)
            .generate(Vec::<String>::new())
            .unwrap();
        let card = sheet.rule(".signal-card").unwrap();
        assert_eq!(
            card.declarations[0],
            Declaration::new("background-color", "rgb(0 0 0 / 0.3)")
        );
        assert!(card
            .declarations
            .contains(&Declaration::new("transition-duration", "300ms")));
        let hover = sheet.rule(".signal-card:hover").unwrap();
        assert_eq!(
            hover.declarations,
            vec![Declaration::new("border-color", "rgb(192 132 252 / 0.4)")]
        );
    }

    #[test]
    fn test_utilities_sorted_and_filtered() {
        let (theme, registry) = signal();
        let sheet = StylesheetGenerator::new(&theme, &registry)
            .generate(["p-4", "md:p-8", "flex", "class", "div", "signal-card", "flex"])
            .unwrap();
        let selectors: Vec<&str> = sheet.utilities.iter().map(|r| r.selector.as_str()).collect();
        assert_eq!(selectors, vec![".flex", ".p-4", r".md\:p-8"]);
        assert_eq!(sheet.utilities[2].media.as_deref(), Some("(min-width: 768px)"));
    }

    #[test]
    fn test_keyframes_only_when_used() {
        let (theme, registry) = signal();
        let generator = StylesheetGenerator::new(&theme, &registry);
        let sheet = generator.generate(["p-4"]).unwrap();
        assert!(sheet.keyframes.is_empty());

        let sheet = generator
            .generate(["animate-fade-in", "animate-spin", "animate-none"])
            .unwrap();
        let names: Vec<&str> = sheet.keyframes.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(names, vec!["fadeIn", "spin"]);
    }

    #[test]
    fn test_css_text() {
        let (theme, registry) = signal();
        let css = StylesheetGenerator::new(&theme, &registry)
            .generate(["animate-glow", "hover:shadow-glow", "lg:grid-cols-3"])
            .unwrap()
            .to_css()
            .unwrap();
        assert!(css.starts_with("@keyframes glow {\n  0% {\n    box-shadow: "));
        assert!(css.contains(".signal-badge {\n  display: inline-flex;\n"));
        assert!(css.contains(".hover\\:shadow-glow:hover {\n  box-shadow: "));
        assert!(css.contains(
            "@media (min-width: 1024px) {\n  .lg\\:grid-cols-3 {\n    grid-template-columns: repeat(3, minmax(0, 1fr));\n  }\n}"
        ));
        assert!(css.ends_with("}\n"));
        assert!(!css.contains("\n\n\n"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let (theme, registry) = signal();
        let generator = StylesheetGenerator::new(&theme, &registry);
        let candidates = ["text-bullish", "hover:bg-purple-700", "p-18", "animate-slide-up"];
        let first = generator.generate(candidates).unwrap().to_css().unwrap();
        let second = generator
            .generate(candidates.iter().rev())
            .unwrap()
            .to_css()
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_scans_content() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), r#"<main class="p-6 gap-4">"#).unwrap();
        let sheet = build(&ThemeConfig::signal(), dir.path(), ["text-neutral"]).unwrap();
        assert!(sheet.rule(".p-6").is_some());
        assert!(sheet.rule(".gap-4").is_some());
        assert!(sheet.rule(".text-neutral").is_some());
    }
}
