//! Variants: state and responsive prefixes such as `hover:` and `md:`.

use serde::Serialize;

use crate::theme::Theme;
use crate::tokens::TokenCategory;

const PSEUDO_VARIANTS: &[(&str, &str)] = &[
    ("hover", ":hover"),
    ("focus", ":focus"),
    ("focus-visible", ":focus-visible"),
    ("active", ":active"),
    ("disabled", ":disabled"),
    ("first", ":first-child"),
    ("last", ":last-child"),
];

/// Where a group of declarations applies: a pseudo-class suffix on the
/// selector and an optional media query.
///
/// The empty key is the plain rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VariantKey {
    pub pseudo: String,
    pub media: Option<String>,
}

impl VariantKey {
    pub fn base() -> Self {
        Self::default()
    }

    pub fn is_base(&self) -> bool {
        self.pseudo.is_empty() && self.media.is_none()
    }

    /// Builds a key from variant names, in the order written.
    ///
    /// Returns `None` for an unknown variant or for two responsive variants
    /// on one utility.
    pub fn from_variants<S: AsRef<str>>(variants: &[S], theme: &Theme) -> Option<Self> {
        let mut key = VariantKey::base();
        for variant in variants {
            let variant = variant.as_ref();
            if let Some((_, pseudo)) = PSEUDO_VARIANTS.iter().find(|(name, _)| *name == variant) {
                key.pseudo.push_str(pseudo);
            } else if let Some(width) = theme.value(TokenCategory::Screens, variant) {
                if key.media.is_some() {
                    return None;
                }
                key.media = Some(format!("(min-width: {})", width));
            } else {
                return None;
            }
        }
        Some(key)
    }

    /// Applies the pseudo-class suffix to a selector.
    pub fn selector(&self, base: &str) -> String {
        format!("{}{}", base, self.pseudo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pseudo_variants_chain() {
        let theme = Theme::base();
        let key = VariantKey::from_variants(&["hover", "focus"], &theme).unwrap();
        assert_eq!(key.pseudo, ":hover:focus");
        assert_eq!(key.media, None);
        assert_eq!(key.selector(".btn"), ".btn:hover:focus");
    }

    #[test]
    fn test_screen_variant() {
        let theme = Theme::base();
        let key = VariantKey::from_variants(&["md", "hover"], &theme).unwrap();
        assert_eq!(key.media.as_deref(), Some("(min-width: 768px)"));
        assert_eq!(key.pseudo, ":hover");
    }

    #[test]
    fn test_unknown_or_doubled_variants() {
        let theme = Theme::base();
        assert!(VariantKey::from_variants(&["dark"], &theme).is_none());
        assert!(VariantKey::from_variants(&["md", "lg"], &theme).is_none());
    }

    #[test]
    fn test_empty_is_base() {
        let theme = Theme::base();
        let none: [&str; 0] = [];
        assert!(VariantKey::from_variants(&none, &theme).unwrap().is_base());
    }
}
