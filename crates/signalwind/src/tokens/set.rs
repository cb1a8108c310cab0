//! The design token set.

use indexmap::IndexMap;
use serde::Serialize;

use super::{TokenCategory, TokenMap, TokenValue};

/// Keyframes of one animation: offset selector to property bag.
pub type Keyframes = TokenMap<TokenMap<String>>;

/// A mapping from category to token table, plus named keyframes.
///
/// This is the shape shared by the base token set and the resolved
/// [`Theme`](crate::Theme). Tables are created lazily, so an absent category
/// and an empty one behave the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenSet {
    tables: IndexMap<TokenCategory, TokenMap<TokenValue>>,
    keyframes: TokenMap<Keyframes>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table for a category, if it has any tokens.
    pub fn table(&self, category: TokenCategory) -> Option<&TokenMap<TokenValue>> {
        self.tables.get(&category).filter(|table| !table.is_empty())
    }

    /// Looks up a single token.
    pub fn get(&self, category: TokenCategory, name: &str) -> Option<&TokenValue> {
        self.tables.get(&category).and_then(|table| table.get(name))
    }

    /// Sets a token, replacing any existing value of that name.
    pub fn set(&mut self, category: TokenCategory, name: impl Into<String>, value: TokenValue) {
        self.tables.entry(category).or_default().upsert(name, value);
    }

    /// Sets a keyframes definition, replacing any existing one of that name.
    pub fn set_keyframes(&mut self, name: impl Into<String>, frames: Keyframes) {
        self.keyframes.upsert(name, frames);
    }

    pub fn keyframes(&self) -> &TokenMap<Keyframes> {
        &self.keyframes
    }

    /// Iterates non-empty tables in canonical category order.
    pub fn tables(&self) -> impl Iterator<Item = (TokenCategory, &TokenMap<TokenValue>)> {
        TokenCategory::ALL
            .into_iter()
            .filter_map(|category| self.table(category).map(|table| (category, table)))
    }

    /// Total number of tokens across all categories, keyframes excluded.
    pub fn token_count(&self) -> usize {
        self.tables.values().map(TokenMap::len).sum()
    }

    /// Merges `other` over `self`: new names are added, colliding names
    /// take the value from `other`.
    pub fn merge(&mut self, other: &TokenSet) {
        for (category, table) in other.tables() {
            for (name, value) in table {
                self.set(category, name.clone(), value.clone());
            }
        }
        for (name, frames) in other.keyframes() {
            self.set_keyframes(name.clone(), frames.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut set = TokenSet::new();
        set.set(TokenCategory::Spacing, "18", "4.5rem".into());
        assert_eq!(
            set.get(TokenCategory::Spacing, "18"),
            Some(&TokenValue::from("4.5rem"))
        );
        assert!(set.get(TokenCategory::Colors, "18").is_none());
    }

    #[test]
    fn test_merge_overrides_only_colliding_names() {
        let mut base = TokenSet::new();
        base.set(TokenCategory::Colors, "purple-700", "#7e22ce".into());
        base.set(TokenCategory::Colors, "purple-800", "#6b21a8".into());

        let mut extension = TokenSet::new();
        extension.set(TokenCategory::Colors, "purple-700", "#7c3aed".into());
        extension.set(TokenCategory::Colors, "bullish", "#10b981".into());

        base.merge(&extension);
        assert_eq!(
            base.get(TokenCategory::Colors, "purple-700"),
            Some(&TokenValue::from("#7c3aed"))
        );
        assert_eq!(
            base.get(TokenCategory::Colors, "purple-800"),
            Some(&TokenValue::from("#6b21a8"))
        );
        assert!(base.get(TokenCategory::Colors, "bullish").is_some());
        assert_eq!(base.token_count(), 3);
    }

    #[test]
    fn test_empty_table_is_absent() {
        let set = TokenSet::new();
        assert!(set.table(TokenCategory::Blur).is_none());
        assert_eq!(set.tables().count(), 0);
    }
}
