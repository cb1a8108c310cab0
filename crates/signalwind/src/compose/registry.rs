//! Registry of composed classes.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use super::{ComponentDecl, CompositionError};
use crate::utility::{merge_declarations, Declaration, UtilityResolver, VariantKey};

/// A composed class flattened to declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedComponent {
    pub name: String,
    /// Declarations per variant, in order of first appearance. The plain
    /// rule comes first when present.
    pub groups: Vec<(VariantKey, Vec<Declaration>)>,
    /// Keyframes played by animations inside the composition.
    pub keyframes: Vec<String>,
}

impl ResolvedComponent {
    /// Declarations of the plain (variant-free) rule.
    pub fn base_declarations(&self) -> &[Declaration] {
        self.declarations(&VariantKey::base())
    }

    pub fn declarations(&self, key: &VariantKey) -> &[Declaration] {
        self.groups
            .iter()
            .find(|(group, _)| group == key)
            .map(|(_, declarations)| declarations.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default)]
struct Flattened {
    groups: IndexMap<VariantKey, Vec<Declaration>>,
    keyframes: Vec<String>,
}

impl Flattened {
    fn absorb(&mut self, key: VariantKey, declarations: &[Declaration]) {
        merge_declarations(self.groups.entry(key).or_default(), declarations);
    }

    fn note_keyframes(&mut self, name: &str) {
        if !self.keyframes.iter().any(|k| k == name) {
            self.keyframes.push(name.to_string());
        }
    }
}

/// Classes composed from other rules, in registration order.
///
/// References are resolved against the registry first and the theme's
/// atomic utilities second. Use [`validate`](Self::validate) to check that
/// every reference resolves and no class reaches itself.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: IndexMap<String, ComponentDecl>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ComponentDecl> {
        self.components.get(name)
    }

    /// Class names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Registers a batch of declarations, all or nothing.
    ///
    /// Fails without registering anything if a name repeats within the
    /// batch or is already registered.
    pub fn insert_batch(&mut self, batch: Vec<ComponentDecl>) -> Result<(), CompositionError> {
        let mut seen = HashSet::new();
        for decl in &batch {
            if self.contains(&decl.name) || !seen.insert(decl.name.as_str()) {
                return Err(CompositionError::DuplicateUtility {
                    name: decl.name.clone(),
                });
            }
        }
        for decl in batch {
            self.components.insert(decl.name.clone(), decl);
        }
        Ok(())
    }

    /// Checks that every reference resolves and that composition is acyclic.
    pub fn validate(&self, resolver: &UtilityResolver<'_>) -> Result<(), CompositionError> {
        for decl in self.components.values() {
            for reference in &decl.references {
                if !self.contains(reference) && resolver.resolve_str(reference).is_none() {
                    return Err(CompositionError::UnresolvedReference {
                        from: decl.name.clone(),
                        to: reference.clone(),
                    });
                }
            }
        }

        for name in self.components.keys() {
            let mut path = vec![name.clone()];
            self.check_cycle(name, &mut path)?;
        }
        Ok(())
    }

    fn check_cycle(&self, current: &str, path: &mut Vec<String>) -> Result<(), CompositionError> {
        let Some(decl) = self.components.get(current) else {
            return Ok(());
        };
        for reference in decl.references.iter().filter(|r| self.contains(r)) {
            if path.iter().any(|visited| visited == reference) {
                let mut cycle = path.clone();
                cycle.push(reference.clone());
                return Err(CompositionError::CycleDetected { path: cycle });
            }
            path.push(reference.clone());
            self.check_cycle(reference, path)?;
            path.pop();
        }
        Ok(())
    }

    /// Validates, then flattens every class in registration order.
    pub fn resolve(
        &self,
        resolver: &UtilityResolver<'_>,
    ) -> Result<Vec<ResolvedComponent>, CompositionError> {
        self.validate(resolver)?;

        let mut memo: HashMap<String, Flattened> = HashMap::new();
        let mut resolved = Vec::with_capacity(self.components.len());
        for name in self.components.keys() {
            let flat = self.flatten(name, resolver, &mut memo)?;
            let mut groups: Vec<(VariantKey, Vec<Declaration>)> = flat.groups.into_iter().collect();
            groups.sort_by_key(|(key, _)| !key.is_base());
            tracing::debug!(
                class = %name,
                rules = groups.len(),
                "resolved composed class"
            );
            resolved.push(ResolvedComponent {
                name: name.clone(),
                groups,
                keyframes: flat.keyframes,
            });
        }
        Ok(resolved)
    }

    fn flatten(
        &self,
        name: &str,
        resolver: &UtilityResolver<'_>,
        memo: &mut HashMap<String, Flattened>,
    ) -> Result<Flattened, CompositionError> {
        if let Some(done) = memo.get(name) {
            return Ok(done.clone());
        }
        let mut flat = Flattened::default();
        if let Some(decl) = self.components.get(name) {
            for reference in &decl.references {
                if self.contains(reference) {
                    let inner = self.flatten(reference, resolver, memo)?;
                    for (key, declarations) in &inner.groups {
                        flat.absorb(key.clone(), declarations);
                    }
                    for keyframes in &inner.keyframes {
                        flat.note_keyframes(keyframes);
                    }
                } else {
                    let utility = resolver.resolve_str(reference).ok_or_else(|| {
                        CompositionError::UnresolvedReference {
                            from: decl.name.clone(),
                            to: reference.clone(),
                        }
                    })?;
                    flat.absorb(utility.key, &utility.declarations);
                    if let Some(keyframes) = &utility.keyframes {
                        flat.note_keyframes(keyframes);
                    }
                }
            }
        }
        memo.insert(name.to_string(), flat.clone());
        Ok(flat)
    }
}
