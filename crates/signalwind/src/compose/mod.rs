//! Composed classes: named classes built from ordered lists of utilities
//! and other composed classes.
//!
//! Composition forms a graph. A registry is valid when every reference
//! resolves (to a registered class first, then to an atomic utility) and no
//! class reaches itself. Resolution flattens each class to declarations,
//! later references overriding earlier ones property by property.

mod decl;
mod error;
mod registry;

pub use decl::{ComponentDecl, APPLY_DIRECTIVE};
pub use error::CompositionError;
pub use registry::{ComponentRegistry, ResolvedComponent};
