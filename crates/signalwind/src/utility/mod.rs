//! Atomic utility classes.
//!
//! A utility class name such as `hover:bg-black/30` is parsed into a
//! [`Candidate`] (variants, utility, opacity modifier) and resolved against
//! a [`Theme`](crate::Theme) by [`UtilityResolver`] into declarations keyed
//! by [`VariantKey`].
//!
//! Names that do not resolve are not errors here: content scanning produces
//! plenty of ordinary words. Composition turns an unresolved reference into
//! a configuration error.

mod candidate;
mod declaration;
mod resolve;
mod variant;

pub use candidate::Candidate;
pub use declaration::{merge_declarations, Declaration};
pub use resolve::{ResolvedUtility, UtilityResolver};
pub use variant::VariantKey;
