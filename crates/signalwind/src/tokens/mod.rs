//! Design tokens: categories, values, tables and the base set.
//!
//! - [`TokenCategory`]: the semantic category of a token
//! - [`TokenValue`]: a literal CSS value or a font stack
//! - [`TokenMap`]: an ordered, duplicate-rejecting name to value map
//! - [`TokenSet`]: category tables plus named keyframes
//! - [`base_tokens`]: the stock vocabulary every theme extends

mod base;
mod category;
mod color;
mod map;
mod set;
mod validate;
mod value;

pub(crate) use base::keyframes_from;
pub use base::{base_tokens, COLOR_STEPS};
pub use category::TokenCategory;
pub use color::{format_fraction, is_hex6, Rgba};
pub use map::TokenMap;
pub use set::{Keyframes, TokenSet};
pub use validate::{check_css_value, check_keyframe_offset};
pub use value::TokenValue;
