//! Keyframes rendering.

use serde::Serialize;

use crate::tokens::Keyframes;
use crate::utility::Declaration;

/// One frame of a rendered `@keyframes` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedFrame {
    pub offset: String,
    pub declarations: Vec<Declaration>,
}

/// A `@keyframes` block ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedKeyframes {
    pub name: String,
    pub frames: Vec<RenderedFrame>,
}

impl RenderedKeyframes {
    pub fn new(name: &str, frames: &Keyframes) -> Self {
        Self {
            name: name.to_string(),
            frames: frames
                .iter()
                .map(|(offset, properties)| RenderedFrame {
                    offset: offset.clone(),
                    declarations: properties
                        .iter()
                        .map(|(property, value)| {
                            Declaration::new(css_property_name(property), value.clone())
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Converts a camelCase property name to its CSS kebab-case form.
///
/// Names that are already kebab-case or custom properties pass through.
///
/// ```rust
/// use signalwind::theme::css_property_name;
///
/// assert_eq!(css_property_name("boxShadow"), "box-shadow");
/// assert_eq!(css_property_name("animationTimingFunction"), "animation-timing-function");
/// assert_eq!(css_property_name("--tw-gradient-to"), "--tw-gradient-to");
/// ```
pub fn css_property_name(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
