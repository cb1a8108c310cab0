//! Composed class declarations.

use super::CompositionError;

/// The directive that introduces a composition shorthand.
pub const APPLY_DIRECTIVE: &str = "@apply";

/// A class defined as an ordered composition of other rules.
///
/// References are kept exactly as written (`hover:border-purple-400/40`,
/// `signal-badge`); they are resolved later against the registry and theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDecl {
    pub name: String,
    pub references: Vec<String>,
}

impl ComponentDecl {
    pub fn new<I, S>(name: impl Into<String>, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            references: references.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses `@apply a b c` shorthand into a declaration.
    ///
    /// ```rust
    /// use signalwind::ComponentDecl;
    ///
    /// let decl = ComponentDecl::parse_apply("gradient-text", "@apply bg-clip-text text-transparent").unwrap();
    /// assert_eq!(decl.references, vec!["bg-clip-text", "text-transparent"]);
    /// ```
    pub fn parse_apply(name: &str, shorthand: &str) -> Result<Self, CompositionError> {
        let malformed = || CompositionError::MalformedShorthand {
            name: name.to_string(),
            shorthand: shorthand.to_string(),
        };
        let body = shorthand
            .trim()
            .strip_prefix(APPLY_DIRECTIVE)
            .ok_or_else(malformed)?;
        if !body.is_empty() && !body.starts_with(char::is_whitespace) {
            return Err(malformed());
        }
        let references: Vec<&str> = body.split_whitespace().collect();
        if references.is_empty() {
            return Err(CompositionError::EmptyComposition {
                name: name.to_string(),
            });
        }
        Ok(Self::new(name, references))
    }
}
