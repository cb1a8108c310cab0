//! Composition errors.

/// Error returned when a set of composed utility classes is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// A class references a name that is neither a composed class nor a
    /// utility the theme can resolve.
    UnresolvedReference { from: String, to: String },
    /// A class transitively references itself.
    CycleDetected { path: Vec<String> },
    /// A class name was registered twice.
    DuplicateUtility { name: String },
    /// A class composes nothing.
    EmptyComposition { name: String },
    /// A shorthand string is not an `@apply` directive.
    MalformedShorthand { name: String, shorthand: String },
}

impl std::fmt::Display for CompositionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompositionError::UnresolvedReference { from, to } => {
                write!(f, "class '{}' applies unknown utility '{}'", from, to)
            }
            CompositionError::CycleDetected { path } => {
                write!(f, "cycle detected in class composition: {}", path.join(" -> "))
            }
            CompositionError::DuplicateUtility { name } => {
                write!(f, "class '{}' is registered more than once", name)
            }
            CompositionError::EmptyComposition { name } => {
                write!(f, "class '{}' applies no utilities", name)
            }
            CompositionError::MalformedShorthand { name, shorthand } => {
                write!(
                    f,
                    "class '{}' has malformed shorthand '{}' (expected '@apply ...')",
                    name, shorthand
                )
            }
        }
    }
}

impl std::error::Error for CompositionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_reference_names_both_classes() {
        let err = CompositionError::UnresolvedReference {
            from: "signal-card".to_string(),
            to: "bg-blak/30".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "class 'signal-card' applies unknown utility 'bg-blak/30'"
        );
    }

    #[test]
    fn test_badge_cycle_lists_the_loop() {
        let err = CompositionError::CycleDetected {
            path: vec![
                "signal-badge-bullish".to_string(),
                "signal-badge".to_string(),
                "signal-badge-bullish".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "cycle detected in class composition: \
             signal-badge-bullish -> signal-badge -> signal-badge-bullish"
        );
    }

    #[test]
    fn test_malformed_shorthand_shows_expected_form() {
        let err = CompositionError::MalformedShorthand {
            name: "signal-button".to_string(),
            shorthand: "px-4 py-2 rounded-lg".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "class 'signal-button' has malformed shorthand 'px-4 py-2 rounded-lg' \
             (expected '@apply ...')"
        );
    }

    #[test]
    fn test_empty_and_duplicate_messages() {
        let empty = CompositionError::EmptyComposition {
            name: "market-bg".to_string(),
        };
        assert_eq!(empty.to_string(), "class 'market-bg' applies no utilities");
        let duplicate = CompositionError::DuplicateUtility {
            name: "gradient-text".to_string(),
        };
        assert_eq!(
            duplicate.to_string(),
            "class 'gradient-text' is registered more than once"
        );
    }
}
