//! Configuration errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::tokens::TokenCategory;

/// Error raised while loading or resolving a theme configuration.
///
/// Every variant is fatal for a build: configuration mistakes fail loudly
/// instead of degrading into a partial stylesheet.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse YAML config")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("failed to parse JSON config")]
    ParseJson(#[from] serde_json::Error),
    #[error("unsupported config format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },
    #[error("unknown plugin `{name}`")]
    UnknownPlugin { name: String },
    #[error("invalid utility selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("invalid {category} token `{name}`: {reason}")]
    InvalidToken {
        category: TokenCategory,
        name: String,
        reason: String,
    },
    #[error("duplicate {category} token `{name}`")]
    DuplicateToken {
        category: TokenCategory,
        name: String,
    },
    #[error("animation `{animation}` uses undefined keyframes `{keyframes}`")]
    UnknownKeyframes {
        animation: String,
        keyframes: String,
    },
    #[error("invalid keyframes `{keyframes}`: {reason}")]
    InvalidKeyframes { keyframes: String, reason: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_token_display() {
        let err = ConfigError::InvalidToken {
            category: TokenCategory::Colors,
            name: "bullish".to_string(),
            reason: "`#10b98` is not a valid hex color".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("colors"));
        assert!(msg.contains("bullish"));
        assert!(msg.contains("#10b98"));
    }

    #[test]
    fn test_unknown_keyframes_display() {
        let err = ConfigError::UnknownKeyframes {
            animation: "fade-in".to_string(),
            keyframes: "fadeIn".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "animation `fade-in` uses undefined keyframes `fadeIn`"
        );
    }
}
