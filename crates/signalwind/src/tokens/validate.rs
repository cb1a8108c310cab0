//! Literal value checks for design tokens.

use cssparser::{Parser, ParserInput, Token};

use super::color::Rgba;

/// Checks that a token value is a well-formed CSS component value list.
///
/// The value must be non-empty, must not contain bad strings or urls, and
/// must not close a bracket it never opened. Values starting with `#` must
/// be valid hex colors.
pub fn check_css_value(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("value is empty".to_string());
    }
    if trimmed.starts_with('#') && !trimmed.contains(char::is_whitespace) {
        return match Rgba::from_hex(trimmed) {
            Some(_) => Ok(()),
            None => Err(format!("`{}` is not a valid hex color", trimmed)),
        };
    }

    let mut input = ParserInput::new(trimmed);
    let mut parser = Parser::new(&mut input);
    loop {
        match parser.next_including_whitespace_and_comments() {
            Ok(Token::BadString(_)) => return Err("unterminated string".to_string()),
            Ok(Token::BadUrl(_)) => return Err("malformed url()".to_string()),
            Ok(Token::CloseParenthesis)
            | Ok(Token::CloseSquareBracket)
            | Ok(Token::CloseCurlyBracket) => {
                return Err("unbalanced closing bracket".to_string())
            }
            Ok(_) => {}
            Err(_) => break,
        }
    }
    Ok(())
}

/// Checks a keyframe offset selector: `from`, `to`, `N%`, or a comma list.
pub fn check_keyframe_offset(offset: &str) -> Result<(), String> {
    for part in offset.split(',') {
        let part = part.trim();
        if part == "from" || part == "to" {
            continue;
        }
        let percent = part
            .strip_suffix('%')
            .and_then(|n| n.parse::<f64>().ok())
            .ok_or_else(|| format!("`{}` is not a keyframe offset", part))?;
        if !(0.0..=100.0).contains(&percent) {
            return Err(format!("`{}` is outside 0%..100%", part));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_values() {
        for value in [
            "4.5rem",
            "#10b981",
            "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            "0 0 20px rgba(168, 85, 247, 0.8), 0 0 30px rgba(168, 85, 247, 0.4)",
            "pulse 3s ease-in-out infinite",
            "conic-gradient(from 180deg at 50% 50%, var(--tw-gradient-stops))",
            "cubic-bezier(0.4, 0, 0.2, 1)",
        ] {
            assert!(check_css_value(value).is_ok(), "{}", value);
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert!(check_css_value("   ").is_err());
    }

    #[test]
    fn test_rejects_bad_hex() {
        let err = check_css_value("#10b98").unwrap_err();
        assert!(err.contains("hex color"));
    }

    #[test]
    fn test_rejects_unbalanced_closing() {
        assert!(check_css_value("0 0 5px)").is_err());
    }

    #[test]
    fn test_rejects_unterminated_string() {
        assert!(check_css_value("\"Inter\n").is_err());
    }

    #[test]
    fn test_keyframe_offsets() {
        assert!(check_keyframe_offset("0%").is_ok());
        assert!(check_keyframe_offset("from").is_ok());
        assert!(check_keyframe_offset("0%, 100%").is_ok());
        assert!(check_keyframe_offset("75%, 100%").is_ok());
        assert!(check_keyframe_offset("150%").is_err());
        assert!(check_keyframe_offset("middle").is_err());
    }
}
