//! Hex color parsing and opacity application.

/// An sRGB color with optional alpha, parsed from a hex literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<u8>,
}

impl Rgba {
    /// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// ```rust
    /// use signalwind::tokens::Rgba;
    ///
    /// let c = Rgba::from_hex("#a855f7").unwrap();
    /// assert_eq!((c.r, c.g, c.b), (168, 85, 247));
    /// assert!(Rgba::from_hex("#12345").is_none());
    /// ```
    pub fn from_hex(value: &str) -> Option<Rgba> {
        let digits = value.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let expand = |c: &str| u8::from_str_radix(&c.repeat(2), 16).ok();
        let pair = |c: &str| u8::from_str_radix(c, 16).ok();
        match digits.len() {
            3 => Some(Rgba {
                r: expand(&digits[0..1])?,
                g: expand(&digits[1..2])?,
                b: expand(&digits[2..3])?,
                a: None,
            }),
            4 => Some(Rgba {
                r: expand(&digits[0..1])?,
                g: expand(&digits[1..2])?,
                b: expand(&digits[2..3])?,
                a: Some(expand(&digits[3..4])?),
            }),
            6 => Some(Rgba {
                r: pair(&digits[0..2])?,
                g: pair(&digits[2..4])?,
                b: pair(&digits[4..6])?,
                a: None,
            }),
            8 => Some(Rgba {
                r: pair(&digits[0..2])?,
                g: pair(&digits[2..4])?,
                b: pair(&digits[4..6])?,
                a: Some(pair(&digits[6..8])?),
            }),
            _ => None,
        }
    }

    /// Renders the color with the given opacity percentage (0-100).
    ///
    /// Colors that already carry an alpha channel cannot take a modifier.
    pub fn with_opacity(&self, percent: u8) -> Option<String> {
        if self.a.is_some() || percent > 100 {
            return None;
        }
        Some(format!(
            "rgb({} {} {} / {})",
            self.r,
            self.g,
            self.b,
            format_fraction(percent)
        ))
    }

    /// Renders the fully transparent form used as an implicit gradient end.
    pub fn transparent(&self) -> String {
        format!("rgb({} {} {} / 0)", self.r, self.g, self.b)
    }
}

/// Formats a percentage as a CSS fraction: `30` -> `0.3`, `100` -> `1`.
pub fn format_fraction(percent: u8) -> String {
    format!("{}", f64::from(percent) / 100.0)
}

/// Returns `true` if the value is exactly a six-digit hex color.
pub fn is_hex6(value: &str) -> bool {
    value.len() == 7 && value.starts_with('#') && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_hex_expands() {
        let black = Rgba::from_hex("#000").unwrap();
        assert_eq!((black.r, black.g, black.b, black.a), (0, 0, 0, None));
        let white = Rgba::from_hex("#fff").unwrap();
        assert_eq!((white.r, white.g, white.b), (255, 255, 255));
    }

    #[test]
    fn test_alpha_forms() {
        assert_eq!(Rgba::from_hex("#0008").unwrap().a, Some(0x88));
        assert_eq!(Rgba::from_hex("#10b98180").unwrap().a, Some(0x80));
    }

    #[test]
    fn test_invalid_hex() {
        assert!(Rgba::from_hex("10b981").is_none());
        assert!(Rgba::from_hex("#10b98").is_none());
        assert!(Rgba::from_hex("#zzzzzz").is_none());
        assert!(Rgba::from_hex("#").is_none());
    }

    #[test]
    fn test_with_opacity() {
        let black = Rgba::from_hex("#000000").unwrap();
        assert_eq!(black.with_opacity(30).as_deref(), Some("rgb(0 0 0 / 0.3)"));
        assert_eq!(black.with_opacity(5).as_deref(), Some("rgb(0 0 0 / 0.05)"));
        assert_eq!(black.with_opacity(100).as_deref(), Some("rgb(0 0 0 / 1)"));
        assert_eq!(black.with_opacity(101), None);
    }

    #[test]
    fn test_with_opacity_rejects_existing_alpha() {
        let c = Rgba::from_hex("#00000080").unwrap();
        assert_eq!(c.with_opacity(50), None);
    }

    #[test]
    fn test_is_hex6() {
        assert!(is_hex6("#f8fafc"));
        assert!(!is_hex6("#fff"));
        assert!(!is_hex6("f8fafcc"));
    }

    proptest! {
        #[test]
        fn prop_six_digit_hex_parses(r: u8, g: u8, b: u8) {
            let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
            let parsed = Rgba::from_hex(&hex).unwrap();
            prop_assert_eq!((parsed.r, parsed.g, parsed.b, parsed.a), (r, g, b, None));
            prop_assert!(is_hex6(&hex));
        }
    }
}
