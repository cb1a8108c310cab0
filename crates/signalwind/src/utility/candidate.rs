//! Parsing class-name candidates.

/// A class name split into variants, utility root and opacity modifier.
///
/// `md:hover:border-purple-400/40` parses to variants `["md", "hover"]`,
/// utility `border-purple-400` and modifier `40`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub raw: String,
    pub variants: Vec<String>,
    pub utility: String,
    pub modifier: Option<u8>,
}

impl Candidate {
    /// Parses a candidate, returning `None` if it cannot be a class name.
    pub fn parse(raw: &str) -> Option<Candidate> {
        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            return None;
        }
        let mut parts: Vec<&str> = raw.split(':').collect();
        let last = parts.pop()?;
        if last.is_empty() || parts.iter().any(|variant| variant.is_empty()) {
            return None;
        }

        let (utility, modifier) = match last.rsplit_once('/') {
            Some((utility, modifier)) => {
                let percent = modifier
                    .parse::<u8>()
                    .ok()
                    .filter(|p| *p <= 100 && modifier.chars().all(|c| c.is_ascii_digit()))?;
                (utility, Some(percent))
            }
            None => (last, None),
        };
        if utility.is_empty() || !utility.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            return None;
        }

        Some(Candidate {
            raw: raw.to_string(),
            variants: parts.into_iter().map(str::to_string).collect(),
            utility: utility.to_string(),
            modifier,
        })
    }
}
