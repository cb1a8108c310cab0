//! Content scanning: finding class-name candidates in source files.
//!
//! The `content` list of a configuration holds glob patterns relative to a
//! project root. Patterns support `*` (within one path segment), `**/`
//! (any number of directories), `?` and `{a,b}` alternation. A pattern
//! prefixed with `!` excludes matching files.
//!
//! Scanning does not parse markup. Every run of class-name characters in a
//! matched file is a candidate; candidates that do not resolve to a utility
//! are dropped later without complaint.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Result};

/// Directories never descended into.
const SKIPPED_DIRS: &[&str] = &[".git", "node_modules", "target"];

static CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9_][A-Za-z0-9_:./%-]*").expect("candidate pattern is valid")
});

/// A compiled content glob.
#[derive(Debug, Clone)]
pub struct ContentPattern {
    source: String,
    regex: Regex,
    negated: bool,
}

impl ContentPattern {
    pub fn parse(pattern: &str) -> Result<Self> {
        let (negated, glob) = match pattern.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };
        let glob = glob.trim_start_matches("./");
        let invalid = |reason: &str| Error::ContentPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };
        if glob.is_empty() {
            return Err(invalid("empty pattern"));
        }
        let regex = Regex::new(&glob_to_regex(glob).map_err(invalid)?)
            .map_err(|err| invalid(&err.to_string()))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
            negated,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Matches a `/`-separated path relative to the scan root.
    pub fn is_match(&self, relative: &str) -> bool {
        self.regex.is_match(relative)
    }
}

fn glob_to_regex(glob: &str) -> std::result::Result<String, &'static str> {
    let mut out = String::from("^");
    let mut depth = 0usize;
    let mut chars = glob.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                if chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("(?:.*/)?");
                } else {
                    out.push_str(".*");
                }
            }
            '*' => out.push_str("[^/]*"),
            '?' => out.push_str("[^/]"),
            '{' => {
                depth += 1;
                out.push_str("(?:");
            }
            '}' if depth > 0 => {
                depth -= 1;
                out.push(')');
            }
            ',' if depth > 0 => out.push('|'),
            '}' => return Err("unmatched '}'"),
            other => out.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    if depth > 0 {
        return Err("unclosed '{'");
    }
    out.push('$');
    Ok(out)
}

/// The include and exclude patterns of a configuration.
#[derive(Debug, Clone, Default)]
pub struct ContentSources {
    include: Vec<ContentPattern>,
    exclude: Vec<ContentPattern>,
}

impl ContentSources {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut sources = Self::default();
        for pattern in patterns {
            let pattern = ContentPattern::parse(pattern.as_ref())?;
            if pattern.is_negated() {
                sources.exclude.push(pattern);
            } else {
                sources.include.push(pattern);
            }
        }
        Ok(sources)
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
    }

    pub fn matches(&self, relative: &str) -> bool {
        self.include.iter().any(|p| p.is_match(relative))
            && !self.exclude.iter().any(|p| p.is_match(relative))
    }

    /// Lists matching files under `root`, sorted by path.
    pub fn files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        if !self.is_empty() {
            walk(root, root, self, &mut files)?;
        }
        files.sort();
        Ok(files)
    }

    /// Reads every matching file and collects its candidates.
    pub fn scan(&self, root: &Path) -> Result<BTreeSet<String>> {
        scan_files(&self.files(root)?)
    }
}

/// Collects the candidates of already listed files.
pub fn scan_files(files: &[PathBuf]) -> Result<BTreeSet<String>> {
    let mut candidates = BTreeSet::new();
    for path in files {
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        let before = candidates.len();
        candidates.extend(extract_candidates(&source));
        tracing::debug!(
            path = %path.display(),
            new = candidates.len() - before,
            "scanned content file"
        );
    }
    tracing::info!(
        files = files.len(),
        candidates = candidates.len(),
        "content scan complete"
    );
    Ok(candidates)
}

fn walk(current: &Path, root: &Path, sources: &ContentSources, files: &mut Vec<PathBuf>) -> Result<()> {
    let io_err = |source: std::io::Error| Error::Io {
        path: current.to_path_buf(),
        source,
    };
    for entry in std::fs::read_dir(current).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_dir() {
            let skipped = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| SKIPPED_DIRS.contains(&name));
            if !skipped {
                walk(&path, root, sources, files)?;
            }
        } else if path.is_file() {
            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };
            let relative = relative
                .to_string_lossy()
                .replace(std::path::MAIN_SEPARATOR, "/");
            if sources.matches(&relative) {
                files.push(path);
            }
        }
    }
    Ok(())
}

/// Splits text into class-name candidates.
///
/// ```rust
/// use signalwind::content::extract_candidates;
///
/// let found: Vec<String> = extract_candidates(r#"<div class="signal-card hover:bg-black/30">"#).collect();
/// assert!(found.contains(&"signal-card".to_string()));
/// assert!(found.contains(&"hover:bg-black/30".to_string()));
/// ```
pub fn extract_candidates(source: &str) -> impl Iterator<Item = String> + '_ {
    CANDIDATE
        .find_iter(source)
        .map(|m| m.as_str().trim_end_matches(&['.', ':', '/'][..]))
        .filter(|candidate| !candidate.is_empty())
        .map(str::to_string)
}
