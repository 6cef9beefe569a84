//! A deliberately simplistic ignore predicate over paths (§4.2).
//!
//! This is substring matching, not a second glob engine: it exists to skip
//! things like `.dotfolder` or `.png` without pulling in gitignore-style
//! semantics that don't fit the rest of this tool's model.

/// A `|`-separated set of case-insensitive substring fragments.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    fragments: Vec<String>,
}

impl IgnoreMatcher {
    /// Builds a matcher from a `|`-separated pattern. An empty string
    /// means "match nothing".
    pub fn new(pattern: &str) -> Self {
        if pattern.is_empty() {
            return Self { fragments: Vec::new() };
        }

        Self {
            fragments: pattern.split('|').map(|f| f.to_uppercase()).collect(),
        }
    }

    /// Returns true iff any fragment appears as a case-insensitive
    /// substring of `s`.
    pub fn matches(&self, s: &str) -> bool {
        if self.fragments.is_empty() {
            return false;
        }

        let upper = s.to_uppercase();
        self.fragments.iter().any(|f| upper.contains(f.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_matches_nothing() {
        let m = IgnoreMatcher::new("");
        assert!(!m.matches("anything"));
        assert!(!m.matches(""));
    }

    #[test]
    fn single_fragment_is_case_insensitive() {
        let m = IgnoreMatcher::new(".png");
        assert!(m.matches("photo.PNG"));
        assert!(m.matches("photo.png"));
        assert!(!m.matches("photo.jpg"));
    }

    #[test]
    fn multiple_fragments_are_or_ed() {
        let m = IgnoreMatcher::new(".dotfolder|.png|.lock");
        assert!(m.matches("/repo/.dotfolder/x"));
        assert!(m.matches("icon.png"));
        assert!(m.matches("Cargo.lock"));
        assert!(!m.matches("main.rs"));
    }
}
