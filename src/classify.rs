//! File classification rules.
//!
//! Staged paths are routed to checks by anchored regex matching. Rules
//! for the debug-code scanner additionally carry the snippets forbidden
//! in that category's staged content.

use regex::Regex;

/// A named file category with a path predicate.
#[derive(Debug, Clone)]
pub struct FilePatternRule {
    name: &'static str,
    pattern: Regex,
    forbidden: Vec<Regex>,
}

impl FilePatternRule {
    /// Compile a rule. Patterns are fixed at startup, so a bad pattern is
    /// a programming error and panics immediately.
    pub fn new(name: &'static str, pattern: &str, forbidden: &[&str]) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap_or_else(|e| panic!("bad pattern for {name}: {e}")),
            forbidden: forbidden
                .iter()
                .map(|s| Regex::new(s).unwrap_or_else(|e| panic!("bad snippet for {name}: {e}")))
                .collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the path belongs to this category. Total: an unmatched
    /// path yields false, never an error.
    pub fn matches(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }

    /// Forbidden snippets for debug-code groups; empty for plain
    /// routing categories.
    pub fn forbidden(&self) -> &[Regex] {
        &self.forbidden
    }
}

/// PHP source file.
pub fn php() -> FilePatternRule {
    FilePatternRule::new("php", r"\.php$", &[])
}

/// PHP source file under the source directory.
pub fn php_in_src() -> FilePatternRule {
    FilePatternRule::new("php in src", r"^src/.*\.php$", &[])
}

/// Files the syntax linter understands.
pub fn php_or_inc() -> FilePatternRule {
    FilePatternRule::new("php or inc", r"\.(php|inc)$", &[])
}
