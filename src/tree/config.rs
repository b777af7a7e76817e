//! Configuration for tree generation

/// Directory names excluded by default unless strict mode is enabled.
///
/// Matched against the exact basename, case-sensitively. Not a glob.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", "venv"];

/// Configuration for tree generation behavior.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    /// Suppress file entries from output and from counting.
    pub dirs_only: bool,
    /// Disable the default exclusion set, making `.git`/`venv` visible.
    pub strict: bool,
    /// Extra directory basenames to exclude, in addition to the defaults.
    /// Unlike the defaults, these still apply in strict mode.
    pub ignore: Vec<String>,
    /// Descend only this many levels; `None` means unlimited.
    pub max_depth: Option<usize>,
}

impl TreeConfig {
    /// Check whether a directory basename is excluded under this config.
    pub fn is_excluded(&self, name: &str) -> bool {
        if !self.strict && DEFAULT_EXCLUDED_DIRS.contains(&name) {
            return true;
        }
        self.ignore.iter().any(|n| n == name)
    }
}
