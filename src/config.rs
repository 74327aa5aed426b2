//! Registry Configuration
//!
//! Discovery constants and path helpers for the skill registry.

use std::path::PathBuf;

/// File extension of eligible skill documents.
pub const SKILL_FILE_EXTENSION: &str = "md";

/// A frontmatter block is delimited by lines that are exactly this marker.
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Conventional default root for skill documents: `~/.skillbase/skills`.
pub fn default_skills_dir() -> String {
    "~/.skillbase/skills".to_string()
}

/// Resolve a path that may start with `~` to an absolute path.
///
/// If the path starts with `~`, the tilde is replaced with the user's home
/// directory. Otherwise the path is returned as-is.
pub fn resolve_path(p: &str) -> String {
    if let Some(rest) = p.strip_prefix('~') {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/root"));
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        home.join(rest).to_string_lossy().to_string()
    } else {
        p.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_with_tilde() {
        let resolved = resolve_path("~/some/path");
        assert!(!resolved.starts_with('~'));
        assert!(resolved.ends_with("some/path"));
    }

    #[test]
    fn test_resolve_path_without_tilde() {
        let path = "/absolute/path/to/file";
        assert_eq!(resolve_path(path), path);
    }

    #[test]
    fn test_default_skills_dir_is_tilde_relative() {
        let dir = default_skills_dir();
        assert!(dir.starts_with('~'));
        assert!(!resolve_path(&dir).starts_with('~'));
    }
}
