//! Path filtering
//!
//! Decides whether a filesystem entry is excluded from traversal and
//! scanning: ignore tokens, hidden-file policy, and the fixed skip set of
//! binary/minified suffixes.

use std::path::{Path, PathBuf};

use crate::core::model::ScanOptions;
use crate::core::paths::{is_hidden, make_relative};

/// Filename suffixes never scanned: images, executables and shared
/// libraries, archives, minified JavaScript.
pub const SKIP_SUFFIXES: [&str; 13] = [
    ".png", ".jpg", ".jpeg", ".gif", ".bmp", ".exe", ".dll", ".so", ".dylib", ".zip", ".tar",
    ".gz", ".min.js",
];

/// Check whether a filename ends with one of the skipped suffixes.
///
/// Suffix matching (rather than `Path::extension`) so multi-dot entries
/// like `.min.js` apply.
pub fn has_skipped_suffix(name: &str) -> bool {
    let lower = name.to_lowercase();
    SKIP_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

/// Pure exclusion predicate over path strings and configuration.
pub struct PathFilter {
    root: PathBuf,
    ignore: Vec<String>,
    exclude_hidden: bool,
    only_hidden: bool,
}

impl PathFilter {
    pub fn new(options: &ScanOptions) -> Self {
        Self {
            root: options.root.clone(),
            ignore: options.ignore.clone(),
            exclude_hidden: options.exclude_hidden,
            only_hidden: options.only_hidden,
        }
    }

    /// Whether the entry at `path` should be excluded. `is_file` comes
    /// from the caller so the check stays free of filesystem access.
    ///
    /// Ignore tokens are literal substrings of the basename or the
    /// root-relative path, so a token like `test` also excludes
    /// `latest.txt`. The hidden checks run in only-then-exclude order;
    /// with both flags set every entry is excluded.
    pub fn is_ignored(&self, path: &Path, is_file: bool) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let rel = make_relative(path, &self.root).unwrap_or_default();

        if self.ignore.iter().any(|token| {
            !token.is_empty()
                && (name == *token || name.contains(token.as_str()) || rel.contains(token.as_str()))
        }) {
            return true;
        }

        let hidden = is_hidden(path);
        if self.only_hidden && !hidden {
            return true;
        }
        if self.exclude_hidden && hidden {
            return true;
        }

        is_file && has_skipped_suffix(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_with(ignore: &[&str], exclude_hidden: bool, only_hidden: bool) -> PathFilter {
        let mut options = ScanOptions::new(PathBuf::from("/root"));
        options.ignore = ignore.iter().map(|s| s.to_string()).collect();
        options.exclude_hidden = exclude_hidden;
        options.only_hidden = only_hidden;
        PathFilter::new(&options)
    }

    #[test]
    fn test_ignores_token_in_basename() {
        let filter = filter_with(&["node_modules"], false, false);
        assert!(filter.is_ignored(Path::new("/root/node_modules"), false));
        assert!(!filter.is_ignored(Path::new("/root/src"), false));
    }

    #[test]
    fn test_ignores_token_as_substring() {
        let filter = filter_with(&["test"], false, false);
        assert!(filter.is_ignored(Path::new("/root/latest.txt"), true));
    }

    #[test]
    fn test_ignores_token_in_relative_path() {
        let filter = filter_with(&["vendor/generated"], false, false);
        assert!(filter.is_ignored(Path::new("/root/vendor/generated/a.rs"), true));
        assert!(!filter.is_ignored(Path::new("/root/vendor/src/a.rs"), true));
    }

    #[test]
    fn test_empty_token_matches_nothing() {
        let filter = filter_with(&[""], false, false);
        assert!(!filter.is_ignored(Path::new("/root/a.rs"), true));
    }

    #[test]
    fn test_exclude_hidden() {
        let filter = filter_with(&[], true, false);
        assert!(filter.is_ignored(Path::new("/root/.env"), true));
        assert!(!filter.is_ignored(Path::new("/root/main.rs"), true));
    }

    #[test]
    fn test_only_hidden() {
        let filter = filter_with(&[], false, true);
        assert!(!filter.is_ignored(Path::new("/root/.env"), true));
        assert!(filter.is_ignored(Path::new("/root/main.rs"), true));
    }

    #[test]
    fn test_both_hidden_flags_exclude_everything() {
        let filter = filter_with(&[], true, true);
        assert!(filter.is_ignored(Path::new("/root/.env"), true));
        assert!(filter.is_ignored(Path::new("/root/main.rs"), true));
    }

    #[test]
    fn test_skipped_suffix_applies_to_files_only() {
        let filter = filter_with(&[], false, false);
        assert!(filter.is_ignored(Path::new("/root/logo.png"), true));
        assert!(!filter.is_ignored(Path::new("/root/images.png"), false));
    }

    #[test]
    fn test_has_skipped_suffix() {
        assert!(has_skipped_suffix("logo.PNG"));
        assert!(has_skipped_suffix("bundle.min.js"));
        assert!(has_skipped_suffix("release.tar.gz"));
        assert!(!has_skipped_suffix("bundle.js"));
        assert!(!has_skipped_suffix("notes.txt"));
    }
}
