//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is reachable under `/host`, which
//! maps to the directory Zellij was started from (usually the home
//! directory). User-supplied paths are resolved against it.

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
pub const HOST_ROOT: &str = "/host";

/// File name of the span journal inside [`get_data_dir`].
pub const JOURNAL_FILE: &str = "bookshelf-spans.json";

/// Directory for plugin-owned files: `/host/.local/share/zellij/bookshelf`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij").join("bookshelf")
}

/// Location of the span journal.
#[must_use]
pub fn journal_path() -> PathBuf {
    get_data_dir().join(JOURNAL_FILE)
}

/// Expands a leading `~` to the `/host` mount.
///
/// ```
/// use bookshelf::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/books.json"), "/host/books.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/books.toml"), "/data/books.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_ROOT, 1)
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

/// Resolves a configured catalog path: tilde expansion, and relative paths are
/// taken from the host root.
#[must_use]
pub fn resolve_catalog_path(path: &str) -> PathBuf {
    let expanded = PathBuf::from(expand_tilde(path.trim()));
    if expanded.is_absolute() {
        expanded
    } else {
        PathBuf::from(HOST_ROOT).join(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_paths_resolve_under_host() {
        assert_eq!(resolve_catalog_path("~/shelf/books.json"), PathBuf::from("/host/shelf/books.json"));
        assert_eq!(resolve_catalog_path("books.toml"), PathBuf::from("/host/books.toml"));
        assert_eq!(resolve_catalog_path(" /srv/books.json "), PathBuf::from("/srv/books.json"));
    }

    #[test]
    fn journal_lives_in_data_dir() {
        assert_eq!(
            journal_path(),
            PathBuf::from("/host/.local/share/zellij/bookshelf/bookshelf-spans.json")
        );
    }
}
