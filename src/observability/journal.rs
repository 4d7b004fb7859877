//! Append-only line journal with size-based rotation.
//!
//! When appending a line would push the file past its size limit, the file
//! is shifted into numbered backups (`spans.json.1` is the newest) and a
//! fresh file is started. Backups past the retention limit are dropped.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation threshold used by [`Journal::new`] (10 MB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Backups kept by [`Journal::new`].
pub const DEFAULT_MAX_BACKUPS: usize = 3;

/// Size-rotated line file shared by the span exporter.
///
/// Appends are serialized through an internal lock, so one journal can be
/// written from whichever thread finishes a span.
///
/// # Example
///
/// ```
/// use bookshelf::observability::journal::Journal;
///
/// let dir = std::env::temp_dir().join("bookshelf-journal-doc");
/// std::fs::create_dir_all(&dir)?;
/// let journal = Journal::with_limits(dir.join("spans.json"), 64, 1);
/// journal.append(r#"{"name":"doc"}"#)?;
/// assert!(journal.path().exists());
/// # std::fs::remove_dir_all(&dir)?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Journal {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Opened lazily on first append.
    file: Mutex<Option<File>>,
}

impl Journal {
    /// Journal at `path` with the default limits. Nothing is opened yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS)
    }

    /// Journal at `path` with explicit limits.
    ///
    /// # Parameters
    ///
    /// * `path` - Live file; backups are written next to it
    /// * `max_bytes` - Size the live file may not grow past, unless a single line is larger
    /// * `max_backups` - Backups kept; `0` discards the live file on rotation
    #[must_use]
    pub fn with_limits(path: impl Into<PathBuf>, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path: path.into(),
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Path of the live file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the `index`-th backup, 1 being the newest.
    #[must_use]
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// Appends `line` plus a newline, rotating first if it would not fit.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing the file.
    pub fn append(&self, line: &str) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("journal lock poisoned: {e}")))?;

        let incoming = line.len() as u64 + 1;
        let current = fs::metadata(&self.path).map_or(0, |m| m.len());
        if current > 0 && current + incoming > self.max_bytes {
            *file = None;
            self.rotate()?;
        }

        if file.is_none() {
            *file = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let handle = file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "journal file unavailable"))?;

        writeln!(handle, "{line}")?;
        handle.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.path);
        }

        for index in (1..self.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

impl std::fmt::Debug for Journal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Journal")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn appends_lines_until_the_limit() {
        let dir = tempfile::tempdir().unwrap();
        let journal = Journal::with_limits(dir.path().join("spans.json"), 1024, 2);

        journal.append("{\"a\":1}").unwrap();
        journal.append("{\"b\":2}").unwrap();

        assert_eq!(read(journal.path()), "{\"a\":1}\n{\"b\":2}\n");
        assert!(!journal.backup_path(1).exists());
    }

    #[test]
    fn rotation_shifts_backups_and_drops_the_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let journal = Journal::with_limits(dir.path().join("spans.json"), 20, 2);

        for i in 0..4 {
            journal.append(&format!("line-{i}....")).unwrap();
        }

        assert_eq!(read(journal.path()), "line-3....\n");
        assert_eq!(read(&journal.backup_path(1)), "line-2....\n");
        assert_eq!(read(&journal.backup_path(2)), "line-1....\n");
        assert!(!journal.backup_path(3).exists());
    }

    #[test]
    fn zero_backups_truncates_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let journal = Journal::with_limits(dir.path().join("spans.json"), 10, 0);

        journal.append("first-line").unwrap();
        journal.append("second-line").unwrap();

        assert_eq!(read(journal.path()), "second-line\n");
        assert!(!journal.backup_path(1).exists());
    }

    #[test]
    fn backup_names_keep_the_extension() {
        let journal = Journal::new("/data/bookshelf-spans.json");
        assert_eq!(journal.backup_path(2), PathBuf::from("/data/bookshelf-spans.json.2"));
    }
}
