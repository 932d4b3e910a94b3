//! Document handle - the file currently bound to the editor window
//!
//! At most one file is open per window. The handle stays open between
//! operations so an encoding change can re-read the same file, and is only
//! released on Discard, when another file replaces it, or when dropped.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::encoding::TextEncoding;

/// How the file handle was opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    ReadWrite,
    /// Fallback when the file exists but is not writable
    ReadOnly,
}

/// Errors from document file operations
#[derive(Debug)]
pub enum DocumentError {
    Io { path: PathBuf, source: io::Error },
    ReadOnly(PathBuf),
    NotOpen,
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            DocumentError::ReadOnly(path) => write!(f, "{} is read-only", path.display()),
            DocumentError::NotOpen => write!(f, "no document is open"),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// An open file plus the metadata needed to re-read or rewrite it
#[derive(Debug)]
pub struct OpenDocument {
    path: PathBuf,
    file: File,
    mode: AccessMode,
}

/// Non-fatal conditions noticed while reading or writing
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TranscodeReport {
    pub had_errors: bool,
}

impl OpenDocument {
    /// Open an existing (or new) file for editing
    ///
    /// Creates the file when missing. Falls back to read-only when the file
    /// exists but write access is denied.
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        let read_write = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path);

        match read_write {
            Ok(file) => Ok(Self {
                path: path.to_path_buf(),
                file,
                mode: AccessMode::ReadWrite,
            }),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                let file = File::open(path).map_err(|source| DocumentError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                tracing::warn!("{} is not writable, opened read-only", path.display());
                Ok(Self {
                    path: path.to_path_buf(),
                    file,
                    mode: AccessMode::ReadOnly,
                })
            }
            Err(source) => Err(DocumentError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Create (or truncate) a file chosen in the save dialog
    pub fn create(path: &Path) -> Result<Self, DocumentError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|source| DocumentError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
            mode: AccessMode::ReadWrite,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    fn io_err(&self, source: io::Error) -> DocumentError {
        DocumentError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Seek to the start and decode the whole file into lines
    pub fn read_lines(
        &mut self,
        encoding: TextEncoding,
    ) -> Result<(Vec<String>, TranscodeReport), DocumentError> {
        let mut bytes = Vec::new();
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|e| self.io_err(e))?;
        self.file
            .read_to_end(&mut bytes)
            .map_err(|e| self.io_err(e))?;

        let decoded = encoding.decode(&bytes);
        if decoded.had_errors {
            tracing::warn!(
                "{} contains bytes that are not valid {}",
                self.path.display(),
                encoding
            );
        }
        let lines = split_lines(&decoded.text)
            .map(str::to_owned)
            .collect();
        Ok((
            lines,
            TranscodeReport {
                had_errors: decoded.had_errors,
            },
        ))
    }

    /// Replace the file contents with `text` in a single write
    pub fn write_text(
        &mut self,
        text: &str,
        encoding: TextEncoding,
    ) -> Result<TranscodeReport, DocumentError> {
        if self.mode == AccessMode::ReadOnly {
            return Err(DocumentError::ReadOnly(self.path.clone()));
        }

        let encoded = encoding.encode(text);
        if encoded.had_unmappable {
            tracing::warn!(
                "Some characters cannot be represented in {} while saving {}",
                encoding,
                self.path.display()
            );
        }

        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|e| self.io_err(e))?;
        self.file.set_len(0).map_err(|e| self.io_err(e))?;
        self.file
            .write_all(&encoded.bytes)
            .and_then(|_| self.file.flush())
            .map_err(|e| self.io_err(e))?;

        Ok(TranscodeReport {
            had_errors: encoded.had_unmappable,
        })
    }
}

/// Split decoded text into lines on every break the rope recognises
///
/// `\r\n` counts as one break. A trailing break yields a final empty line,
/// so joining the result with `\n` reproduces the text with breaks
/// normalised to `\n`.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }
    lines.push(&text[start..]);
    lines.into_iter()
}

/// Line break characters, matching ropey's unicode line semantics
pub fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// The window's current file, if any
#[derive(Debug, Default)]
pub enum DocumentHandle {
    #[default]
    Closed,
    Open(OpenDocument),
}

impl DocumentHandle {
    pub fn is_open(&self) -> bool {
        matches!(self, DocumentHandle::Open(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            DocumentHandle::Open(doc) => Some(doc.path()),
            DocumentHandle::Closed => None,
        }
    }

    pub fn as_open_mut(&mut self) -> Option<&mut OpenDocument> {
        match self {
            DocumentHandle::Open(doc) => Some(doc),
            DocumentHandle::Closed => None,
        }
    }

    /// Drop the file handle, returning the path it had
    pub fn close(&mut self) -> Option<PathBuf> {
        match std::mem::take(self) {
            DocumentHandle::Open(doc) => Some(doc.path),
            DocumentHandle::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_plain() {
        let lines: Vec<_> = split_lines("a\nb").collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_split_lines_crlf_and_trailing_newline() {
        let lines: Vec<_> = split_lines("a\r\nb\r\n").collect();
        assert_eq!(lines, vec!["a", "b", ""]);
    }

    #[test]
    fn test_split_lines_lone_cr_and_unicode_breaks() {
        let lines: Vec<_> = split_lines("a\rb\u{2028}c\u{0085}d").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_lines_empty() {
        let lines: Vec<_> = split_lines("").collect();
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn test_open_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.txt");
        let doc = OpenDocument::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(doc.mode(), AccessMode::ReadWrite);
    }

    #[test]
    fn test_open_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("x.txt");
        let err = OpenDocument::open(&path).unwrap_err();
        assert!(matches!(err, DocumentError::Io { .. }));
        assert!(err.to_string().contains("x.txt"));
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        let mut doc = OpenDocument::create(&path).unwrap();
        let utf8 = TextEncoding::utf8();

        doc.write_text("one\ntwo\n", utf8).unwrap();
        let (lines, report) = doc.read_lines(utf8).unwrap();
        assert_eq!(lines, vec!["one", "two", ""]);
        assert!(!report.had_errors);
    }

    #[test]
    fn test_rewrite_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        let mut doc = OpenDocument::create(&path).unwrap();
        let utf8 = TextEncoding::utf8();

        doc.write_text("a much longer first version", utf8).unwrap();
        doc.write_text("short", utf8).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_close_returns_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        let mut handle = DocumentHandle::Open(OpenDocument::create(&path).unwrap());
        assert!(handle.is_open());
        assert_eq!(handle.close(), Some(path));
        assert!(!handle.is_open());
        assert_eq!(handle.close(), None);
    }
}
