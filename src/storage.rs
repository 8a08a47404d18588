//! Loading and saving documents
//!
//! Files are plain text, one document line per text line. Every line,
//! including the last, is written with a `\n` terminator; on read the final
//! terminator is optional.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use crate::core::Document;

/// Error type for file operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to truncate {path}: {source}")]
    Truncate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// The underlying I/O error
    pub fn io_error(&self) -> &io::Error {
        match self {
            StorageError::Open { source, .. }
            | StorageError::Truncate { source, .. }
            | StorageError::Write { source, .. } => source,
        }
    }
}

/// Result type for file operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Load a document from `path`.
///
/// The returned document is clean and named after `path`.
pub fn load(path: &Path) -> StorageResult<Document> {
    let open_err = |source| StorageError::Open {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(open_err)?;
    let mut doc = Document::from_reader(BufReader::new(file)).map_err(open_err)?;
    doc.set_filename(path);

    tracing::info!("Loaded {} lines from {}", doc.len(), path.display());
    Ok(doc)
}

/// Save `doc` to `path`, creating or truncating the file.
///
/// On success the document is marked clean and the number of bytes written
/// is returned. On failure the dirty count is left untouched.
pub fn save(doc: &mut Document, path: &Path) -> StorageResult<usize> {
    let buf = doc.serialize();

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .mode(0o644)
        .open(path)
        .map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    file.set_len(buf.len() as u64)
        .map_err(|source| StorageError::Truncate {
            path: path.to_path_buf(),
            source,
        })?;

    write_contents(&mut file, &buf, path)?;

    doc.mark_clean();
    tracing::info!("Wrote {} bytes to {}", buf.len(), path.display());
    Ok(buf.len())
}

/// Write all of `buf` and flush; any short or failed write is a `Write` error
fn write_contents<W: Write>(mut writer: W, buf: &[u8], path: &Path) -> StorageResult<()> {
    writer
        .write_all(buf)
        .and_then(|()| writer.flush())
        .map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts a few bytes, then reports the device full
    struct ShortWriter {
        room: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.room == 0 {
                return Ok(0);
            }
            let n = buf.len().min(self.room);
            self.room -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, StorageError::Open { .. }));
        assert_eq!(err.io_error().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");

        let mut doc = Document::from_lines(["first", "\tsecond", ""]);
        doc.insert_char(0, 0, b'>');
        assert!(doc.is_dirty());

        let written = save(&mut doc, &path).unwrap();
        assert_eq!(written, 16);
        assert!(!doc.is_dirty());

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.line(0).unwrap().content(), b">first");
        assert_eq!(loaded.line(1).unwrap().content(), b"\tsecond");
        assert_eq!(loaded.filename(), Some(path.as_path()));
    }

    #[test]
    fn test_save_truncates_longer_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "a much longer previous body\nwith two lines\n").unwrap();

        let mut doc = Document::from_lines(["short"]);
        save(&mut doc, &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"short\n".to_vec());
    }

    #[test]
    fn test_save_failure_keeps_dirty() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for writing
        let mut doc = Document::from_lines(["x"]);
        doc.append_text(0, b"y");
        let err = save(&mut doc, dir.path()).unwrap_err();
        assert!(matches!(err, StorageError::Open { .. }));
        assert_eq!(doc.dirty(), 1);
    }

    #[test]
    fn test_short_write_is_write_error() {
        let path = Path::new("doc.txt");
        let err = write_contents(ShortWriter { room: 3 }, b"hello\n", path).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert_eq!(err.io_error().kind(), io::ErrorKind::WriteZero);
        assert!(err.to_string().contains("doc.txt"));
    }

    #[test]
    fn test_write_contents_writes_everything() {
        let mut out = Vec::new();
        write_contents(&mut out, b"a\nb\n", Path::new("x")).unwrap();
        assert_eq!(out, b"a\nb\n".to_vec());
    }

    #[test]
    fn test_save_to_full_device_keeps_dirty() {
        let path = Path::new("/dev/full");
        if !path.exists() {
            return;
        }
        let mut doc = Document::from_lines(["x"]);
        doc.append_text(0, b"y");

        // A character device cannot be resized
        let err = save(&mut doc, path).unwrap_err();
        assert!(matches!(err, StorageError::Truncate { .. }));
        assert_eq!(doc.dirty(), 1);
    }
}
