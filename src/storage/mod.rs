//! Persistence for the address book.
//!
//! The book is stored as a bincode-encoded [`Snapshot`] that carries a
//! format version and the time it was written. Saves go to a uniquely named
//! temp file in the target's directory, which is then persisted over the target.

use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk envelope around the address book.
#[derive(Debug, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub book: AddressBook,
}

/// Borrowing twin of [`Snapshot`] used when writing.
#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    book: &'a AddressBook,
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Load the address book at `path`.
///
/// A missing file yields an empty book. Any other failure is returned.
pub fn try_load_data(path: &Path) -> StorageResult<AddressBook> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No data file, starting empty");
            return Ok(AddressBook::new());
        }
        Err(e) => return Err(io_error(path, e)),
    };

    let snapshot: Snapshot = bincode::deserialize(&bytes)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }

    info!(
        path = %path.display(),
        contacts = snapshot.book.len(),
        saved_at = %snapshot.saved_at,
        "Address book loaded"
    );
    Ok(snapshot.book)
}

/// Load the address book at `path`, falling back to an empty book.
///
/// Unreadable or corrupt files are logged and treated as no prior state.
pub fn load_data(path: &Path) -> AddressBook {
    match try_load_data(path) {
        Ok(book) => book,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not load address book, starting empty");
            AddressBook::new()
        }
    }
}

/// Write the whole address book to `path`, replacing any existing file.
pub fn save_data(book: &AddressBook, path: &Path) -> StorageResult<()> {
    let snapshot = SnapshotRef {
        version: SNAPSHOT_VERSION,
        saved_at: Utc::now(),
        book,
    };
    let bytes = bincode::serialize(&snapshot)?;

    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
            parent
        }
        None => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| io_error(dir, e))?;
    temp.write_all(&bytes)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| io_error(temp.path(), e))?;
    temp.persist(path).map_err(|e| io_error(path, e.error))?;

    info!(
        path = %path.display(),
        contacts = book.len(),
        bytes = bytes.len(),
        "Address book saved"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactName, PhoneNumber};
    use crate::models::Record;
    use tempfile::TempDir;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        let mut r = Record::new(ContactName::new("Alex"));
        r.add_phone(PhoneNumber::new("0931234567").unwrap());
        r.add_phone(PhoneNumber::new("0509876543").unwrap());
        book.add_record(r);
        book
    }

    #[test]
    fn test_missing_file_is_empty_book() {
        let dir = TempDir::new().unwrap();
        let book = try_load_data(&dir.path().join("absent.bin")).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("book.bin");
        save_data(&sample_book(), &path).unwrap();
        assert!(path.exists());

        let entries: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("book.bin")]);
    }

    #[test]
    fn test_save_leaves_sibling_tmp_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts");
        let sibling = dir.path().join("contacts.tmp");
        fs::write(&sibling, b"unrelated").unwrap();

        save_data(&sample_book(), &path).unwrap();

        assert_eq!(fs::read(&sibling).unwrap(), b"unrelated");
        assert_eq!(try_load_data(&path).unwrap(), sample_book());
    }

    #[test]
    fn test_save_to_tmp_extension_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.tmp");

        save_data(&sample_book(), &path).unwrap();
        assert_eq!(try_load_data(&path).unwrap(), sample_book());
    }

    #[test]
    fn test_edited_phone_survives_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.bin");

        let mut book = sample_book();
        let mut olena = Record::new(ContactName::new("Olena"));
        olena.add_phone(PhoneNumber::new("0501111111").unwrap());
        book.add_record(olena);
        assert!(book
            .get_mut("Alex")
            .unwrap()
            .edit_phone("0931234567", "123"));

        save_data(&book, &path).unwrap();
        let loaded = try_load_data(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get("Alex").unwrap().phones()[0].as_str(), "123");
        assert_eq!(loaded, book);
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.bin");
        let book = sample_book();
        let snapshot = SnapshotRef {
            version: SNAPSHOT_VERSION + 1,
            saved_at: Utc::now(),
            book: &book,
        };
        fs::write(&path, bincode::serialize(&snapshot).unwrap()).unwrap();

        let result = try_load_data(&path);
        assert!(matches!(
            result,
            Err(StorageError::UnsupportedVersion { found: 2, expected: 1 })
        ));
        assert!(load_data(&path).is_empty());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.bin");
        fs::write(&path, b"not a snapshot").unwrap();

        assert!(try_load_data(&path).is_err());
        assert!(load_data(&path).is_empty());
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.bin");
        save_data(&sample_book(), &path).unwrap();
        save_data(&AddressBook::new(), &path).unwrap();

        assert!(try_load_data(&path).unwrap().is_empty());
    }
}
