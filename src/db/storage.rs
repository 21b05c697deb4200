use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{RapportError, RapportResult};
use crate::model::Contact;

/// Reads the contact document at `path`. Returns `None` when the file does not exist.
pub fn read_contacts(path: &Path) -> RapportResult<Option<Vec<Contact>>> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if text.trim().is_empty() {
        return Ok(Some(Vec::new()));
    }

    serde_json::from_str(&text)
        .map(Some)
        .map_err(|source| RapportError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
}

/// Serializes every contact and replaces the file at `path`.
pub fn write_contacts(path: &Path, contacts: &[Contact]) -> RapportResult<()> {
    let mut json = serde_json::to_vec_pretty(contacts)?;
    json.push(b'\n');
    write_atomic(path, &json)?;
    debug!(path = %path.display(), count = contacts.len(), "persisted contacts");
    Ok(())
}

/// Writes `bytes` to a temporary file next to `path`, then renames it over
/// `path`. A crash mid-write leaves the previous file intact.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> RapportResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactId, NewContact};

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_contacts(&dir.path().join("nope.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn empty_file_reads_as_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, "\n").unwrap();
        assert_eq!(read_contacts(&path).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn garbage_is_reported_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(read_contacts(&path), Err(RapportError::Corrupt { .. })));
    }

    #[test]
    fn write_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("contacts.json");
        let contact = NewContact::named("Alice".into()).into_contact(ContactId(1));
        write_contacts(&path, &[contact.clone()]).unwrap();
        assert_eq!(read_contacts(&path).unwrap(), Some(vec![contact]));
    }
}
