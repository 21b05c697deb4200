use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::info;

use super::storage;
use crate::error::{RapportError, RapportResult};
use crate::model::{Contact, ContactId, ContactPatch, NewContact};
use crate::validation;

/// The in-memory contact list and the file that backs it.
///
/// Every mutation rewrites the whole file before returning. Between saves
/// the in-memory list is authoritative.
#[derive(Debug)]
pub struct ContactRepo {
    path: PathBuf,
    contacts: Vec<Contact>,
    next_id: ContactId,
}

impl ContactRepo {
    /// Loads the contact file at `path`. A missing file is an empty store;
    /// an unreadable one, or one holding a record that breaks the field
    /// rules, is an error rather than an empty list.
    pub fn open(path: impl Into<PathBuf>) -> RapportResult<Self> {
        let path = path.into();
        let contacts = storage::read_contacts(&path)?.unwrap_or_default();
        check_records(&path, &contacts)?;
        let next_id = ContactId::after_max(contacts.iter().map(|c| c.id))?;
        info!(path = %path.display(), count = contacts.len(), "loaded contacts");
        Ok(Self {
            path,
            contacts,
            next_id,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The identifier the next `add` will assign.
    pub fn next_id(&self) -> ContactId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// All contacts in insertion order.
    pub fn get_all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn add(&mut self, new: NewContact) -> RapportResult<Contact> {
        let following = self.next_id.next()?;
        let contact = new.into_contact(self.next_id);
        self.contacts.push(contact.clone());
        if let Err(e) = self.persist() {
            self.contacts.pop();
            return Err(e);
        }
        self.next_id = following;
        info!(id = %contact.id, "added contact");
        Ok(contact)
    }

    pub fn update(&mut self, id: ContactId, patch: &ContactPatch) -> RapportResult<Contact> {
        let index = self
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| not_found(id))?;

        let previous = self.contacts[index].clone();
        patch.apply(&mut self.contacts[index]);
        if let Err(e) = self.persist() {
            self.contacts[index] = previous;
            return Err(e);
        }
        info!(id = %id, "updated contact");
        Ok(self.contacts[index].clone())
    }

    /// Returns whether a contact was removed. Nothing is written when it wasn't.
    pub fn delete(&mut self, id: ContactId) -> RapportResult<bool> {
        let Some(index) = self.contacts.iter().position(|c| c.id == id) else {
            return Ok(false);
        };

        let removed = self.contacts.remove(index);
        if let Err(e) = self.persist() {
            self.contacts.insert(index, removed);
            return Err(e);
        }
        info!(id = %id, "deleted contact");
        Ok(true)
    }

    /// Appends a batch with consecutive identifiers and writes the file once.
    pub fn add_all(&mut self, batch: Vec<NewContact>) -> RapportResult<Vec<Contact>> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let start = self.contacts.len();
        let mut id = self.next_id;
        for new in batch {
            let following = match id.next() {
                Ok(following) => following,
                Err(e) => {
                    self.contacts.truncate(start);
                    return Err(e);
                }
            };
            self.contacts.push(new.into_contact(id));
            id = following;
        }
        if let Err(e) = self.persist() {
            self.contacts.truncate(start);
            return Err(e);
        }
        self.next_id = id;
        info!(count = self.contacts.len() - start, "added contacts");
        Ok(self.contacts[start..].to_vec())
    }

    /// Rewrites the backing file from the in-memory list.
    pub fn persist(&self) -> RapportResult<()> {
        storage::write_contacts(&self.path, &self.contacts)
    }
}

/// Rejects duplicate identifiers and records that break the per-field rules.
fn check_records(path: &Path, contacts: &[Contact]) -> RapportResult<()> {
    let mut seen = HashSet::new();
    for contact in contacts {
        let invalid = |reason: String| RapportError::InvalidRecord {
            path: path.to_path_buf(),
            id: contact.id.to_string(),
            reason,
        };
        if contact.id.value() == 0 {
            return Err(invalid("identifier must be positive".into()));
        }
        if !seen.insert(contact.id) {
            return Err(invalid("duplicate identifier".into()));
        }
        validation::non_blank(&contact.first_name, "first name").map_err(|e| invalid(e.to_string()))?;
        validation::strength_in_range(contact.relationship_strength as i64)
            .map_err(|e| invalid(e.to_string()))?;
    }
    Ok(())
}

fn not_found(id: ContactId) -> RapportError {
    RapportError::NotFound {
        entity_type: "Contact".into(),
        id: id.to_string(),
    }
}
