use chrono::NaiveDate;

use crate::db::ContactRepo;
use crate::error::{RapportError, RapportResult};
use crate::model::{Contact, ContactId, ContactMethod, ContactPatch, NewContact};
use crate::validation::{self, trim_optional};

/// Builds a validated contact from raw field values.
pub fn new_contact(
    first_name: &str,
    last_name: Option<&str>,
    email: Option<&str>,
    phone: Option<&str>,
    company: Option<&str>,
    relationship_strength: i64,
    preferred_contact_method: ContactMethod,
    birthday: Option<NaiveDate>,
    interests: &[&str],
    personal_notes: Option<&str>,
) -> RapportResult<NewContact> {
    let mut contact = NewContact::named(validation::non_blank(first_name, "first name")?);
    contact.last_name = trim_optional(last_name);
    contact.email = trim_optional(email);
    contact.phone = trim_optional(phone);
    contact.company = trim_optional(company);
    contact.relationship_strength = validation::strength_in_range(relationship_strength)?;
    contact.preferred_contact_method = preferred_contact_method;
    contact.birthday = birthday;
    contact.interests = interests
        .iter()
        .filter_map(|i| trim_optional(Some(i)))
        .collect();
    contact.personal_notes = trim_optional(personal_notes);
    Ok(contact)
}

pub fn add_contact(repo: &mut ContactRepo, contact: NewContact) -> RapportResult<Contact> {
    repo.add(contact)
}

/// Applies `patch` to contact `id`. Touching the latest interaction notes
/// also moves the last contact date to `today`, unless the patch sets that
/// date itself.
pub fn update_contact(
    repo: &mut ContactRepo,
    id: ContactId,
    patch: ContactPatch,
    today: NaiveDate,
) -> RapportResult<Contact> {
    let mut patch = patch;
    if patch.last_interaction_notes.is_some() && patch.last_contact_date.is_none() {
        patch.last_contact_date = Some(Some(today));
    }
    repo.update(id, &patch)
}

/// Records that you were in touch with a contact today.
pub fn log_interaction(
    repo: &mut ContactRepo,
    id: ContactId,
    notes: &str,
    today: NaiveDate,
) -> RapportResult<Contact> {
    let patch = ContactPatch {
        last_interaction_notes: Some(trim_optional(Some(notes))),
        ..ContactPatch::default()
    };
    update_contact(repo, id, patch, today)
}

pub fn delete_contact(repo: &mut ContactRepo, id: ContactId) -> RapportResult<()> {
    if repo.delete(id)? {
        Ok(())
    } else {
        Err(RapportError::NotFound {
            entity_type: "Contact".into(),
            id: id.to_string(),
        })
    }
}
