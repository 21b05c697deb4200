use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use super::contact::{Contact, ContactMethod};
use crate::error::{RapportError, RapportResult};
use crate::validation::{self, trim_optional};

/// The fields of a contact that an update may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    RelationshipStrength,
    LastContactDate,
    PersonalNotes,
    PreferredContactMethod,
    Birthday,
    Interests,
    LastInteractionNotes,
}

impl ContactField {
    pub const ALL: &'static [ContactField] = &[
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Company,
        ContactField::RelationshipStrength,
        ContactField::LastContactDate,
        ContactField::PersonalNotes,
        ContactField::PreferredContactMethod,
        ContactField::Birthday,
        ContactField::Interests,
        ContactField::LastInteractionNotes,
    ];

    /// Stored field name.
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::FirstName => "first_name",
            ContactField::LastName => "last_name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Company => "company",
            ContactField::RelationshipStrength => "relationship_strength",
            ContactField::LastContactDate => "last_contact_date",
            ContactField::PersonalNotes => "personal_notes",
            ContactField::PreferredContactMethod => "preferred_contact_method",
            ContactField::Birthday => "birthday",
            ContactField::Interests => "interests",
            ContactField::LastInteractionNotes => "last_interaction_notes",
        }
    }

    /// Human-readable label used in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::FirstName => "First name",
            ContactField::LastName => "Last name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Company => "Company",
            ContactField::RelationshipStrength => "Relationship strength (1-10)",
            ContactField::LastContactDate => "Last contact date (YYYY-MM-DD)",
            ContactField::PersonalNotes => "Personal notes",
            ContactField::PreferredContactMethod => "Preferred contact method (1=Email, 2=Phone, 3=In Person)",
            ContactField::Birthday => "Birthday (YYYY-MM-DD)",
            ContactField::Interests => "Interests (comma separated)",
            ContactField::LastInteractionNotes => "Latest interaction notes",
        }
    }

    /// Whether blank input clears the field instead of being rejected.
    pub fn is_optional(&self) -> bool {
        !matches!(
            self,
            ContactField::FirstName
                | ContactField::RelationshipStrength
                | ContactField::PreferredContactMethod
        )
    }

    /// The field's current value rendered for display ("Unknown" when unset).
    pub fn current_value(&self, contact: &Contact) -> String {
        fn text(v: &Option<String>) -> String {
            v.clone().unwrap_or_else(|| "Unknown".into())
        }
        fn date(v: &Option<NaiveDate>) -> String {
            v.map(|d| d.to_string()).unwrap_or_else(|| "Unknown".into())
        }

        match self {
            ContactField::FirstName => contact.first_name.clone(),
            ContactField::LastName => text(&contact.last_name),
            ContactField::Email => text(&contact.email),
            ContactField::Phone => text(&contact.phone),
            ContactField::Company => text(&contact.company),
            ContactField::RelationshipStrength => contact.relationship_strength.to_string(),
            ContactField::LastContactDate => date(&contact.last_contact_date),
            ContactField::PersonalNotes => text(&contact.personal_notes),
            ContactField::PreferredContactMethod => {
                contact.preferred_contact_method.display_name().to_string()
            }
            ContactField::Birthday => date(&contact.birthday),
            ContactField::Interests => {
                if contact.interests.is_empty() {
                    "Unknown".into()
                } else {
                    contact.interests.join(", ")
                }
            }
            ContactField::LastInteractionNotes => text(&contact.last_interaction_notes),
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContactField {
    type Err = RapportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ContactField::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RapportError::UnknownField(wanted.to_string()))
    }
}

/// A partial update. `None` leaves a field untouched; for optional fields
/// `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub first_name: Option<String>,
    pub last_name: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub company: Option<Option<String>>,
    pub relationship_strength: Option<u8>,
    pub last_contact_date: Option<Option<NaiveDate>>,
    pub personal_notes: Option<Option<String>>,
    pub preferred_contact_method: Option<ContactMethod>,
    pub birthday: Option<Option<NaiveDate>>,
    pub interests: Option<Vec<String>>,
    pub last_interaction_notes: Option<Option<String>>,
}

impl ContactPatch {
    pub fn is_empty(&self) -> bool {
        *self == ContactPatch::default()
    }

    /// Validates `raw` for `field` and records it in the patch.
    /// Blank input clears optional fields.
    pub fn set(&mut self, field: ContactField, raw: &str) -> RapportResult<()> {
        let text = || trim_optional(Some(raw));
        match field {
            ContactField::FirstName => {
                self.first_name = Some(validation::non_blank(raw, "first name")?)
            }
            ContactField::LastName => self.last_name = Some(text()),
            ContactField::Email => self.email = Some(text()),
            ContactField::Phone => self.phone = Some(text()),
            ContactField::Company => self.company = Some(text()),
            ContactField::RelationshipStrength => {
                self.relationship_strength = Some(validation::relationship_strength(raw)?)
            }
            ContactField::LastContactDate => {
                self.last_contact_date = Some(validation::optional_date(raw, "last contact date")?)
            }
            ContactField::PersonalNotes => self.personal_notes = Some(text()),
            ContactField::PreferredContactMethod => {
                self.preferred_contact_method = Some(validation::contact_method_choice(raw)?)
            }
            ContactField::Birthday => {
                self.birthday = Some(validation::optional_date(raw, "birthday")?)
            }
            ContactField::Interests => self.interests = Some(validation::interests(raw)),
            ContactField::LastInteractionNotes => self.last_interaction_notes = Some(text()),
        }
        Ok(())
    }

    /// Like `set`, but addresses the field by its stored name.
    pub fn set_named(&mut self, name: &str, raw: &str) -> RapportResult<()> {
        let field: ContactField = name.parse()?;
        self.set(field, raw)
    }

    /// Overwrites exactly the fields present in the patch.
    pub fn apply(&self, contact: &mut Contact) {
        if let Some(v) = &self.first_name {
            contact.first_name = v.clone();
        }
        if let Some(v) = &self.last_name {
            contact.last_name = v.clone();
        }
        if let Some(v) = &self.email {
            contact.email = v.clone();
        }
        if let Some(v) = &self.phone {
            contact.phone = v.clone();
        }
        if let Some(v) = &self.company {
            contact.company = v.clone();
        }
        if let Some(v) = self.relationship_strength {
            contact.relationship_strength = v;
        }
        if let Some(v) = self.last_contact_date {
            contact.last_contact_date = v;
        }
        if let Some(v) = &self.personal_notes {
            contact.personal_notes = v.clone();
        }
        if let Some(v) = self.preferred_contact_method {
            contact.preferred_contact_method = v;
        }
        if let Some(v) = self.birthday {
            contact.birthday = v;
        }
        if let Some(v) = &self.interests {
            contact.interests = v.clone();
        }
        if let Some(v) = &self.last_interaction_notes {
            contact.last_interaction_notes = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactId, NewContact};

    fn alice() -> Contact {
        let mut new = NewContact::named("Alice".into());
        new.company = Some("Acme".into());
        new.interests = vec!["chess".into()];
        new.into_contact(ContactId(1))
    }

    #[test]
    fn field_names_round_trip() {
        for field in ContactField::ALL {
            assert_eq!(field.name().parse::<ContactField>().unwrap(), *field);
        }
    }

    #[test]
    fn unknown_field_is_an_error() {
        let mut patch = ContactPatch::default();
        let err = patch.set_named("nickname", "Al").unwrap_err();
        assert!(matches!(err, RapportError::UnknownField(name) if name == "nickname"));
        assert!(patch.is_empty());
    }

    #[test]
    fn set_validates_strength() {
        let mut patch = ContactPatch::default();
        assert!(patch.set(ContactField::RelationshipStrength, "12").is_err());
        assert_eq!(patch.relationship_strength, None);
        patch.set(ContactField::RelationshipStrength, "9").unwrap();
        assert_eq!(patch.relationship_strength, Some(9));
    }

    #[test]
    fn blank_clears_optional_field() {
        let mut patch = ContactPatch::default();
        patch.set(ContactField::Company, "  ").unwrap();
        let mut contact = alice();
        patch.apply(&mut contact);
        assert_eq!(contact.company, None);
    }

    #[test]
    fn blank_first_name_rejected() {
        let mut patch = ContactPatch::default();
        assert!(patch.set(ContactField::FirstName, "").is_err());
    }

    #[test]
    fn apply_only_touches_supplied_fields() {
        let before = alice();
        let mut after = before.clone();
        let mut patch = ContactPatch::default();
        patch.set(ContactField::Phone, "555-0100").unwrap();
        patch.apply(&mut after);

        assert_eq!(after.phone.as_deref(), Some("555-0100"));
        after.phone = before.phone.clone();
        assert_eq!(after, before);
    }

    #[test]
    fn current_value_shows_unknown_for_unset() {
        let contact = alice();
        assert_eq!(ContactField::Email.current_value(&contact), "Unknown");
        assert_eq!(ContactField::Company.current_value(&contact), "Acme");
        assert_eq!(ContactField::Interests.current_value(&contact), "chess");
    }
}
