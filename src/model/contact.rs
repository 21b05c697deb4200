use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::ContactId;

/// How a contact prefers to be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
    InPerson,
}

impl ContactMethod {
    /// Menu order used by the interactive prompts (1-based).
    pub const ALL: &'static [ContactMethod] = &[
        ContactMethod::Email,
        ContactMethod::Phone,
        ContactMethod::InPerson,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ContactMethod::Email => "Email",
            ContactMethod::Phone => "Phone",
            ContactMethod::InPerson => "In Person",
        }
    }

    /// Canonical stored name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Phone => "phone",
            ContactMethod::InPerson => "in_person",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "email" => Some(ContactMethod::Email),
            "phone" => Some(ContactMethod::Phone),
            "in_person" => Some(ContactMethod::InPerson),
            _ => None,
        }
    }
}

/// A contact's fields before the repository has assigned an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub relationship_strength: u8,
    pub last_contact_date: Option<NaiveDate>,
    pub personal_notes: Option<String>,
    pub preferred_contact_method: ContactMethod,
    pub birthday: Option<NaiveDate>,
    pub interests: Vec<String>,
    pub last_interaction_notes: Option<String>,
}

impl NewContact {
    pub const DEFAULT_STRENGTH: u8 = 5;

    /// A contact with only a first name; everything else unset.
    pub fn named(first_name: String) -> Self {
        Self {
            first_name,
            last_name: None,
            email: None,
            phone: None,
            company: None,
            relationship_strength: Self::DEFAULT_STRENGTH,
            last_contact_date: None,
            personal_notes: None,
            preferred_contact_method: ContactMethod::default(),
            birthday: None,
            interests: Vec::new(),
            last_interaction_notes: None,
        }
    }

    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            relationship_strength: self.relationship_strength,
            last_contact_date: self.last_contact_date,
            personal_notes: self.personal_notes,
            preferred_contact_method: self.preferred_contact_method,
            birthday: self.birthday,
            interests: self.interests,
            last_interaction_notes: self.last_interaction_notes,
        }
    }
}

/// One person in the contact list, with relationship tracking metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub relationship_strength: u8,
    #[serde(default)]
    pub last_contact_date: Option<NaiveDate>,
    #[serde(default)]
    pub personal_notes: Option<String>,
    #[serde(default)]
    pub preferred_contact_method: ContactMethod,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub last_interaction_notes: Option<String>,
}

impl Contact {
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}
