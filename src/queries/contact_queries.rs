use chrono::NaiveDate;

use crate::model::Contact;

/// How recently a contact was last in touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Recent,
    Fading,
    Stale,
    Never,
}

impl Freshness {
    pub const RECENT_DAYS: i64 = 30;
    pub const FADING_DAYS: i64 = 90;

    pub fn of(days_since: Option<i64>) -> Self {
        match days_since {
            None => Freshness::Never,
            Some(d) if d <= Self::RECENT_DAYS => Freshness::Recent,
            Some(d) if d <= Self::FADING_DAYS => Freshness::Fading,
            Some(_) => Freshness::Stale,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Freshness::Recent => "recent",
            Freshness::Fading => "fading",
            Freshness::Stale => "stale",
            Freshness::Never => "never contacted",
        }
    }
}

/// Days between the last contact and `today`, or `None` if never contacted.
pub fn days_since_contact(contact: &Contact, today: NaiveDate) -> Option<i64> {
    contact
        .last_contact_date
        .map(|d| (today - d).num_days().abs())
}

pub fn freshness(contact: &Contact, today: NaiveDate) -> Freshness {
    Freshness::of(days_since_contact(contact, today))
}

/// Contacts ordered by relationship strength, strongest first. Ties keep id order.
pub fn by_strength(contacts: &[Contact]) -> Vec<&Contact> {
    let mut sorted: Vec<&Contact> = contacts.iter().collect();
    sorted.sort_by(|a, b| {
        b.relationship_strength
            .cmp(&a.relationship_strength)
            .then(a.id.cmp(&b.id))
    });
    sorted
}

/// Case-insensitive substring search over name, company and interests.
/// A blank term matches nothing.
pub fn search<'a>(contacts: &'a [Contact], term: &str) -> Vec<&'a Contact> {
    let lower = term.trim().to_lowercase();
    if lower.is_empty() {
        return Vec::new();
    }

    contacts
        .iter()
        .filter(|c| {
            c.full_name().to_lowercase().contains(&lower)
                || c.company
                    .as_ref()
                    .map(|co| co.to_lowercase().contains(&lower))
                    .unwrap_or(false)
                || c.interests.iter().any(|i| i.to_lowercase().contains(&lower))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactId, NewContact};

    fn contact(id: u32, name: &str, strength: u8) -> Contact {
        let mut new = NewContact::named(name.into());
        new.relationship_strength = strength;
        new.into_contact(ContactId(id))
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn freshness_boundaries() {
        assert_eq!(Freshness::of(None), Freshness::Never);
        assert_eq!(Freshness::of(Some(0)), Freshness::Recent);
        assert_eq!(Freshness::of(Some(30)), Freshness::Recent);
        assert_eq!(Freshness::of(Some(31)), Freshness::Fading);
        assert_eq!(Freshness::of(Some(90)), Freshness::Fading);
        assert_eq!(Freshness::of(Some(91)), Freshness::Stale);
    }

    #[test]
    fn days_since_is_absolute() {
        let mut c = contact(1, "Alice", 5);
        c.last_contact_date = Some(day(2024, 3, 11));
        assert_eq!(days_since_contact(&c, day(2024, 3, 1)), Some(10));
        assert_eq!(days_since_contact(&c, day(2024, 3, 21)), Some(10));
    }

    #[test]
    fn never_contacted_has_no_days() {
        let c = contact(1, "Alice", 5);
        assert_eq!(days_since_contact(&c, day(2024, 3, 1)), None);
        assert_eq!(freshness(&c, day(2024, 3, 1)), Freshness::Never);
    }

    #[test]
    fn by_strength_ties_keep_id_order() {
        let contacts = vec![contact(1, "A", 3), contact(2, "B", 9), contact(3, "C", 3)];
        let ids: Vec<u32> = by_strength(&contacts).iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
