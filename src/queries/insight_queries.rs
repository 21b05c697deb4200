use chrono::NaiveDate;

use crate::model::Contact;
use crate::queries::contact_queries::days_since_contact;

/// Cut-offs used by `insights`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightThresholds {
    /// Minimum strength counted as a strong relationship.
    pub strong_min: u8,
    /// Contacts idle for more than this many days need attention.
    pub attention_after_days: i64,
    /// Contacts idle for more than this many days are reconnect suggestions.
    pub reconnect_after_days: i64,
    pub reconnect_limit: usize,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            strong_min: 8,
            attention_after_days: 60,
            reconnect_after_days: 90,
            reconnect_limit: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Insights {
    pub total: usize,
    pub strong: usize,
    pub needs_attention: usize,
    /// Stalest first, never-contacted before everyone else.
    pub reconnect: Vec<(Contact, Option<i64>)>,
}

/// Never-contacted is older than any finite gap.
fn exceeds(days: Option<i64>, limit: i64) -> bool {
    days.map_or(true, |d| d > limit)
}

pub fn insights(contacts: &[Contact], today: NaiveDate, thresholds: &InsightThresholds) -> Insights {
    let strong = contacts
        .iter()
        .filter(|c| c.relationship_strength >= thresholds.strong_min)
        .count();

    let with_days: Vec<(&Contact, Option<i64>)> = contacts
        .iter()
        .map(|c| (c, days_since_contact(c, today)))
        .collect();

    let needs_attention = with_days
        .iter()
        .filter(|(_, d)| exceeds(*d, thresholds.attention_after_days))
        .count();

    let mut overdue: Vec<&(&Contact, Option<i64>)> = with_days
        .iter()
        .filter(|(_, d)| exceeds(*d, thresholds.reconnect_after_days))
        .collect();
    overdue.sort_by(|a, b| {
        let a_val = a.1.unwrap_or(i64::MAX);
        let b_val = b.1.unwrap_or(i64::MAX);
        b_val.cmp(&a_val).then(a.0.id.cmp(&b.0.id))
    });

    let reconnect = overdue
        .into_iter()
        .take(thresholds.reconnect_limit)
        .map(|(c, d)| ((*c).clone(), *d))
        .collect();

    Insights {
        total: contacts.len(),
        strong,
        needs_attention,
        reconnect,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactId, NewContact};

    #[test]
    fn empty_list_has_no_insights() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let result = insights(&[], today, &InsightThresholds::default());
        assert_eq!(result.total, 0);
        assert_eq!(result.strong, 0);
        assert_eq!(result.needs_attention, 0);
        assert!(result.reconnect.is_empty());
    }

    #[test]
    fn never_contacted_needs_attention() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let c = NewContact::named("Zed".into()).into_contact(ContactId(1));
        let result = insights(&[c], today, &InsightThresholds::default());
        assert_eq!(result.needs_attention, 1);
        assert_eq!(result.reconnect.len(), 1);
        assert_eq!(result.reconnect[0].1, None);
    }
}
