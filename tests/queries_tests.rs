use chrono::{Duration, NaiveDate};
use rapport::model::*;
use rapport::queries::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn contact(id: u32, first: &str, company: Option<&str>, interests: &[&str]) -> Contact {
    let mut new = NewContact::named(first.into());
    new.company = company.map(String::from);
    new.interests = interests.iter().map(|s| s.to_string()).collect();
    new.into_contact(ContactId(id))
}

fn contacted_days_ago(id: u32, first: &str, days: i64) -> Contact {
    let mut c = contact(id, first, None, &[]);
    c.last_contact_date = Some(today() - Duration::days(days));
    c
}

// ==========================================================================
// SEARCH
// ==========================================================================

#[test]
fn search_matches_company_substring_case_insensitively() {
    let contacts = vec![
        contact(1, "Alice", Some("Acme Corp"), &[]),
        contact(2, "Bob", Some("Globex"), &[]),
    ];
    let found = contact_queries::search(&contacts, "ACME");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].first_name, "Alice");
}

#[test]
fn search_matches_name_and_interests() {
    let mut carol = contact(3, "Carol", None, &["Rock Climbing"]);
    carol.last_name = Some("Diaz".into());
    let contacts = vec![contact(1, "Alice", None, &[]), carol];

    assert_eq!(contact_queries::search(&contacts, "diaz").len(), 1);
    assert_eq!(contact_queries::search(&contacts, "climb").len(), 1);
    assert_eq!(contact_queries::search(&contacts, "carol d").len(), 1);
}

#[test]
fn search_blank_or_unmatched_is_empty() {
    let contacts = vec![contact(1, "Alice", Some("Acme"), &["chess"])];
    assert!(contact_queries::search(&contacts, "").is_empty());
    assert!(contact_queries::search(&contacts, "   ").is_empty());
    assert!(contact_queries::search(&contacts, "zzz").is_empty());
}

#[test]
fn search_does_not_look_at_email() {
    let mut alice = contact(1, "Alice", None, &[]);
    alice.email = Some("acme@example.com".into());
    assert!(contact_queries::search(&[alice], "acme").is_empty());
}

// ==========================================================================
// SORTING & FRESHNESS
// ==========================================================================

#[test]
fn by_strength_sorts_descending() {
    let mut a = contact(1, "A", None, &[]);
    a.relationship_strength = 2;
    let mut b = contact(2, "B", None, &[]);
    b.relationship_strength = 10;
    let mut c = contact(3, "C", None, &[]);
    c.relationship_strength = 6;

    let contacts = vec![a, b, c];
    let names: Vec<&str> = contact_queries::by_strength(&contacts)
        .iter()
        .map(|c| c.first_name.as_str())
        .collect();
    assert_eq!(names, vec!["B", "C", "A"]);
    // the stored order is untouched
    assert_eq!(contacts[0].first_name, "A");
}

#[test]
fn freshness_follows_days_since_contact() {
    assert_eq!(contact_queries::freshness(&contacted_days_ago(1, "A", 5), today()), Freshness::Recent);
    assert_eq!(contact_queries::freshness(&contacted_days_ago(2, "B", 45), today()), Freshness::Fading);
    assert_eq!(contact_queries::freshness(&contacted_days_ago(3, "C", 200), today()), Freshness::Stale);
    assert_eq!(contact_queries::freshness(&contact(4, "D", None, &[]), today()), Freshness::Never);
}

// ==========================================================================
// INSIGHTS
// ==========================================================================

#[test]
fn insights_with_100_50_10_days() {
    let contacts = vec![
        contacted_days_ago(1, "Old", 100),
        contacted_days_ago(2, "Middle", 50),
        contacted_days_ago(3, "Recent", 10),
    ];
    let report = insight_queries::insights(&contacts, today(), &InsightThresholds::default());

    assert_eq!(report.total, 3);
    assert_eq!(report.needs_attention, 1);
    assert_eq!(report.reconnect.len(), 1);
    assert_eq!(report.reconnect[0].0.first_name, "Old");
    assert_eq!(report.reconnect[0].1, Some(100));
}

#[test]
fn insights_count_everyone_past_sixty_days() {
    let contacts = vec![
        contacted_days_ago(1, "Old", 100),
        contacted_days_ago(2, "Lapsed", 70),
        contacted_days_ago(3, "Recent", 10),
        contacted_days_ago(4, "Edge", 60),
    ];
    let report = insight_queries::insights(&contacts, today(), &InsightThresholds::default());

    assert_eq!(report.needs_attention, 2);
    let names: Vec<&str> = report.reconnect.iter().map(|(c, _)| c.first_name.as_str()).collect();
    assert_eq!(names, vec!["Old"]);
}

#[test]
fn insights_strong_relationships() {
    let mut contacts = Vec::new();
    for (id, strength) in [(1, 8), (2, 10), (3, 7), (4, 1)] {
        let mut c = contacted_days_ago(id, "X", 1);
        c.relationship_strength = strength;
        contacts.push(c);
    }
    let report = insight_queries::insights(&contacts, today(), &InsightThresholds::default());
    assert_eq!(report.strong, 2);
    assert_eq!(report.needs_attention, 0);
    assert!(report.reconnect.is_empty());
}

#[test]
fn reconnect_list_is_capped_and_stalest_first() {
    let contacts = vec![
        contacted_days_ago(1, "A", 120),
        contacted_days_ago(2, "B", 400),
        contact(3, "Never", None, &[]),
        contacted_days_ago(4, "D", 95),
        contacted_days_ago(5, "E", 300),
    ];
    let report = insight_queries::insights(&contacts, today(), &InsightThresholds::default());

    assert_eq!(report.needs_attention, 5);
    let names: Vec<&str> = report.reconnect.iter().map(|(c, _)| c.first_name.as_str()).collect();
    assert_eq!(names, vec!["Never", "B", "E"]);
}

#[test]
fn custom_thresholds_are_respected() {
    let contacts = vec![
        contacted_days_ago(1, "A", 40),
        contacted_days_ago(2, "B", 20),
    ];
    let thresholds = InsightThresholds {
        strong_min: 5,
        attention_after_days: 30,
        reconnect_after_days: 30,
        reconnect_limit: 1,
    };
    let report = insight_queries::insights(&contacts, today(), &thresholds);
    assert_eq!(report.strong, 2);
    assert_eq!(report.needs_attention, 1);
    assert_eq!(report.reconnect.len(), 1);
}
