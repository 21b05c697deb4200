//! Import and export of the legacy tabular contact file
//! (`id,name,phone,email,company`, one contact per line).

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{info, warn};

use crate::db::{storage, ContactRepo};
use crate::error::{RapportError, RapportResult};
use crate::model::{Contact, NewContact};
use crate::validation::{self, trim_optional};

pub const CSV_FIELDS: [&str; 5] = ["id", "name", "phone", "email", "company"];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub imported: usize,
    pub skipped: usize,
}

/// Column positions resolved from the header row.
struct Columns {
    id: usize,
    name: usize,
    phone: usize,
    email: usize,
    company: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> RapportResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| RapportError::Other(format!("CSV header is missing column '{}'", name)))
        };
        Ok(Self {
            id: find("id")?,
            name: find("name")?,
            phone: find("phone")?,
            email: find("email")?,
            company: find("company")?,
        })
    }
}

/// Reads a legacy CSV file and appends every well-formed row to `repo`
/// with a fresh identifier. Malformed rows are skipped with a warning.
pub fn import_csv(csv_path: &Path, repo: &mut ContactRepo) -> RapportResult<ImportStats> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(csv_path)?;
    let columns = Columns::from_headers(reader.headers()?)?;

    let mut stats = ImportStats::default();
    let mut batch = Vec::new();

    for (index, result) in reader.records().enumerate() {
        // header is line 1
        let line = index + 2;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!(line, error = %e, "skipping unreadable row");
                stats.skipped += 1;
                continue;
            }
        };

        match parse_row(&record, &columns) {
            Ok(contact) => batch.push(contact),
            Err(e) => {
                warn!(line, row = ?record, error = %e, "skipping malformed row");
                stats.skipped += 1;
            }
        }
    }

    stats.imported = repo.add_all(batch)?.len();
    info!(
        path = %csv_path.display(),
        imported = stats.imported,
        skipped = stats.skipped,
        "imported legacy contacts"
    );
    Ok(stats)
}

fn parse_row(record: &StringRecord, columns: &Columns) -> RapportResult<NewContact> {
    if record.len() != CSV_FIELDS.len() {
        return Err(RapportError::Other(format!(
            "expected {} columns, found {}",
            CSV_FIELDS.len(),
            record.len()
        )));
    }

    let cell = |i: usize| record.get(i).unwrap_or("");
    validation::contact_id(cell(columns.id))?;

    let name = validation::non_blank(cell(columns.name), "name")?;
    let (first, last) = split_name(&name);

    let mut contact = NewContact::named(first.to_string());
    contact.last_name = trim_optional(last);
    contact.phone = trim_optional(Some(cell(columns.phone)));
    contact.email = trim_optional(Some(cell(columns.email)));
    contact.company = trim_optional(Some(cell(columns.company)));
    Ok(contact)
}

/// Splits "First Rest Of Name" at the first whitespace.
fn split_name(name: &str) -> (&str, Option<&str>) {
    match name.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, Some(rest)),
        None => (name, None),
    }
}

/// Writes `contacts` in the legacy tabular layout, replacing `csv_path`.
pub fn export_csv(contacts: &[Contact], csv_path: &Path) -> RapportResult<usize> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(CSV_FIELDS)?;
    for c in contacts {
        writer.write_record([
            c.id.to_string(),
            c.full_name(),
            c.phone.clone().unwrap_or_default(),
            c.email.clone().unwrap_or_default(),
            c.company.clone().unwrap_or_default(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| RapportError::Io(e.into_error()))?;

    storage::write_atomic(csv_path, &bytes)?;
    info!(path = %csv_path.display(), count = contacts.len(), "exported contacts");
    Ok(contacts.len())
}
