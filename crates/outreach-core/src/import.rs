//! CSV import of targets.
//!
//! Columns are matched by trimmed, lowercased header. `company` and `domain`
//! are required; everything else only fills fields that are still empty, so
//! the first import of a value wins.

use crate::error::{OutreachError, Result};
use crate::target::{non_empty, target_id, Target};
use serde::Serialize;
use std::path::Path;

pub const COL_COMPANY: &str = "company";
pub const COL_DOMAIN: &str = "domain";
pub const COL_ROLE: &str = "target role";
pub const COL_CONTACT: &str = "contact name";
/// Accepted email headers, in order of preference.
pub const COL_EMAIL: [&str; 3] = ["email / pattern", "email pattern", "email"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ImportReport {
    /// Rows merged into the collection.
    pub rows: usize,
    /// Targets that did not exist before.
    pub created: usize,
    /// Collection size after the import.
    pub total: usize,
}

struct Columns {
    company: usize,
    domain: usize,
    role: Option<usize>,
    contact: Option<usize>,
    email: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let names: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let col = |name: &str| names.iter().position(|n| n == name);

        let company = col(COL_COMPANY);
        let domain = col(COL_DOMAIN);
        let (Some(company), Some(domain)) = (company, domain) else {
            let missing = [(COL_COMPANY, company), (COL_DOMAIN, domain)]
                .into_iter()
                .filter(|(_, idx)| idx.is_none())
                .map(|(name, _)| name.to_string())
                .collect();
            return Err(OutreachError::MissingColumns(missing));
        };

        Ok(Self {
            company,
            domain,
            role: col(COL_ROLE),
            contact: col(COL_CONTACT),
            email: COL_EMAIL.iter().find_map(|name| col(name)),
        })
    }
}

struct Row {
    company: String,
    domain: String,
    role: Option<String>,
    contact: Option<String>,
    email: Option<String>,
}

/// Spreadsheet cells exported from pandas carry a literal `nan` for blanks.
fn cell(record: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    let raw = record.get(idx?)?;
    if raw.trim().eq_ignore_ascii_case("nan") {
        return None;
    }
    non_empty(raw)
}

fn fill(field: &mut Option<String>, value: Option<String>) {
    if field.is_none() {
        *field = value;
    }
}

/// Merge CSV rows from `reader` into `targets` by company/domain key.
///
/// The whole file is parsed before anything is merged; on error `targets` is
/// left as it was.
pub fn import_targets<R: std::io::Read>(
    reader: R,
    targets: &mut Vec<Target>,
) -> Result<ImportReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let cols = Columns::from_headers(rdr.headers()?)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let Some(company) = cell(&record, Some(cols.company)) else {
            continue;
        };
        rows.push(Row {
            company,
            domain: cell(&record, Some(cols.domain)).unwrap_or_default(),
            role: cell(&record, cols.role),
            contact: cell(&record, cols.contact),
            email: cell(&record, cols.email),
        });
    }

    let mut report = ImportReport::default();
    for row in rows {
        let id = target_id(&row.company, &row.domain);
        let idx = match targets.iter().position(|t| t.id == id) {
            Some(i) => i,
            None => {
                targets.push(Target::new(row.company, row.domain));
                report.created += 1;
                targets.len() - 1
            }
        };
        let target = &mut targets[idx];
        fill(&mut target.contact_name, row.contact);
        fill(&mut target.role, row.role);
        fill(&mut target.email, row.email);
        report.rows += 1;
    }
    report.total = targets.len();
    Ok(report)
}

pub fn import_path(path: &Path, targets: &mut Vec<Target>) -> Result<ImportReport> {
    let file = std::fs::File::open(path)?;
    import_targets(file, targets)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
