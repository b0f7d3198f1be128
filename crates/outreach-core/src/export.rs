//! CSV exports: raw targets and touches for backup, and a tasks sheet with one
//! dated row per pending next action for CRM import.

use crate::cadence::next_action;
use crate::error::Result;
use crate::target::Target;
use crate::touch::Touch;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

pub const TARGET_HEADERS: [&str; 11] = [
    "id",
    "company",
    "domain",
    "contact_name",
    "role",
    "email",
    "tier",
    "status",
    "estimated_value",
    "actual_value",
    "notes",
];

pub const TOUCH_HEADERS: [&str; 3] = ["target_id", "action", "date"];

pub const TASK_HEADERS: [&str; 5] = [
    "Task Name",
    "Due Date",
    "Task Notes",
    "Company Name",
    "Company Domain",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub name: String,
    pub due: NaiveDate,
    pub notes: String,
    pub company: String,
    pub domain: String,
}

/// One task per target that still has a cadence step pending.
pub fn task_rows(targets: &[Target], touches: &[Touch], cadence_start: NaiveDate) -> Vec<TaskRow> {
    targets
        .iter()
        .filter_map(|t| {
            let next = next_action(t, touches, cadence_start)?;
            let notes = format!(
                "Company: {}\nDomain: {}\nContact: {}\nEmail: {}\nNext: {}",
                t.company,
                t.domain,
                t.contact_name.as_deref().unwrap_or(""),
                t.email.as_deref().unwrap_or(""),
                next.label,
            );
            Some(TaskRow {
                name: format!("{} - {}", next.action, t.company),
                due: next.due,
                notes,
                company: t.company.clone(),
                domain: t.domain.clone(),
            })
        })
        .collect()
}

fn writer<W: Write>(out: W, headers: &[&str]) -> Result<csv::Writer<W>> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    wtr.write_record(headers)?;
    Ok(wtr)
}

pub fn write_targets<W: Write>(out: W, targets: &[Target]) -> Result<()> {
    let mut wtr = writer(out, &TARGET_HEADERS)?;
    for t in targets {
        wtr.serialize(t)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_touches<W: Write>(out: W, touches: &[Touch]) -> Result<()> {
    let mut wtr = writer(out, &TOUCH_HEADERS)?;
    for t in touches {
        wtr.serialize(t)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_tasks<W: Write>(out: W, tasks: &[TaskRow]) -> Result<()> {
    let mut wtr = writer(out, &TASK_HEADERS)?;
    for task in tasks {
        wtr.serialize(task)?;
    }
    wtr.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
