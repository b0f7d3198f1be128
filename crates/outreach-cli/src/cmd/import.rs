use crate::output::print_json;
use anyhow::Context;
use outreach_core::{import, target::Target};
use std::path::Path;

pub fn run(root: &Path, file: &Path, json: bool) -> anyhow::Result<()> {
    let mut targets = Target::load_all(root).context("failed to load targets")?;
    let report = import::import_path(file, &mut targets)
        .with_context(|| format!("failed to import {}", file.display()))?;
    Target::save_all(root, &targets).context("failed to save targets")?;
    tracing::info!(
        file = %file.display(),
        rows = report.rows,
        created = report.created,
        total = report.total,
        "import complete"
    );

    if json {
        print_json(&report)?;
    } else {
        println!(
            "Imported/merged {} rows into {} targets ({} new).",
            report.rows, report.total, report.created
        );
    }
    Ok(())
}
