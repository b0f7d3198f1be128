use anyhow::Context;
use chrono::NaiveDate;
use outreach_core::{paths, store};
use std::path::Path;

pub fn run(root: &Path, today: NaiveDate) -> anyhow::Result<()> {
    println!("Initializing outreach in: {}", root.display());

    let created = store::init(root, today)
        .with_context(|| format!("failed to create {}", paths::data_dir(root).display()))?;

    for file in [
        paths::SETTINGS_FILE,
        paths::TEMPLATES_FILE,
        paths::TARGETS_FILE,
        paths::TOUCHES_FILE,
    ] {
        if created.contains(&file) {
            println!("  created: {file}");
        } else {
            println!("  exists:  {file}");
        }
    }

    println!("\nNext: outreach import <targets.csv>");
    Ok(())
}
