use crate::output::{print_json, print_table};
use outreach_core::cadence::CADENCE;

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&CADENCE);
    }

    let rows = CADENCE
        .iter()
        .enumerate()
        .map(|(i, step)| {
            vec![
                (i + 1).to_string(),
                step.label.to_string(),
                format!("+{}", step.offset_days),
                step.action.to_string(),
            ]
        })
        .collect();
    print_table(&["#", "STEP", "BUSINESS DAYS", "CODE"], rows);
    Ok(())
}
