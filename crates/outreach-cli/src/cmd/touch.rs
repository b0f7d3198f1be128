use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use outreach_core::{
    cadence::{next_action, step_for},
    store::Book,
    target as target_ops,
    touch::{self as touch_ops, Touch},
    types::ActionCode,
    OutreachError,
};
use std::path::Path;

#[derive(Subcommand)]
pub enum TouchSubcommand {
    /// Mark a cadence step as done for a target
    Log {
        /// Target id (company::domain)
        id: String,
        /// Step to log (default: the target's next action)
        #[arg(long)]
        action: Option<ActionCode>,
    },
    /// List logged touches, newest first
    List {
        /// Only touches for this target id
        #[arg(long)]
        target: Option<String>,
    },
}

pub fn run(root: &Path, subcmd: TouchSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        TouchSubcommand::Log { id, action } => log(root, &id, action, json),
        TouchSubcommand::List { target } => list(root, target.as_deref(), json),
    }
}

fn log(root: &Path, id: &str, action: Option<ActionCode>, json: bool) -> anyhow::Result<()> {
    let mut book = Book::load(root).context("failed to load data")?;
    let start = book.settings.cadence_start;

    let action = match action {
        Some(a) => a,
        None => {
            let target = target_ops::find(&book.targets, id)?;
            next_action(target, &book.touches, start)
                .map(|n| n.action)
                .ok_or_else(|| OutreachError::CadenceComplete(id.to_string()))?
        }
    };

    let touch = touch_ops::record_touch(
        &mut book.targets,
        &mut book.touches,
        id,
        action,
        touch_ops::now(),
    )?;
    book.save_touches(root).context("failed to save touches")?;
    book.save_targets(root).context("failed to save targets")?;
    tracing::info!(id, action = %touch.action, "touch logged");

    let target = target_ops::find(&book.targets, id)?;
    let next = next_action(target, &book.touches, start);

    if json {
        print_json(&serde_json::json!({ "touch": touch, "next": next }))?;
    } else {
        println!(
            "Logged {} ({}) for [{id}]",
            step_for(touch.action).label,
            touch.action
        );
        match next {
            Some(n) => println!("Next: {} (due {})", n.label, n.due),
            None => println!("Cadence complete."),
        }
    }
    Ok(())
}

fn list(root: &Path, target: Option<&str>, json: bool) -> anyhow::Result<()> {
    let touches = Touch::load_all(root).context("failed to load touches")?;
    let shown: Vec<&Touch> = match target {
        Some(id) => touch_ops::touches_for(&touches, id),
        None => {
            let mut all: Vec<&Touch> = touches.iter().collect();
            all.sort_by(|a, b| b.date.cmp(&a.date));
            all
        }
    };

    if json {
        return print_json(&shown);
    }
    if shown.is_empty() {
        println!("No touches yet.");
        return Ok(());
    }
    let rows = shown
        .iter()
        .map(|t| {
            vec![
                t.date.to_string(),
                step_for(t.action).label.to_string(),
                t.action.to_string(),
                t.target_id.clone(),
            ]
        })
        .collect();
    print_table(&["DATE", "STEP", "ACTION", "TARGET"], rows);
    Ok(())
}
