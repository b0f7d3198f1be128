use crate::output::{money, print_json, print_table};
use anyhow::Context;
use chrono::NaiveDate;
use clap::Subcommand;
use outreach_core::{
    cadence::next_action,
    dashboard::{self, TargetFilter},
    store::Book,
    target::{self as target_ops, non_empty, Target, TargetPatch},
    touch::touches_for,
    types::{Status, Tier},
};
use std::path::Path;

#[derive(Subcommand)]
pub enum TargetSubcommand {
    /// Add a target by hand
    Add {
        company: String,
        domain: String,
        #[arg(long)]
        contact: Option<String>,
        #[arg(long)]
        role: Option<String>,
        /// Email address or pattern
        #[arg(long)]
        email: Option<String>,
        /// A, B or C
        #[arg(long)]
        tier: Option<Tier>,
        /// Estimated deal value
        #[arg(long)]
        value: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List targets, soonest next action first
    List {
        /// Case-insensitive company substring
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        tier: Option<Tier>,
        #[arg(long)]
        status: Option<Status>,
        /// Only targets with an action due today or overdue
        #[arg(long)]
        due: bool,
    },
    /// Show a target with its next action and timeline
    Show { id: String },
    /// Edit target fields (pass an empty string to clear a text field)
    Edit {
        id: String,
        #[arg(long)]
        contact: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        tier: Option<Tier>,
        #[arg(long)]
        status: Option<Status>,
        /// Estimated deal value
        #[arg(long)]
        value: Option<f64>,
        /// Actual value, counted once the target is WON
        #[arg(long)]
        actual: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },
}

pub fn run(
    root: &Path,
    subcmd: TargetSubcommand,
    today: NaiveDate,
    json: bool,
) -> anyhow::Result<()> {
    match subcmd {
        TargetSubcommand::Add {
            company,
            domain,
            contact,
            role,
            email,
            tier,
            value,
            notes,
        } => {
            let mut target = Target::new(company, domain);
            target.contact_name = contact.as_deref().and_then(non_empty);
            target.role = role.as_deref().and_then(non_empty);
            target.email = email.as_deref().and_then(non_empty);
            target.notes = notes.as_deref().and_then(non_empty);
            if let Some(tier) = tier {
                target.tier = tier;
            }
            if let Some(v) = value {
                target.estimated_value = v;
            }
            add(root, target, json)
        }
        TargetSubcommand::List {
            search,
            tier,
            status,
            due,
        } => list(
            root,
            &TargetFilter {
                search,
                tier,
                status,
                due_only: due,
            },
            today,
            json,
        ),
        TargetSubcommand::Show { id } => show(root, &id, json),
        TargetSubcommand::Edit {
            id,
            contact,
            role,
            email,
            tier,
            status,
            value,
            actual,
            notes,
        } => edit(
            root,
            &id,
            TargetPatch {
                contact_name: contact,
                role,
                email,
                tier,
                status,
                estimated_value: value,
                actual_value: actual,
                notes,
            },
            json,
        ),
    }
}

fn add(root: &Path, target: Target, json: bool) -> anyhow::Result<()> {
    let mut book = Book::load(root).context("failed to load data")?;
    let added = target_ops::add_target(&mut book.targets, target)?.clone();
    book.save_targets(root).context("failed to save targets")?;
    tracing::info!(id = %added.id, "target added");

    if json {
        print_json(&added)?;
    } else {
        println!("Added target [{}]: {}", added.id, added.company);
    }
    Ok(())
}

fn list(root: &Path, filter: &TargetFilter, today: NaiveDate, json: bool) -> anyhow::Result<()> {
    let book = Book::load(root).context("failed to load data")?;
    let rows = dashboard::pipeline(
        &book.targets,
        &book.touches,
        book.settings.cadence_start,
        today,
        filter,
    );

    if json {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No targets. Run: outreach import <file.csv>");
        return Ok(());
    }

    let table = rows
        .iter()
        .map(|r| {
            let (next, due) = match &r.next {
                Some(n) => (n.label.to_string(), n.due.to_string()),
                None => ("complete".to_string(), "-".to_string()),
            };
            vec![
                r.target.id.clone(),
                r.target.company.clone(),
                r.target.tier.to_string(),
                r.target.status.to_string(),
                next,
                due,
            ]
        })
        .collect();
    print_table(&["ID", "COMPANY", "TIER", "STATUS", "NEXT", "DUE"], table);
    Ok(())
}

fn show(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let book = Book::load(root).context("failed to load data")?;
    let target = target_ops::find(&book.targets, id)?;
    let next = next_action(target, &book.touches, book.settings.cadence_start);
    let timeline = touches_for(&book.touches, id);

    if json {
        return print_json(&serde_json::json!({
            "target": target,
            "next": next,
            "timeline": timeline,
        }));
    }

    let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    println!("Company:    {}", target.company);
    println!("Domain:     {}", target.domain);
    println!("Contact:    {}", opt(&target.contact_name));
    println!("Role:       {}", opt(&target.role));
    println!("Email:      {}", opt(&target.email));
    println!("Tier:       {}", target.tier);
    println!("Status:     {}", target.status);
    println!("Estimated:  {}", money(target.estimated_value));
    if target.status == Status::Won {
        println!("Actual:     {}", money(target.actual_value));
    }
    if let Some(notes) = &target.notes {
        println!("Notes:      {notes}");
    }

    println!();
    match next {
        Some(n) => println!("Next:       {} (due {})", n.label, n.due.format("%b %d, %Y")),
        None => println!("Next:       cadence complete"),
    }

    println!();
    if timeline.is_empty() {
        println!("No touches yet.");
    } else {
        println!("Timeline:");
        for t in timeline {
            println!("  {}  {}", t.date, t.action);
        }
    }
    Ok(())
}

fn edit(root: &Path, id: &str, patch: TargetPatch, json: bool) -> anyhow::Result<()> {
    if patch.is_empty() {
        anyhow::bail!("nothing to change; pass at least one field flag");
    }
    let mut book = Book::load(root).context("failed to load data")?;
    target_ops::update_target(&mut book.targets, id, patch)?;
    book.save_targets(root).context("failed to save targets")?;
    tracing::info!(id, "target updated");

    if json {
        print_json(target_ops::find(&book.targets, id)?)?;
    } else {
        println!("Updated target [{id}]");
    }
    Ok(())
}
