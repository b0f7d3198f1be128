use crate::output::{money, print_json, print_table};
use anyhow::Context;
use chrono::NaiveDate;
use outreach_core::dashboard::{self, DueItem};
use outreach_core::store::Book;
use std::path::Path;

pub fn run(root: &Path, today: NaiveDate, json: bool) -> anyhow::Result<()> {
    let book = Book::load(root).context("failed to load data")?;
    let start = book.settings.cadence_start;
    let metrics = dashboard::metrics(
        &book.targets,
        &book.touches,
        start,
        book.settings.revenue_target,
        today,
    );
    let items = dashboard::due_today(&book.targets, &book.touches, start, today);

    if json {
        return print_json(&serde_json::json!({
            "today": today,
            "metrics": metrics,
            "due": items,
        }));
    }

    println!("Target:     {}", money(metrics.revenue_target));
    println!("Secured:    {}", money(metrics.secured));
    println!("Projected:  {}", money(metrics.projected));
    println!("Gap:        {}", money(metrics.gap));
    println!(
        "This week:  {} touches, {} intros",
        metrics.touches_this_week, metrics.intros_this_week
    );
    println!();
    println!("Due today ({})", metrics.due_today);
    print_due(&items);
    Ok(())
}

pub fn due(root: &Path, today: NaiveDate, json: bool) -> anyhow::Result<()> {
    let book = Book::load(root).context("failed to load data")?;
    let items = dashboard::due_today(
        &book.targets,
        &book.touches,
        book.settings.cadence_start,
        today,
    );

    if json {
        return print_json(&items);
    }
    print_due(&items);
    Ok(())
}

fn print_due(items: &[DueItem<'_>]) {
    if items.is_empty() {
        println!("Nothing due today.");
        return;
    }
    let rows = items
        .iter()
        .map(|i| {
            vec![
                i.due.format("%b %d").to_string(),
                i.target.company.clone(),
                i.target.domain.clone(),
                i.next.label.to_string(),
                i.target.id.clone(),
            ]
        })
        .collect();
    print_table(&["DUE", "COMPANY", "DOMAIN", "NEXT", "ID"], rows);
}
