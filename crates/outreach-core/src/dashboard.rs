//! Read-only aggregates over the loaded collections.
//!
//! Everything here is recomputed from scratch on each call. `today` is passed
//! in rather than read from the clock.

use crate::cadence::{next_action, NextAction};
use crate::calendar::week_start;
use crate::target::Target;
use crate::touch::Touch;
use crate::types::{ActionCode, Status, Tier};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Due today
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct DueItem<'a> {
    pub due: NaiveDate,
    pub target: &'a Target,
    pub next: NextAction,
}

/// Targets whose next action is due on or before `today`, earliest first.
pub fn due_today<'a>(
    targets: &'a [Target],
    touches: &[Touch],
    cadence_start: NaiveDate,
    today: NaiveDate,
) -> Vec<DueItem<'a>> {
    let mut items: Vec<DueItem<'a>> = targets
        .iter()
        .filter_map(|t| {
            let next = next_action(t, touches, cadence_start)?;
            (next.due <= today).then_some(DueItem {
                due: next.due,
                target: t,
                next,
            })
        })
        .collect();
    items.sort_by_key(|i| i.due);
    items
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub revenue_target: f64,
    /// Actual value of WON targets.
    pub secured: f64,
    /// Estimated value of every target with at least one touch, whatever its status.
    pub projected: f64,
    pub gap: f64,
    pub due_today: usize,
    pub touches_this_week: usize,
    pub intros_this_week: usize,
}

pub fn metrics(
    targets: &[Target],
    touches: &[Touch],
    cadence_start: NaiveDate,
    revenue_target: f64,
    today: NaiveDate,
) -> Metrics {
    let started: HashSet<&str> = touches.iter().map(|t| t.target_id.as_str()).collect();

    let projected: f64 = targets
        .iter()
        .filter(|t| started.contains(t.id.as_str()))
        .map(|t| t.estimated_value)
        .sum();
    let secured: f64 = targets
        .iter()
        .filter(|t| t.status == Status::Won)
        .map(|t| t.actual_value)
        .sum();

    let monday = week_start(today);
    let next_monday = monday + Duration::days(7);
    let this_week: Vec<&Touch> = touches
        .iter()
        .filter(|t| {
            let day = t.date.date();
            day >= monday && day < next_monday
        })
        .collect();
    let intros = this_week
        .iter()
        .filter(|t| t.action == ActionCode::Email1Intro)
        .count();

    Metrics {
        revenue_target,
        secured,
        projected,
        gap: (revenue_target - secured).max(0.0),
        due_today: due_today(targets, touches, cadence_start, today).len(),
        touches_this_week: this_week.len(),
        intros_this_week: intros,
    }
}

// ---------------------------------------------------------------------------
// Pipeline listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct TargetFilter {
    /// Case-insensitive substring of the company name.
    pub search: Option<String>,
    pub tier: Option<Tier>,
    pub status: Option<Status>,
    /// Only targets whose next action is due on or before today.
    pub due_only: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineRow<'a> {
    pub target: &'a Target,
    pub next: Option<NextAction>,
}

/// Targets matching `filter` with their next action, soonest due first.
/// Targets with a complete cadence sort last.
pub fn pipeline<'a>(
    targets: &'a [Target],
    touches: &[Touch],
    cadence_start: NaiveDate,
    today: NaiveDate,
    filter: &TargetFilter,
) -> Vec<PipelineRow<'a>> {
    let needle = filter.search.as_deref().map(|s| s.trim().to_lowercase());

    let mut rows: Vec<PipelineRow<'a>> = targets
        .iter()
        .filter(|t| match &needle {
            Some(n) => t.company.to_lowercase().contains(n.as_str()),
            None => true,
        })
        .filter(|t| filter.tier.map_or(true, |tier| t.tier == tier))
        .filter(|t| filter.status.map_or(true, |st| t.status == st))
        .map(|t| PipelineRow {
            target: t,
            next: next_action(t, touches, cadence_start),
        })
        .filter(|row| {
            !filter.due_only || row.next.as_ref().is_some_and(|n| n.due <= today)
        })
        .collect();
    rows.sort_by_key(|row| row.next.as_ref().map_or(NaiveDate::MAX, |n| n.due));
    rows
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
