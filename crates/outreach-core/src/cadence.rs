//! The outreach cadence and the next-action resolver.
//!
//! Every target walks the same fixed sequence of steps. A step's due date is
//! its business-day offset from the target's reference date: the date of its
//! earliest logged touch, or the global cadence start if nothing has been
//! logged yet.
//!
//! Resolution is by *missing step*: the next action is the first step in
//! table order whose code has never been logged for the target. Logging a
//! later step out of order does not move the cadence past an earlier gap, and
//! the number of touches logged is irrelevant.

use crate::calendar::add_business_days;
use crate::target::Target;
use crate::touch::Touch;
use crate::types::ActionCode;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// CadenceStep
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CadenceStep {
    pub label: &'static str,
    /// Business days from the target's reference date.
    pub offset_days: u32,
    pub action: ActionCode,
}

pub const CADENCE: [CadenceStep; 8] = [
    CadenceStep {
        label: "Email 1: Intro",
        offset_days: 0,
        action: ActionCode::Email1Intro,
    },
    CadenceStep {
        label: "Email 2: Bump",
        offset_days: 2,
        action: ActionCode::Email2Bump,
    },
    CadenceStep {
        label: "LinkedIn: Connect",
        offset_days: 5,
        action: ActionCode::LinkedinConnect,
    },
    CadenceStep {
        label: "Email 3: Value",
        offset_days: 7,
        action: ActionCode::Email3Value,
    },
    CadenceStep {
        label: "Email 4: Social Proof",
        offset_days: 10,
        action: ActionCode::Email4Social,
    },
    CadenceStep {
        label: "Email 5: Right Person",
        offset_days: 13,
        action: ActionCode::Email5RightPerson,
    },
    CadenceStep {
        label: "Email 6: Close Loop",
        offset_days: 17,
        action: ActionCode::Email6Close,
    },
    CadenceStep {
        label: "Recycle: Q4",
        offset_days: 45,
        action: ActionCode::RecycleQ4,
    },
];

/// `ActionCode` declaration order matches `CADENCE`.
pub fn step_for(action: ActionCode) -> &'static CadenceStep {
    &CADENCE[action as usize]
}

// ---------------------------------------------------------------------------
// NextAction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextAction {
    pub label: &'static str,
    pub offset_days: u32,
    pub action: ActionCode,
    pub due: NaiveDate,
}

/// Date every step of `target`'s cadence is offset from.
pub fn reference_date(target: &Target, touches: &[Touch], cadence_start: NaiveDate) -> NaiveDate {
    touches
        .iter()
        .filter(|t| t.target_id == target.id)
        .map(|t| t.date)
        .min()
        .map(|first| first.date())
        .unwrap_or(cadence_start)
}

/// First unsent cadence step for `target`, or `None` once every step is logged.
pub fn next_action(
    target: &Target,
    touches: &[Touch],
    cadence_start: NaiveDate,
) -> Option<NextAction> {
    let sent: HashSet<ActionCode> = touches
        .iter()
        .filter(|t| t.target_id == target.id)
        .map(|t| t.action)
        .collect();

    let step = CADENCE.iter().find(|s| !sent.contains(&s.action))?;
    let base = reference_date(target, touches, cadence_start);

    Some(NextAction {
        label: step.label,
        offset_days: step.offset_days,
        action: step.action,
        due: add_business_days(base, i64::from(step.offset_days)),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
