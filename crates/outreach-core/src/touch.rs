use crate::error::Result;
use crate::paths;
use crate::target::{self, Target};
use crate::types::{ActionCode, Status};
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A logged cadence step. Touches are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Touch {
    pub target_id: String,
    pub action: ActionCode,
    /// Local wall-clock time the step was marked done.
    pub date: NaiveDateTime,
}

impl Touch {
    pub fn load_all(root: &Path) -> Result<Vec<Self>> {
        crate::io::read_json_or(&paths::touches_path(root), Vec::new)
    }

    pub fn save_all(root: &Path, touches: &[Self]) -> Result<()> {
        crate::io::write_json(&paths::touches_path(root), touches)
    }
}

/// Local time truncated to whole seconds, the resolution touches are stored at.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Log `action` against `target_id` and return the new touch.
///
/// The target must exist. Sending an email step moves a target that is still
/// `NOT_CONTACTED` to `IN_PLAY`; manual steps leave the status alone.
pub fn record_touch(
    targets: &mut [Target],
    touches: &mut Vec<Touch>,
    target_id: &str,
    action: ActionCode,
    at: NaiveDateTime,
) -> Result<Touch> {
    let target = target::find_mut(targets, target_id)?;
    if action.is_email() && target.status == Status::NotContacted {
        target.status = Status::InPlay;
    }
    let touch = Touch {
        target_id: target.id.clone(),
        action,
        date: at,
    };
    touches.push(touch.clone());
    Ok(touch)
}

/// Touches logged for one target, newest first.
pub fn touches_for<'a>(touches: &'a [Touch], target_id: &str) -> Vec<&'a Touch> {
    let mut out: Vec<&Touch> = touches.iter().filter(|t| t.target_id == target_id).collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
