use crate::error::{OutreachError, Result};
use crate::paths;
use crate::types::{Status, Tier};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

pub const DEFAULT_TARGET_VALUE: f64 = 15_000.0;

// ---------------------------------------------------------------------------
// Target
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: String,
    pub company: String,
    pub domain: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub contact_name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub role: Option<String>,
    /// A deliverable address, or a pattern such as `first.last@acme.com`.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub tier: Tier,
    #[serde(default)]
    pub status: Status,
    #[serde(default = "default_estimated_value")]
    pub estimated_value: f64,
    /// Only meaningful once the target is `WON`.
    #[serde(default)]
    pub actual_value: f64,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub notes: Option<String>,
}

fn default_estimated_value() -> f64 {
    DEFAULT_TARGET_VALUE
}

fn empty_as_none<'de, D>(d: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(d)?;
    Ok(raw.as_deref().and_then(non_empty))
}

/// Trimmed copy of `s`, or `None` when nothing is left.
pub fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Stable identity of a target: case-insensitive company and domain.
pub fn target_id(company: &str, domain: &str) -> String {
    format!(
        "{}::{}",
        company.trim().to_lowercase(),
        domain.trim().to_lowercase()
    )
}

impl Target {
    pub fn new(company: impl Into<String>, domain: impl Into<String>) -> Self {
        let company = company.into().trim().to_string();
        let domain = domain.into().trim().to_string();
        Self {
            id: target_id(&company, &domain),
            company,
            domain,
            contact_name: None,
            role: None,
            email: None,
            tier: Tier::default(),
            status: Status::default(),
            estimated_value: DEFAULT_TARGET_VALUE,
            actual_value: 0.0,
            notes: None,
        }
    }

    /// First word of the contact name, or "" when no contact is known.
    pub fn first_name(&self) -> &str {
        self.contact_name
            .as_deref()
            .and_then(|n| n.split_whitespace().next())
            .unwrap_or("")
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    pub fn load_all(root: &Path) -> Result<Vec<Self>> {
        crate::io::read_json_or(&paths::targets_path(root), Vec::new)
    }

    pub fn save_all(root: &Path, targets: &[Self]) -> Result<()> {
        crate::io::write_json(&paths::targets_path(root), targets)
    }
}

// ---------------------------------------------------------------------------
// TargetPatch
// ---------------------------------------------------------------------------

/// Field edits applied by [`update_target`]. `None` leaves a field alone;
/// `Some("")` on a text field clears it.
#[derive(Debug, Clone, Default)]
pub struct TargetPatch {
    pub contact_name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub tier: Option<Tier>,
    pub status: Option<Status>,
    pub estimated_value: Option<f64>,
    pub actual_value: Option<f64>,
    pub notes: Option<String>,
}

impl TargetPatch {
    pub fn is_empty(&self) -> bool {
        self.contact_name.is_none()
            && self.role.is_none()
            && self.email.is_none()
            && self.tier.is_none()
            && self.status.is_none()
            && self.estimated_value.is_none()
            && self.actual_value.is_none()
            && self.notes.is_none()
    }
}

// ---------------------------------------------------------------------------
// Collection operations (operate on a mutable Vec<Target>)
// ---------------------------------------------------------------------------

pub fn find<'a>(targets: &'a [Target], id: &str) -> Result<&'a Target> {
    targets
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| OutreachError::TargetNotFound(id.to_string()))
}

pub fn find_mut<'a>(targets: &'a mut [Target], id: &str) -> Result<&'a mut Target> {
    targets
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| OutreachError::TargetNotFound(id.to_string()))
}

/// Append a manually created target. Fails if its company/domain key is taken.
pub fn add_target(targets: &mut Vec<Target>, target: Target) -> Result<&Target> {
    if targets.iter().any(|t| t.id == target.id) {
        return Err(OutreachError::TargetExists(target.id));
    }
    targets.push(target);
    Ok(&targets[targets.len() - 1])
}

pub fn update_target(targets: &mut [Target], id: &str, patch: TargetPatch) -> Result<()> {
    let target = find_mut(targets, id)?;

    if let Some(v) = patch.contact_name {
        target.contact_name = non_empty(&v);
    }
    if let Some(v) = patch.role {
        target.role = non_empty(&v);
    }
    if let Some(v) = patch.email {
        target.email = non_empty(&v);
    }
    if let Some(v) = patch.notes {
        target.notes = non_empty(&v);
    }
    if let Some(tier) = patch.tier {
        target.tier = tier;
    }
    if let Some(status) = patch.status {
        target.status = status;
    }
    if let Some(v) = patch.estimated_value {
        target.estimated_value = v;
    }
    if let Some(v) = patch.actual_value {
        target.actual_value = v;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
