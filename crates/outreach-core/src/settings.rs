use crate::error::Result;
use crate::paths;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const REVENUE_TARGET_DEFAULT: f64 = 1_100_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_revenue_target", alias = "revenueTarget")]
    pub revenue_target: f64,
    /// Reference date for targets that have not been touched yet.
    #[serde(default = "default_cadence_start", alias = "cadenceStart")]
    pub cadence_start: NaiveDate,
}

fn default_revenue_target() -> f64 {
    REVENUE_TARGET_DEFAULT
}

fn default_cadence_start() -> NaiveDate {
    Local::now().date_naive()
}

impl Default for Settings {
    fn default() -> Self {
        Self::starting(default_cadence_start())
    }
}

impl Settings {
    pub fn starting(cadence_start: NaiveDate) -> Self {
        Self {
            revenue_target: REVENUE_TARGET_DEFAULT,
            cadence_start,
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        crate::io::read_json_or(&paths::settings_path(root), Self::default)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        crate::io::write_json(&paths::settings_path(root), self)
    }
}
