use crate::error::Result;
use crate::paths;
use crate::settings::Settings;
use crate::target::Target;
use crate::template::{self, Templates};
use crate::touch::Touch;
use chrono::NaiveDate;
use std::path::Path;

/// Every collection, loaded wholesale. Each is saved independently.
#[derive(Debug, Clone)]
pub struct Book {
    pub targets: Vec<Target>,
    pub touches: Vec<Touch>,
    pub templates: Templates,
    pub settings: Settings,
}

impl Book {
    pub fn load(root: &Path) -> Result<Self> {
        Ok(Self {
            targets: Target::load_all(root)?,
            touches: Touch::load_all(root)?,
            templates: template::load(root)?,
            settings: Settings::load(root)?,
        })
    }

    pub fn save_targets(&self, root: &Path) -> Result<()> {
        Target::save_all(root, &self.targets)
    }

    pub fn save_touches(&self, root: &Path) -> Result<()> {
        Touch::save_all(root, &self.touches)
    }
}

/// Create the data directory and seed any missing collection. A fresh
/// settings file starts the cadence on `today`.
/// Returns the files that were written.
pub fn init(root: &Path, today: NaiveDate) -> Result<Vec<&'static str>> {
    crate::io::ensure_dir(&paths::data_dir(root))?;

    let mut created = Vec::new();
    if crate::io::write_json_if_missing(&paths::settings_path(root), &Settings::starting(today))? {
        created.push(paths::SETTINGS_FILE);
    }
    let templates = template::default_templates();
    if crate::io::write_json_if_missing(&paths::templates_path(root), &templates)? {
        created.push(paths::TEMPLATES_FILE);
    }
    if crate::io::write_json_if_missing(&paths::targets_path(root), &Vec::<Target>::new())? {
        created.push(paths::TARGETS_FILE);
    }
    if crate::io::write_json_if_missing(&paths::touches_path(root), &Vec::<Touch>::new())? {
        created.push(paths::TOUCHES_FILE);
    }
    Ok(created)
}
