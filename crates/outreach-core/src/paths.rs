use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const DATA_DIR: &str = ".outreach";

pub const TARGETS_FILE: &str = ".outreach/targets.json";
pub const TOUCHES_FILE: &str = ".outreach/touches.json";
pub const TEMPLATES_FILE: &str = ".outreach/templates.json";
pub const SETTINGS_FILE: &str = ".outreach/settings.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn data_dir(root: &Path) -> PathBuf {
    root.join(DATA_DIR)
}

pub fn targets_path(root: &Path) -> PathBuf {
    root.join(TARGETS_FILE)
}

pub fn touches_path(root: &Path) -> PathBuf {
    root.join(TOUCHES_FILE)
}

pub fn templates_path(root: &Path) -> PathBuf {
    root.join(TEMPLATES_FILE)
}

pub fn settings_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_FILE)
}
