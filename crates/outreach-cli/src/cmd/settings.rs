use crate::output::{money, print_json};
use anyhow::Context;
use clap::Subcommand;
use outreach_core::{calendar::parse_date, settings::Settings};
use std::path::Path;

#[derive(Subcommand)]
pub enum SettingsSubcommand {
    /// Show current settings
    Show,
    /// Change settings and save
    Set {
        /// Revenue target for the dashboard
        #[arg(long)]
        revenue_target: Option<f64>,
        /// Reference date for untouched targets (YYYY-MM-DD)
        #[arg(long)]
        cadence_start: Option<String>,
    },
}

pub fn run(root: &Path, subcmd: SettingsSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        SettingsSubcommand::Show => show(root, json),
        SettingsSubcommand::Set {
            revenue_target,
            cadence_start,
        } => set(root, revenue_target, cadence_start.as_deref(), json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let settings = Settings::load(root).context("failed to load settings")?;
    if json {
        return print_json(&settings);
    }
    println!("Revenue target:  {}", money(settings.revenue_target));
    println!("Cadence start:   {}", settings.cadence_start);
    Ok(())
}

fn set(
    root: &Path,
    revenue_target: Option<f64>,
    cadence_start: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let mut settings = Settings::load(root).context("failed to load settings")?;
    if let Some(v) = revenue_target {
        if v < 0.0 {
            anyhow::bail!("revenue target must not be negative");
        }
        settings.revenue_target = v;
    }
    if let Some(s) = cadence_start {
        settings.cadence_start = parse_date(s)?;
    }
    settings.save(root).context("failed to save settings")?;
    tracing::info!(
        revenue_target = settings.revenue_target,
        cadence_start = %settings.cadence_start,
        "settings saved"
    );

    if json {
        print_json(&settings)?;
    } else {
        println!("Saved.");
    }
    Ok(())
}
