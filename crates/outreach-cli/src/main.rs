mod cmd;
mod output;
mod root;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use cmd::{
    export::ExportSubcommand, settings::SettingsSubcommand, target::TargetSubcommand,
    template::TemplateSubcommand, touch::TouchSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "outreach",
    about = "Sales outreach tracker: targets, a fixed contact cadence, and what is due today",
    version,
    propagate_version = true
)]
struct Cli {
    /// Data root (default: auto-detect from .outreach/)
    #[arg(long, global = true, env = "OUTREACH_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long, global = true, env = "OUTREACH_TODAY", hide = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the .outreach/ data directory
    Init,

    /// Revenue progress, weekly activity, and what is due today
    Dashboard,

    /// List targets whose next cadence step is due today or overdue
    Due,

    /// Show the contact cadence
    Cadence,

    /// Manage targets
    Target {
        #[command(subcommand)]
        subcommand: TargetSubcommand,
    },

    /// Log and list touches
    Touch {
        #[command(subcommand)]
        subcommand: TouchSubcommand,
    },

    /// Manage email templates
    Template {
        #[command(subcommand)]
        subcommand: TemplateSubcommand,
    },

    /// Show or change revenue target and cadence start date
    Settings {
        #[command(subcommand)]
        subcommand: SettingsSubcommand,
    },

    /// Import targets from a CSV file
    Import { file: PathBuf },

    /// Export targets, touches, or next-action tasks as CSV
    Export {
        #[command(subcommand)]
        subcommand: ExportSubcommand,
    },

    /// Draft the next email for a target
    Compose {
        /// Target id (company::domain)
        id: String,
        /// Open the draft in the default mail client
        #[arg(long)]
        open: bool,
    },
}

fn today(explicit: Option<&str>) -> anyhow::Result<NaiveDate> {
    match explicit {
        Some(s) => outreach_core::calendar::parse_date(s).context("invalid --today"),
        None => Ok(Local::now().date_naive()),
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Import { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = today(cli.today.as_deref()).and_then(|today| match cli.command {
        Commands::Init => cmd::init::run(&root, today),
        Commands::Dashboard => cmd::dashboard::run(&root, today, cli.json),
        Commands::Due => cmd::dashboard::due(&root, today, cli.json),
        Commands::Cadence => cmd::cadence::run(cli.json),
        Commands::Target { subcommand } => cmd::target::run(&root, subcommand, today, cli.json),
        Commands::Touch { subcommand } => cmd::touch::run(&root, subcommand, cli.json),
        Commands::Template { subcommand } => cmd::template::run(&root, subcommand, cli.json),
        Commands::Settings { subcommand } => cmd::settings::run(&root, subcommand, cli.json),
        Commands::Import { file } => cmd::import::run(&root, &file, cli.json),
        Commands::Export { subcommand } => cmd::export::run(&root, subcommand),
        Commands::Compose { id, open } => cmd::compose::run(&root, &id, open, cli.json),
    });

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
