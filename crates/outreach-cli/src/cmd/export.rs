use anyhow::Context;
use clap::Subcommand;
use outreach_core::{export, store::Book};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum ExportSubcommand {
    /// Every target with all fields
    Targets {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Every logged touch
    Touches {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// One dated task per target with a pending next action
    Tasks {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

pub fn run(root: &Path, subcmd: ExportSubcommand) -> anyhow::Result<()> {
    let book = Book::load(root).context("failed to load data")?;
    let (out, buf) = match subcmd {
        ExportSubcommand::Targets { out } => {
            let mut buf = Vec::new();
            export::write_targets(&mut buf, &book.targets)?;
            (out, buf)
        }
        ExportSubcommand::Touches { out } => {
            let mut buf = Vec::new();
            export::write_touches(&mut buf, &book.touches)?;
            (out, buf)
        }
        ExportSubcommand::Tasks { out } => {
            let tasks =
                export::task_rows(&book.targets, &book.touches, book.settings.cadence_start);
            let mut buf = Vec::new();
            export::write_tasks(&mut buf, &tasks)?;
            (out, buf)
        }
    };

    match out {
        Some(path) => {
            std::fs::write(&path, &buf)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = buf.len(), "export written");
            eprintln!("Wrote {}", path.display());
        }
        None => std::io::stdout().write_all(&buf)?,
    }
    Ok(())
}
