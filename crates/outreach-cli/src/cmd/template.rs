use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use outreach_core::{
    template::{self as template_ops, Template},
    types::ActionCode,
};
use std::path::Path;

#[derive(Subcommand)]
pub enum TemplateSubcommand {
    /// List templates by action code
    List,
    /// Print one template
    Show { action: ActionCode },
    /// Replace a template's subject and/or body.
    /// Placeholders: {{FirstName}}, {{Company}}, {{YourName}}
    Set {
        action: ActionCode,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },
    /// Restore every template to the built-in defaults
    Reset,
}

pub fn run(root: &Path, subcmd: TemplateSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        TemplateSubcommand::List => list(root, json),
        TemplateSubcommand::Show { action } => show(root, action, json),
        TemplateSubcommand::Set {
            action,
            subject,
            body,
        } => set(root, action, subject, body, json),
        TemplateSubcommand::Reset => reset(root),
    }
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let templates = template_ops::load(root).context("failed to load templates")?;
    if json {
        return print_json(&templates);
    }
    let rows = templates
        .iter()
        .map(|(code, t)| vec![code.to_string(), t.subject.clone()])
        .collect();
    print_table(&["ACTION", "SUBJECT"], rows);
    Ok(())
}

fn show(root: &Path, action: ActionCode, json: bool) -> anyhow::Result<()> {
    let templates = template_ops::load(root).context("failed to load templates")?;
    let tpl = template_ops::get(&templates, action)?;
    if json {
        return print_json(tpl);
    }
    println!("Subject: {}\n", tpl.subject);
    println!("{}", tpl.body);
    Ok(())
}

fn set(
    root: &Path,
    action: ActionCode,
    subject: Option<String>,
    body: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    if subject.is_none() && body.is_none() {
        anyhow::bail!("pass --subject and/or --body");
    }
    if !template_ops::templated_actions().any(|a| a == action) {
        anyhow::bail!("{action} is not an email step and takes no template");
    }
    let mut templates = template_ops::load(root).context("failed to load templates")?;
    let current = templates.get(&action).cloned().unwrap_or(Template {
        subject: String::new(),
        body: String::new(),
    });
    let updated = Template {
        subject: subject.unwrap_or(current.subject),
        body: body.unwrap_or(current.body),
    };
    template_ops::set_template(&mut templates, action, updated.clone());
    template_ops::save(root, &templates).context("failed to save templates")?;
    tracing::info!(%action, "template saved");

    if json {
        print_json(&updated)?;
    } else {
        println!("Saved template {action}.");
    }
    Ok(())
}

fn reset(root: &Path) -> anyhow::Result<()> {
    let mut templates = template_ops::load(root).context("failed to load templates")?;
    template_ops::reset_templates(&mut templates);
    template_ops::save(root, &templates).context("failed to save templates")?;
    println!("All templates reset to defaults.");
    Ok(())
}
