use crate::output::print_json;
use anyhow::Context;
use outreach_core::{
    cadence::next_action,
    compose::compose,
    store::Book,
    target,
    types::ActionCode,
    OutreachError,
};
use std::path::Path;

/// Draft the target's next cadence email. Never records a touch; run
/// `outreach touch log` once the message is actually sent.
pub fn run(root: &Path, id: &str, open: bool, json: bool) -> anyhow::Result<()> {
    let book = Book::load(root).context("failed to load data")?;
    let t = target::find(&book.targets, id)?;
    let next = next_action(t, &book.touches, book.settings.cadence_start)
        .ok_or_else(|| OutreachError::CadenceComplete(id.to_string()))?;

    // The recycle step is not an email in the cadence but still has a template.
    let composable = next.action.is_email() || next.action == ActionCode::RecycleQ4;
    if !composable {
        println!(
            "Next step is {} (due {}). Log it when done: outreach touch log {id}",
            next.label, next.due
        );
        return Ok(());
    }

    let draft = compose(t, &book.templates, next.action)?;

    if json {
        print_json(&draft)?;
    } else {
        println!("Step:     {} (due {})", next.label, next.due);
        println!("To:       {}", draft.to.as_deref().unwrap_or("-"));
        println!("Subject:  {}", draft.subject);
        println!();
        println!("{}", draft.body);
        println!();
        match &draft.link {
            Some(link) => println!("{link}"),
            None => eprintln!(
                "warning: no valid email address set; add one with \
                 `outreach target edit {id} --email ...` to get a compose link"
            ),
        }
    }

    if open {
        let link = draft.require_link()?;
        open::that(link).context("failed to open mail client")?;
        tracing::info!(id, action = %next.action, "opened draft in mail client");
    }
    Ok(())
}
