use crate::error::{OutreachError, Result};
use crate::paths;
use crate::target::Target;
use crate::types::ActionCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Name substituted for `{{YourName}}`.
pub const SENDER_NAME: &str = "Chris";

pub const PLACEHOLDER_FIRST_NAME: &str = "{{FirstName}}";
pub const PLACEHOLDER_COMPANY: &str = "{{Company}}";
pub const PLACEHOLDER_SENDER: &str = "{{YourName}}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub subject: String,
    pub body: String,
}

impl Template {
    fn new(subject: &str, body: &str) -> Self {
        Self {
            subject: subject.to_string(),
            body: body.to_string(),
        }
    }
}

pub type Templates = BTreeMap<ActionCode, Template>;

/// Replace the known placeholders in `text` with values from `target`.
///
/// Unknown `{{...}}` tokens are left as they are and replacement values are
/// inserted verbatim.
pub fn interpolate(text: &str, target: &Target) -> String {
    text.replace(PLACEHOLDER_FIRST_NAME, target.first_name())
        .replace(PLACEHOLDER_COMPANY, &target.company)
        .replace(PLACEHOLDER_SENDER, SENDER_NAME)
}

/// Codes that can carry a template; the LinkedIn step is done by hand.
pub fn templated_actions() -> impl Iterator<Item = ActionCode> {
    ActionCode::all()
        .iter()
        .copied()
        .filter(|c| *c != ActionCode::LinkedinConnect)
}

pub fn default_templates() -> Templates {
    let mut m = Templates::new();
    m.insert(
        ActionCode::Email1Intro,
        Template::new(
            "Quick question re: client gifting this year",
            "Hi {{FirstName}} — I’m Chris with Jack Stack Barbecue here in KC.\n\
             \n\
             We help KC firms run client/partner gifting programs that feel premium and are \
             simple to execute — especially ahead of Q4.\n\
             \n\
             Quick question: who’s the right person on your team to coordinate gifting and \
             vendor selection?\n\
             \n\
             Thanks,\n\
             Chris",
        ),
    );
    m.insert(
        ActionCode::Email2Bump,
        Template::new(
            "Re: Quick question",
            "Hi {{FirstName}} — just bumping this in case it got buried.\n\
             \n\
             Is there someone else I should reach out to for gifting/vendor coordination?\n\
             \n\
             Thanks,\n\
             Chris",
        ),
    );
    m.insert(
        ActionCode::Email3Value,
        Template::new(
            "Simple way we support Q4 gifting",
            "Hi {{FirstName}} — if helpful, I can send a 1-page overview with pricing bands and \
             a few common corporate programs we run for KC firms.\n\
             \n\
             Want that?\n\
             \n\
             Chris",
        ),
    );
    m.insert(
        ActionCode::Email4Social,
        Template::new(
            "KC firms using gifting as a relationship tool",
            "Hi {{FirstName}} — we’ve found the best corporate gifting programs do two things:\n\
             1) protect key relationships, and\n\
             2) make execution simple for the team.\n\
             \n\
             If you’re the right person, happy to share what’s working. If not, who owns this?\n\
             \n\
             Chris",
        ),
    );
    m.insert(
        ActionCode::Email5RightPerson,
        Template::new(
            "Closing the loop",
            "Hi {{FirstName}} — last quick note from me.\n\
             \n\
             Should I be speaking with Marketing, an EA, or Client Experience for gifting \
             coordination?\n\
             \n\
             Thanks,\n\
             Chris",
        ),
    );
    m.insert(
        ActionCode::Email6Close,
        Template::new(
            "I’ll close this out for now",
            "Hi {{FirstName}} — I’m going to close this out to avoid clutter.\n\
             \n\
             If you want, I can circle back in early September (planning) or early November \
             (execution). Which is better?\n\
             \n\
             Chris",
        ),
    );
    m.insert(
        ActionCode::RecycleQ4,
        Template::new(
            "Quick check-in for Q4 gifting",
            "Hi {{FirstName}} — checking in as teams start planning Q4 gifting.\n\
             \n\
             Do you want me to send over a quick menu with pricing bands and lead times?\n\
             \n\
             Chris",
        ),
    );
    m
}

// ---------------------------------------------------------------------------
// Persistence and edits
// ---------------------------------------------------------------------------

pub fn load(root: &Path) -> Result<Templates> {
    crate::io::read_json_or(&paths::templates_path(root), default_templates)
}

pub fn save(root: &Path, templates: &Templates) -> Result<()> {
    crate::io::write_json(&paths::templates_path(root), templates)
}

pub fn get(templates: &Templates, action: ActionCode) -> Result<&Template> {
    templates
        .get(&action)
        .ok_or_else(|| OutreachError::NoTemplate(action.to_string()))
}

/// Overwrite the template for one code wholesale.
pub fn set_template(templates: &mut Templates, action: ActionCode, template: Template) {
    templates.insert(action, template);
}

/// Replace every template with the built-in defaults.
pub fn reset_templates(templates: &mut Templates) {
    *templates = default_templates();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
