use crate::error::OutreachError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tier {
    A,
    #[default]
    B,
    C,
}

impl Tier {
    pub fn all() -> &'static [Tier] {
        &[Tier::A, Tier::B, Tier::C]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tier {
    type Err = OutreachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_uppercase();
        Tier::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == norm)
            .ok_or_else(|| OutreachError::InvalidTier(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    NotContacted,
    InPlay,
    Engaged,
    Meeting,
    Proposal,
    Won,
    Lost,
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[
            Status::NotContacted,
            Status::InPlay,
            Status::Engaged,
            Status::Meeting,
            Status::Proposal,
            Status::Won,
            Status::Lost,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::NotContacted => "NOT_CONTACTED",
            Status::InPlay => "IN_PLAY",
            Status::Engaged => "ENGAGED",
            Status::Meeting => "MEETING",
            Status::Proposal => "PROPOSAL",
            Status::Won => "WON",
            Status::Lost => "LOST",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = OutreachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Status::all()
            .iter()
            .copied()
            .find(|st| st.as_str() == norm)
            .ok_or_else(|| OutreachError::InvalidStatus(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ActionCode
// ---------------------------------------------------------------------------

/// One step of the outreach cadence. Declaration order is cadence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionCode {
    #[serde(rename = "EMAIL_1_INTRO")]
    Email1Intro,
    #[serde(rename = "EMAIL_2_BUMP")]
    Email2Bump,
    #[serde(rename = "LINKEDIN_CONNECT")]
    LinkedinConnect,
    #[serde(rename = "EMAIL_3_VALUE")]
    Email3Value,
    #[serde(rename = "EMAIL_4_SOCIAL")]
    Email4Social,
    #[serde(rename = "EMAIL_5_RIGHT_PERSON")]
    Email5RightPerson,
    #[serde(rename = "EMAIL_6_CLOSE")]
    Email6Close,
    #[serde(rename = "RECYCLE_Q4")]
    RecycleQ4,
}

impl ActionCode {
    pub fn all() -> &'static [ActionCode] {
        &[
            ActionCode::Email1Intro,
            ActionCode::Email2Bump,
            ActionCode::LinkedinConnect,
            ActionCode::Email3Value,
            ActionCode::Email4Social,
            ActionCode::Email5RightPerson,
            ActionCode::Email6Close,
            ActionCode::RecycleQ4,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionCode::Email1Intro => "EMAIL_1_INTRO",
            ActionCode::Email2Bump => "EMAIL_2_BUMP",
            ActionCode::LinkedinConnect => "LINKEDIN_CONNECT",
            ActionCode::Email3Value => "EMAIL_3_VALUE",
            ActionCode::Email4Social => "EMAIL_4_SOCIAL",
            ActionCode::Email5RightPerson => "EMAIL_5_RIGHT_PERSON",
            ActionCode::Email6Close => "EMAIL_6_CLOSE",
            ActionCode::RecycleQ4 => "RECYCLE_Q4",
        }
    }

    /// Email steps are composed from a template and sent through the mail client.
    pub fn is_email(self) -> bool {
        self.as_str().starts_with("EMAIL")
    }
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActionCode {
    type Err = OutreachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_uppercase();
        ActionCode::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == norm)
            .ok_or_else(|| OutreachError::InvalidActionCode(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_code_serde_uses_wire_names() {
        let json = serde_json::to_string(&ActionCode::Email5RightPerson).unwrap();
        assert_eq!(json, "\"EMAIL_5_RIGHT_PERSON\"");
        let parsed: ActionCode = serde_json::from_str("\"RECYCLE_Q4\"").unwrap();
        assert_eq!(parsed, ActionCode::RecycleQ4);
    }

    #[test]
    fn action_code_serde_matches_as_str() {
        for &code in ActionCode::all() {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn action_code_from_str_is_case_insensitive() {
        assert_eq!(
            "email_2_bump".parse::<ActionCode>().unwrap(),
            ActionCode::Email2Bump
        );
        assert!("EMAIL_7".parse::<ActionCode>().is_err());
    }

    #[test]
    fn linkedin_and_recycle_are_not_emails() {
        assert!(ActionCode::Email1Intro.is_email());
        assert!(!ActionCode::LinkedinConnect.is_email());
        assert!(!ActionCode::RecycleQ4.is_email());
    }

    #[test]
    fn status_parse_accepts_loose_forms() {
        assert_eq!("in-play".parse::<Status>().unwrap(), Status::InPlay);
        assert_eq!("WON".parse::<Status>().unwrap(), Status::Won);
        assert!("pending".parse::<Status>().is_err());
    }

    #[test]
    fn status_serde_is_screaming_snake() {
        let json = serde_json::to_string(&Status::NotContacted).unwrap();
        assert_eq!(json, "\"NOT_CONTACTED\"");
    }

    #[test]
    fn tier_defaults_to_b() {
        assert_eq!(Tier::default(), Tier::B);
        assert_eq!("c".parse::<Tier>().unwrap(), Tier::C);
        assert!("D".parse::<Tier>().is_err());
        for &tier in Tier::all() {
            let lower = tier.as_str().to_ascii_lowercase();
            assert_eq!(lower.parse::<Tier>().unwrap(), tier);
        }
    }
}
