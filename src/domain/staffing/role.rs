use serde::{Deserialize, Serialize};
use std::fmt;

pub const DATA_COLLECTOR: &str = "data_collector";
pub const SUPERVISOR: &str = "supervisor";
pub const BACKCHECKER: &str = "backchecker";

/// Canonicalizes a free-text role.
///
/// The input is trimmed and lowercased, runs of whitespace and hyphens become a
/// single underscore, and the result is mapped onto one of the three canonical
/// roles. Unknown tokens are returned as-is so callers can still display them.
pub fn normalize_role(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    let mut token = String::with_capacity(lowered.len());
    let mut in_separator = false;
    for c in lowered.chars() {
        if c.is_whitespace() || c == '-' {
            if !in_separator {
                token.push('_');
            }
            in_separator = true;
        } else {
            token.push(c);
            in_separator = false;
        }
    }

    match token.as_str() {
        "data_collector" | "collector" => DATA_COLLECTOR.to_string(),
        "supervisor" => SUPERVISOR.to_string(),
        "backchecker" | "back_checker" => BACKCHECKER.to_string(),
        _ => token,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    DataCollector,
    Supervisor,
    Backchecker,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::DataCollector, Role::Supervisor, Role::Backchecker];

    pub fn from_raw(raw: &str) -> Option<Self> {
        match normalize_role(raw).as_str() {
            DATA_COLLECTOR => Some(Self::DataCollector),
            SUPERVISOR => Some(Self::Supervisor),
            BACKCHECKER => Some(Self::Backchecker),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataCollector => DATA_COLLECTOR,
            Self::Supervisor => SUPERVISOR,
            Self::Backchecker => BACKCHECKER,
        }
    }

    pub fn matches(&self, raw: &str) -> bool {
        normalize_role(raw) == self.as_str()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
