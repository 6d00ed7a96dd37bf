use serde::{Deserialize, Serialize};

/// A position on the globe in decimal degrees.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Outcome of a foreground permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// How permission requests are answered.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PermissionPolicy {
    #[default]
    Allow,
    Deny,
}

impl PermissionPolicy {
    pub fn status(self) -> PermissionStatus {
        match self {
            PermissionPolicy::Allow => PermissionStatus::Granted,
            PermissionPolicy::Deny => PermissionStatus::Denied,
        }
    }

    /// Parses the config/env spelling. Accepts a few synonyms.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" | "granted" | "grant" | "yes" => Some(PermissionPolicy::Allow),
            "deny" | "denied" | "no" => Some(PermissionPolicy::Deny),
            _ => None,
        }
    }
}
