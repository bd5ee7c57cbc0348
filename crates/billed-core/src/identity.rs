use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    Employee,
    Admin,
}

impl ActorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorKind::Employee => "Employee",
            ActorKind::Admin => "Admin",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "Employee" => Some(ActorKind::Employee),
            "Admin" => Some(ActorKind::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The already-authenticated actor, as the session layer hands it over.
/// Read-only input: the core stamps its email onto new bills and gates
/// the review flow on its kind, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "type")]
    pub kind: ActorKind,
    pub email: String,
}

impl Identity {
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            kind: ActorKind::Employee,
            email: email.into(),
        }
    }

    pub fn admin(email: impl Into<String>) -> Self {
        Self {
            kind: ActorKind::Admin,
            email: email.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.kind == ActorKind::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_kind_parse_str() {
        assert_eq!(ActorKind::parse_str("Employee"), Some(ActorKind::Employee));
        assert_eq!(ActorKind::parse_str("Admin"), Some(ActorKind::Admin));
        assert_eq!(ActorKind::parse_str("employee"), None);
        assert_eq!(ActorKind::parse_str(""), None);
    }

    #[test]
    fn identity_wire_shape() {
        let identity: Identity =
            serde_json::from_str(r#"{"type": "Employee", "email": "johndoe@email.com"}"#).unwrap();
        assert_eq!(identity.kind, ActorKind::Employee);
        assert_eq!(identity.email, "johndoe@email.com");
        assert!(!identity.is_admin());
    }

    #[test]
    fn identity_constructors() {
        assert!(Identity::admin("boss@test.tld").is_admin());
        assert_eq!(Identity::employee("a@a").email, "a@a");
    }
}
