use serde::{Deserialize, Serialize};
use std::fmt;

/// Access role assigned at sign-in. Immutable for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Client,
    Vendor,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::User, Role::Client, Role::Vendor];

    /// Wire value used on the login form and in catalog rows.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Client => "client",
            Role::Vendor => "vendor",
        }
    }

    /// Human-facing label shown in the sidebar and on the sign-in screen.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::User => "Internal User",
            Role::Client => "External Client",
            Role::Vendor => "Vendor",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        let s = s.trim();
        Role::ALL.iter().copied().find(|r| r.as_str().eq_ignore_ascii_case(s))
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_wire_values_case_insensitively() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("VENDOR"), Some(Role::Vendor));
        assert_eq!(Role::parse(" client "), Some(Role::Client));
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn labels_match_wire_values() {
        assert_eq!(Role::Admin.label(), "Administrator");
        assert_eq!(Role::User.label(), "Internal User");
        assert_eq!(Role::Client.label(), "External Client");
        assert_eq!(Role::Vendor.label(), "Vendor");
        for r in Role::ALL {
            assert_eq!(Role::parse(r.as_str()), Some(r));
        }
    }
}
