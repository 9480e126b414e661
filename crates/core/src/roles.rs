//! Well-known role names and the admin email allow-list.
//!
//! Role names arrive from the identity provider as plain strings. They are
//! parsed into [`Role`] at the edge; anything unrecognized stays unparsed and
//! is treated as least privilege by the permission engine.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_SUPERVISOR: &str = "supervisor";
pub const ROLE_TECHNICIAN: &str = "technician";

/// All recognized role names.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_SUPERVISOR, ROLE_TECHNICIAN];

/// Accounts promoted to admin on sign-in.
pub const ADMIN_EMAILS: &[&str] = &["admin@abc.com", "abebe6993@gmail.com"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Supervisor,
    Technician,
}

impl Role {
    /// Parse a role name. Matching is exact; `"Admin"` is not a role.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            ROLE_ADMIN => Some(Self::Admin),
            ROLE_SUPERVISOR => Some(Self::Supervisor),
            ROLE_TECHNICIAN => Some(Self::Technician),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => ROLE_ADMIN,
            Self::Supervisor => ROLE_SUPERVISOR,
            Self::Technician => ROLE_TECHNICIAN,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `true` if the email belongs to the admin allow-list.
///
/// Comparison ignores case and surrounding whitespace.
pub fn is_admin_email(email: &str) -> bool {
    let email = email.trim().to_lowercase();
    ADMIN_EMAILS.contains(&email.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_roles() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("supervisor"), Some(Role::Supervisor));
        assert_eq!(Role::parse("technician"), Some(Role::Technician));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse("owner"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn as_str_matches_constants() {
        for name in VALID_ROLES {
            let role = Role::parse(name).unwrap();
            assert_eq!(role.as_str(), *name);
            assert_eq!(role.to_string(), *name);
        }
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Role::Technician).unwrap();
        assert_eq!(json, "\"technician\"");
        let role: Role = serde_json::from_str("\"supervisor\"").unwrap();
        assert_eq!(role, Role::Supervisor);
    }

    #[test]
    fn admin_email_is_case_insensitive() {
        assert!(is_admin_email("admin@abc.com"));
        assert!(is_admin_email("  ADMIN@ABC.com "));
        assert!(!is_admin_email("someone@abc.com"));
        assert!(!is_admin_email(""));
    }
}
