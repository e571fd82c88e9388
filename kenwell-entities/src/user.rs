use std::str::FromStr;

use thiserror::Error;

use crate::id::Id;

/// Application profile of a user in the `users` collection.
///
/// The schema is owned by the client applications; this backend only
/// reads the `role` attribute and deletes whole records. The role is
/// stored as free-form text and must be interpreted through [`Role`].
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id   : Id,
    pub role : String,
}

/// Closed set of roles known to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Nurse,
    Staff,
    TopManagement,
    Admin,
}

impl Role {
    /// Only administrators may perform destructive account operations.
    pub const fn is_administrator(self) -> bool {
        matches!(self, Self::Admin | Self::TopManagement)
    }
}

#[derive(Debug, Error)]
#[error("unknown role")]
pub struct RoleParseError;

impl FromStr for Role {
    type Err = RoleParseError;

    /// Parses the free-form role text stored on user records.
    ///
    /// Comparison is case-insensitive via explicit upper-casing.
    /// Surrounding whitespace is NOT trimmed, matching how the stored
    /// text has always been interpreted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NURSE" => Ok(Self::Nurse),
            "STAFF" => Ok(Self::Staff),
            "TOP MANAGEMENT" => Ok(Self::TopManagement),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(RoleParseError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_role_case_insensitively() {
        assert_eq!(Role::Admin, "admin".parse().unwrap());
        assert_eq!(Role::Admin, "ADMIN".parse().unwrap());
        assert_eq!(Role::TopManagement, "Top Management".parse().unwrap());
        assert_eq!(Role::Nurse, "nurse".parse().unwrap());
        assert!("".parse::<Role>().is_err());
        assert!("janitor".parse::<Role>().is_err());
    }

    #[test]
    fn parse_role_does_not_trim_whitespace() {
        assert!(" admin".parse::<Role>().is_err());
        assert!("admin ".parse::<Role>().is_err());
    }

    #[test]
    fn administrator_roles() {
        assert!(Role::Admin.is_administrator());
        assert!(Role::TopManagement.is_administrator());
        assert!(!Role::Nurse.is_administrator());
        assert!(!Role::Staff.is_administrator());
    }
}
