//! Role policy for destructive administrative operations.

use std::result::Result as StdResult;

use thiserror::Error;

use crate::entities::user::{Role, User};

#[derive(Debug, Error)]
pub enum Error {
    #[error("unauthorized role")]
    UnauthorizedRole,
}

pub type Result<T> = StdResult<T, Error>;

/// Checks that the user's stored role text names an administrator.
///
/// The role attribute is free-form text; anything that does not parse
/// into a known [`Role`] is rejected like a non-administrator role.
pub fn authorize_administrator(user: &User) -> Result<()> {
    let role: Role = user.role.parse().map_err(|_| Error::UnauthorizedRole)?;
    if !role.is_administrator() {
        return Err(Error::UnauthorizedRole);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::builders::Builder;

    #[test]
    fn accept_administrator_roles_of_any_case() {
        for role in ["admin", "ADMIN", "Top Management", "top management"] {
            let user = User::build().role(role).finish();
            assert!(authorize_administrator(&user).is_ok());
        }
    }

    #[test]
    fn reject_non_administrator_roles() {
        for role in ["nurse", "Nurse", "staff", "", "head of everything"] {
            let user = User::build().role(role).finish();
            assert!(authorize_administrator(&user).is_err());
        }
    }
}
