//! Role vocabulary for session-scoped authorization.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Coarse-grained permission class attached to an authenticated session.
///
/// `User` is the patient role; the name follows the backend's wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Doctor,
    Admin,
}

/// Wire string value for the patient role.
pub const ROLE_USER: &str = "user";
/// Wire string value for the doctor role.
pub const ROLE_DOCTOR: &str = "doctor";
/// Wire string value for the admin role.
pub const ROLE_ADMIN: &str = "admin";

const SUPPORTED_ROLE_STRINGS: &[&str] = &[ROLE_USER, ROLE_DOCTOR, ROLE_ADMIN];

impl Role {
    /// Stable string id used across the FFI boundary and in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => ROLE_USER,
            Self::Doctor => ROLE_DOCTOR,
            Self::Admin => ROLE_ADMIN,
        }
    }

    /// All roles in declaration order.
    ///
    /// Test suites iterate this instead of hand-listing variants, so a new
    /// role automatically flows into totality checks.
    pub fn all() -> [Role; 3] {
        [Self::User, Self::Doctor, Self::Admin]
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns supported role wire strings.
pub fn supported_role_strings() -> &'static [&'static str] {
    SUPPORTED_ROLE_STRINGS
}

/// Parses one role from its wire string value.
///
/// Input is trimmed; casing is not normalized, so `USER` is rejected the
/// same way an unknown value is.
pub fn parse_role(value: &str) -> Result<Role, RoleParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(RoleParseError::EmptyRole);
    }

    match normalized {
        ROLE_USER => Ok(Role::User),
        ROLE_DOCTOR => Ok(Role::Doctor),
        ROLE_ADMIN => Ok(Role::Admin),
        other => Err(RoleParseError::UnknownRole(other.to_string())),
    }
}

/// Role parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleParseError {
    EmptyRole,
    UnknownRole(String),
}

impl Display for RoleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRole => write!(f, "role value must not be empty"),
            Self::UnknownRole(value) => write!(f, "role is unknown: {value}"),
        }
    }
}

impl Error for RoleParseError {}

#[cfg(test)]
mod tests {
    use super::{parse_role, supported_role_strings, Role, RoleParseError};

    #[test]
    fn parses_all_supported_roles() {
        assert_eq!(parse_role("user").expect("user parse"), Role::User);
        assert_eq!(parse_role("doctor").expect("doctor parse"), Role::Doctor);
        assert_eq!(parse_role("admin").expect("admin parse"), Role::Admin);
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        assert_eq!(parse_role("  doctor  ").expect("trimmed parse"), Role::Doctor);
    }

    #[test]
    fn rejects_empty_role() {
        let err = parse_role("   ").expect_err("empty role must fail");
        assert_eq!(err, RoleParseError::EmptyRole);
    }

    #[test]
    fn rejects_unknown_and_wrong_case_roles() {
        let err = parse_role("nurse").expect_err("unknown role must fail");
        assert_eq!(err, RoleParseError::UnknownRole("nurse".to_string()));

        let err = parse_role("ADMIN").expect_err("uppercase role must fail");
        assert_eq!(err, RoleParseError::UnknownRole("ADMIN".to_string()));
    }

    #[test]
    fn round_trips_through_wire_strings() {
        for role in Role::all() {
            assert_eq!(parse_role(role.as_str()).expect("round trip"), role);
        }
    }

    #[test]
    fn supported_strings_match_declared_roles() {
        let values = supported_role_strings();
        assert_eq!(values.len(), Role::all().len());
        for role in Role::all() {
            assert!(values.contains(&role.as_str()));
        }
    }
}
