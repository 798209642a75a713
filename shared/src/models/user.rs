//! User and Role Models

use serde::{Deserialize, Serialize};

/// Account role
///
/// A closed set so that view selection is an exhaustive `match` rather than
/// string comparison; adding a role is a compile-time-checked change. `Guest`
/// is the no-session state and also appears on the wire for anonymous-capable
/// endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "ROLE_GUEST")]
    Guest,
    #[serde(rename = "ROLE_CUSTOMER")]
    Customer,
    #[serde(rename = "ROLE_STAFF")]
    Staff,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "ROLE_GUEST",
            Self::Customer => "ROLE_CUSTOMER",
            Self::Staff => "ROLE_STAFF",
            Self::Admin => "ROLE_ADMIN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Guest => "Guest",
            Self::Customer => "Customer",
            Self::Staff => "Staff",
            Self::Admin => "Admin",
        }
    }

    /// Staff and admin share the management surfaces (items, inventory, tax).
    pub fn is_staff_or_admin(&self) -> bool {
        matches!(self, Self::Staff | Self::Admin)
    }

    /// Account administration is admin-only.
    pub fn can_manage_accounts(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROLE_GUEST" => Ok(Self::Guest),
            "ROLE_CUSTOMER" => Ok(Self::Customer),
            "ROLE_STAFF" => Ok(Self::Staff),
            "ROLE_ADMIN" => Ok(Self::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role reference as it appears inside a user record (`roles: [{name}]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRef {
    pub id: Option<i64>,
    pub name: String,
}

/// User account entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub username: String,
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<RoleRef>,
}

impl User {
    /// Name as shown in order tables; accounts without a display name fall
    /// back to their username.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }

    /// Highest-privilege role attached to the account. Accounts always carry
    /// at least one role; anything unrecognized degrades to Customer.
    pub fn primary_role(&self) -> Role {
        let has = |r: Role| self.roles.iter().any(|x| x.name == r.as_str());
        if has(Role::Admin) {
            Role::Admin
        } else if has(Role::Staff) {
            Role::Staff
        } else {
            Role::Customer
        }
    }
}

/// Update user payload (admin account management)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_parses_wire_strings() {
        assert_eq!(Role::from_str("ROLE_ADMIN").unwrap(), Role::Admin);
        assert_eq!(Role::from_str("ROLE_CUSTOMER").unwrap(), Role::Customer);
        assert!(Role::from_str("ROLE_BARISTA").is_err());
    }

    #[test]
    fn test_role_serde_round_trip() {
        let json = serde_json::to_string(&Role::Staff).unwrap();
        assert_eq!(json, "\"ROLE_STAFF\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Staff);
    }

    fn user_with_roles(names: &[&str]) -> User {
        User {
            id: 1,
            name: None,
            username: "jsmith".to_string(),
            email: Some("j@example.com".to_string()),
            roles: names
                .iter()
                .map(|n| RoleRef {
                    id: None,
                    name: n.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        assert_eq!(user_with_roles(&[]).display_name(), "jsmith");
    }

    #[test]
    fn test_primary_role_takes_highest_privilege() {
        assert_eq!(
            user_with_roles(&["ROLE_STAFF", "ROLE_ADMIN"]).primary_role(),
            Role::Admin
        );
        assert_eq!(
            user_with_roles(&["ROLE_CUSTOMER"]).primary_role(),
            Role::Customer
        );
        assert_eq!(user_with_roles(&[]).primary_role(), Role::Customer);
    }
}
