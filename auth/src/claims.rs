//! Access token claims and role definitions.

use serde::{Deserialize, Serialize};

use crate::member::Member;

/// Member roles in the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Administrator with full access
    Admin,
    /// Client posting projects
    Client,
    /// Freelancer offering services
    Freelancer,
}

/// Access token claims structure.
///
/// The claim names are fixed: `id`, `username`, `nickname`, `roles`, `exp`.
/// A claim set is built fresh at issuance and reconstructed at verification;
/// it is never mutated in between.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Member ID
    pub id: i64,
    /// Unique login name
    pub username: String,
    /// Display name
    pub nickname: String,
    /// Granted roles
    pub roles: Vec<Role>,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create new claims for a member, expiring `expire_secs` from now.
    pub fn new(member: &Member, expire_secs: i64) -> Self {
        Self {
            id: member.id,
            username: member.username.clone(),
            nickname: member.nickname.clone(),
            roles: member.roles.clone(),
            exp: chrono::Utc::now().timestamp() + expire_secs,
        }
    }

    /// Check if the claims have expired.
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() > self.exp
    }

    /// Check if the member has the admin role.
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims_expire_in_the_future() {
        let member = Member::new(42, "ada", "Ada L.", vec![Role::Freelancer]);
        let claims = Claims::new(&member, 3600);

        assert_eq!(claims.id, 42);
        assert_eq!(claims.username, "ada");
        assert_eq!(claims.nickname, "Ada L.");
        assert!(claims.exp > chrono::Utc::now().timestamp());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_is_expired() {
        let member = Member::new(1, "bob", "Bob", vec![]);
        let mut claims = Claims::new(&member, 3600);

        claims.exp = chrono::Utc::now().timestamp() - 1;
        assert!(claims.is_expired());
    }

    #[test]
    fn test_is_admin() {
        let member = Member::new(1, "root", "Root", vec![Role::Admin, Role::Client]);
        let claims = Claims::new(&member, 60);

        assert!(claims.is_admin());
    }

    #[test]
    fn test_role_serialization_is_uppercase() {
        let json = serde_json::to_string(&Role::Freelancer).unwrap();
        assert_eq!(json, "\"FREELANCER\"");

        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result: Result<Role, _> = serde_json::from_str("\"SUPERUSER\"");
        assert!(result.is_err());
    }
}
