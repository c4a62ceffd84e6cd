//! Member identity snapshot.

use serde::{Deserialize, Serialize};

use crate::claims::Role;

/// Point-in-time snapshot of an authenticated member.
///
/// Produced by the platform's authentication layer; this crate only reads
/// it when assembling token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique member ID
    pub id: i64,
    /// Unique login name
    pub username: String,
    /// Display name
    pub nickname: String,
    /// Granted roles; may be empty
    pub roles: Vec<Role>,
}

impl Member {
    /// Create a new member snapshot.
    pub fn new(
        id: i64,
        username: impl Into<String>,
        nickname: impl Into<String>,
        roles: Vec<Role>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            nickname: nickname.into(),
            roles,
        }
    }

    /// Check whether the member holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_role() {
        let member = Member::new(42, "ada", "Ada L.", vec![Role::Freelancer]);

        assert!(member.has_role(Role::Freelancer));
        assert!(!member.has_role(Role::Admin));
    }

    #[test]
    fn test_empty_roles() {
        let member = Member::new(7, "anon", "Anonymous", vec![]);
        assert!(!member.has_role(Role::Client));
    }
}
