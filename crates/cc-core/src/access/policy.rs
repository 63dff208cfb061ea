//! Role-gated access policy

use crate::entities::AccessRole;
use crate::error::DomainError;

/// Where denied callers are sent
pub const DENIED_REDIRECT: &str = "/";

/// Allow-list of roles, optionally widened to community admins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    allowed: Vec<AccessRole>,
    check_community_admin: bool,
}

impl AccessPolicy {
    pub fn new(allowed: impl IntoIterator<Item = AccessRole>) -> Self {
        let mut roles = Vec::new();
        for role in allowed {
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
        Self {
            allowed: roles,
            check_community_admin: false,
        }
    }

    /// Parse an allow-list of role names; any unknown name is an error
    pub fn from_role_names<I, S>(names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roles = names
            .into_iter()
            .map(|name| name.as_ref().parse::<AccessRole>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(roles))
    }

    /// Also grant callers who administer at least one community
    pub fn or_community_admin(mut self) -> Self {
        self.check_community_admin = true;
        self
    }

    /// Review queue: moderators, admins and superusers
    pub fn reviewers() -> Self {
        Self::new([AccessRole::Moderator, AccessRole::Admin, AccessRole::Superuser])
    }

    /// Admin portal: admins and superusers
    pub fn admins() -> Self {
        Self::new([AccessRole::Admin, AccessRole::Superuser])
    }

    /// Admin team management
    pub fn superusers() -> Self {
        Self::new([AccessRole::Superuser])
    }

    /// Base check: is the caller's role on the allow-list?
    ///
    /// Callers without a role are never permitted.
    pub fn permits(&self, role: Option<AccessRole>) -> bool {
        role.is_some_and(|r| self.allowed.contains(&r))
    }

    pub fn checks_community_admin(&self) -> bool {
        self.check_community_admin
    }

    pub fn allowed(&self) -> &[AccessRole] {
        &self.allowed
    }

    /// Comma separated role names, for error messages
    pub fn describe(&self) -> String {
        self.allowed
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Outcome of evaluating a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Denied { redirect: &'static str },
}

impl AccessDecision {
    pub fn denied() -> Self {
        Self::Denied {
            redirect: DENIED_REDIRECT,
        }
    }

    pub fn from_granted(granted: bool) -> Self {
        if granted {
            Self::Granted
        } else {
            Self::denied()
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            Self::Granted => None,
            Self::Denied { redirect } => Some(redirect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permits_iff_role_listed() {
        for allowed in [
            vec![],
            vec![AccessRole::Admin],
            vec![AccessRole::Admin, AccessRole::Superuser],
            AccessRole::ALL.to_vec(),
        ] {
            let policy = AccessPolicy::new(allowed.clone());
            for role in AccessRole::ALL {
                assert_eq!(policy.permits(Some(role)), allowed.contains(&role));
            }
            assert!(!policy.permits(None));
        }
    }

    #[test]
    fn test_moderator_denied_by_admin_list() {
        let policy = AccessPolicy::from_role_names(["admin", "superuser"]).unwrap();
        assert!(!policy.checks_community_admin());

        let decision = AccessDecision::from_granted(policy.permits(Some(AccessRole::Moderator)));
        assert_eq!(decision, AccessDecision::Denied { redirect: "/" });
        assert_eq!(decision.redirect(), Some("/"));
    }

    #[test]
    fn test_unknown_role_name_rejected() {
        let err = AccessPolicy::from_role_names(["admin", "owner"]).unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_ROLE");
    }

    #[test]
    fn test_presets() {
        assert!(AccessPolicy::reviewers().permits(Some(AccessRole::Moderator)));
        assert!(!AccessPolicy::admins().permits(Some(AccessRole::Moderator)));
        assert!(!AccessPolicy::superusers().permits(Some(AccessRole::Admin)));
        assert_eq!(AccessPolicy::admins().describe(), "admin, superuser");
        assert!(AccessPolicy::admins().or_community_admin().checks_community_admin());
    }

    #[test]
    fn test_duplicates_collapsed() {
        let policy = AccessPolicy::from_role_names(["admin", "Admin"]).unwrap();
        assert_eq!(policy.allowed(), &[AccessRole::Admin]);
    }
}
