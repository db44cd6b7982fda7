//! Role-based authorization
//!
//! Each protected endpoint declares an [`AccessPolicy`]: the set of roles it
//! admits and whether the caller must also own the addressed resource.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::account::Role;
use crate::domain::entities::token::Claims;
use crate::errors::{AuthError, DomainError, TokenError};

/// Identity extracted from a validated bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub account_id: Uuid,
    pub email: String,
    pub role: Role,
}

impl TryFrom<Claims> for Identity {
    type Error = DomainError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let account_id = claims
            .account_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;
        Ok(Self {
            account_id,
            email: claims.email,
            role: claims.role,
        })
    }
}

/// Allowed roles plus optional ownership requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    allowed_roles: Vec<Role>,
    owner_only: bool,
}

impl AccessPolicy {
    /// Any authenticated account
    pub fn authenticated() -> Self {
        Self {
            allowed_roles: Role::ALL.to_vec(),
            owner_only: false,
        }
    }

    /// Only the listed roles
    pub fn roles(roles: &[Role]) -> Self {
        Self {
            allowed_roles: roles.to_vec(),
            owner_only: false,
        }
    }

    /// Additionally require the caller to own the target resource
    pub fn owner_only(mut self) -> Self {
        self.owner_only = true;
        self
    }

    pub fn allows_role(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }

    /// Check an identity against this policy
    ///
    /// `resource_owner` is the account id addressed by the request. It is
    /// ignored unless the policy is owner-only.
    pub fn authorize(&self, identity: &Identity, resource_owner: Option<&str>) -> Result<(), AuthError> {
        if !self.allows_role(identity.role) {
            return Err(AuthError::InsufficientPermissions);
        }

        if self.owner_only {
            let owns = resource_owner
                .and_then(|owner| Uuid::parse_str(owner.trim()).ok())
                .map(|owner| owner == identity.account_id)
                .unwrap_or(false);
            if !owns {
                return Err(AuthError::NotResourceOwner);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Role) -> Identity {
        Identity {
            account_id: Uuid::new_v4(),
            email: "someone@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_role_outside_allowed_set_is_denied() {
        let policy = AccessPolicy::roles(&[Role::Doctor, Role::Pharmacist]);
        assert!(policy.authorize(&identity(Role::Doctor), None).is_ok());
        assert_eq!(
            policy.authorize(&identity(Role::Patient), None),
            Err(AuthError::InsufficientPermissions)
        );
    }

    #[test]
    fn test_owner_only_denies_other_ids() {
        let policy = AccessPolicy::roles(&[Role::Patient]).owner_only();
        let me = identity(Role::Patient);

        assert!(policy
            .authorize(&me, Some(&me.account_id.to_string()))
            .is_ok());
        assert_eq!(
            policy.authorize(&me, Some(&Uuid::new_v4().to_string())),
            Err(AuthError::NotResourceOwner)
        );
        assert_eq!(
            policy.authorize(&me, Some("HL-PNT01")),
            Err(AuthError::NotResourceOwner)
        );
        assert_eq!(policy.authorize(&me, None), Err(AuthError::NotResourceOwner));
    }

    #[test]
    fn test_role_is_checked_before_ownership() {
        let policy = AccessPolicy::roles(&[Role::Patient]).owner_only();
        let doctor = identity(Role::Doctor);
        assert_eq!(
            policy.authorize(&doctor, Some(&doctor.account_id.to_string())),
            Err(AuthError::InsufficientPermissions)
        );
    }

    #[test]
    fn test_authenticated_admits_every_role() {
        let policy = AccessPolicy::authenticated();
        for role in Role::ALL {
            assert!(policy.authorize(&identity(role), None).is_ok());
        }
    }
}
