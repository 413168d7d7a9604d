//! Identity collaborator: who owns the games being saved.

/// Identifier of the authenticated user
pub type UserId = String;

pub trait IdentityProvider: Send + Sync {
    /// The logged-in user, or None when nobody is
    fn current_user(&self) -> Option<UserId>;
}

/// A fixed user, typically taken from configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticIdentity {
    user_id: Option<UserId>,
}

impl StaticIdentity {
    pub fn new(user_id: Option<UserId>) -> Self {
        Self { user_id }
    }

    pub fn logged_in(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    pub fn logged_out() -> Self {
        Self { user_id: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<UserId> {
        self.user_id.clone()
    }
}
