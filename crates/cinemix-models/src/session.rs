use serde::{Deserialize, Serialize};

use crate::user::User;

/// Client-side view of "who is logged in".
///
/// Invariant: `authenticated` is true exactly when `user` is present. The
/// flag is derived, never set independently; anything hydrating a session
/// from storage goes through [`Session::normalized`] so a stale or
/// hand-edited blob cannot claim authentication without a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Session {
    pub user: Option<User>,
    pub authenticated: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_user(user: User) -> Self {
        Self {
            user: Some(user),
            authenticated: true,
        }
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.authenticated = user.is_some();
        self.user = user;
    }

    /// Re-derive the flag from the user field.
    pub fn normalized(mut self) -> Self {
        self.authenticated = self.user.is_some();
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
