//! Session user model.
//!
//! Users exist only in memory for the lifetime of a session; there is
//! no `users` collection and nothing here is ever written to the store.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Access role attached to a demo account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full fleet administration.
    Admin,
    /// Read-focused inspection access.
    Inspector,
    /// Day-to-day maintenance work.
    Engineer,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Admin => "admin",
            Self::Inspector => "inspector",
            Self::Engineer => "engineer",
        };
        write!(f, "{label}")
    }
}

/// Authenticated account identity for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Login email, also used for the dashboard greeting.
    pub email: String,
    /// Role granted by the allow-list entry.
    pub role: Role,
}

impl User {
    /// Returns the local part of the email (text before `@`), used as
    /// the display name in greetings.
    pub fn display_name(&self) -> &str {
        match self.email.split_once('@') {
            Some((local, _)) => local,
            None => self.email.as_str(),
        }
    }
}
