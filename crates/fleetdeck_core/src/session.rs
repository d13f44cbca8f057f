//! Session context for the authenticated user.
//!
//! # Responsibility
//! - Hold the current user for the lifetime of one application run.
//! - Gate page rendering and personalize greeting text.
//!
//! # Invariants
//! - The context is an explicit owned object passed to callers; core
//!   keeps no global session state.
//! - A new context starts unauthenticated; a failed login leaves it
//!   untouched.

use crate::model::user::User;
use log::info;

/// In-memory record of the currently authenticated user.
#[derive(Debug, Default)]
pub struct SessionContext {
    user: Option<User>,
}

impl SessionContext {
    /// Creates an unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `user` as the authenticated identity for this session.
    pub fn login(&mut self, user: User) {
        info!(
            "event=session_login module=session status=ok role={}",
            user.role
        );
        self.user = Some(user);
    }

    /// Clears the session back to the unauthenticated state.
    ///
    /// Safe to call on an already-unauthenticated session.
    pub fn logout(&mut self) {
        if self.user.take().is_some() {
            info!("event=session_logout module=session status=ok");
        }
    }

    /// Returns whether a user is currently authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Returns the authenticated user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns the dashboard header greeting for the authenticated
    /// user, or `None` when unauthenticated.
    pub fn greeting(&self) -> Option<String> {
        self.user
            .as_ref()
            .map(|user| format!("Welcome back, {} {}", user.role, user.display_name()))
    }
}
