//! Demo credential check.
//!
//! # Responsibility
//! - Match submitted credentials against the fixed demo allow-list.
//!
//! # Invariants
//! - Matching is exact and case-sensitive on both email and password.
//! - The check is a pure lookup: no hashing, no lockout, no side
//!   effects, and no distinction between unknown email and wrong
//!   password in the result.

use crate::model::user::{Role, User};

struct DemoAccount {
    email: &'static str,
    password: &'static str,
    role: Role,
}

const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        email: "admin@entnt.in",
        password: "admin123",
        role: Role::Admin,
    },
    DemoAccount {
        email: "inspector@entnt.in",
        password: "inspect123",
        role: Role::Inspector,
    },
    DemoAccount {
        email: "engineer@entnt.in",
        password: "engine123",
        role: Role::Engineer,
    },
];

/// Validates a login attempt against the demo allow-list.
///
/// Returns the matched user identity, or `None` for any pair that is
/// not an exact match (including partial matches).
pub fn validate_credentials(email: &str, password: &str) -> Option<User> {
    DEMO_ACCOUNTS
        .iter()
        .find(|account| account.email == email && account.password == password)
        .map(|account| User {
            email: account.email.to_string(),
            role: account.role,
        })
}
