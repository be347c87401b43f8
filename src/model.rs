//! The `users` record and the baseline rows inserted by the seed loader.

use serde::Serialize;

pub const USERS_TABLE: &str = "users";

/// Column bounds, mirrored in the DDL.
pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A row to insert; `id` is assigned by the store.
#[derive(Debug, Clone, Copy)]
pub struct NewUser {
    pub name: &'static str,
    pub email: &'static str,
}

pub const BASELINE_USERS: [NewUser; 5] = [
    NewUser {
        name: "Alice Johnson",
        email: "alice@example.com",
    },
    NewUser {
        name: "Bob Smith",
        email: "bob@example.com",
    },
    NewUser {
        name: "Charlie Brown",
        email: "charlie@example.com",
    },
    NewUser {
        name: "Diana Prince",
        email: "diana@example.com",
    },
    NewUser {
        name: "Eve Wilson",
        email: "eve@example.com",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn baseline_fits_column_bounds_and_emails_are_unique() {
        let emails: HashSet<_> = BASELINE_USERS.iter().map(|u| u.email).collect();
        assert_eq!(emails.len(), BASELINE_USERS.len());
        for u in &BASELINE_USERS {
            assert!(u.name.len() <= NAME_MAX_LEN);
            assert!(u.email.len() <= EMAIL_MAX_LEN);
        }
    }
}
