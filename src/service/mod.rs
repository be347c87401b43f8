//! UserService: read-only queries over the `users` table.

mod users;
pub use users::UserService;
