//! Response bodies shared by the handlers.

use serde::Serialize;

use crate::model::User;

#[derive(Serialize)]
pub struct StatusBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub status: &'static str,
}

/// Body of `GET /users/{user_id}`.
///
/// A missing user is reported in the body with the same 200 status as a hit, not a 404.
#[derive(Serialize)]
#[serde(untagged)]
pub enum UserLookup {
    Found(User),
    Missing { error: &'static str },
}

pub const USER_NOT_FOUND: &str = "User not found";

impl From<Option<User>> for UserLookup {
    fn from(user: Option<User>) -> Self {
        match user {
            Some(u) => UserLookup::Found(u),
            None => UserLookup::Missing {
                error: USER_NOT_FOUND,
            },
        }
    }
}

pub fn error_body(code: &str, message: String) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": code,
            "message": message
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_user_serializes_as_error_object() {
        let body = serde_json::to_value(UserLookup::from(None)).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "User not found" }));
    }

    #[test]
    fn found_user_serializes_flat() {
        let user = User {
            id: 3,
            name: "Charlie Brown".into(),
            email: "charlie@example.com".into(),
        };
        let body = serde_json::to_value(UserLookup::from(Some(user))).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "id": 3, "name": "Charlie Brown", "email": "charlie@example.com" })
        );
    }

    #[test]
    fn health_body_omits_message() {
        let body = serde_json::to_value(StatusBody {
            message: None,
            status: "healthy",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "status": "healthy" }));
    }
}
