//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User record as persisted in the store.
///
/// The id is assigned by the store on insert and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Stored credential text, not exposed in JSON
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
    pub name: String,
    /// Reference to an image resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// Unsaved user data handed to the store.
///
/// An `id` of `None` requests an insert with a store-assigned id;
/// `Some(id)` replaces the field values of the record with that id.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserDraft {
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    pub password: Option<String>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub picture: Option<String>,
}

impl UserDraft {
    /// Draft for a brand-new user carrying only the required fields.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Turn a persisted record back into a draft, keeping its id.
impl From<User> for UserDraft {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            email: user.email,
            password: user.password,
            name: user.name,
            picture: user.picture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_draft_passes_validation() {
        let draft = UserDraft::new("a@x.com", "Ann");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn blank_email_fails_validation() {
        let draft = UserDraft::new("", "Ann");
        let errors = draft.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn blank_name_fails_validation() {
        let draft = UserDraft::new("a@x.com", "");
        let errors = draft.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn draft_from_user_keeps_the_id() {
        let user = User {
            id: 7,
            email: "a@x.com".to_string(),
            password: None,
            name: "Ann".to_string(),
            picture: None,
        };

        let draft = UserDraft::from(user);
        assert_eq!(draft.id, Some(7));
        assert_eq!(draft.email, "a@x.com");
    }

    #[test]
    fn password_is_never_serialized() {
        let user = User {
            id: 1,
            email: "a@x.com".to_string(),
            password: Some("secret".to_string()),
            name: "Ann".to_string(),
            picture: None,
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("password"));
    }
}
