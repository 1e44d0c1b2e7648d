//! User entity and its request/response shapes
//!
//! Request bodies are separate types from the stored entity so that
//! "field omitted" and "field cleared" never get confused on update.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{
    check_email_change, check_name_change, check_required_email, check_required_name,
    ValidationError,
};

/// Stored user record
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Validated fields for a user that doesn't exist yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Validated changes for an existing user; `None` leaves the field as is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserChanges {
    /// Merge the changes into `user` in place.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// POST /api/users body
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl CreateUserRequest {
    /// Check create rules: name non-empty, email present and well-formed.
    pub fn validate(self) -> Result<NewUser, ValidationError> {
        check_required_name(&self.name)?;
        check_required_email(&self.email)?;

        Ok(NewUser {
            name: self.name,
            email: self.email,
        })
    }
}

/// PUT /api/users/{id} body
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserRequest {
    /// Check update rules. Omitted and empty fields both mean "leave unchanged".
    pub fn validate(self) -> Result<UserChanges, ValidationError> {
        let name = self.name.filter(|n| !n.is_empty());
        let email = self.email.filter(|e| !e.is_empty());

        if let Some(name) = &name {
            check_name_change(name)?;
        }
        if let Some(email) = &email {
            check_email_change(email)?;
        }

        Ok(UserChanges { name, email })
    }
}

/// User as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> User {
        User {
            id: 7,
            name: "Ann".into(),
            email: "ann@example.com".into(),
        }
    }

    #[test]
    fn create_request_missing_fields_decode_as_empty() {
        let req: CreateUserRequest = serde_json::from_str(r#"{"email": "a@b.io"}"#).unwrap();
        assert_eq!(req.name, "");
        assert_eq!(
            req.validate(),
            Err(ValidationError::Required { field: "name" })
        );
    }

    #[test]
    fn create_request_checks_name_before_email() {
        let req = CreateUserRequest {
            name: String::new(),
            email: "nope".into(),
        };
        assert_eq!(
            req.validate(),
            Err(ValidationError::Required { field: "name" })
        );
    }

    #[test]
    fn create_request_valid() {
        let req = CreateUserRequest {
            name: "Ann".into(),
            email: "ann@example.com".into(),
        };
        let new_user = req.validate().unwrap();
        assert_eq!(new_user.name, "Ann");
        assert_eq!(new_user.email, "ann@example.com");
    }

    #[test]
    fn update_request_empty_fields_are_unchanged() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"name": "", "email": ""}"#).unwrap();
        let changes = req.validate().unwrap();
        assert!(changes.is_empty());

        let mut user = ann();
        changes.apply(&mut user);
        assert_eq!(user, ann());
    }

    #[test]
    fn update_request_rejects_short_name() {
        let req = UpdateUserRequest {
            name: Some("Bo".into()),
            email: None,
        };
        assert_eq!(
            req.validate(),
            Err(ValidationError::TooShort { field: "name", min: 3 })
        );
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let req: UpdateUserRequest = serde_json::from_str(r#"{"name": "Bob"}"#).unwrap();
        let mut user = ann();
        req.validate().unwrap().apply(&mut user);

        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Bob");
        assert_eq!(user.email, "ann@example.com");
    }

    #[test]
    fn response_serializes_three_fields() {
        let json = serde_json::to_value(UserResponse::from(ann())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "name": "Ann", "email": "ann@example.com"})
        );
    }
}
