use serde::{Deserialize, Serialize};

use crate::entities::users;

/// Profile returned after a successful login. Everything in the `Users` row
/// except the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub user_id: String,
    pub last_name: String,
    pub first_name: String,
    pub last_name_kana: String,
    pub first_name_kana: String,
    pub email: String,
    pub phone_number: String,
}

impl From<users::Model> for UserProfile {
    fn from(model: users::Model) -> Self {
        Self {
            user_id: model.user_id,
            last_name: model.last_name,
            first_name: model.first_name,
            last_name_kana: model.last_name_kana,
            first_name_kana: model.first_name_kana,
            email: model.email,
            phone_number: model.phone_number,
        }
    }
}

/// Fields supplied by a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub last_name: String,
    pub first_name: String,
    pub last_name_kana: String,
    pub first_name_kana: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationOutcome {
    pub message: String,
    pub user_id: Option<String>,
}

impl RegistrationOutcome {
    #[must_use]
    pub fn registered(user_id: String) -> Self {
        Self {
            message: "User registered successfully.".to_string(),
            user_id: Some(user_id),
        }
    }

    #[must_use]
    pub fn already_registered(email: &str) -> Self {
        Self {
            message: format!("{email} already registered"),
            user_id: None,
        }
    }
}
