use serde::{Deserialize, Serialize};

use crate::config::SecureString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    Admin,
}

/// Profile as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Body of `POST /users/login`.
#[derive(Clone, Serialize)]
pub struct UserCredential {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for UserCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredential")
            .field("email", &self.email)
            .field("password", &SecureString::new(self.password.clone()))
            .finish()
    }
}

impl PartialEq for UserCredential {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email && self.password == other.password
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// The signed-in user held by the user slice.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub token: SecureString,
}

impl User {
    pub fn from_profile(profile: UserProfile, token: impl Into<String>) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            role: profile.role,
            token: SecureString::new(token.into()),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
