use crate::config::SecureString;
use crate::domain::{LoginResponse, UserCredential, UserProfile};
use crate::store::mvi::Action;
use crate::store::AsyncAction;

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Email/password login; the response carries a fresh token.
    Login(AsyncAction<UserCredential, LoginResponse>),
    /// Re-authentication with a stored token; the argument is that token.
    Authenticate(AsyncAction<SecureString, UserProfile>),
    Logout,
}

impl Action for UserAction {}

impl UserAction {
    pub fn type_name(&self) -> String {
        match self {
            UserAction::Login(a) => format!("users/login/{}", a.phase.name()),
            UserAction::Authenticate(a) => format!("users/authenticate/{}", a.phase.name()),
            UserAction::Logout => "users/logout".to_string(),
        }
    }
}
