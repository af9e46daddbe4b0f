//! Signed-in user lookup.

use serde::Deserialize;

use crate::api::{ApiClient, ApiError};
use crate::session::SessionProfile;

const USER_URL: &str = "Auth/user";

/// Profile as served by the auth controller.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_authenticated: bool,
}

impl From<AuthUser> for SessionProfile {
    fn from(u: AuthUser) -> Self {
        SessionProfile {
            user_id: u.user_id,
            user_name: u.user_name,
            email: u.email,
            is_authenticated: u.is_authenticated,
        }
    }
}

pub struct AuthService<'a> {
    api: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub fn get_user(&self) -> Result<AuthUser, ApiError> {
        self.api.get_typed(USER_URL)
    }
}
