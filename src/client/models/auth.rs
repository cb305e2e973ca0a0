//! Authentication wire types

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/users/login`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /api/v1/users/signup`
#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful login response.
///
/// The platform's schema names the field `access_token`; `token` is accepted
/// as an alias. The value is opaque and never inspected.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(alias = "token")]
    pub access_token: String,
}

/// Generic message body used by the platform for rejections (`detail`) and
/// informational responses (`message`).
#[derive(Debug, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub detail: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}
