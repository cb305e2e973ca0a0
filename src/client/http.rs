//! AuraFlow API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Response, StatusCode};

use super::AuraFlowApi;
use super::models::{ApiMessage, LoginRequest, NewTodo, SignupRequest, TodoItem, TodoPatch, TokenResponse};
use crate::error::{ApiError, Error, Result};

/// AuraFlow API base URL
const API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Fallback message when a login rejection carries no `detail`
const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Fallback message when a signup rejection carries no `detail`
const SIGNUP_FAILED: &str = "Sign up failed. Please try again.";

/// HTTP client for the AuraFlow platform
pub struct AuraFlowClient {
    http: HttpClient,
    base_url: String,
}

impl AuraFlowClient {
    /// Create a client against the default platform host
    pub fn new() -> Result<Self> {
        Self::with_host(None)
    }

    /// Create a client against a custom host (development/testing)
    pub fn with_host(host: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: host.unwrap_or_else(|| API_BASE_URL.to_string()),
        })
    }

    /// Presence check performed before any network call
    fn require(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ApiError::Validation(format!("{} is required", field)).into());
        }
        Ok(())
    }

    /// Build an auth rejection from a non-OK response, preferring the
    /// server's `detail` message over the generic fallback.
    async fn rejection(response: Response, fallback: &str) -> Error {
        let status = response.status();
        let message = response
            .json::<ApiMessage>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| fallback.to_string());

        log::debug!("request rejected with status {}", status);
        ApiError::AuthRejected(message).into()
    }

    /// Map a to-do endpoint response status; `Ok` passes the response through.
    async fn check_todo_response(response: Response, id: Option<u64>) -> Result<Response> {
        let status = response.status();
        match status {
            s if s.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::NOT_FOUND => {
                let what = match id {
                    Some(id) => format!("to-do {}", id),
                    None => "to-dos".to_string(),
                };
                Err(ApiError::NotFound(what).into())
            }
            s if s.is_server_error() => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", s));
                Err(ApiError::ServerError(message).into())
            }
            _ => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(message).into())
            }
        }
    }

    async fn parse<T: for<'de> serde::Deserialize<'de>>(response: Response) -> Result<T> {
        response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        })
    }
}

#[async_trait]
impl AuraFlowApi for AuraFlowClient {
    async fn authenticate(&self, email: &str, password: &str) -> Result<String> {
        Self::require("Email", email)?;
        Self::require("Password", password)?;

        let url = format!("{}/api/v1/users/login", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(ApiError::from)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response, LOGIN_FAILED).await);
        }

        // The token must come from the response body; a 2xx without one is
        // not a successful login.
        let body: TokenResponse = Self::parse(response).await.map_err(|_| {
            Error::from(ApiError::InvalidResponse(
                "Login succeeded but no token was returned".to_string(),
            ))
        })?;

        if body.access_token.is_empty() {
            return Err(ApiError::InvalidResponse(
                "Login succeeded but the token was empty".to_string(),
            )
            .into());
        }

        Ok(body.access_token)
    }

    async fn signup(&self, email: &str, password: &str) -> Result<()> {
        Self::require("Email", email)?;
        Self::require("Password", password)?;

        let url = format!("{}/api/v1/users/signup", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&SignupRequest { email, password })
            .send()
            .await
            .map_err(ApiError::from)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response, SIGNUP_FAILED).await);
        }

        Ok(())
    }

    async fn list_todos(&self, token: &str) -> Result<Vec<TodoItem>> {
        let url = format!("{}/api/v1/todos", self.base_url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(ApiError::from)?;

        let response = Self::check_todo_response(response, None).await?;
        Self::parse(response).await
    }

    async fn add_todo(&self, token: &str, text: &str) -> Result<TodoItem> {
        Self::require("To-do text", text)?;

        let url = format!("{}/api/v1/todos", self.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&NewTodo { text })
            .send()
            .await
            .map_err(ApiError::from)?;

        let response = Self::check_todo_response(response, None).await?;
        Self::parse(response).await
    }

    async fn update_todo(&self, token: &str, id: u64, completed: bool) -> Result<TodoItem> {
        let url = format!("{}/api/v1/todos/{}", self.base_url, id);
        let response = self
            .http
            .put(&url)
            .bearer_auth(token)
            .json(&TodoPatch { completed })
            .send()
            .await
            .map_err(ApiError::from)?;

        let response = Self::check_todo_response(response, Some(id)).await?;
        Self::parse(response).await
    }

    async fn remove_todo(&self, token: &str, id: u64) -> Result<()> {
        let url = format!("{}/api/v1/todos/{}", self.base_url, id);
        let response = self
            .http
            .delete(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(ApiError::from)?;

        Self::check_todo_response(response, Some(id)).await?;
        Ok(())
    }
}
