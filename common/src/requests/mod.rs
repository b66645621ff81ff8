//! Request payloads and response envelopes for the two HTTP backends.
//!
//! The directory service wraps everything in a `data` envelope and leaves
//! several fields optional; instead of trusting those shapes implicitly,
//! each endpoint gets an explicit typed envelope that is validated once at
//! the client boundary when the body is decoded.

use serde::{Deserialize, Serialize};

use crate::model::color::Color;
use crate::model::user::User;

/// `GET /users?page=N` — one page of members plus the page count.
#[derive(Debug, Clone, Deserialize)]
pub struct UserListResponse {
    pub data: Vec<User>,
    pub total_pages: u32,
}

/// `GET /users/{id}` — a single member in the `data` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDetailResponse {
    pub data: User,
}

/// `GET /unknown` — the decorative color palette.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorListResponse {
    pub data: Vec<Color>,
}

/// `POST /users` — the create-member form as the directory accepts it.
/// `age` stays a string: the form field submits it verbatim and the service
/// echoes whatever it was given.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub age: String,
}

/// `POST /login` credentials.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /login` result. The service returns `{token}` on success and
/// `{error}` with a non-2xx status on rejection, so both fields are optional
/// and the caller checks which one is present.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /products` and `PUT /products/{id}` body.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub amount: u32,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `POST /chatbot` body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// `POST /chatbot` reply.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
