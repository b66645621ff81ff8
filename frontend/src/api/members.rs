//! Client for the third-party member directory service.
//!
//! Every call carries the service's API key header. Responses arrive in a
//! `data` envelope; the typed shapes live in `common::requests` and are
//! validated here when the body is decoded.

use gloo_net::http::Request;

use common::requests::{
    ColorListResponse, CreateUserRequest, LoginRequest, LoginResponse, UserDetailResponse,
    UserListResponse,
};

use super::{check_status, read_json, RequestError};

const DIRECTORY_URL: &str = "https://reqres.in/api";
const API_KEY_HEADER: &str = "x-api-key";
const API_KEY: &str = "reqres-free-v1";

/// `GET /users?page=N`: one page of members plus the page count.
pub async fn list_users(page: u32) -> Result<UserListResponse, RequestError> {
    const OP: &str = "list members";
    let response = Request::get(&format!("{DIRECTORY_URL}/users?page={page}"))
        .header(API_KEY_HEADER, API_KEY)
        .send()
        .await
        .map_err(|err| RequestError::network(OP, err))?;
    check_status(OP, &response)?;
    read_json(OP, response).await
}

/// `GET /users/{id}`: a single member.
pub async fn fetch_user(id: u64) -> Result<UserDetailResponse, RequestError> {
    const OP: &str = "fetch member";
    let response = Request::get(&format!("{DIRECTORY_URL}/users/{id}"))
        .header(API_KEY_HEADER, API_KEY)
        .send()
        .await
        .map_err(|err| RequestError::network(OP, err))?;
    check_status(OP, &response)?;
    read_json(OP, response).await
}

/// `GET /unknown`: the decorative color palette used for card accents.
pub async fn fetch_colors() -> Result<ColorListResponse, RequestError> {
    const OP: &str = "fetch colors";
    let response = Request::get(&format!("{DIRECTORY_URL}/unknown"))
        .header(API_KEY_HEADER, API_KEY)
        .send()
        .await
        .map_err(|err| RequestError::network(OP, err))?;
    check_status(OP, &response)?;
    read_json(OP, response).await
}

/// `POST /users`: creates a member. The directory echoes the submitted
/// fields with a generated id; the body is discarded since the collection
/// is re-fetched afterwards anyway.
pub async fn create_user(payload: &CreateUserRequest) -> Result<(), RequestError> {
    const OP: &str = "create member";
    let response = Request::post(&format!("{DIRECTORY_URL}/users"))
        .header(API_KEY_HEADER, API_KEY)
        .json(payload)
        .map_err(|err| RequestError::decode(OP, err))?
        .send()
        .await
        .map_err(|err| RequestError::network(OP, err))?;
    check_status(OP, &response)
}

/// `POST /login`. The body is decoded on rejection too: the service puts
/// its reason in `{error}` alongside a non-2xx status, and the caller wants
/// that string for the inline status text.
pub async fn login(payload: &LoginRequest) -> Result<LoginResponse, RequestError> {
    const OP: &str = "login";
    let response = Request::post(&format!("{DIRECTORY_URL}/login"))
        .header(API_KEY_HEADER, API_KEY)
        .json(payload)
        .map_err(|err| RequestError::decode(OP, err))?
        .send()
        .await
        .map_err(|err| RequestError::network(OP, err))?;
    read_json(OP, response).await
}
