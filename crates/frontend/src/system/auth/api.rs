use contracts::system::auth::{
    ApiMessage, LoginRequest, LoginResponse, RegisterRequest, UpdateProfileRequest, UserInfo,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, bearer, read_json, ApiError};

fn send_failed(e: gloo_net::Error) -> ApiError {
    ApiError::transport(format!("Failed to send request: {}", e))
}

fn encode_failed(e: gloo_net::Error) -> ApiError {
    ApiError::transport(format!("Failed to serialize request: {}", e))
}

/// Register a new account
pub async fn register(body: &RegisterRequest) -> Result<ApiMessage, ApiError> {
    let response = Request::post(&api_url("/users"))
        .json(body)
        .map_err(encode_failed)?
        .send()
        .await
        .map_err(send_failed)?;

    read_json(response).await
}

/// Exchange credentials for a bearer token
pub async fn login(body: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let response = Request::post(&api_url("/login"))
        .json(body)
        .map_err(encode_failed)?
        .send()
        .await
        .map_err(send_failed)?;

    read_json(response).await
}

/// Revoke the token server-side (best effort; callers ignore failures)
pub async fn logout(token: &str) -> Result<ApiMessage, ApiError> {
    let response = Request::delete(&api_url("/logout"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(send_failed)?;

    read_json(response).await
}

/// Get the user record behind the token
pub async fn current_user(token: &str) -> Result<UserInfo, ApiError> {
    let response = Request::get(&api_url("/current_user"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(send_failed)?;

    read_json(response).await
}

/// Update username/email (and optionally the password)
pub async fn update_profile(
    token: &str,
    body: &UpdateProfileRequest,
) -> Result<ApiMessage, ApiError> {
    let response = Request::patch(&api_url("/update_user"))
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(encode_failed)?
        .send()
        .await
        .map_err(send_failed)?;

    read_json(response).await
}

/// Delete the account behind the token
pub async fn delete_profile(token: &str) -> Result<ApiMessage, ApiError> {
    let response = Request::delete(&api_url("/delete_user_profile"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(send_failed)?;

    read_json(response).await
}
