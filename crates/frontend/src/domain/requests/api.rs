use contracts::domain::requests::{
    CreateRequestDto, CreatedRequest, SpeakerRequest, UpdateReasonDto, UpdateStatusDto,
};
use contracts::system::auth::ApiMessage;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, bearer, read_json, ApiError};

fn send_failed(e: gloo_net::Error) -> ApiError {
    ApiError::transport(format!("Failed to send request: {}", e))
}

fn encode_failed(e: gloo_net::Error) -> ApiError {
    ApiError::transport(format!("Failed to serialize request: {}", e))
}

/// Fetch the scoped collection ("/requests" or "/requests/user").
pub async fn fetch_requests(token: &str, endpoint: &str) -> Result<Vec<SpeakerRequest>, ApiError> {
    let response = Request::get(&api_url(endpoint))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(send_failed)?;

    read_json(response).await
}

pub async fn create_request(
    token: &str,
    dto: &CreateRequestDto,
) -> Result<CreatedRequest, ApiError> {
    let response = Request::post(&api_url("/requests/create_request"))
        .header("Authorization", &bearer(token))
        .json(dto)
        .map_err(encode_failed)?
        .send()
        .await
        .map_err(send_failed)?;

    read_json(response).await
}

pub async fn update_reason(
    token: &str,
    id: i64,
    dto: &UpdateReasonDto,
) -> Result<ApiMessage, ApiError> {
    let response = Request::put(&api_url(&format!("/requests/{}", id)))
        .header("Authorization", &bearer(token))
        .json(dto)
        .map_err(encode_failed)?
        .send()
        .await
        .map_err(send_failed)?;

    read_json(response).await
}

/// Admin-only status change.
pub async fn update_status(
    token: &str,
    id: i64,
    dto: &UpdateStatusDto,
) -> Result<ApiMessage, ApiError> {
    let response = Request::put(&api_url(&format!("/requests/{}/status", id)))
        .header("Authorization", &bearer(token))
        .json(dto)
        .map_err(encode_failed)?
        .send()
        .await
        .map_err(send_failed)?;

    read_json(response).await
}

/// Admin-only delete of any request.
pub async fn delete_request(token: &str, id: i64) -> Result<ApiMessage, ApiError> {
    let response = Request::delete(&api_url(&format!("/requests/{}", id)))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(send_failed)?;

    read_json(response).await
}

/// Owner delete of one of the user's own requests.
pub async fn delete_own_request(token: &str, id: i64) -> Result<ApiMessage, ApiError> {
    let response = Request::delete(&api_url(&format!("/requests/user/{}", id)))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(send_failed)?;

    read_json(response).await
}
