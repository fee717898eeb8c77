use contracts::domain::speakers::{CreateReviewDto, CreateSpeakerDto, Speaker, SpeakerSummary};
use contracts::system::auth::ApiMessage;
use gloo_net::http::{Request, RequestBuilder};

use crate::shared::api_utils::{api_url, bearer, read_json, ApiError};

fn send_failed(e: gloo_net::Error) -> ApiError {
    ApiError::transport(format!("Failed to send request: {}", e))
}

fn encode_failed(e: gloo_net::Error) -> ApiError {
    ApiError::transport(format!("Failed to serialize request: {}", e))
}

/// The catalog is public, but the bearer header rides along when a session
/// exists (matching the rest of the client).
fn with_optional_auth(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &bearer(token)),
        None => builder,
    }
}

/// Fetch the catalog, optionally capped for the featured strip.
pub async fn fetch_speakers(
    token: Option<&str>,
    limit: Option<u32>,
) -> Result<Vec<SpeakerSummary>, ApiError> {
    let path = match limit {
        Some(limit) => format!("/speakers?limit={}", limit),
        None => "/speakers".to_string(),
    };

    let response = with_optional_auth(Request::get(&api_url(&path)), token)
        .send()
        .await
        .map_err(send_failed)?;

    read_json(response).await
}

/// Fetch one speaker with specs, reviews and related models.
pub async fn fetch_speaker(token: Option<&str>, id: i64) -> Result<Speaker, ApiError> {
    let response = with_optional_auth(
        Request::get(&api_url(&format!("/speakers/{}", id))),
        token,
    )
    .send()
    .await
    .map_err(send_failed)?;

    read_json(response).await
}

/// Admin-only: add a speaker to the catalog.
pub async fn create_speaker(token: &str, dto: &CreateSpeakerDto) -> Result<ApiMessage, ApiError> {
    let response = Request::post(&api_url("/speakers"))
        .header("Authorization", &bearer(token))
        .json(dto)
        .map_err(encode_failed)?
        .send()
        .await
        .map_err(send_failed)?;

    read_json(response).await
}

/// Post a review against one speaker.
pub async fn create_review(token: &str, dto: &CreateReviewDto) -> Result<ApiMessage, ApiError> {
    let response = Request::post(&api_url("/reviews/create_review"))
        .header("Authorization", &bearer(token))
        .json(dto)
        .map_err(encode_failed)?
        .send()
        .await
        .map_err(send_failed)?;

    read_json(response).await
}
