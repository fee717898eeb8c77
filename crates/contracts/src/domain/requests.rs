use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::wire_date;

/// Lifecycle of a purchase request. Only admins move a request out of
/// `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's submission asking that a speaker be stocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerRequest {
    pub id: i64,
    pub speaker_name: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub reason: String,
    pub status: RequestStatus,
    #[serde(with = "wire_date")]
    pub request_date: DateTime<Utc>,
    pub user_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRequestDto {
    pub speaker_name: String,
    pub manufacturer: String,
    pub reason: String,
}

impl CreateRequestDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.speaker_name.trim().is_empty() {
            return Err("Speaker name is required".into());
        }
        if self.manufacturer.trim().is_empty() {
            return Err("Manufacturer is required".into());
        }
        if self.reason.trim().is_empty() {
            return Err("Reason is required".into());
        }
        Ok(())
    }
}

/// Body for PUT /requests/:id. Only the reason is editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReasonDto {
    pub reason: String,
}

/// Body for PUT /requests/:id/status (admin only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusDto {
    pub status: RequestStatus,
}

/// Response to POST /requests/create_request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedRequest {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_lowercase_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Approved).unwrap(),
            r#""approved""#
        );
        let status: RequestStatus = serde_json::from_str(r#""rejected""#).unwrap();
        assert_eq!(status, RequestStatus::Rejected);
    }

    #[test]
    fn request_round_trips_with_rfc2822_date() {
        let json = r#"{
            "id": 7,
            "speaker_name": "Model X",
            "manufacturer": "Acme",
            "reason": "need for demo",
            "status": "pending",
            "request_date": "Tue, 05 Aug 2025 00:00:00 GMT",
            "user_id": 3
        }"#;
        let req: SpeakerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.id, 7);
        assert_eq!(req.status, RequestStatus::Pending);

        // We always write RFC 3339 back out.
        let out = serde_json::to_value(&req).unwrap();
        assert!(out["request_date"].as_str().unwrap().starts_with("2025-08-05T"));
    }

    #[test]
    fn create_dto_requires_all_fields() {
        let mut dto = CreateRequestDto {
            speaker_name: "Model X".into(),
            manufacturer: "Acme".into(),
            reason: "need for demo".into(),
        };
        assert!(dto.validate().is_ok());

        dto.reason = "   ".into();
        assert!(dto.validate().is_err());
    }
}
