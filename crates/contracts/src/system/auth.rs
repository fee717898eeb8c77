use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Body for PATCH /update_user. `password` is the current password,
/// required by the backend for any change; `new_password` is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "newPassword", skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

/// Status-only responses: the backend answers with exactly one of these
/// fields depending on the outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiMessage {
    /// Human-readable text of the message, preferring the positive fields.
    pub fn text(&self) -> Option<&str> {
        self.success
            .as_deref()
            .or(self.message.as_deref())
            .or(self.error.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_info_tolerates_missing_admin_flag() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id":7,"username":"kai","email":"kai@example.com"}"#)
                .unwrap();
        assert_eq!(user.id, 7);
        assert!(!user.is_admin);
    }

    #[test]
    fn update_profile_serializes_camel_case_new_password() {
        let body = UpdateProfileRequest {
            username: "kai".into(),
            email: "kai@example.com".into(),
            password: "secret1".into(),
            new_password: Some("secret2".into()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["newPassword"], "secret2");
        assert!(json.get("new_password").is_none());
    }

    #[test]
    fn api_message_text_prefers_success() {
        let msg: ApiMessage =
            serde_json::from_str(r#"{"success":"Logged out successfully!"}"#).unwrap();
        assert_eq!(msg.text(), Some("Logged out successfully!"));

        let msg: ApiMessage = serde_json::from_str(r#"{"error":"Access denied"}"#).unwrap();
        assert_eq!(msg.text(), Some("Access denied"));

        let msg: ApiMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(msg.text(), None);
    }
}
