use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::wire_date;

/// Free-form technical details. Everything is optional on the wire; the
/// admin form sends empty strings rather than omitting fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSpecs {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub dimensions: String,
    #[serde(default)]
    pub weight: String,
}

/// Catalog card as returned by GET /speakers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSummary {
    pub id: i64,
    pub model_name: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
}

/// One customer review attached to a speaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    // The backend has shipped this field as both "username" and "user".
    #[serde(alias = "user")]
    pub username: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(with = "wire_date")]
    pub date: DateTime<Utc>,
}

/// Full record from GET /speakers/:id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    pub id: i64,
    pub model_name: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub specs: SpeakerSpecs,
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub related_speakers: Vec<SpeakerSummary>,
}

/// Body for the admin-only POST /speakers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSpeakerDto {
    pub model_name: String,
    pub price: Option<f64>,
    pub manufacturer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_logo_url: Option<String>,
    pub category_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub specs: SpeakerSpecs,
}

impl CreateSpeakerDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.model_name.trim().is_empty() {
            return Err("Model name is required".into());
        }
        if self.manufacturer_name.trim().is_empty() {
            return Err("Manufacturer name is required".into());
        }
        if self.category_name.trim().is_empty() {
            return Err("Category name is required".into());
        }
        match self.price {
            Some(p) if p >= 0.0 => Ok(()),
            Some(_) => Err("Price cannot be negative".into()),
            None => Err("Price is required".into()),
        }
    }
}

/// Body for POST /reviews/create_review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewDto {
    pub speaker_id: i64,
    pub rating: u8,
    pub comment: String,
}

impl CreateReviewDto {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.rating) {
            return Err("Rating must be between 1 and 5".into());
        }
        if self.comment.trim().is_empty() {
            return Err("Review comments are required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speaker_detail_tolerates_sparse_payloads() {
        let speaker: Speaker =
            serde_json::from_str(r#"{"id":1,"model_name":"Aurum","avg_rating":4.5}"#).unwrap();
        assert!(speaker.reviews.is_empty());
        assert!(speaker.related_speakers.is_empty());
        assert_eq!(speaker.specs, SpeakerSpecs::default());
    }

    #[test]
    fn review_accepts_legacy_user_field() {
        let review: Review = serde_json::from_str(
            r#"{"user":"kai","rating":4,"comment":"warm mids","date":"2025-08-05T12:30:00"}"#,
        )
        .unwrap();
        assert_eq!(review.username, "kai");
        assert_eq!(review.rating, 4);
    }

    #[test]
    fn review_dto_enforces_rating_range() {
        let mut dto = CreateReviewDto {
            speaker_id: 1,
            rating: 5,
            comment: "crisp highs".into(),
        };
        assert!(dto.validate().is_ok());

        dto.rating = 0;
        assert!(dto.validate().is_err());
        dto.rating = 6;
        assert!(dto.validate().is_err());

        dto.rating = 3;
        dto.comment = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn speaker_dto_requires_price() {
        let mut dto = CreateSpeakerDto {
            model_name: "Aurum".into(),
            price: Some(2499.0),
            manufacturer_name: "Acme Audio".into(),
            category_name: "Floorstanding".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        dto.price = None;
        assert!(dto.validate().is_err());
        dto.price = Some(-1.0);
        assert!(dto.validate().is_err());
    }
}
