//! Slider image domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One image shown on the homepage wheel slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SliderItem {
    pub id: i64,
    pub image_url: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated, trimmed values for inserting a slider image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSliderItem {
    pub image_url: String,
}

/// Request payload for adding a slider image.
///
/// Missing fields deserialize as empty strings so that they are reported by
/// validation rather than rejected by the JSON extractor.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateSliderItemRequest {
    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub image_url: String,
}

impl From<CreateSliderItemRequest> for NewSliderItem {
    fn from(request: CreateSliderItemRequest) -> Self {
        Self {
            image_url: request.image_url.trim().to_string(),
        }
    }
}
