//! Partner logo domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A partner company shown in the logo strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Partner {
    pub id: i64,
    pub name: String,
    pub logo_url: String,
    pub created_at: DateTime<Utc>,
}

/// Validated, trimmed values for inserting a partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPartner {
    pub name: String,
    pub logo_url: String,
}

/// Request payload for adding a partner.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreatePartnerRequest {
    #[serde(default)]
    #[validate(
        custom(function = "shared::validation::validate_not_blank"),
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub logo_url: String,
}

impl From<CreatePartnerRequest> for NewPartner {
    fn from(request: CreatePartnerRequest) -> Self {
        Self {
            name: request.name.trim().to_string(),
            logo_url: request.logo_url.trim().to_string(),
        }
    }
}
