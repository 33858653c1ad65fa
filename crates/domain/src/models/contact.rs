//! Contact form message domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A message submitted through the site's contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Validated, trimmed values for storing a contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Request payload for the contact form.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateContactRequest {
    #[serde(default)]
    #[validate(
        custom(function = "shared::validation::validate_not_blank"),
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(
        custom(function = "shared::validation::validate_not_blank"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub message: String,
}

impl CreateContactRequest {
    /// True when any of the required fields is blank.
    pub fn has_blank_fields(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .any(|field| shared::validation::is_blank(field))
    }
}

impl From<CreateContactRequest> for NewContactMessage {
    fn from(request: CreateContactRequest) -> Self {
        Self {
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            message: request.message.trim().to_string(),
        }
    }
}

/// Response body for a stored contact message.
#[derive(Debug, Clone, Serialize)]
pub struct ContactCreatedResponse {
    pub success: bool,
    pub data: ContactMessage,
}

impl From<ContactMessage> for ContactCreatedResponse {
    fn from(data: ContactMessage) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
