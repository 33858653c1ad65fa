//! Contact form endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::contact::{ContactCreatedResponse, CreateContactRequest};
use domain::models::ContactMessage;
use shared::validation::REQUIRED_FIELDS_MESSAGE;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::middleware::metrics::record_contact_received;

/// Store a contact form submission.
///
/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateContactRequest>,
) -> Result<(StatusCode, Json<ContactCreatedResponse>), ApiError> {
    if request.has_blank_fields() {
        return Err(ApiError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }
    request.validate()?;

    let contact = state.store.create_contact(request.into()).await?;
    record_contact_received();

    info!(
        contact_id = contact.id,
        backend = state.store.backend().as_str(),
        "Contact message stored"
    );

    Ok((StatusCode::CREATED, Json(contact.into())))
}

/// List contact messages, newest first.
///
/// GET /api/contact
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    Ok(Json(state.store.list_contacts().await?))
}
