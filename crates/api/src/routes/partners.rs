//! Partner logo endpoint handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::partner::CreatePartnerRequest;
use domain::models::{Partner, SuccessResponse};
use tracing::{debug, info};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::middleware::metrics::record_content_change;

/// List partners in ascending id order.
///
/// GET /api/partners
pub async fn list_partners(State(state): State<AppState>) -> Result<Json<Vec<Partner>>, ApiError> {
    Ok(Json(state.store.list_partners().await?))
}

/// Add a partner.
///
/// POST /api/partners
pub async fn create_partner(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreatePartnerRequest>,
) -> Result<Json<Partner>, ApiError> {
    request.validate()?;

    let partner = state.store.create_partner(request.into()).await?;
    record_content_change("partners", "create");
    info!(partner_id = partner.id, name = %partner.name, "Partner added");

    Ok(Json(partner))
}

/// Remove a partner. Unknown ids are not an error.
///
/// DELETE /api/partners/:id
pub async fn delete_partner(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    if state.store.delete_partner(id).await? {
        record_content_change("partners", "delete");
        info!(partner_id = id, "Partner deleted");
    } else {
        debug!(partner_id = id, "Partner already absent");
    }

    Ok(Json(SuccessResponse::ok()))
}
