//! Slider image endpoint handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::slider::CreateSliderItemRequest;
use domain::models::{SliderItem, SuccessResponse};
use tracing::{debug, info};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::middleware::metrics::record_content_change;

/// List slider images in ascending id order.
///
/// GET /api/slider
pub async fn list_slider_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<SliderItem>>, ApiError> {
    Ok(Json(state.store.list_slider_items().await?))
}

/// Add a slider image.
///
/// POST /api/slider
pub async fn create_slider_item(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateSliderItemRequest>,
) -> Result<Json<SliderItem>, ApiError> {
    request.validate()?;

    let item = state.store.create_slider_item(request.into()).await?;
    record_content_change("slider", "create");
    info!(slider_id = item.id, "Slider image added");

    Ok(Json(item))
}

/// Remove a slider image. Unknown ids are not an error.
///
/// DELETE /api/slider/:id
pub async fn delete_slider_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    if state.store.delete_slider_item(id).await? {
        record_content_change("slider", "delete");
        info!(slider_id = id, "Slider image deleted");
    } else {
        debug!(slider_id = id, "Slider image already absent");
    }

    Ok(Json(SuccessResponse::ok()))
}
