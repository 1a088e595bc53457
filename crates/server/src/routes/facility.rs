use crate::{
    app::AppState,
    dtos::{ListParams, facility::FacilityResponse},
    error::{ApiError, ErrorBody},
};
use axum::{
    Json,
    extract::{Query, State},
};
use database::services::FacilityService;

/// List facilities
#[utoipa::path(
    get,
    path = "/facility/all",
    params(ListParams),
    responses(
        (
            status = 200,
            description = "Facilities retrieved successfully",
            body = Vec<FacilityResponse>
        ),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Facilities"
)]
pub async fn get_all_facilities(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<FacilityResponse>>, ApiError> {
    let facilities = FacilityService::list(&state.db, params.limit).await?;

    Ok(Json(facilities.into_iter().map(FacilityResponse::from).collect()))
}
