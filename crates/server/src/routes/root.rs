use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Greets the client and confirms the API is reachable
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service greeting", body = RootResponse)
    ),
    tag = "Service"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Club bookings API",
    })
}
