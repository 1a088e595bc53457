use crate::{
    doc::ApiDoc,
    routes::{booking, facility, health, member, root},
};
use axum::Router;
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

/// Shared by every handler. The connection is a pool; each query checks out
/// its own connection and hands it back when the query completes.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub fn build_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(root::root))
        .routes(routes!(health::health))
        .routes(routes!(member::get_all_members))
        .routes(routes!(member::update_member, member::delete_member))
        .routes(routes!(facility::get_all_facilities))
        .routes(routes!(booking::get_all_bookings))
        .routes(routes!(booking::create_booking))
        .split_for_parts();

    router
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
}
