use utoipa::OpenApi;

/// API Documentation
///
/// Paths are registered by the router in `app.rs`.
#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Service", description = "Service status endpoints"),
        (name = "Members", description = "Member related endpoints"),
        (name = "Facilities", description = "Facility related endpoints"),
        (name = "Bookings", description = "Booking related endpoints"),
    ),
    info(
        title = "Club Bookings API",
        version = "1.0.0",
        description = "Members, facilities and bookings of a country club",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
