use crate::{
    app::AppState,
    dtos::{
        ListParams,
        booking::{BookingCreateRequest, BookingResponse},
    },
    error::{ApiError, ErrorBody},
};
use axum::{
    Json,
    extract::{Query, State},
};
use database::services::{BookingService, MemberService};
use log::warn;

/// List bookings with the booking member embedded
#[utoipa::path(
    get,
    path = "/booking/all",
    params(ListParams),
    responses(
        (
            status = 200,
            description = "Bookings retrieved successfully",
            body = Vec<BookingResponse>
        ),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Bookings"
)]
pub async fn get_all_bookings(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let bookings = BookingService::list(&state.db, params.limit).await?;
    let member_ids: Vec<i32> = bookings.iter().map(|b| b.member_id).collect();
    let directory = MemberService::load_directory(&state.db, Vec::new(), member_ids).await?;

    let response = bookings
        .into_iter()
        .filter_map(|booking| match directory.get(booking.member_id) {
            Some(member) => Some(BookingResponse::new(booking, member, &directory)),
            None => {
                warn!(
                    "Booking {} references missing member {}",
                    booking.id, booking.member_id
                );
                None
            }
        })
        .collect();

    Ok(Json(response))
}

/// Book a facility for a member
#[utoipa::path(
    post,
    path = "/booking/",
    request_body = BookingCreateRequest,
    responses(
        (status = 200, description = "Booking created", body = BookingResponse),
        (status = 404, description = "Facility or member not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingCreateRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    let (booking, member) = BookingService::create(&state.db, request.into()).await?;
    let directory =
        MemberService::load_directory(&state.db, vec![member.clone()], Vec::new()).await?;

    Ok(Json(BookingResponse::new(booking, &member, &directory)))
}
