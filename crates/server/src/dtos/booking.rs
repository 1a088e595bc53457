use crate::dtos::member::MemberResponse;
use chrono::NaiveDateTime;
use database::{
    entities::{booking, member},
    services::{MemberDirectory, NewBooking},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponse {
    pub id: i32,
    pub member_id: i32,
    pub member: MemberResponse,
    pub facility_id: i32,
    pub start_time: NaiveDateTime,
    pub slots: i32,
}

impl BookingResponse {
    pub fn new(
        booking: booking::Model,
        member: &member::Model,
        directory: &MemberDirectory,
    ) -> Self {
        Self {
            id: booking.id,
            member_id: booking.member_id,
            member: MemberResponse::from_directory(member, directory),
            facility_id: booking.facility_id,
            start_time: booking.start_time,
            slots: booking.slots,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookingCreateRequest {
    pub facility_id: i32,
    pub member_id: i32,
    /// Local start time, e.g. `2012-07-03T11:00:00`
    pub start_time: NaiveDateTime,
    /// Number of half-hour slots
    pub slots: i32,
}

impl From<BookingCreateRequest> for NewBooking {
    fn from(request: BookingCreateRequest) -> Self {
        Self {
            facility_id: request.facility_id,
            member_id: request.member_id,
            start_time: request.start_time,
            slots: request.slots,
        }
    }
}
