pub mod booking;
pub mod facility;
pub mod member;

pub use booking::{BookingService, NewBooking};
pub use facility::FacilityService;
pub use member::{MemberDirectory, MemberPatch, MemberService};

/// Number of rows the list endpoints return when no limit is given
pub const DEFAULT_LIST_LIMIT: u64 = 10;

/// Largest limit the store accepts; `LIMIT` is bound as a signed 64-bit integer
pub const MAX_LIST_LIMIT: u64 = i64::MAX as u64;
