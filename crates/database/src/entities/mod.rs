//! SeaORM entities for the `cd` schema.

pub mod booking;
pub mod facility;
pub mod member;
