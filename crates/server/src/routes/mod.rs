pub mod booking;
pub mod facility;
pub mod health;
pub mod member;
pub mod root;
