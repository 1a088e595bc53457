use sea_orm::DbErr;
use thiserror::Error;

/// Failures raised by the services in this crate
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Facility not found")]
    FacilityNotFound,
    #[error("Member not found")]
    MemberNotFound,
    #[error(transparent)]
    Database(#[from] DbErr),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}
