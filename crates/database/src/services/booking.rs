use crate::entities::{booking, member};
use crate::error::ServiceError;
use crate::services::{FacilityService, MAX_LIST_LIMIT, MemberService};
use chrono::NaiveDateTime;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, DatabaseConnection, DbErr,
    EntityTrait, QuerySelect,
};

/// Input for a new booking. Slots and start time are stored as given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBooking {
    pub facility_id: i32,
    pub member_id: i32,
    pub start_time: NaiveDateTime,
    pub slots: i32,
}

pub struct BookingService;

impl BookingService {
    pub async fn list(db: &DatabaseConnection, limit: u64) -> Result<Vec<booking::Model>, DbErr> {
        booking::Entity::find()
            .limit(limit.min(MAX_LIST_LIMIT))
            .all(db)
            .await
    }

    /// Inserts a booking once its facility and member are known to exist.
    ///
    /// Returns the stored row along with the booking member. Overlapping bookings
    /// are not checked.
    pub async fn create(
        db: &DatabaseConnection,
        new: NewBooking,
    ) -> Result<(booking::Model, member::Model), ServiceError> {
        if FacilityService::find_by_id(db, new.facility_id)
            .await?
            .is_none()
        {
            debug!("Facility {} not found, rejecting booking", new.facility_id);
            return Err(ServiceError::FacilityNotFound);
        }

        let Some(member) = MemberService::find_by_id(db, new.member_id).await? else {
            debug!("Member {} not found, rejecting booking", new.member_id);
            return Err(ServiceError::MemberNotFound);
        };

        let booking = booking::ActiveModel {
            id: NotSet,
            facility_id: Set(new.facility_id),
            member_id: Set(new.member_id),
            start_time: Set(new.start_time),
            slots: Set(new.slots),
        }
        .insert(db)
        .await?;

        Ok((booking, member))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entities::facility;
    use crate::services::fixtures::{sample_facility, sample_member};
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn new_booking() -> NewBooking {
        NewBooking {
            facility_id: 1,
            member_id: 1,
            start_time: NaiveDate::from_ymd_opt(2012, 9, 1)
                .and_then(|d| d.and_hms_opt(9, 30, 0))
                .unwrap(),
            slots: 3,
        }
    }

    #[tokio::test]
    async fn test_create_persists_booking() {
        let input = new_booking();
        let stored = booking::Model {
            id: 4044,
            facility_id: input.facility_id,
            member_id: input.member_id,
            start_time: input.start_time,
            slots: input.slots,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_facility(1, "Tennis Court 2")]])
            .append_query_results([vec![sample_member(1, "Tim", None)]])
            .append_query_results([vec![stored.clone()]])
            .into_connection();

        let (booking, member) = BookingService::create(&db, input).await.unwrap();

        assert_eq!(booking, stored);
        assert_eq!(member.first_name, "Tim");

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("INSERT"));
    }

    #[tokio::test]
    async fn test_create_missing_facility_stops_before_member_lookup() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<facility::Model>::new()])
            .into_connection();

        let err = BookingService::create(&db, new_booking()).await.unwrap_err();
        assert!(matches!(err, ServiceError::FacilityNotFound));
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn test_create_missing_member_inserts_nothing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_facility(1, "Tennis Court 2")]])
            .append_query_results([Vec::<member::Model>::new()])
            .into_connection();

        let err = BookingService::create(&db, new_booking()).await.unwrap_err();
        assert!(matches!(err, ServiceError::MemberNotFound));

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);
        assert!(!format!("{log:?}").contains("INSERT"));
    }
}
