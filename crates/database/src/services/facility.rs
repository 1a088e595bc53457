use crate::entities::facility;
use crate::services::MAX_LIST_LIMIT;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QuerySelect};

pub struct FacilityService;

impl FacilityService {
    pub async fn list(db: &DatabaseConnection, limit: u64) -> Result<Vec<facility::Model>, DbErr> {
        facility::Entity::find()
            .limit(limit.min(MAX_LIST_LIMIT))
            .all(db)
            .await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<facility::Model>, DbErr> {
        facility::Entity::find_by_id(id).one(db).await
    }
}
