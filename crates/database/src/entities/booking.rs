use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "cd", table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true, column_name = "bookid")]
    pub id: i32,
    #[sea_orm(column_name = "facid")]
    pub facility_id: i32,
    #[sea_orm(column_name = "memid")]
    pub member_id: i32,
    #[sea_orm(column_name = "starttime")]
    pub start_time: DateTime,
    pub slots: i32, // Number of half-hour slots
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::facility::Entity",
        from = "Column::FacilityId",
        to = "super::facility::Column::Id"
    )]
    Facility,
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id"
    )]
    Member,
}

impl Related<super::facility::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Facility.def()
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
