use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "cd", table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "memid")]
    pub id: i32,
    pub surname: String,
    #[sea_orm(column_name = "firstname")]
    pub first_name: String,
    pub address: String,
    pub zipcode: String,
    pub telephone: String,
    /// The member who recommended this one, if any
    #[sea_orm(column_name = "recommendedby")]
    pub recommended_by_id: Option<i32>,
    #[sea_orm(column_name = "joindate")]
    pub join_date: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::RecommendedById",
        to = "Column::Id"
    )]
    RecommendedBy,
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
