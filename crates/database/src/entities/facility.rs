use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "cd", table_name = "facilities")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "facid")]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_name = "membercost")]
    pub member_cost: f64,
    #[sea_orm(column_name = "guestcost")]
    pub guest_cost: f64,
    #[sea_orm(column_name = "initialoutlay")]
    pub initial_outlay: f64,
    #[sea_orm(column_name = "monthlymaintenance")]
    pub monthly_maintenance: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
