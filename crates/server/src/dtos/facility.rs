use database::entities::facility;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct FacilityResponse {
    pub id: i32,
    pub name: String,
    pub member_cost: f64,
    pub guest_cost: f64,
    pub initial_outlay: f64,
    pub monthly_maintenance: f64,
}

impl From<facility::Model> for FacilityResponse {
    fn from(facility: facility::Model) -> Self {
        Self {
            id: facility.id,
            name: facility.name,
            member_cost: facility.member_cost,
            guest_cost: facility.guest_cost,
            initial_outlay: facility.initial_outlay,
            monthly_maintenance: facility.monthly_maintenance,
        }
    }
}
