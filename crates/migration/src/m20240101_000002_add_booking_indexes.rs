use crate::m20240101_000001_create_club_tables::{Bookings, Cd, Members};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign key columns, used when validating and listing bookings
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_facid")
                    .table((Cd, Bookings::Table))
                    .col(Bookings::FacilityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_memid")
                    .table((Cd, Bookings::Table))
                    .col(Bookings::MemberId)
                    .to_owned(),
            )
            .await?;

        // Recommender chains are resolved by member id lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_members_recommendedby")
                    .table((Cd, Members::Table))
                    .col(Members::RecommendedBy)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_members_recommendedby")
                    .table((Cd, Members::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_bookings_memid")
                    .table((Cd, Bookings::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_bookings_facid")
                    .table((Cd, Bookings::Table))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
