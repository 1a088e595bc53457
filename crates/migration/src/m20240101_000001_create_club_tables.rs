use sea_orm_migration::prelude::*;

const CREATE_SCHEMA: &str = "CREATE SCHEMA IF NOT EXISTS cd";
const DROP_SCHEMA: &str = "DROP SCHEMA IF EXISTS cd";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(CREATE_SCHEMA)
            .await?;

        manager.create_table(create_members()).await?;
        manager.create_table(create_facilities()).await?;
        manager.create_table(create_bookings()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table((Cd, Bookings::Table)).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table((Cd, Facilities::Table)).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table((Cd, Members::Table)).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared(DROP_SCHEMA)
            .await?;

        Ok(())
    }
}

fn create_members() -> TableCreateStatement {
    Table::create()
        .table((Cd, Members::Table))
        .if_not_exists()
        .col(ColumnDef::new(Members::Id).integer().not_null().primary_key())
        .col(ColumnDef::new(Members::Surname).string().not_null())
        .col(ColumnDef::new(Members::FirstName).string().not_null())
        .col(ColumnDef::new(Members::Address).string().not_null())
        .col(ColumnDef::new(Members::Zipcode).string().not_null())
        .col(ColumnDef::new(Members::Telephone).string().not_null())
        .col(ColumnDef::new(Members::RecommendedBy).integer())
        .col(ColumnDef::new(Members::JoinDate).timestamp().not_null())
        // No cascade: deleting a recommender is left to fail at the store
        .foreign_key(
            ForeignKey::create()
                .name("fk-members-recommendedby")
                .from((Cd, Members::Table), Members::RecommendedBy)
                .to((Cd, Members::Table), Members::Id),
        )
        .to_owned()
}

fn create_facilities() -> TableCreateStatement {
    Table::create()
        .table((Cd, Facilities::Table))
        .if_not_exists()
        .col(
            ColumnDef::new(Facilities::Id)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Facilities::Name).string().not_null())
        .col(ColumnDef::new(Facilities::MemberCost).double().not_null())
        .col(ColumnDef::new(Facilities::GuestCost).double().not_null())
        .col(ColumnDef::new(Facilities::InitialOutlay).double().not_null())
        .col(
            ColumnDef::new(Facilities::MonthlyMaintenance)
                .double()
                .not_null(),
        )
        .to_owned()
}

fn create_bookings() -> TableCreateStatement {
    Table::create()
        .table((Cd, Bookings::Table))
        .if_not_exists()
        .col(
            ColumnDef::new(Bookings::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Bookings::FacilityId).integer().not_null())
        .col(ColumnDef::new(Bookings::MemberId).integer().not_null())
        .col(ColumnDef::new(Bookings::StartTime).timestamp().not_null())
        .col(ColumnDef::new(Bookings::Slots).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk-bookings-facid")
                .from((Cd, Bookings::Table), Bookings::FacilityId)
                .to((Cd, Facilities::Table), Facilities::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk-bookings-memid")
                .from((Cd, Bookings::Table), Bookings::MemberId)
                .to((Cd, Members::Table), Members::Id),
        )
        .to_owned()
}

#[derive(Iden)]
pub(crate) struct Cd;

#[derive(Iden)]
pub(crate) enum Members {
    Table,
    #[iden = "memid"]
    Id,
    Surname,
    #[iden = "firstname"]
    FirstName,
    Address,
    Zipcode,
    Telephone,
    #[iden = "recommendedby"]
    RecommendedBy,
    #[iden = "joindate"]
    JoinDate,
}

#[derive(Iden)]
pub(crate) enum Facilities {
    Table,
    #[iden = "facid"]
    Id,
    Name,
    #[iden = "membercost"]
    MemberCost,
    #[iden = "guestcost"]
    GuestCost,
    #[iden = "initialoutlay"]
    InitialOutlay,
    #[iden = "monthlymaintenance"]
    MonthlyMaintenance,
}

#[derive(Iden)]
pub(crate) enum Bookings {
    Table,
    #[iden = "bookid"]
    Id,
    #[iden = "facid"]
    FacilityId,
    #[iden = "memid"]
    MemberId,
    #[iden = "starttime"]
    StartTime,
    Slots,
}

#[cfg(test)]
mod test {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[test]
    fn test_tables_live_in_cd_schema() {
        let members = create_members().to_string(PostgresQueryBuilder);
        assert!(members.contains(r#""cd"."members""#));
        assert!(members.contains(r#""firstname""#));
        assert!(members.contains(r#"FOREIGN KEY ("recommendedby")"#));

        let facilities = create_facilities().to_string(PostgresQueryBuilder);
        assert!(facilities.contains(r#""cd"."facilities""#));
        assert!(facilities.contains(r#""monthlymaintenance""#));
    }

    #[test]
    fn test_bookings_reference_members_and_facilities() {
        let bookings = create_bookings().to_string(PostgresQueryBuilder);

        assert!(bookings.contains(r#""cd"."bookings""#));
        assert!(bookings.contains(
            r#"FOREIGN KEY ("facid") REFERENCES "cd"."facilities" ("facid")"#
        ));
        assert!(bookings.contains(r#"FOREIGN KEY ("memid") REFERENCES "cd"."members" ("memid")"#));
        assert!(!bookings.contains("CASCADE"));
    }

    #[async_std::test]
    async fn test_down_drops_tables_then_schema() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult::default(); 4])
            .into_connection();
        let manager = SchemaManager::new(&db);

        Migration.down(&manager).await.unwrap();

        let log = format!("{:?}", db.into_transaction_log());
        let last_table_drop = log.rfind("DROP TABLE").unwrap();
        let schema_drop = log.find(DROP_SCHEMA).unwrap();
        assert!(last_table_drop < schema_drop);
    }
}
