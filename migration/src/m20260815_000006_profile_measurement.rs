use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000002_profile::Profiles;

static FK_PROFILE_MEASUREMENTS_PROFILE_ID: &str = "fk-profile_measurements-profile_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfileMeasurements::Table)
                    .if_not_exists()
                    .col(pk_auto(ProfileMeasurements::Id))
                    .col(string_uniq(ProfileMeasurements::ProfileId))
                    .col(double_null(ProfileMeasurements::HeightCm))
                    .col(double_null(ProfileMeasurements::WeightKg))
                    .col(double_null(ProfileMeasurements::ChestCm))
                    .col(double_null(ProfileMeasurements::WaistCm))
                    .col(double_null(ProfileMeasurements::HipsCm))
                    .col(double_null(ProfileMeasurements::InseamCm))
                    .col(double_null(ProfileMeasurements::ShoeSize))
                    .col(timestamp(ProfileMeasurements::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROFILE_MEASUREMENTS_PROFILE_ID)
                    .from_tbl(ProfileMeasurements::Table)
                    .from_col(ProfileMeasurements::ProfileId)
                    .to_tbl(Profiles::Table)
                    .to_col(Profiles::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROFILE_MEASUREMENTS_PROFILE_ID)
                    .table(ProfileMeasurements::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProfileMeasurements::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ProfileMeasurements {
    Table,
    Id,
    ProfileId,
    HeightCm,
    WeightKg,
    ChestCm,
    WaistCm,
    HipsCm,
    InseamCm,
    ShoeSize,
    UpdatedAt,
}
