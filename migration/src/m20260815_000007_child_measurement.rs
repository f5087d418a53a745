use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000005_child::Children;

static FK_CHILD_MEASUREMENTS_CHILD_ID: &str = "fk-child_measurements-child_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChildMeasurements::Table)
                    .if_not_exists()
                    .col(pk_auto(ChildMeasurements::Id))
                    .col(integer_uniq(ChildMeasurements::ChildId))
                    .col(double_null(ChildMeasurements::HeightCm))
                    .col(double_null(ChildMeasurements::WeightKg))
                    .col(double_null(ChildMeasurements::ChestCm))
                    .col(double_null(ChildMeasurements::WaistCm))
                    .col(double_null(ChildMeasurements::HipsCm))
                    .col(double_null(ChildMeasurements::InseamCm))
                    .col(double_null(ChildMeasurements::ShoeSize))
                    .col(timestamp(ChildMeasurements::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHILD_MEASUREMENTS_CHILD_ID)
                    .from_tbl(ChildMeasurements::Table)
                    .from_col(ChildMeasurements::ChildId)
                    .to_tbl(Children::Table)
                    .to_col(Children::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHILD_MEASUREMENTS_CHILD_ID)
                    .table(ChildMeasurements::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChildMeasurements::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ChildMeasurements {
    Table,
    Id,
    ChildId,
    HeightCm,
    WeightKg,
    ChestCm,
    WaistCm,
    HipsCm,
    InseamCm,
    ShoeSize,
    UpdatedAt,
}
