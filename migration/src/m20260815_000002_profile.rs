use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_family::Families;

static IDX_PROFILES_FAMILY_ID: &str = "idx-profiles-family_id";
static FK_PROFILES_FAMILY_ID: &str = "fk-profiles-family_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(string(Profiles::Id).primary_key())
                    .col(string(Profiles::Email))
                    .col(string_null(Profiles::FullName))
                    .col(integer_null(Profiles::FamilyId))
                    .col(timestamp(Profiles::CreatedAt))
                    .col(timestamp(Profiles::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROFILES_FAMILY_ID)
                    .table(Profiles::Table)
                    .col(Profiles::FamilyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROFILES_FAMILY_ID)
                    .from_tbl(Profiles::Table)
                    .from_col(Profiles::FamilyId)
                    .to_tbl(Families::Table)
                    .to_col(Families::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROFILES_FAMILY_ID)
                    .table(Profiles::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROFILES_FAMILY_ID)
                    .table(Profiles::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Profiles {
    Table,
    Id,
    Email,
    FullName,
    FamilyId,
    CreatedAt,
    UpdatedAt,
}
