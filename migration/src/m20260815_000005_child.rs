use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_family::Families, m20260815_000002_profile::Profiles};

static IDX_CHILDREN_CREATED_BY: &str = "idx-children-created_by";
static FK_CHILDREN_CREATED_BY: &str = "fk-children-created_by";
static FK_CHILDREN_FAMILY_ID: &str = "fk-children-family_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Children::Table)
                    .if_not_exists()
                    .col(pk_auto(Children::Id))
                    .col(string(Children::Name))
                    .col(date(Children::Birthdate))
                    .col(string(Children::CreatedBy))
                    .col(integer_null(Children::FamilyId))
                    .col(timestamp(Children::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHILDREN_CREATED_BY)
                    .table(Children::Table)
                    .col(Children::CreatedBy)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHILDREN_CREATED_BY)
                    .from_tbl(Children::Table)
                    .from_col(Children::CreatedBy)
                    .to_tbl(Profiles::Table)
                    .to_col(Profiles::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHILDREN_FAMILY_ID)
                    .from_tbl(Children::Table)
                    .from_col(Children::FamilyId)
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
                    .name(FK_CHILDREN_FAMILY_ID)
                    .table(Children::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHILDREN_CREATED_BY)
                    .table(Children::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHILDREN_CREATED_BY)
                    .table(Children::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Children::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Children {
    Table,
    Id,
    Name,
    Birthdate,
    CreatedBy,
    FamilyId,
    CreatedAt,
}
