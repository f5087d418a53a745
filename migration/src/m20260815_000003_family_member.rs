use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_family::Families, m20260815_000002_profile::Profiles};

static IDX_FAMILY_MEMBERS_FAMILY_ID: &str = "idx-family_members-family_id";
static IDX_FAMILY_MEMBERS_FAMILY_ID_PROFILE_ID: &str = "idx-family_members-family_id-profile_id";
static FK_FAMILY_MEMBERS_FAMILY_ID: &str = "fk-family_members-family_id";
static FK_FAMILY_MEMBERS_PROFILE_ID: &str = "fk-family_members-profile_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FamilyMembers::Table)
                    .if_not_exists()
                    .col(pk_auto(FamilyMembers::Id))
                    .col(integer(FamilyMembers::FamilyId))
                    .col(string(FamilyMembers::ProfileId))
                    .col(string_len(FamilyMembers::Role, 16))
                    .col(timestamp(FamilyMembers::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAMILY_MEMBERS_FAMILY_ID)
                    .table(FamilyMembers::Table)
                    .col(FamilyMembers::FamilyId)
                    .to_owned(),
            )
            .await?;

        // One membership row per account per family.
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAMILY_MEMBERS_FAMILY_ID_PROFILE_ID)
                    .table(FamilyMembers::Table)
                    .col(FamilyMembers::FamilyId)
                    .col(FamilyMembers::ProfileId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAMILY_MEMBERS_FAMILY_ID)
                    .from_tbl(FamilyMembers::Table)
                    .from_col(FamilyMembers::FamilyId)
                    .to_tbl(Families::Table)
                    .to_col(Families::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAMILY_MEMBERS_PROFILE_ID)
                    .from_tbl(FamilyMembers::Table)
                    .from_col(FamilyMembers::ProfileId)
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
                    .name(FK_FAMILY_MEMBERS_PROFILE_ID)
                    .table(FamilyMembers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAMILY_MEMBERS_FAMILY_ID)
                    .table(FamilyMembers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAMILY_MEMBERS_FAMILY_ID_PROFILE_ID)
                    .table(FamilyMembers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAMILY_MEMBERS_FAMILY_ID)
                    .table(FamilyMembers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FamilyMembers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FamilyMembers {
    Table,
    Id,
    FamilyId,
    ProfileId,
    Role,
    CreatedAt,
}
