use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_family::Families, m20260815_000002_profile::Profiles};

static IDX_FAMILY_INVITES_FAMILY_ID: &str = "idx-family_invites-family_id";
static FK_FAMILY_INVITES_FAMILY_ID: &str = "fk-family_invites-family_id";
static FK_FAMILY_INVITES_INVITED_BY: &str = "fk-family_invites-invited_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FamilyInvites::Table)
                    .if_not_exists()
                    .col(pk_auto(FamilyInvites::Id))
                    .col(integer(FamilyInvites::FamilyId))
                    .col(string(FamilyInvites::InvitedBy))
                    .col(string_uniq(FamilyInvites::Token))
                    .col(timestamp(FamilyInvites::ExpiresAt))
                    .col(timestamp(FamilyInvites::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAMILY_INVITES_FAMILY_ID)
                    .table(FamilyInvites::Table)
                    .col(FamilyInvites::FamilyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAMILY_INVITES_FAMILY_ID)
                    .from_tbl(FamilyInvites::Table)
                    .from_col(FamilyInvites::FamilyId)
                    .to_tbl(Families::Table)
                    .to_col(Families::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAMILY_INVITES_INVITED_BY)
                    .from_tbl(FamilyInvites::Table)
                    .from_col(FamilyInvites::InvitedBy)
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
                    .name(FK_FAMILY_INVITES_INVITED_BY)
                    .table(FamilyInvites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAMILY_INVITES_FAMILY_ID)
                    .table(FamilyInvites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAMILY_INVITES_FAMILY_ID)
                    .table(FamilyInvites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FamilyInvites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FamilyInvites {
    Table,
    Id,
    FamilyId,
    InvitedBy,
    Token,
    ExpiresAt,
    CreatedAt,
}
