//! Family database insertion utilities.
//!
//! These methods insert family, membership, and invite rows directly via
//! entity models so tests can stage group state without going through the
//! application services under test.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::family::FamilyFixtures};

impl<'a> FamilyFixtures<'a> {
    /// Insert a family row with the given name.
    pub async fn insert_family(&self, name: &str) -> Result<entity::family::Model, TestError> {
        Ok(entity::prelude::Family::insert(entity::family::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a membership row linking a profile to a family.
    pub async fn insert_member(
        &self,
        family_id: i32,
        profile_id: &str,
        role: entity::family_member::FamilyRole,
    ) -> Result<entity::family_member::Model, TestError> {
        Ok(
            entity::prelude::FamilyMember::insert(entity::family_member::ActiveModel {
                family_id: ActiveValue::Set(family_id),
                profile_id: ActiveValue::Set(profile_id.to_string()),
                role: ActiveValue::Set(role),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an invite row with an explicit expiry timestamp.
    ///
    /// Pass a timestamp in the past to stage an expired invite.
    pub async fn insert_invite(
        &self,
        family_id: i32,
        invited_by: &str,
        token: &str,
        expires_at: NaiveDateTime,
    ) -> Result<entity::family_invite::Model, TestError> {
        Ok(
            entity::prelude::FamilyInvite::insert(entity::family_invite::ActiveModel {
                family_id: ActiveValue::Set(family_id),
                invited_by: ActiveValue::Set(invited_by.to_string()),
                token: ActiveValue::Set(token.to_string()),
                expires_at: ActiveValue::Set(expires_at),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
