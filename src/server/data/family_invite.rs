use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct FamilyInviteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FamilyInviteRepository<'a, C> {
    /// Creates a new instance of [`FamilyInviteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a freshly issued invite token
    ///
    /// Both timestamps come from the caller so the stored expiry stays an
    /// exact offset from the stored creation time.
    pub async fn create(
        &self,
        family_id: i32,
        invited_by: &str,
        token: &str,
        created_at: NaiveDateTime,
        expires_at: NaiveDateTime,
    ) -> Result<entity::family_invite::Model, DbErr> {
        let invite = entity::family_invite::ActiveModel {
            family_id: ActiveValue::Set(family_id),
            invited_by: ActiveValue::Set(invited_by.to_string()),
            token: ActiveValue::Set(token.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        };

        invite.insert(self.db).await
    }

    pub async fn get_by_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::family_invite::Model>, DbErr> {
        entity::prelude::FamilyInvite::find()
            .filter(entity::family_invite::Column::Token.eq(token))
            .one(self.db)
            .await
    }
}
