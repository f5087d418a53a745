use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel};

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a profile keyed by the account id issued by the identity provider
    pub async fn create(&self, id: &str, email: &str) -> Result<entity::profile::Model, DbErr> {
        let profile = entity::profile::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            email: ActiveValue::Set(email.to_string()),
            full_name: ActiveValue::Set(None),
            family_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        profile.insert(self.db).await
    }

    pub async fn get(&self, profile_id: &str) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find_by_id(profile_id)
            .one(self.db)
            .await
    }

    pub async fn update_name(
        &self,
        profile_id: &str,
        full_name: &str,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        let profile = match entity::prelude::Profile::find_by_id(profile_id)
            .one(self.db)
            .await?
        {
            Some(profile) => profile,
            None => return Ok(None),
        };

        let mut profile_am = profile.into_active_model();
        profile_am.full_name = ActiveValue::Set(Some(full_name.to_string()));
        profile_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let profile = profile_am.update(self.db).await?;

        Ok(Some(profile))
    }

    pub async fn update_family(
        &self,
        profile_id: &str,
        family_id: Option<i32>,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        let profile = match entity::prelude::Profile::find_by_id(profile_id)
            .one(self.db)
            .await?
        {
            Some(profile) => profile,
            None => return Ok(None),
        };

        let mut profile_am = profile.into_active_model();
        profile_am.family_id = ActiveValue::Set(family_id);
        profile_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let profile = profile_am.update(self.db).await?;

        Ok(Some(profile))
    }
}
