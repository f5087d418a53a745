use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct FamilyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FamilyRepository<'a, C> {
    /// Creates a new instance of [`FamilyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new family group
    pub async fn create(&self, name: &str) -> Result<entity::family::Model, DbErr> {
        let family = entity::family::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        family.insert(self.db).await
    }

    pub async fn get(&self, family_id: i32) -> Result<Option<entity::family::Model>, DbErr> {
        entity::prelude::Family::find_by_id(family_id)
            .one(self.db)
            .await
    }
}
