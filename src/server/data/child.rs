use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct ChildRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChildRepository<'a, C> {
    /// Creates a new instance of [`ChildRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a child record owned by the creating profile
    pub async fn create(
        &self,
        name: &str,
        birthdate: NaiveDate,
        created_by: &str,
        family_id: Option<i32>,
    ) -> Result<entity::child::Model, DbErr> {
        let child = entity::child::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            birthdate: ActiveValue::Set(birthdate),
            created_by: ActiveValue::Set(created_by.to_string()),
            family_id: ActiveValue::Set(family_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        child.insert(self.db).await
    }

    pub async fn get(&self, child_id: i32) -> Result<Option<entity::child::Model>, DbErr> {
        entity::prelude::Child::find_by_id(child_id)
            .one(self.db)
            .await
    }

    /// Returns the children created by a profile, youngest records first by birthdate
    pub async fn get_by_creator(
        &self,
        profile_id: &str,
    ) -> Result<Vec<entity::child::Model>, DbErr> {
        entity::prelude::Child::find()
            .filter(entity::child::Column::CreatedBy.eq(profile_id))
            .order_by_asc(entity::child::Column::Birthdate)
            .order_by_asc(entity::child::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the children one member added to a family, ordered by birthdate
    pub async fn get_by_creator_in_family(
        &self,
        profile_id: &str,
        family_id: i32,
    ) -> Result<Vec<entity::child::Model>, DbErr> {
        entity::prelude::Child::find()
            .filter(entity::child::Column::CreatedBy.eq(profile_id))
            .filter(entity::child::Column::FamilyId.eq(family_id))
            .order_by_asc(entity::child::Column::Birthdate)
            .order_by_asc(entity::child::Column::Id)
            .all(self.db)
            .await
    }
}
