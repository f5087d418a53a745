use chrono::Utc;
use entity::family_member::FamilyRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct FamilyMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FamilyMemberRepository<'a, C> {
    /// Creates a new instance of [`FamilyMemberRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a membership row; the row's creation time doubles as the join time
    pub async fn create(
        &self,
        family_id: i32,
        profile_id: &str,
        role: FamilyRole,
    ) -> Result<entity::family_member::Model, DbErr> {
        let member = entity::family_member::ActiveModel {
            family_id: ActiveValue::Set(family_id),
            profile_id: ActiveValue::Set(profile_id.to_string()),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        member.insert(self.db).await
    }

    pub async fn get(
        &self,
        family_id: i32,
        profile_id: &str,
    ) -> Result<Option<entity::family_member::Model>, DbErr> {
        entity::prelude::FamilyMember::find()
            .filter(entity::family_member::Column::FamilyId.eq(family_id))
            .filter(entity::family_member::Column::ProfileId.eq(profile_id))
            .one(self.db)
            .await
    }

    /// Returns the family roster with each member's profile, ordered by join time
    pub async fn get_by_family_with_profiles(
        &self,
        family_id: i32,
    ) -> Result<
        Vec<(
            entity::family_member::Model,
            Option<entity::profile::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::FamilyMember::find()
            .filter(entity::family_member::Column::FamilyId.eq(family_id))
            .find_also_related(entity::profile::Entity)
            .order_by_asc(entity::family_member::Column::CreatedAt)
            .order_by_asc(entity::family_member::Column::Id)
            .all(self.db)
            .await
    }
}
