//! Profile and child database insertion utilities.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::profile::ProfileFixtures};

impl<'a> ProfileFixtures<'a> {
    /// Insert a profile row for the given account id.
    pub async fn insert_profile(
        &self,
        id: &str,
        email: &str,
        family_id: Option<i32>,
    ) -> Result<entity::profile::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Profile::insert(entity::profile::ActiveModel {
                id: ActiveValue::Set(id.to_string()),
                email: ActiveValue::Set(email.to_string()),
                full_name: ActiveValue::Set(None),
                family_id: ActiveValue::Set(family_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a child row owned by the given profile.
    pub async fn insert_child(
        &self,
        name: &str,
        birthdate: NaiveDate,
        created_by: &str,
        family_id: Option<i32>,
    ) -> Result<entity::child::Model, TestError> {
        Ok(entity::prelude::Child::insert(entity::child::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            birthdate: ActiveValue::Set(birthdate),
            created_by: ActiveValue::Set(created_by.to_string()),
            family_id: ActiveValue::Set(family_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
