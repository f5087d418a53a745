use sea_orm::DatabaseConnection;

use crate::{
    model::profile::{MeViewDto, ProfileDto},
    server::{
        data::{
            child::ChildRepository,
            measurement::{ChildMeasurementRepository, ProfileMeasurementRepository},
            profile::ProfileRepository,
        },
        error::{auth::AuthError, family::FamilyError, Error},
        model::db::ProfileModel,
        service::{child::child_to_dto, measurement::profile_measurements_to_dto},
    },
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    /// Creates a new instance of [`ProfileService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    // Returns the profile for an account, creating it on first access
    //
    // Accounts live in the identity provider; the profile row is this
    // application's record for one. Sign-in and sign-up call this so every
    // authenticated account has a profile from its first request onwards.
    //
    // # Arguments
    // - `account_id`: Opaque account id issued by the identity provider
    // - `email`: Email address reported by the identity provider
    //
    // # Returns
    // Returns a Result containing:
    // - [`ProfileModel`]: The existing or freshly created profile
    // - [`Error`]: An error if there is an issue with the database
    pub async fn ensure_profile(
        &self,
        account_id: &str,
        email: &str,
    ) -> Result<ProfileModel, Error> {
        let profile_repository = ProfileRepository::new(self.db);

        if let Some(profile) = profile_repository.get(account_id).await? {
            return Ok(profile);
        }

        Ok(profile_repository.create(account_id, email).await?)
    }

    /// Assembles the signed-in account's own page: the profile, its
    /// measurement record, and the children it created ordered by birthdate
    pub async fn me_view(&self, profile: ProfileModel) -> Result<MeViewDto, Error> {
        let measurements = ProfileMeasurementRepository::new(self.db)
            .get(&profile.id)
            .await?;
        let children = ChildRepository::new(self.db)
            .get_by_creator(&profile.id)
            .await?;

        let child_measurement_repository = ChildMeasurementRepository::new(self.db);
        let mut children_dto = Vec::with_capacity(children.len());
        for child in children {
            let child_measurements = child_measurement_repository.get(child.id).await?;
            children_dto.push(child_to_dto(child, child_measurements));
        }

        Ok(MeViewDto {
            measurements: measurements.map(profile_measurements_to_dto),
            profile: profile_to_dto(profile),
            children: children_dto,
        })
    }

    /// Updates the account's display name
    pub async fn update_full_name(
        &self,
        profile_id: &str,
        full_name: &str,
    ) -> Result<ProfileDto, Error> {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(FamilyError::ValidationError("Name cannot be empty".to_string()).into());
        }

        let profile = ProfileRepository::new(self.db)
            .update_name(profile_id, full_name)
            .await?
            .ok_or_else(|| AuthError::ProfileNotInDatabase(profile_id.to_string()))?;

        Ok(profile_to_dto(profile))
    }
}

pub(crate) fn profile_to_dto(profile: ProfileModel) -> ProfileDto {
    ProfileDto {
        id: profile.id,
        email: profile.email,
        full_name: profile.full_name,
        family_id: profile.family_id,
    }
}
