use sea_orm::DatabaseConnection;

use crate::{
    model::measurement::MeasurementsDto,
    server::{
        data::{
            child::ChildRepository,
            measurement::{ChildMeasurementRepository, ProfileMeasurementRepository},
        },
        error::{family::FamilyError, Error},
        model::db::{ChildMeasurementModel, ProfileMeasurementModel},
        policy::can_edit_child,
    },
};

pub struct MeasurementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MeasurementService<'a> {
    /// Creates a new instance of [`MeasurementService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Saves the signed-in account's own measurement record, replacing every
    /// field
    pub async fn save_profile_measurements(
        &self,
        profile_id: &str,
        measurements: &MeasurementsDto,
    ) -> Result<MeasurementsDto, Error> {
        let record = ProfileMeasurementRepository::new(self.db)
            .upsert(profile_id, measurements)
            .await?;

        Ok(profile_measurements_to_dto(record))
    }

    /// Saves a child's measurement record on behalf of its creator
    ///
    /// A missing child and a child created by someone else look the same to
    /// the caller, so probing ids reveals nothing about other accounts.
    pub async fn save_child_measurements(
        &self,
        profile_id: &str,
        child_id: i32,
        measurements: &MeasurementsDto,
    ) -> Result<MeasurementsDto, Error> {
        let child = ChildRepository::new(self.db)
            .get(child_id)
            .await?
            .ok_or(FamilyError::Forbidden)?;

        if !can_edit_child(&child, profile_id) {
            return Err(FamilyError::Forbidden.into());
        }

        let record = ChildMeasurementRepository::new(self.db)
            .upsert(child_id, measurements)
            .await?;

        Ok(child_measurements_to_dto(record))
    }
}

pub(crate) fn profile_measurements_to_dto(record: ProfileMeasurementModel) -> MeasurementsDto {
    MeasurementsDto {
        height_cm: record.height_cm,
        weight_kg: record.weight_kg,
        chest_cm: record.chest_cm,
        waist_cm: record.waist_cm,
        hips_cm: record.hips_cm,
        inseam_cm: record.inseam_cm,
        shoe_size: record.shoe_size,
    }
}

pub(crate) fn child_measurements_to_dto(record: ChildMeasurementModel) -> MeasurementsDto {
    MeasurementsDto {
        height_cm: record.height_cm,
        weight_kg: record.weight_kg,
        chest_cm: record.chest_cm,
        waist_cm: record.waist_cm,
        hips_cm: record.hips_cm,
        inseam_cm: record.inseam_cm,
        shoe_size: record.shoe_size,
    }
}
