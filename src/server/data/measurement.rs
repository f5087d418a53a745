use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::model::measurement::MeasurementsDto;

pub struct ProfileMeasurementRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileMeasurementRepository<'a, C> {
    /// Creates a new instance of [`ProfileMeasurementRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Saves the profile's measurement record, replacing every field.
    ///
    /// Fields absent from the payload are stored as NULL, so a save with only one
    /// field set clears the rest of the record.
    pub async fn upsert(
        &self,
        profile_id: &str,
        measurements: &MeasurementsDto,
    ) -> Result<entity::profile_measurement::Model, DbErr> {
        let existing = entity::prelude::ProfileMeasurement::find()
            .filter(entity::profile_measurement::Column::ProfileId.eq(profile_id))
            .one(self.db)
            .await?;

        match existing {
            Some(existing) => {
                let mut record = existing.into_active_model();
                record.height_cm = ActiveValue::Set(measurements.height_cm);
                record.weight_kg = ActiveValue::Set(measurements.weight_kg);
                record.chest_cm = ActiveValue::Set(measurements.chest_cm);
                record.waist_cm = ActiveValue::Set(measurements.waist_cm);
                record.hips_cm = ActiveValue::Set(measurements.hips_cm);
                record.inseam_cm = ActiveValue::Set(measurements.inseam_cm);
                record.shoe_size = ActiveValue::Set(measurements.shoe_size);
                record.updated_at = ActiveValue::Set(Utc::now().naive_utc());

                record.update(self.db).await
            }
            None => {
                let record = entity::profile_measurement::ActiveModel {
                    profile_id: ActiveValue::Set(profile_id.to_string()),
                    height_cm: ActiveValue::Set(measurements.height_cm),
                    weight_kg: ActiveValue::Set(measurements.weight_kg),
                    chest_cm: ActiveValue::Set(measurements.chest_cm),
                    waist_cm: ActiveValue::Set(measurements.waist_cm),
                    hips_cm: ActiveValue::Set(measurements.hips_cm),
                    inseam_cm: ActiveValue::Set(measurements.inseam_cm),
                    shoe_size: ActiveValue::Set(measurements.shoe_size),
                    updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                };

                record.insert(self.db).await
            }
        }
    }

    pub async fn get(
        &self,
        profile_id: &str,
    ) -> Result<Option<entity::profile_measurement::Model>, DbErr> {
        entity::prelude::ProfileMeasurement::find()
            .filter(entity::profile_measurement::Column::ProfileId.eq(profile_id))
            .one(self.db)
            .await
    }
}

pub struct ChildMeasurementRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChildMeasurementRepository<'a, C> {
    /// Creates a new instance of [`ChildMeasurementRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Saves the child's measurement record, replacing every field.
    pub async fn upsert(
        &self,
        child_id: i32,
        measurements: &MeasurementsDto,
    ) -> Result<entity::child_measurement::Model, DbErr> {
        let existing = entity::prelude::ChildMeasurement::find()
            .filter(entity::child_measurement::Column::ChildId.eq(child_id))
            .one(self.db)
            .await?;

        match existing {
            Some(existing) => {
                let mut record = existing.into_active_model();
                record.height_cm = ActiveValue::Set(measurements.height_cm);
                record.weight_kg = ActiveValue::Set(measurements.weight_kg);
                record.chest_cm = ActiveValue::Set(measurements.chest_cm);
                record.waist_cm = ActiveValue::Set(measurements.waist_cm);
                record.hips_cm = ActiveValue::Set(measurements.hips_cm);
                record.inseam_cm = ActiveValue::Set(measurements.inseam_cm);
                record.shoe_size = ActiveValue::Set(measurements.shoe_size);
                record.updated_at = ActiveValue::Set(Utc::now().naive_utc());

                record.update(self.db).await
            }
            None => {
                let record = entity::child_measurement::ActiveModel {
                    child_id: ActiveValue::Set(child_id),
                    height_cm: ActiveValue::Set(measurements.height_cm),
                    weight_kg: ActiveValue::Set(measurements.weight_kg),
                    chest_cm: ActiveValue::Set(measurements.chest_cm),
                    waist_cm: ActiveValue::Set(measurements.waist_cm),
                    hips_cm: ActiveValue::Set(measurements.hips_cm),
                    inseam_cm: ActiveValue::Set(measurements.inseam_cm),
                    shoe_size: ActiveValue::Set(measurements.shoe_size),
                    updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                };

                record.insert(self.db).await
            }
        }
    }

    pub async fn get(
        &self,
        child_id: i32,
    ) -> Result<Option<entity::child_measurement::Model>, DbErr> {
        entity::prelude::ChildMeasurement::find()
            .filter(entity::child_measurement::Column::ChildId.eq(child_id))
            .one(self.db)
            .await
    }
}
