use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::profile::{ChildDto, CreateChildDto},
    server::{
        data::child::ChildRepository,
        error::{family::FamilyError, Error},
        model::db::{ChildMeasurementModel, ChildModel, ProfileModel},
        service::measurement::child_measurements_to_dto,
    },
};

pub struct ChildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChildService<'a> {
    /// Creates a new instance of [`ChildService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a child record under the creating account
    ///
    /// The child inherits the creator's current family so it shows up on the
    /// family page; a creator without a family keeps the child private until
    /// they join one (children do not move retroactively).
    pub async fn add_child(
        &self,
        profile: &ProfileModel,
        child: &CreateChildDto,
    ) -> Result<ChildDto, Error> {
        let name = child.name.trim();
        if name.is_empty() {
            return Err(
                FamilyError::ValidationError("Child name cannot be empty".to_string()).into(),
            );
        }

        let birthdate = NaiveDate::parse_from_str(child.birthdate.trim(), "%Y-%m-%d").map_err(
            |_| FamilyError::ValidationError("Birthdate must be a YYYY-MM-DD date".to_string()),
        )?;

        let child = ChildRepository::new(self.db)
            .create(name, birthdate, &profile.id, profile.family_id)
            .await?;

        Ok(child_to_dto(child, None))
    }
}

pub(crate) fn child_to_dto(
    child: ChildModel,
    measurements: Option<ChildMeasurementModel>,
) -> ChildDto {
    ChildDto {
        id: child.id,
        name: child.name,
        birthdate: child.birthdate,
        measurements: measurements.map(child_measurements_to_dto),
    }
}
