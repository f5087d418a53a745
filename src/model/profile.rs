use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::measurement::MeasurementsDto;

/// A profile record belonging to one signed-in account.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProfileDto {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub family_id: Option<i32>,
}

/// A child with its measurement record, if one has been saved.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ChildDto {
    pub id: i32,
    pub name: String,
    pub birthdate: NaiveDate,
    pub measurements: Option<MeasurementsDto>,
}

/// Everything the signed-in account sees on its own page: profile, own
/// measurements, and children ordered by birthdate.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MeViewDto {
    pub profile: ProfileDto,
    pub measurements: Option<MeasurementsDto>,
    pub children: Vec<ChildDto>,
}

/// Payload to update the signed-in account's display name.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateNameDto {
    pub full_name: String,
}

/// Payload to add a child record.
///
/// The birthdate travels as an ISO `YYYY-MM-DD` string so unparseable input
/// surfaces as a validation error rather than a deserialization failure.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateChildDto {
    pub name: String,
    pub birthdate: String,
}
