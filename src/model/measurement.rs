use serde::{Deserialize, Serialize};

/// Full body measurement record for a profile or child.
///
/// All seven fields travel together: saving measurements replaces the whole
/// record, and fields left blank come back as `None`.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MeasurementsDto {
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub chest_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hips_cm: Option<f64>,
    pub inseam_cm: Option<f64>,
    pub shoe_size: Option<f64>,
}
