use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::measurement::MeasurementsDto;
use crate::model::profile::ChildDto;

/// A family group.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FamilyDto {
    pub id: i32,
    pub name: String,
}

/// One entry in the family roster.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FamilyMemberDto {
    pub profile_id: String,
    /// Display name falls back to the account email when no name is set.
    pub display_name: String,
    pub role: String,
    pub joined_at: NaiveDateTime,
}

/// Read-only detail for one selected roster member: their measurements and
/// the children they added to the family.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MemberDetailDto {
    pub profile_id: String,
    pub measurements: Option<MeasurementsDto>,
    pub children: Vec<ChildDto>,
}

/// The family page payload: the group, its roster ordered by join time, and
/// the currently selected member's detail.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FamilyOverviewDto {
    pub family: FamilyDto,
    pub members: Vec<FamilyMemberDto>,
    pub selected: MemberDetailDto,
}

/// Payload to create a family group.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateFamilyDto {
    pub name: String,
}

/// A freshly issued invite.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct InviteDto {
    /// Opaque URL-safe token to hand to the invitee.
    pub token: String,
    pub expires_at: NaiveDateTime,
    /// Shareable link where the token can be redeemed, built from the
    /// configured public origin.
    pub invite_url: String,
}

/// Payload to redeem an invite token.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AcceptInviteDto {
    pub token: String,
}
