//! Access policy checks for row-level authorization.
//!
//! Policies are pure functions over already-loaded rows; services load the rows and map
//! a failed check to [`FamilyError::Forbidden`](crate::server::error::family::FamilyError).

use crate::server::model::db::{ChildModel, ProfileModel};

/// Returns whether the viewer may read the target profile's measurements and children.
///
/// Reads are allowed for the profile owner and for accounts sharing the same family.
/// Accounts outside any family can only read themselves.
pub fn can_view_profile(viewer: &ProfileModel, target: &ProfileModel) -> bool {
    if viewer.id == target.id {
        return true;
    }

    match (viewer.family_id, target.family_id) {
        (Some(viewer_family), Some(target_family)) => viewer_family == target_family,
        _ => false,
    }
}

/// Returns whether the profile may edit the child record.
///
/// Children are editable only by the account that created them, even inside a family;
/// other family members get read access alone.
pub fn can_edit_child(child: &ChildModel, profile_id: &str) -> bool {
    child.created_by == profile_id
}
