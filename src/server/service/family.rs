use sea_orm::{ActiveEnum, DatabaseConnection, DbErr, TransactionTrait};

use entity::family_member::FamilyRole;

use crate::{
    model::family::{FamilyDto, FamilyMemberDto, FamilyOverviewDto, MemberDetailDto},
    server::{
        data::{
            child::ChildRepository,
            family::FamilyRepository,
            family_member::FamilyMemberRepository,
            measurement::{ChildMeasurementRepository, ProfileMeasurementRepository},
            profile::ProfileRepository,
        },
        error::{family::FamilyError, Error},
        model::db::{FamilyModel, ProfileModel},
        policy::can_view_profile,
        service::{child::child_to_dto, measurement::profile_measurements_to_dto},
    },
};

pub struct FamilyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FamilyService<'a> {
    /// Creates a new instance of [`FamilyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    // Creates a family group and enrolls the creator as its admin
    //
    // The family row, the creator's affiliation, and the admin membership are
    // written in one transaction so a failure never leaves a family without
    // an admin. An account already in a family moves to the new one; its old
    // membership row stays behind as join history.
    //
    // # Arguments
    // - `account_id`: Account creating the family
    // - `account_email`: Email used if the profile row has to be created
    // - `name`: Display name for the group
    //
    // # Returns
    // Returns a Result containing:
    // - [`FamilyDto`]: The freshly created group
    // - [`Error`]: ValidationError for a blank name, or a database error
    pub async fn create_family(
        &self,
        account_id: &str,
        account_email: &str,
        name: &str,
    ) -> Result<FamilyDto, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(
                FamilyError::ValidationError("Family name cannot be empty".to_string()).into(),
            );
        }

        let txn = self.db.begin().await?;

        let family = FamilyRepository::new(&txn).create(name).await?;

        let profile_repository = ProfileRepository::new(&txn);
        if profile_repository.get(account_id).await?.is_none() {
            profile_repository.create(account_id, account_email).await?;
        }
        profile_repository
            .update_family(account_id, Some(family.id))
            .await?;

        FamilyMemberRepository::new(&txn)
            .create(family.id, account_id, FamilyRole::Admin)
            .await?;

        txn.commit().await?;

        Ok(family_to_dto(family))
    }

    /// Assembles the family page for the acting account
    ///
    /// The roster lists members in join order. `selected` picks which
    /// member's read-only detail to show; anything that is not a viewable
    /// roster member falls back to the acting account rather than erroring,
    /// so a stale link still renders the page.
    pub async fn family_overview(
        &self,
        profile: &ProfileModel,
        selected: Option<&str>,
    ) -> Result<FamilyOverviewDto, Error> {
        let family_id = profile.family_id.ok_or(FamilyError::NotInFamily)?;
        let family = FamilyRepository::new(self.db)
            .get(family_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Family {family_id} is missing")))?;

        let members = FamilyMemberRepository::new(self.db)
            .get_by_family_with_profiles(family_id)
            .await?;

        let mut roster = Vec::with_capacity(members.len());
        for (member, member_profile) in &members {
            let display_name = match member_profile {
                Some(member_profile) => display_name(member_profile),
                None => member.profile_id.clone(),
            };
            roster.push(FamilyMemberDto {
                profile_id: member.profile_id.clone(),
                display_name,
                role: member.role.to_value(),
                joined_at: member.created_at,
            });
        }

        let selected_profile = match selected {
            Some(selected_id)
                if members
                    .iter()
                    .any(|(member, _)| member.profile_id == selected_id) =>
            {
                match ProfileRepository::new(self.db).get(selected_id).await? {
                    Some(candidate) if can_view_profile(profile, &candidate) => candidate,
                    _ => profile.clone(),
                }
            }
            _ => profile.clone(),
        };

        let selected = self.member_detail(selected_profile, family_id).await?;

        Ok(FamilyOverviewDto {
            family: family_to_dto(family),
            members: roster,
            selected,
        })
    }

    async fn member_detail(
        &self,
        member: ProfileModel,
        family_id: i32,
    ) -> Result<MemberDetailDto, Error> {
        let measurements = ProfileMeasurementRepository::new(self.db)
            .get(&member.id)
            .await?;
        let children = ChildRepository::new(self.db)
            .get_by_creator_in_family(&member.id, family_id)
            .await?;

        let child_measurement_repository = ChildMeasurementRepository::new(self.db);
        let mut children_dto = Vec::with_capacity(children.len());
        for child in children {
            let child_measurements = child_measurement_repository.get(child.id).await?;
            children_dto.push(child_to_dto(child, child_measurements));
        }

        Ok(MemberDetailDto {
            profile_id: member.id,
            measurements: measurements.map(profile_measurements_to_dto),
            children: children_dto,
        })
    }
}

pub(crate) fn family_to_dto(family: FamilyModel) -> FamilyDto {
    FamilyDto {
        id: family.id,
        name: family.name,
    }
}

fn display_name(profile: &ProfileModel) -> String {
    match &profile.full_name {
        Some(full_name) => full_name.clone(),
        None => profile.email.clone(),
    }
}
