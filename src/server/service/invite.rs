use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use entity::family_member::FamilyRole;

use crate::{
    model::family::{FamilyDto, InviteDto},
    server::{
        data::{
            family::FamilyRepository, family_invite::FamilyInviteRepository,
            family_member::FamilyMemberRepository, profile::ProfileRepository,
        },
        error::{family::FamilyError, Error},
        model::db::ProfileModel,
        service::family::family_to_dto,
        util::token::generate_invite_token,
    },
};

/// How long an invite token stays redeemable.
const INVITE_TTL_DAYS: i64 = 7;

pub struct InviteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InviteService<'a> {
    /// Creates a new instance of [`InviteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a shareable invite for the acting account's family
    ///
    /// The expiry is a fixed offset from the issue time; both timestamps come
    /// from one clock reading. Tokens are never reused and every call issues
    /// a fresh one, so handing out multiple links is fine.
    pub async fn create_invite(
        &self,
        profile: &ProfileModel,
        public_origin: &str,
    ) -> Result<InviteDto, Error> {
        let family_id = profile.family_id.ok_or(FamilyError::NotInFamily)?;

        let token = generate_invite_token();
        let created_at = Utc::now().naive_utc();
        let expires_at = created_at + Duration::days(INVITE_TTL_DAYS);

        let invite = FamilyInviteRepository::new(self.db)
            .create(family_id, &profile.id, &token, created_at, expires_at)
            .await?;

        let invite_url = format!("{public_origin}/accept-invite?token={}", invite.token);

        Ok(InviteDto {
            token: invite.token,
            expires_at: invite.expires_at,
            invite_url,
        })
    }

    // Redeems an invite token, joining the account to the inviting family
    //
    // Expiry is checked lazily at redemption; expired rows stay in place.
    // Redeeming is idempotent for an account already in the family, and an
    // account in a different family moves over (the old membership row stays
    // behind as join history). The profile update and membership insert share
    // one transaction.
    //
    // # Arguments
    // - `account_id`: Account redeeming the token
    // - `account_email`: Email used if the profile row has to be created
    // - `token`: Invite token, surrounding whitespace ignored
    //
    // # Returns
    // Returns a Result containing:
    // - [`FamilyDto`]: The family the account now belongs to
    // - [`Error`]: ValidationError, InvalidToken, TokenExpired, or a database
    //   error
    pub async fn accept_invite(
        &self,
        account_id: &str,
        account_email: &str,
        token: &str,
    ) -> Result<FamilyDto, Error> {
        let token = token.trim();
        if token.is_empty() {
            return Err(
                FamilyError::ValidationError("Invite token cannot be empty".to_string()).into(),
            );
        }

        let invite = FamilyInviteRepository::new(self.db)
            .get_by_token(token)
            .await?
            .ok_or(FamilyError::InvalidToken)?;

        if Utc::now().naive_utc() > invite.expires_at {
            return Err(FamilyError::TokenExpired.into());
        }

        let family = FamilyRepository::new(self.db)
            .get(invite.family_id)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Family {} is missing", invite.family_id))
            })?;

        let txn = self.db.begin().await?;

        let profile_repository = ProfileRepository::new(&txn);
        if profile_repository.get(account_id).await?.is_none() {
            profile_repository.create(account_id, account_email).await?;
        }
        profile_repository
            .update_family(account_id, Some(invite.family_id))
            .await?;

        let member_repository = FamilyMemberRepository::new(&txn);
        if member_repository
            .get(invite.family_id, account_id)
            .await?
            .is_none()
        {
            member_repository
                .create(invite.family_id, account_id, FamilyRole::Member)
                .await?;
        }

        txn.commit().await?;

        Ok(family_to_dto(family))
    }
}
