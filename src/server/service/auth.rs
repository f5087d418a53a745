use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{AccountDto, SignUpDto},
    server::{
        error::Error,
        identity::{IdentityClient, SignUpOutcome},
        service::profile::ProfileService,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    identity: &'a IdentityClient,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, identity: &'a IdentityClient) -> Self {
        Self { db, identity }
    }

    /// Registers an account with the identity provider
    ///
    /// When the provider hands back a session right away the profile row is
    /// created immediately. Providers configured to confirm email addresses
    /// return no session; the profile then gets created on first sign-in.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpDto, Error> {
        match self.identity.sign_up(email, password).await? {
            SignUpOutcome::Session(account) => {
                ProfileService::new(self.db)
                    .ensure_profile(&account.id, &account.email)
                    .await?;

                Ok(SignUpDto {
                    confirmation_required: false,
                    account: Some(AccountDto {
                        id: account.id,
                        email: account.email,
                    }),
                })
            }
            SignUpOutcome::PendingConfirmation => Ok(SignUpDto {
                confirmation_required: true,
                account: None,
            }),
        }
    }

    /// Signs an account in against the identity provider
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AccountDto, Error> {
        let account = self.identity.sign_in(email, password).await?;

        ProfileService::new(self.db)
            .ensure_profile(&account.id, &account.email)
            .await?;

        Ok(AccountDto {
            id: account.id,
            email: account.email,
        })
    }
}
