use serde::{Deserialize, Serialize};

/// Email/password credentials submitted to the sign-in and sign-up routes.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CredentialsDto {
    pub email: String,
    pub password: String,
}

/// The account currently signed in.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AccountDto {
    /// Opaque account id issued by the identity provider.
    pub id: String,
    pub email: String,
}

/// Result of a sign-up attempt.
///
/// When the identity provider requires email confirmation no session is
/// established and `confirmation_required` is set instead.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SignUpDto {
    pub confirmation_required: bool,
    pub account: Option<AccountDto>,
}
