use serde::Deserialize;

use crate::server::error::identity::IdentityError;

/// HTTP gateway to the external identity provider.
///
/// Accounts live in the identity provider; this application stores only the
/// opaque account id it hands out. The provider speaks a GoTrue-compatible
/// API: password grants on `/token` and registrations on `/signup`.
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Account identity as reported by the provider.
#[derive(Clone, Debug, Deserialize)]
pub struct IdentityAccount {
    pub id: String,
    pub email: String,
}

/// Outcome of a registration attempt.
pub enum SignUpOutcome {
    /// The provider created the account and returned an active session.
    Session(IdentityAccount),
    /// The provider sent a confirmation email; sign-in becomes possible once
    /// the address is confirmed.
    PendingConfirmation,
}

#[derive(Deserialize)]
struct TokenResponse {
    user: IdentityAccount,
}

#[derive(Deserialize)]
struct SignUpResponse {
    access_token: Option<String>,
    user: Option<IdentityAccount>,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    error: Option<String>,
}

impl IdentityClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Exchange credentials for the account identity behind them.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IdentityAccount, IdentityError> {
        let response = self
            .http
            .post(format!("{}/token?grant_type=password", self.base_url))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let body: TokenResponse = response.json().await?;

                Ok(body.user)
            }
            reqwest::StatusCode::BAD_REQUEST | reqwest::StatusCode::UNAUTHORIZED => {
                Err(IdentityError::InvalidCredentials)
            }
            status => Err(provider_error(status, response).await),
        }
    }

    /// Register a new account with the provider.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignUpOutcome, IdentityError> {
        let response = self
            .http
            .post(format!("{}/signup", self.base_url))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(provider_error(response.status(), response).await);
        }

        let body: SignUpResponse = response.json().await?;

        // With email confirmation enabled the provider returns the bare
        // account record instead of a session; without a session the caller
        // cannot be signed in yet.
        match (body.access_token, body.user) {
            (Some(_), Some(account)) => Ok(SignUpOutcome::Session(account)),
            _ => Ok(SignUpOutcome::PendingConfirmation),
        }
    }
}

async fn provider_error(status: reqwest::StatusCode, response: reqwest::Response) -> IdentityError {
    let message = match response.json::<ProviderErrorBody>().await {
        Ok(body) => body
            .error_description
            .or(body.msg)
            .or(body.error)
            .unwrap_or_else(|| "Unexpected identity provider response".to_string()),
        Err(_) => "Unexpected identity provider response".to_string(),
    };

    IdentityError::Provider {
        status: status.as_u16(),
        message,
    }
}
