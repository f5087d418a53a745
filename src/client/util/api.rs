//! Browser-side helpers for calling the SizeVault API.
//!
//! Every request sends session cookies; errors come back as plain strings
//! ready to render next to the form that triggered them.

#[cfg(feature = "web")]
use crate::model::{
    auth::{AccountDto, CredentialsDto, SignUpDto},
    family::{AcceptInviteDto, CreateFamilyDto, FamilyDto, FamilyOverviewDto, InviteDto},
    measurement::MeasurementsDto,
    profile::{ChildDto, CreateChildDto, MeViewDto, ProfileDto, UpdateNameDto},
};

/// Pull the error message out of a failed response, falling back to the raw
/// body when it is not the usual error JSON.
#[cfg(feature = "web")]
async fn error_message(response: reqwasm::http::Response) -> String {
    use crate::model::api::ErrorDto;

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.error
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        format!(
            "Request failed with status {}: {}",
            response.status(),
            error_text
        )
    }
}

/// Retrieve the signed-in account, None when there is no active session
#[cfg(feature = "web")]
pub async fn get_account() -> Result<Option<AccountDto>, String> {
    use reqwasm::http::Request;

    let response = Request::get("/api/auth/user")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let account = response
                .json::<AccountDto>()
                .await
                .map_err(|e| format!("Failed to parse account data: {}", e))?;
            Ok(Some(account))
        }
        401 => Ok(None),
        _ => Err(error_message(response).await),
    }
}

/// Create an account from an e-mail and password
#[cfg(feature = "web")]
pub async fn sign_up(credentials: &CredentialsDto) -> Result<SignUpDto, String> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(credentials)
        .map_err(|e| format!("Failed to serialize credentials: {}", e))?;

    let response = Request::post("/api/auth/signup")
        .header("Content-Type", "application/json")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<SignUpDto>()
            .await
            .map_err(|e| format!("Failed to parse sign up data: {}", e)),
        _ => Err(error_message(response).await),
    }
}

/// Sign in with an e-mail and password
#[cfg(feature = "web")]
pub async fn sign_in(credentials: &CredentialsDto) -> Result<AccountDto, String> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(credentials)
        .map_err(|e| format!("Failed to serialize credentials: {}", e))?;

    let response = Request::post("/api/auth/login")
        .header("Content-Type", "application/json")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<AccountDto>()
            .await
            .map_err(|e| format!("Failed to parse account data: {}", e)),
        _ => Err(error_message(response).await),
    }
}

/// End the current session
#[cfg(feature = "web")]
pub async fn sign_out() -> Result<(), String> {
    use reqwasm::http::Request;

    let response = Request::post("/api/auth/logout")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => Ok(()),
        _ => Err(error_message(response).await),
    }
}

/// Retrieve the signed-in profile with its measurements and children
#[cfg(feature = "web")]
pub async fn get_me() -> Result<MeViewDto, String> {
    use reqwasm::http::Request;

    let response = Request::get("/api/me")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<MeViewDto>()
            .await
            .map_err(|e| format!("Failed to parse profile data: {}", e)),
        _ => Err(error_message(response).await),
    }
}

/// Update the display name on the signed-in profile
#[cfg(feature = "web")]
pub async fn update_name(update: &UpdateNameDto) -> Result<ProfileDto, String> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(update)
        .map_err(|e| format!("Failed to serialize name update: {}", e))?;

    let response = Request::put("/api/me/name")
        .header("Content-Type", "application/json")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<ProfileDto>()
            .await
            .map_err(|e| format!("Failed to parse profile data: {}", e)),
        _ => Err(error_message(response).await),
    }
}

/// Save the signed-in profile's measurements, replacing any previous set
#[cfg(feature = "web")]
pub async fn save_my_measurements(
    measurements: &MeasurementsDto,
) -> Result<MeasurementsDto, String> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(measurements)
        .map_err(|e| format!("Failed to serialize measurements: {}", e))?;

    let response = Request::put("/api/me/measurements")
        .header("Content-Type", "application/json")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<MeasurementsDto>()
            .await
            .map_err(|e| format!("Failed to parse measurement data: {}", e)),
        _ => Err(error_message(response).await),
    }
}

/// Add a child to the signed-in profile
#[cfg(feature = "web")]
pub async fn create_child(child: &CreateChildDto) -> Result<ChildDto, String> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(child)
        .map_err(|e| format!("Failed to serialize child data: {}", e))?;

    let response = Request::post("/api/children")
        .header("Content-Type", "application/json")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<ChildDto>()
            .await
            .map_err(|e| format!("Failed to parse child data: {}", e)),
        _ => Err(error_message(response).await),
    }
}

/// Save a child's measurements, replacing any previous set
#[cfg(feature = "web")]
pub async fn save_child_measurements(
    child_id: i32,
    measurements: &MeasurementsDto,
) -> Result<MeasurementsDto, String> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(measurements)
        .map_err(|e| format!("Failed to serialize measurements: {}", e))?;

    let response = Request::put(&format!("/api/children/{}/measurements", child_id))
        .header("Content-Type", "application/json")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<MeasurementsDto>()
            .await
            .map_err(|e| format!("Failed to parse measurement data: {}", e)),
        _ => Err(error_message(response).await),
    }
}

/// Create a family group with the signed-in account as its admin
#[cfg(feature = "web")]
pub async fn create_family(family: &CreateFamilyDto) -> Result<FamilyDto, String> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(family)
        .map_err(|e| format!("Failed to serialize family data: {}", e))?;

    let response = Request::post("/api/family")
        .header("Content-Type", "application/json")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<FamilyDto>()
            .await
            .map_err(|e| format!("Failed to parse family data: {}", e)),
        _ => Err(error_message(response).await),
    }
}

/// Retrieve the family overview, None when the account is not in a family
#[cfg(feature = "web")]
pub async fn get_family_overview(member: Option<&str>) -> Result<Option<FamilyOverviewDto>, String> {
    use reqwasm::http::Request;

    let url = match member {
        Some(profile_id) => format!("/api/family?member={}", profile_id),
        None => "/api/family".to_string(),
    };

    let response = Request::get(&url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let overview = response
                .json::<FamilyOverviewDto>()
                .await
                .map_err(|e| format!("Failed to parse family data: {}", e))?;
            Ok(Some(overview))
        }
        409 => Ok(None),
        _ => Err(error_message(response).await),
    }
}

/// Issue an invite token for the signed-in account's family
#[cfg(feature = "web")]
pub async fn create_invite() -> Result<InviteDto, String> {
    use reqwasm::http::Request;

    let response = Request::post("/api/family/invites")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<InviteDto>()
            .await
            .map_err(|e| format!("Failed to parse invite data: {}", e)),
        _ => Err(error_message(response).await),
    }
}

/// Redeem an invite token, joining its family
#[cfg(feature = "web")]
pub async fn accept_invite(invite: &AcceptInviteDto) -> Result<FamilyDto, String> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(invite)
        .map_err(|e| format!("Failed to serialize invite token: {}", e))?;

    let response = Request::post("/api/family/invites/accept")
        .header("Content-Type", "application/json")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<FamilyDto>()
            .await
            .map_err(|e| format!("Failed to parse family data: {}", e)),
        _ => Err(error_message(response).await),
    }
}
