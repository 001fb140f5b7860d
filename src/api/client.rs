//! HTTP API Client
//!
//! Functions for communicating with the Duty Track REST API.

use gloo_net::http::{Request, RequestBuilder};
use serde::Deserialize;

use crate::model::{AdminProfile, NewPerson, Person, QrDraft, QrRecord, SubAdminDraft};
use crate::state::auth::stored_token;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

const API_URL_KEY: &str = "duty_track_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    data: T,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "tokenPayload")]
    pub token_payload: AdminProfile,
}

/// Bulk signup result. The backend answers 207 Multi-Status when some of the
/// submitted rows failed; `failed` carries the count for the error toast.
#[derive(Debug, PartialEq)]
pub enum SignupOutcome {
    Created,
    Partial { message: String, failed: usize },
}

#[derive(Debug, Deserialize)]
struct MultiStatusReport {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct DeleteResponse {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Extract the server's error message from a non-2xx response.
async fn error_message(response: gloo_net::http::Response, fallback: &str) -> String {
    match response.json::<ApiError>().await {
        Ok(err) => err
            .message
            .or(err.error)
            .unwrap_or_else(|| fallback.to_string()),
        Err(_) => fallback.to_string(),
    }
}

/// Attach the bearer token when a session exists.
fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match stored_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

// ============ API Functions ============

/// Log an admin in
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/admin/login", api_base))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Login failed due to an unexpected error.").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the duty persons owned by an admin
pub async fn fetch_persons(admin_id: i64) -> Result<Vec<Person>, String> {
    let api_base = get_api_base();

    let response = authorized(Request::get(&format!(
        "{}/admin/get-users/{}",
        api_base, admin_id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Error fetching users").await);
    }

    let envelope: Envelope<Vec<Person>> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(envelope.data)
}

/// Create a single duty person
pub async fn create_person(person: &NewPerson, admin_id: i64) -> Result<(), String> {
    let api_base = get_api_base();

    let response = authorized(Request::post(&format!(
        "{}/auth/signup/{}",
        api_base, admin_id
    )))
    .json(person)
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "User creation failed").await);
    }

    Ok(())
}

/// Create duty persons in bulk. The same signup endpoint accepts an array
/// body and reports row-level failures with 207 Multi-Status.
pub async fn create_persons_bulk(
    batch: &[NewPerson],
    admin_id: i64,
) -> Result<SignupOutcome, String> {
    let api_base = get_api_base();

    let response = authorized(Request::post(&format!(
        "{}/auth/signup/{}",
        api_base, admin_id
    )))
    .json(&batch)
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if response.status() == 207 {
        let report: MultiStatusReport = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;
        return Ok(SignupOutcome::Partial {
            message: report.message,
            failed: report.errors.len(),
        });
    }

    if !response.ok() {
        return Err(error_message(response, "Bulk user creation failed").await);
    }

    Ok(SignupOutcome::Created)
}

/// Create a sub-admin account
pub async fn create_sub_admin(draft: &SubAdminDraft) -> Result<(), String> {
    let api_base = get_api_base();

    let response = authorized(Request::post(&format!("{}/subAdmin/create", api_base)))
        .json(draft)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Sub admin creation failed").await);
    }

    let envelope: Envelope<serde_json::Value> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if !envelope.success {
        return Err(envelope
            .message
            .unwrap_or_else(|| "Sub admin creation failed".to_string()));
    }

    Ok(())
}

/// Register a single duty point
pub async fn create_duty_point(draft: &QrDraft) -> Result<(), String> {
    let api_base = get_api_base();

    let response = authorized(Request::post(&format!("{}/qr/create", api_base)))
        .json(draft)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to create QR record").await);
    }

    Ok(())
}

/// Register duty points in bulk
pub async fn create_duty_points_bulk(batch: &[QrDraft]) -> Result<(), String> {
    let api_base = get_api_base();

    let response = authorized(Request::post(&format!("{}/qr/create/bulk", api_base)))
        .json(&batch)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Bulk QR upload failed").await);
    }

    Ok(())
}

/// Fetch the scan history for one PNO
pub async fn fetch_scans(pno_no: &str) -> Result<Vec<QrRecord>, String> {
    let api_base = get_api_base();

    let response = authorized(Request::get(&format!("{}/qr/get/{}", api_base, pno_no)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to fetch scan history").await);
    }

    let envelope: Envelope<Vec<QrRecord>> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if !envelope.success {
        return Err(envelope
            .message
            .unwrap_or_else(|| "Failed to fetch scan history".to_string()));
    }

    Ok(envelope.data)
}

/// Fetch every scan record
pub async fn fetch_all_scans() -> Result<Vec<QrRecord>, String> {
    let api_base = get_api_base();

    let response = authorized(Request::get(&format!("{}/qr/get-all", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to fetch QR records").await);
    }

    let envelope: Envelope<Vec<QrRecord>> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(envelope.data)
}

/// Delete a single scan record
pub async fn delete_scan(qr_id: &str) -> Result<String, String> {
    let api_base = get_api_base();

    let response = authorized(Request::delete(&format!(
        "{}/qr/delete/{}",
        api_base, qr_id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to delete QR record").await);
    }

    let body: DeleteResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(body
        .message
        .unwrap_or_else(|| "QR record deleted".to_string()))
}

/// Delete several scan records. The backend only exposes per-record delete,
/// so this loops and reports how many went through.
pub async fn delete_scans(ids: &[String]) -> Result<usize, String> {
    let mut deleted = 0;
    let mut last_error = None;

    for id in ids {
        match delete_scan(id).await {
            Ok(_) => deleted += 1,
            Err(e) => last_error = Some(e),
        }
    }

    match (deleted, last_error) {
        (0, Some(error)) => Err(error),
        _ => Ok(deleted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shape() {
        let json = r#"{
            "token": "jwt-token",
            "tokenPayload": {"id": 7, "email": "admin@example.com", "name": "Admin"}
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "jwt-token");
        assert_eq!(response.token_payload.id, 7);
    }

    #[test]
    fn test_envelope_success_default() {
        // Endpoints that omit the success flag still deserialize.
        let json = r#"{"data": []}"#;
        let envelope: Envelope<Vec<Person>> = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn test_multi_status_report() {
        let json = r#"{"message": "2 of 3 users created", "errors": [{"row": 3}]}"#;
        let report: MultiStatusReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.message, "2 of 3 users created");
    }

    #[test]
    fn test_api_error_prefers_message() {
        let json = r#"{"message": "bad token", "error": "unauthorized"}"#;
        let err: ApiError = serde_json::from_str(json).unwrap();
        assert_eq!(err.message.or(err.error).unwrap(), "bad token");
    }
}
