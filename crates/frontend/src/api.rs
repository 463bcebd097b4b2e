use campusmap_shared::models::{DatasetKind, FieldEntry};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Used when the page origin is unavailable.
pub const FALLBACK_API_BASE: &str = "http://localhost:8080";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {0}")]
    Status(u16),
}

/// Join a base URL and an absolute path without doubling the slash.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

pub fn dataset_url(base: &str, kind: DatasetKind) -> String {
    endpoint(base, &format!("/api/schools/{}", kind.as_str()))
}

pub fn fields_url(base: &str) -> String {
    endpoint(base, "/api/wherestudy")
}

fn api_base() -> String {
    if let Some(base) = option_env!("CAMPUSMAP_API_BASE") {
        return base.to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| FALLBACK_API_BASE.to_string())
}

/// Only 2xx responses carry a usable body.
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = reqwest::Client::new().get(url).send().await?;
    check_status(resp.status().as_u16())?;
    Ok(resp.json().await?)
}

/// Nested `school -> campus -> {coord, type}` dataset for `kind`.
pub async fn fetch_dataset(kind: DatasetKind) -> Result<Value, ApiError> {
    get_json(&dataset_url(&api_base(), kind)).await
}

pub async fn fetch_fields() -> Result<Vec<FieldEntry>, ApiError> {
    get_json(&fields_url(&api_base())).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_cleanly() {
        assert_eq!(
            endpoint("http://localhost:8080/", "/api/wherestudy"),
            "http://localhost:8080/api/wherestudy"
        );
        assert_eq!(
            endpoint("https://campus.example.com", "/api/wherestudy"),
            "https://campus.example.com/api/wherestudy"
        );
    }

    #[test]
    fn test_dataset_url_per_kind() {
        assert_eq!(
            dataset_url(FALLBACK_API_BASE, DatasetKind::University),
            "http://localhost:8080/api/schools/university"
        );
        assert_eq!(
            dataset_url(FALLBACK_API_BASE, DatasetKind::College),
            "http://localhost:8080/api/schools/college"
        );
    }

    #[test]
    fn test_fields_url() {
        assert_eq!(
            fields_url(FALLBACK_API_BASE),
            "http://localhost:8080/api/wherestudy"
        );
    }

    #[test]
    fn test_check_status_accepts_2xx() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
    }

    #[test]
    fn test_check_status_rejects_non_2xx() {
        assert!(matches!(check_status(404), Err(ApiError::Status(404))));
        assert!(matches!(check_status(503), Err(ApiError::Status(503))));
        assert!(matches!(check_status(301), Err(ApiError::Status(301))));
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(ApiError::Status(503).to_string(), "Server returned 503");
    }

    #[test]
    fn test_fields_payload_deserializes() {
        let json = r#"[{"field":"Medicine","universities":["Tampere University","University of Oulu"]},{"field":"Law","universities":[]}]"#;
        let entries: Vec<FieldEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].universities[1], "University of Oulu");
        assert!(entries[1].universities.is_empty());
    }
}
