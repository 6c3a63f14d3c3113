//! # models::envelope
//!
//! Every `/api/*` response body is wrapped in [`ApiResponse`]:
//!
//! ```json
//! { "success": true,  "data": ... }
//! { "success": false, "error": "Item ID is required" }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    // No `default` here: it would add a `T: Default` bound to Deserialize.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(error.into()) }
    }

    /// Unwrap the envelope.  `success: false` (or a success without `data`)
    /// becomes `Err` carrying the server's message.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err("API returned success without data.".to_string()),
            (false, _) => Err(self
                .error
                .unwrap_or_else(|| "API returned an unsuccessful response.".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_omits_data_field() {
        let value = serde_json::to_value(ApiResponse::<()>::failure("nope")).unwrap();
        assert_eq!(value, json!({ "success": false, "error": "nope" }));
    }

    #[test]
    fn into_result_prefers_server_message() {
        let env: ApiResponse<Vec<u32>> =
            serde_json::from_value(json!({ "success": false, "error": "Category ID is required" }))
                .unwrap();
        assert_eq!(env.into_result(), Err("Category ID is required".to_string()));
    }

    #[test]
    fn into_result_falls_back_without_message() {
        let env: ApiResponse<u32> = serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(
            env.into_result(),
            Err("API returned an unsuccessful response.".to_string())
        );
    }

    #[test]
    fn into_result_yields_data() {
        let env: ApiResponse<Vec<u32>> =
            serde_json::from_value(json!({ "success": true, "data": [1, 2] })).unwrap();
        assert_eq!(env.into_result(), Ok(vec![1, 2]));
    }

    #[test]
    fn deserializes_payloads_without_default() {
        use crate::routes::health::Health;

        fn decode<T: serde::de::DeserializeOwned>(raw: serde_json::Value) -> ApiResponse<T> {
            serde_json::from_value(raw).unwrap()
        }

        let env: ApiResponse<Health> = decode(json!({
            "success": true,
            "data": {
                "status": "ok",
                "version": "0.1.0",
                "uptime_secs": 5,
                "started_at": "2024-01-01T00:00:00Z"
            }
        }));
        assert_eq!(env.into_result().unwrap().status, "ok");

        let env: ApiResponse<Health> = decode(json!({ "success": false, "error": "down" }));
        assert!(env.data.is_none());
        assert_eq!(env.into_result().unwrap_err(), "down");
    }
}
