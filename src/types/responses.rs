/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A page of records from a query endpoint, with pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResult<T> {
    pub records: Option<Vec<T>>,
    pub total_count: Option<i32>,
    pub page_size: Option<i32>,
    pub page_number: Option<i32>,
}

/// Result of a write operation that returns no resource, such as DELETE
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResultModel {
    pub messages: Option<Vec<String>>,
}

/// Snapshot of the caller's authentication status, as returned by Ping.
/// All fields are independent; unauthenticated calls still succeed and
/// return a mostly-empty record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusModel {
    pub user_name: Option<String>,
    pub account_name: Option<String>,
    pub account_company_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub group_key: Option<Uuid>,
    pub logged_in: Option<bool>,
    pub error_message: Option<String>,
    pub roles: Option<Vec<String>>,
    pub last_logged_in: Option<DateTime<Utc>>,
    pub api_key_id: Option<Uuid>,
    pub user_status: Option<String>,
    pub environment: Option<String>,
    pub version: Option<String>,
    /// Per-dependency health statuses, shape not fixed by the API
    pub dependencies: Option<serde_json::Value>,
}

/// Payload returned by the error-test endpoint when it does not fail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestTimeoutModel {
    pub message: Option<String>,
    pub status_code: Option<i32>,
    pub details: Option<String>,
}
