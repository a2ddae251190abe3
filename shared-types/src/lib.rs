//! Shared types between admin-core and admin-ui
//!
//! These types mirror the backend's JSON wire format exactly, so they are
//! used both by the controllers (native tests) and the Dioxus components
//! (WASM). Serializable with serde for JSON over HTTP.

use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

/// Two-state record status, serialized verbatim as "Active"/"Inactive".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }

    /// Parse a select-box value. Anything unrecognized is `None`.
    pub fn from_label(label: &str) -> Option<Status> {
        match label {
            "Active" => Some(Status::Active),
            "Inactive" => Some(Status::Inactive),
            _ => None,
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// Inventory item as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    pub item_name: String,
    pub item_category: String,
    pub item_price: f64,
    pub status: Status,
}

/// User account as the backend returns it. The password is write-only and
/// never appears here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub status: Status,
}

// ============================================================================
// Pagination
// ============================================================================

/// One fetched slice of a collection. `total_pages` is authoritative from
/// the backend; the current page number lives client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub total_pages: u32,
}

// ============================================================================
// Request payloads
// ============================================================================

/// Body for item create/update. Price is a number on the wire even though
/// the form holds it as a string until submit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub item_name: String,
    pub item_category: String,
    pub item_price: f64,
    pub status: Status,
}

/// Body for user create/update. A `None` password omits the key entirely:
/// on edit the backend must never receive an empty string that could
/// overwrite a stored hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub username: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub status: Status,
}

// ============================================================================
// Upload & error bodies
// ============================================================================

/// Successful response from the multipart upload endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Application-level rejection body, e.g. a uniqueness conflict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// ============================================================================
// Tests
// ============================================================================
