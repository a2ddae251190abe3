//! gloo-net implementations of the Remote Collection Client.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use std::sync::OnceLock;

use admin_core::{ApiError, CollectionClient};
use shared_types::{ErrorBody, Item, ItemPayload, Page, UploadResponse, User, UserPayload};

/// Backend page size for the item collection.
pub const ITEMS_PAGE_SIZE: u32 = 5;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:3000
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:3000".to_string()
    } else {
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Decode a response body, distinguishing a server-side rejection (an
/// `{error}` payload, shown verbatim) from a transport-level failure.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(format!("failed to read body: {e}")))?;

    if !response.ok() {
        if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
            return Err(ApiError::Rejected(body.error));
        }
        return Err(ApiError::Transport(format!("HTTP {status}")));
    }

    // Some endpoints report application errors with a 200 body.
    if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
        return Err(ApiError::Rejected(body.error));
    }

    serde_json::from_str(&text).map_err(|e| ApiError::Transport(format!("failed to parse JSON: {e}")))
}

async fn check_ok(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    if let Ok(body) = response.json::<ErrorBody>().await {
        return Err(ApiError::Rejected(body.error));
    }
    Err(ApiError::Transport(format!("HTTP {status}")))
}

// ============================================================================
// Items (paginated)
// ============================================================================

pub struct ItemsApi;

impl ItemsApi {
    fn url(&self) -> String {
        format!("{}/api/items", api_base())
    }
}

#[async_trait(?Send)]
impl CollectionClient for ItemsApi {
    type Record = Item;
    type Payload = ItemPayload;
    type File = web_sys::File;

    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Page<Item>, ApiError> {
        let url = format!("{}?page={page}&limit={limit}", self.url());
        let response = Request::get(&url).send().await.map_err(transport)?;
        decode(response).await
    }

    async fn create(&self, payload: &ItemPayload) -> Result<Item, ApiError> {
        let response = Request::post(&self.url())
            .json(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn update(&self, id: &str, payload: &ItemPayload) -> Result<Item, ApiError> {
        let url = format!("{}/{id}", self.url());
        let response = Request::put(&url)
            .json(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/{id}", self.url());
        let response = Request::delete(&url).send().await.map_err(transport)?;
        check_ok(response).await
    }
}

// ============================================================================
// Users (non-paginated, with profile image upload)
// ============================================================================

pub struct UsersApi;

impl UsersApi {
    fn url(&self) -> String {
        format!("{}/api/users", api_base())
    }
}

#[async_trait(?Send)]
impl CollectionClient for UsersApi {
    type Record = User;
    type Payload = UserPayload;
    type File = web_sys::File;

    async fn fetch_all(&self) -> Result<Vec<User>, ApiError> {
        let response = Request::get(&self.url()).send().await.map_err(transport)?;
        decode(response).await
    }

    async fn create(&self, payload: &UserPayload) -> Result<User, ApiError> {
        let response = Request::post(&self.url())
            .json(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn update(&self, id: &str, payload: &UserPayload) -> Result<User, ApiError> {
        let url = format!("{}/{id}", self.url());
        let response = Request::put(&url)
            .json(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/{id}", self.url());
        let response = Request::delete(&url).send().await.map_err(transport)?;
        check_ok(response).await
    }

    async fn upload(&self, file: &web_sys::File) -> Result<String, ApiError> {
        let url = format!("{}/api/upload", api_base());

        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Transport("failed to build form data".to_string()))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::Transport("failed to attach file".to_string()))?;

        let response = Request::post(&url)
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;

        let uploaded: UploadResponse = decode(response).await?;
        Ok(uploaded.url)
    }
}
