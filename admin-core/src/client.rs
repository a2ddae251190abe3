use async_trait::async_trait;
use shared_types::Page;

use crate::error::ApiError;

/// Remote Collection Client: thin typed wrappers over one REST collection.
///
/// `?Send` because WASM futures are not `Send`; native test doubles run on
/// a single thread anyway. `fetch_page`, `fetch_all` and `upload` have
/// unsupported defaults so each collection implements only what its
/// backend actually offers.
#[async_trait(?Send)]
pub trait CollectionClient {
    type Record;
    type Payload;
    type File;

    async fn fetch_page(&self, _page: u32, _limit: u32) -> Result<Page<Self::Record>, ApiError> {
        Err(ApiError::Rejected(
            "collection does not support pagination".to_string(),
        ))
    }

    async fn fetch_all(&self) -> Result<Vec<Self::Record>, ApiError> {
        Err(ApiError::Rejected(
            "collection does not support unpaginated listing".to_string(),
        ))
    }

    async fn create(&self, payload: &Self::Payload) -> Result<Self::Record, ApiError>;

    async fn update(&self, id: &str, payload: &Self::Payload) -> Result<Self::Record, ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;

    async fn upload(&self, _file: &Self::File) -> Result<String, ApiError> {
        Err(ApiError::Rejected(
            "collection does not support uploads".to_string(),
        ))
    }
}
