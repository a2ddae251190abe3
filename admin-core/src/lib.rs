//! Client-side controllers for the collection admin console
//!
//! Everything here is browser-agnostic: the Remote Collection Client is a
//! trait, so the controllers run natively under test and are wired to
//! gloo-net in `admin-ui`. The three moving parts are the list controller
//! (server-driven pagination), the form controller (one shared create/edit
//! draft), and the submit workflow (upload-then-save, atomic from the
//! user's point of view).

pub mod client;
pub mod confirm;
pub mod drafts;
pub mod error;
pub mod form;
pub mod list;
pub mod submit;

pub use client::CollectionClient;
pub use confirm::DeleteConfirm;
pub use drafts::{ItemDraft, ItemField, UserDraft, UserField};
pub use error::ApiError;
pub use form::{Draft, FormController, FormError, Mode};
pub use list::ListController;
pub use submit::{resolve_asset, submit_draft, SubmitOutcome};
