use crate::client::CollectionClient;
use crate::error::ApiError;
use crate::form::{Draft, FormController};

/// Outcome of one submit attempt. The tagging keeps the two-phase contract
/// explicit in the type: `UploadFailed` means the record create/update was
/// never dispatched.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<R> {
    Saved(R),
    /// Required fields still empty; nothing was sent.
    Invalid(Vec<&'static str>),
    UploadFailed(String),
    SaveFailed(ApiError),
}

/// Upload Orchestrator. With no pending file this is a pass-through of the
/// asset reference the draft already carries, no network call. Otherwise
/// the file is exchanged for the backend-assigned URL.
pub async fn resolve_asset<C>(
    client: &C,
    pending: Option<&C::File>,
    existing: Option<String>,
) -> Result<Option<String>, ApiError>
where
    C: CollectionClient + ?Sized,
{
    match pending {
        None => Ok(existing),
        Some(file) => Ok(Some(client.upload(file).await?)),
    }
}

/// Run one full submit: required-field check, asset resolution, then the
/// record create/update. Asset resolution finishes (success or failure)
/// strictly before the record call starts, and an upload failure aborts
/// the submit outright. The form resets to blank Create mode only on
/// success; on any failure the draft is preserved for correction.
pub async fn submit_draft<C, D>(
    client: &C,
    form: &mut FormController<D, C::File>,
) -> SubmitOutcome<C::Record>
where
    C: CollectionClient + ?Sized,
    D: Draft<Record = C::Record, Payload = C::Payload>,
{
    let mode = form.mode();

    let missing = form.draft().missing_required(mode);
    if !missing.is_empty() {
        return SubmitOutcome::Invalid(missing);
    }

    let existing = form.draft().asset_ref().map(str::to_string);
    let asset = match resolve_asset(client, form.pending_file(), existing).await {
        Ok(asset) => asset,
        Err(err) => {
            tracing::warn!("asset upload failed, aborting submit: {err}");
            return SubmitOutcome::UploadFailed(err.to_string());
        }
    };

    let payload = form.draft().to_payload(mode, asset);
    let result = match form.editing_id() {
        Some(id) => client.update(id, &payload).await,
        None => client.create(&payload).await,
    };

    match result {
        Ok(record) => {
            form.cancel();
            SubmitOutcome::Saved(record)
        }
        Err(err) => SubmitOutcome::SaveFailed(err),
    }
}
