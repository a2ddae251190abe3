use thiserror::Error;

/// Whether the draft is a blank new record or a copy of an existing one.
/// Determined solely by whether an identity is bound to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} cannot be changed while editing an existing record")]
    IdentityImmutable(&'static str),
}

/// The form's working copy of a record. One implementation per collection
/// variant; fields are a closed struct, never an open map.
pub trait Draft: Sized {
    type Record;
    type Field;
    type Payload;

    fn blank() -> Self;

    /// Copy editable fields from a record. Secret fields (passwords) stay
    /// blank for re-entry rather than echoing a stored value.
    fn from_record(record: &Self::Record) -> Self;

    fn record_id(record: &Self::Record) -> &str;

    /// Apply one field edit. Identity-bearing fields are refused in Edit
    /// mode.
    fn apply(&mut self, field: Self::Field, mode: Mode) -> Result<(), FormError>;

    /// Names of required fields that are still empty. Submit is not
    /// dispatched while this is non-empty.
    fn missing_required(&self, mode: Mode) -> Vec<&'static str>;

    /// Asset reference already persisted on the record being edited.
    fn asset_ref(&self) -> Option<&str> {
        None
    }

    fn to_payload(&self, mode: Mode, asset: Option<String>) -> Self::Payload;
}

/// Owns the single mutable draft, the create/edit mode flag, and the
/// not-yet-uploaded file selection. `F` is the platform file handle:
/// `web_sys::File` in the browser, something simpler in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct FormController<D, F> {
    draft: D,
    editing_id: Option<String>,
    pending_file: Option<F>,
}

impl<D: Draft, F> FormController<D, F> {
    pub fn new() -> Self {
        Self {
            draft: D::blank(),
            editing_id: None,
            pending_file: None,
        }
    }

    /// Discard any draft and return to a blank Create-mode form.
    pub fn start_create(&mut self) {
        self.draft = D::blank();
        self.editing_id = None;
        self.pending_file = None;
    }

    /// Bind the record's identity and pre-fill the draft from it. Any
    /// pending file selection from a previous flow is dropped.
    pub fn start_edit(&mut self, record: &D::Record) {
        self.editing_id = Some(D::record_id(record).to_string());
        self.draft = D::from_record(record);
        self.pending_file = None;
    }

    pub fn cancel(&mut self) {
        self.start_create();
    }

    pub fn update(&mut self, field: D::Field) -> Result<(), FormError> {
        let mode = self.mode();
        self.draft.apply(field, mode)
    }

    /// Store a local file candidate. Nothing is uploaded until submit.
    pub fn select_file(&mut self, file: F) {
        self.pending_file = Some(file);
    }

    pub fn mode(&self) -> Mode {
        if self.editing_id.is_some() {
            Mode::Edit
        } else {
            Mode::Create
        }
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn pending_file(&self) -> Option<&F> {
        self.pending_file.as_ref()
    }
}

impl<D: Draft, F> Default for FormController<D, F> {
    fn default() -> Self {
        Self::new()
    }
}
