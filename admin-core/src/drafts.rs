//! Draft implementations for the two collection variants.

use shared_types::{Item, ItemPayload, Status, User, UserPayload};

use crate::form::{Draft, FormError, Mode};

// ============================================================================
// Items
// ============================================================================

/// Working copy of an item. The price stays a raw input string; it is
/// parsed only at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub item_name: String,
    pub item_category: String,
    pub item_price: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemField {
    Name(String),
    Category(String),
    Price(String),
    Status(Status),
}

impl Draft for ItemDraft {
    type Record = Item;
    type Field = ItemField;
    type Payload = ItemPayload;

    fn blank() -> Self {
        Self::default()
    }

    fn from_record(record: &Item) -> Self {
        Self {
            item_name: record.item_name.clone(),
            item_category: record.item_category.clone(),
            item_price: record.item_price.to_string(),
            status: record.status,
        }
    }

    fn record_id(record: &Item) -> &str {
        &record.id
    }

    fn apply(&mut self, field: ItemField, _mode: Mode) -> Result<(), FormError> {
        match field {
            ItemField::Name(value) => self.item_name = value,
            ItemField::Category(value) => self.item_category = value,
            ItemField::Price(value) => self.item_price = value,
            ItemField::Status(value) => self.status = value,
        }
        Ok(())
    }

    fn missing_required(&self, _mode: Mode) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.item_name.trim().is_empty() {
            missing.push("itemName");
        }
        if self.item_category.trim().is_empty() {
            missing.push("itemCategory");
        }
        // An empty price fails the parse too.
        if self.item_price.trim().parse::<f64>().is_err() {
            missing.push("itemPrice");
        }
        missing
    }

    fn to_payload(&self, _mode: Mode, _asset: Option<String>) -> ItemPayload {
        ItemPayload {
            item_name: self.item_name.trim().to_string(),
            item_category: self.item_category.trim().to_string(),
            item_price: self.item_price.trim().parse().unwrap_or_default(),
            status: self.status,
        }
    }
}

// ============================================================================
// Users
// ============================================================================

/// Working copy of a user. The password is transient: blank on edit, sent
/// only when non-empty. The profile image holds the already-persisted URL;
/// a newly picked file lives on the form controller until submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
    pub profile_image: Option<String>,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserField {
    Username(String),
    Email(String),
    Firstname(String),
    Lastname(String),
    Password(String),
    Status(Status),
}

impl Draft for UserDraft {
    type Record = User;
    type Field = UserField;
    type Payload = UserPayload;

    fn blank() -> Self {
        Self::default()
    }

    fn from_record(record: &User) -> Self {
        Self {
            username: record.username.clone(),
            email: record.email.clone(),
            firstname: record.firstname.clone(),
            lastname: record.lastname.clone(),
            password: String::new(),
            profile_image: record.profile_image.clone(),
            status: record.status,
        }
    }

    fn record_id(record: &User) -> &str {
        &record.id
    }

    fn apply(&mut self, field: UserField, mode: Mode) -> Result<(), FormError> {
        match field {
            UserField::Username(value) => {
                // The username is the identity-bearing field.
                if mode == Mode::Edit {
                    return Err(FormError::IdentityImmutable("username"));
                }
                self.username = value;
            }
            UserField::Email(value) => self.email = value,
            UserField::Firstname(value) => self.firstname = value,
            UserField::Lastname(value) => self.lastname = value,
            UserField::Password(value) => self.password = value,
            UserField::Status(value) => self.status = value,
        }
        Ok(())
    }

    fn missing_required(&self, mode: Mode) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.username.trim().is_empty() {
            missing.push("username");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.firstname.trim().is_empty() {
            missing.push("firstname");
        }
        if self.lastname.trim().is_empty() {
            missing.push("lastname");
        }
        if mode == Mode::Create && self.password.is_empty() {
            missing.push("password");
        }
        missing
    }

    fn asset_ref(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }

    fn to_payload(&self, _mode: Mode, asset: Option<String>) -> UserPayload {
        UserPayload {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            firstname: self.firstname.trim().to_string(),
            lastname: self.lastname.trim().to_string(),
            // Blank means "leave the stored password alone": the key is
            // omitted from the request body entirely.
            password: if self.password.is_empty() {
                None
            } else {
                Some(self.password.clone())
            },
            profile_image: asset,
            status: self.status,
        }
    }
}
