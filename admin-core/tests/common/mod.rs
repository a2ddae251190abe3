//! Mock Remote Collection Clients with call counters.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use admin_core::{ApiError, CollectionClient};
use async_trait::async_trait;
use shared_types::{Item, ItemPayload, Page, Status, User, UserPayload};

pub fn sample_item(n: u32) -> Item {
    Item {
        id: format!("item-{n}"),
        item_name: format!("Item {n}"),
        item_category: "General".to_string(),
        item_price: n as f64,
        status: Status::Active,
    }
}

pub fn sample_user(n: u32) -> User {
    User {
        id: format!("user-{n}"),
        username: format!("user{n}"),
        email: format!("user{n}@example.com"),
        firstname: format!("First{n}"),
        lastname: format!("Last{n}"),
        profile_image: None,
        status: Status::Active,
    }
}

// ============================================================================
// Items (paginated variant)
// ============================================================================

pub struct MockItemsApi {
    pub items: RefCell<Vec<Item>>,
    pub fetch_calls: Cell<u32>,
    pub create_calls: Cell<u32>,
    pub update_calls: Cell<u32>,
    pub delete_calls: Cell<u32>,
    pub fail_fetch: Cell<bool>,
    pub reject_save: RefCell<Option<String>>,
    pub last_payload: RefCell<Option<ItemPayload>>,
}

impl MockItemsApi {
    pub fn with_items(count: u32) -> Self {
        Self {
            items: RefCell::new((1..=count).map(sample_item).collect()),
            fetch_calls: Cell::new(0),
            create_calls: Cell::new(0),
            update_calls: Cell::new(0),
            delete_calls: Cell::new(0),
            fail_fetch: Cell::new(false),
            reject_save: RefCell::new(None),
            last_payload: RefCell::new(None),
        }
    }
}

#[async_trait(?Send)]
impl CollectionClient for MockItemsApi {
    type Record = Item;
    type Payload = ItemPayload;
    type File = ();

    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Page<Item>, ApiError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        if self.fail_fetch.get() {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        let items = self.items.borrow();
        let total_pages = (items.len() as u32).div_ceil(limit);
        let start = ((page - 1) * limit) as usize;
        let slice = items
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(Page {
            items: slice,
            total_pages,
        })
    }

    async fn create(&self, payload: &ItemPayload) -> Result<Item, ApiError> {
        self.create_calls.set(self.create_calls.get() + 1);
        if let Some(message) = self.reject_save.borrow().clone() {
            return Err(ApiError::Rejected(message));
        }
        *self.last_payload.borrow_mut() = Some(payload.clone());
        let item = Item {
            id: format!("item-{}", self.items.borrow().len() as u32 + 1),
            item_name: payload.item_name.clone(),
            item_category: payload.item_category.clone(),
            item_price: payload.item_price,
            status: payload.status,
        };
        self.items.borrow_mut().push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: &str, payload: &ItemPayload) -> Result<Item, ApiError> {
        self.update_calls.set(self.update_calls.get() + 1);
        if let Some(message) = self.reject_save.borrow().clone() {
            return Err(ApiError::Rejected(message));
        }
        *self.last_payload.borrow_mut() = Some(payload.clone());
        let mut items = self.items.borrow_mut();
        let Some(item) = items.iter_mut().find(|i| i.id == id) else {
            return Err(ApiError::Rejected("item not found".to_string()));
        };
        item.item_name = payload.item_name.clone();
        item.item_category = payload.item_category.clone();
        item.item_price = payload.item_price;
        item.status = payload.status;
        Ok(item.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.delete_calls.set(self.delete_calls.get() + 1);
        self.items.borrow_mut().retain(|i| i.id != id);
        Ok(())
    }
}

// ============================================================================
// Users (non-paginated variant, with uploads)
// ============================================================================

pub struct MockUsersApi {
    pub users: RefCell<Vec<User>>,
    pub fetch_calls: Cell<u32>,
    pub create_calls: Cell<u32>,
    pub update_calls: Cell<u32>,
    pub delete_calls: Cell<u32>,
    pub upload_calls: Cell<u32>,
    pub fail_upload: Cell<bool>,
    pub reject_save: RefCell<Option<String>>,
    pub last_payload: RefCell<Option<UserPayload>>,
}

impl MockUsersApi {
    pub fn with_users(count: u32) -> Self {
        Self {
            users: RefCell::new((1..=count).map(sample_user).collect()),
            fetch_calls: Cell::new(0),
            create_calls: Cell::new(0),
            update_calls: Cell::new(0),
            delete_calls: Cell::new(0),
            upload_calls: Cell::new(0),
            fail_upload: Cell::new(false),
            reject_save: RefCell::new(None),
            last_payload: RefCell::new(None),
        }
    }
}

#[async_trait(?Send)]
impl CollectionClient for MockUsersApi {
    type Record = User;
    type Payload = UserPayload;
    type File = String;

    async fn fetch_all(&self) -> Result<Vec<User>, ApiError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        Ok(self.users.borrow().clone())
    }

    async fn create(&self, payload: &UserPayload) -> Result<User, ApiError> {
        self.create_calls.set(self.create_calls.get() + 1);
        if let Some(message) = self.reject_save.borrow().clone() {
            return Err(ApiError::Rejected(message));
        }
        *self.last_payload.borrow_mut() = Some(payload.clone());
        let user = User {
            id: format!("user-{}", self.users.borrow().len() as u32 + 1),
            username: payload.username.clone(),
            email: payload.email.clone(),
            firstname: payload.firstname.clone(),
            lastname: payload.lastname.clone(),
            profile_image: payload.profile_image.clone(),
            status: payload.status,
        };
        self.users.borrow_mut().push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: &str, payload: &UserPayload) -> Result<User, ApiError> {
        self.update_calls.set(self.update_calls.get() + 1);
        if let Some(message) = self.reject_save.borrow().clone() {
            return Err(ApiError::Rejected(message));
        }
        *self.last_payload.borrow_mut() = Some(payload.clone());
        let mut users = self.users.borrow_mut();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Err(ApiError::Rejected("user not found".to_string()));
        };
        user.email = payload.email.clone();
        user.firstname = payload.firstname.clone();
        user.lastname = payload.lastname.clone();
        user.profile_image = payload.profile_image.clone();
        user.status = payload.status;
        Ok(user.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.delete_calls.set(self.delete_calls.get() + 1);
        self.users.borrow_mut().retain(|u| u.id != id);
        Ok(())
    }

    async fn upload(&self, file: &String) -> Result<String, ApiError> {
        self.upload_calls.set(self.upload_calls.get() + 1);
        if self.fail_upload.get() {
            return Err(ApiError::Transport("upload stream reset".to_string()));
        }
        Ok(format!("/uploads/{file}"))
    }
}
