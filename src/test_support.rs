// In-memory stand-ins for the browser and the network

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::AppError;
use crate::models::{
    AuthPayload, LoginVariables, SaveBookInput, SavedBook, SignupVariables, User, Volume,
    VolumeInfo, VolumesResponse,
};
use crate::services::{AuthService, BookSearchApi, BookshelfApi, SavedBookStore, TokenStore};

/// Unsigned JWT carrying `{ data: { username, email, _id }, exp }`
pub fn make_token(username: &str, exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = serde_json::json!({
        "data": { "username": username, "email": format!("{}@example.com", username), "_id": "u1" },
        "exp": exp,
        "iat": exp - 7200,
    });
    let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{}.{}.signature", header, payload)
}

pub fn logged_in_auth() -> (AuthService, Rc<MemoryStorage>) {
    let storage = Rc::new(MemoryStorage::default());
    let far_future = chrono::Utc::now().timestamp() + 3600;
    storage.store_token(&make_token("reader", far_future)).unwrap();
    (AuthService::new(storage.clone()), storage)
}

pub fn logged_out_auth() -> (AuthService, Rc<MemoryStorage>) {
    let storage = Rc::new(MemoryStorage::default());
    (AuthService::new(storage.clone()), storage)
}

/// Volume without description or cover; no authors leaves the field absent
pub fn volume(id: &str, title: &str, authors: &[&str]) -> Volume {
    Volume {
        id: id.to_string(),
        volume_info: VolumeInfo {
            title: title.to_string(),
            authors: if authors.is_empty() {
                None
            } else {
                Some(authors.iter().map(|s| s.to_string()).collect())
            },
            description: None,
            image_links: None,
        },
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    ids: RefCell<Option<Vec<String>>>,
    token: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn with_ids(ids: &[&str]) -> Self {
        let storage = Self::default();
        *storage.ids.borrow_mut() = Some(ids.iter().map(|s| s.to_string()).collect());
        storage
    }

    pub fn has_ids_entry(&self) -> bool {
        self.ids.borrow().is_some()
    }
}

impl SavedBookStore for MemoryStorage {
    fn load_ids(&self) -> Vec<String> {
        self.ids.borrow().clone().unwrap_or_default()
    }

    fn save_ids(&self, ids: &[String]) -> Result<(), AppError> {
        *self.ids.borrow_mut() = if ids.is_empty() { None } else { Some(ids.to_vec()) };
        Ok(())
    }
}

impl TokenStore for MemoryStorage {
    fn load_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store_token(&self, token: &str) -> Result<(), AppError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), AppError> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

/// Book search double: answers with `volumes`, a raw JSON `body`, or `status` when set
#[derive(Default)]
pub struct FakeBooksApi {
    pub volumes: RefCell<Vec<Volume>>,
    pub body: RefCell<Option<String>>,
    pub status: Cell<Option<u16>>,
    pub queries: RefCell<Vec<String>>,
}

impl FakeBooksApi {
    pub fn with_volumes(volumes: Vec<Volume>) -> Self {
        let api = Self::default();
        *api.volumes.borrow_mut() = volumes;
        api
    }

    pub fn call_count(&self) -> usize {
        self.queries.borrow().len()
    }
}

#[async_trait(?Send)]
impl BookSearchApi for FakeBooksApi {
    async fn search_volumes(&self, query: &str) -> Result<VolumesResponse, AppError> {
        self.queries.borrow_mut().push(query.to_string());
        if let Some(status) = self.status.get() {
            return Err(AppError::Http { status, message: "Server Error".to_string() });
        }
        if let Some(body) = self.body.borrow().as_deref() {
            return Ok(serde_json::from_str(body)?);
        }
        let items = self.volumes.borrow().clone();
        Ok(VolumesResponse { total_items: items.len() as u64, items: Some(items) })
    }
}

/// Book backend double recording every call
#[derive(Default)]
pub struct FakeBookshelf {
    pub saved: RefCell<Vec<SaveBookInput>>,
    pub removed: RefCell<Vec<String>>,
    pub tokens: RefCell<Vec<String>>,
    pub fail: Cell<bool>,
    pub user: RefCell<User>,
    pub logins: RefCell<Vec<LoginVariables>>,
    pub signups: RefCell<Vec<SignupVariables>>,
}

impl FakeBookshelf {
    pub fn with_saved_books(books: &[(&str, &str)]) -> Self {
        let shelf = Self::default();
        shelf.user.borrow_mut().username = "reader".to_string();
        shelf.user.borrow_mut().saved_books = books
            .iter()
            .map(|(id, title)| SavedBook {
                book_id: id.to_string(),
                authors: vec!["Someone".to_string()],
                description: "desc".to_string(),
                title: title.to_string(),
                image: None,
                link: None,
            })
            .collect();
        shelf
    }

    fn check(&self) -> Result<(), AppError> {
        if self.fail.get() {
            Err(AppError::GraphQl(vec!["Something went wrong".to_string()]))
        } else {
            Ok(())
        }
    }

    fn payload(&self, username: &str) -> AuthPayload {
        AuthPayload {
            token: make_token(username, chrono::Utc::now().timestamp() + 3600),
            user: User { username: username.to_string(), ..User::default() },
        }
    }
}

#[async_trait(?Send)]
impl BookshelfApi for FakeBookshelf {
    async fn save_book(&self, token: &str, input: &SaveBookInput) -> Result<(), AppError> {
        self.tokens.borrow_mut().push(token.to_string());
        self.saved.borrow_mut().push(input.clone());
        self.check()
    }

    async fn remove_book(&self, token: &str, book_id: &str) -> Result<User, AppError> {
        self.tokens.borrow_mut().push(token.to_string());
        self.removed.borrow_mut().push(book_id.to_string());
        self.check()?;
        let mut user = self.user.borrow_mut();
        user.saved_books.retain(|b| b.book_id != book_id);
        Ok(user.clone())
    }

    async fn me(&self, token: &str) -> Result<User, AppError> {
        self.tokens.borrow_mut().push(token.to_string());
        self.check()?;
        Ok(self.user.borrow().clone())
    }

    async fn login(&self, variables: &LoginVariables) -> Result<AuthPayload, AppError> {
        self.logins.borrow_mut().push(variables.clone());
        self.check()?;
        Ok(self.payload("reader"))
    }

    async fn add_user(&self, variables: &SignupVariables) -> Result<AuthPayload, AppError> {
        self.signups.borrow_mut().push(variables.clone());
        self.check()?;
        Ok(self.payload(&variables.username))
    }
}
