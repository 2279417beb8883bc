// ============================================================================
// STORAGE SERVICE - localStorage persistence for saved ids and the token
// ============================================================================

use gloo_storage::{LocalStorage, Storage};

use crate::error::AppError;
use crate::utils::constants::{SAVED_BOOKS_KEY, TOKEN_KEY};

/// Persisted list of saved book ids
pub trait SavedBookStore {
    fn load_ids(&self) -> Vec<String>;

    /// An empty list removes the entry
    fn save_ids(&self, ids: &[String]) -> Result<(), AppError>;

    /// Returns whether `book_id` was in the list
    fn remove_id(&self, book_id: &str) -> Result<bool, AppError> {
        let ids = self.load_ids();
        let remaining: Vec<String> = ids.iter().filter(|id| *id != book_id).cloned().collect();
        let removed = remaining.len() != ids.len();
        if removed {
            self.save_ids(&remaining)?;
        }
        Ok(removed)
    }
}

/// Where the bearer token lives between page loads
pub trait TokenStore {
    fn load_token(&self) -> Option<String>;
    fn store_token(&self, token: &str) -> Result<(), AppError>;
    fn clear_token(&self) -> Result<(), AppError>;
}

#[derive(Clone, Copy, Default)]
pub struct LocalStorageService;

impl LocalStorageService {
    pub fn new() -> Self {
        Self
    }
}

impl SavedBookStore for LocalStorageService {
    fn load_ids(&self) -> Vec<String> {
        LocalStorage::get::<Vec<String>>(SAVED_BOOKS_KEY).unwrap_or_default()
    }

    fn save_ids(&self, ids: &[String]) -> Result<(), AppError> {
        if ids.is_empty() {
            LocalStorage::delete(SAVED_BOOKS_KEY);
        } else {
            LocalStorage::set(SAVED_BOOKS_KEY, ids)?;
        }
        log::debug!("💾 [STORAGE] {} saved ids flushed", ids.len());
        Ok(())
    }
}

// The token is stored raw, not JSON-quoted
impl TokenStore for LocalStorageService {
    fn load_token(&self) -> Option<String> {
        LocalStorage::raw().get_item(TOKEN_KEY).ok().flatten()
    }

    fn store_token(&self, token: &str) -> Result<(), AppError> {
        LocalStorage::raw()
            .set_item(TOKEN_KEY, token)
            .map_err(|_| AppError::Storage("Could not write token to localStorage".to_string()))
    }

    fn clear_token(&self) -> Result<(), AppError> {
        LocalStorage::raw()
            .remove_item(TOKEN_KEY)
            .map_err(|_| AppError::Storage("Could not remove token from localStorage".to_string()))
    }
}
