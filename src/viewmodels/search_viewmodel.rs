// ============================================================================
// SEARCH VIEWMODEL - Search + save logic
// ============================================================================
// Reads and writes SearchState; the view decides when to re-render and logs
// whatever error comes back.
// ============================================================================

use std::rc::Rc;

use crate::error::AppError;
use crate::models::{SaveBookInput, SearchedBook};
use crate::services::{AuthService, BookSearchApi, BookshelfApi, SavedBookStore};
use crate::state::{AppServices, Notifier, SearchState};

pub struct SearchViewModel {
    books: Rc<dyn BookSearchApi>,
    bookshelf: Rc<dyn BookshelfApi>,
    saved_store: Rc<dyn SavedBookStore>,
    auth: AuthService,
    notify: Notifier,
}

impl SearchViewModel {
    pub fn new(services: &AppServices) -> Self {
        Self {
            books: services.books.clone(),
            bookshelf: services.bookshelf.clone(),
            saved_store: services.saved_store.clone(),
            auth: services.auth.clone(),
            notify: Rc::new(|| {}),
        }
    }

    /// Called whenever the in-flight flag flips so the view can show it
    pub fn with_notifier(mut self, notify: Notifier) -> Self {
        self.notify = notify;
        self
    }

    fn set_searching(&self, state: &SearchState, searching: bool) {
        state.set_searching(searching);
        (self.notify)();
    }

    /// Runs the query held in the input. `Ok(false)` means nothing was sent.
    ///
    /// Any failure leaves the previous results in place.
    pub async fn submit_search(&self, state: &SearchState) -> Result<bool, AppError> {
        let query = state.get_input();
        if query.trim().is_empty() {
            log::debug!("🔍 [SEARCH] Empty query, nothing to do");
            return Ok(false);
        }

        self.set_searching(state, true);
        let response = self.books.search_volumes(&query).await;
        self.set_searching(state, false);

        // Google Books drops `items` when nothing matched
        let books: Vec<SearchedBook> = response?
            .items
            .ok_or_else(|| AppError::Parse(format!("no items for '{}'", query)))?
            .into_iter()
            .map(SearchedBook::from)
            .collect();

        log::info!("✅ [SEARCH] {} results for '{}'", books.len(), query);
        state.set_results(books);
        state.clear_input();
        Ok(true)
    }

    /// Saves a book from the current results to the user's account.
    /// `Ok(false)` when logged out (no request is made).
    pub async fn save_book(&self, state: &SearchState, book_id: &str) -> Result<bool, AppError> {
        let Some(token) = self.auth.valid_token() else {
            log::warn!("⚠️ [SEARCH] Save ignored, not logged in");
            return Ok(false);
        };

        let book = state
            .find_book(book_id)
            .ok_or_else(|| AppError::BookNotFound(book_id.to_string()))?;

        let input = SaveBookInput::from(&book);
        self.bookshelf.save_book(&token, &input).await?;

        state.push_saved_id(&book.book_id);
        log::info!("✅ [SEARCH] Saved {}", book.book_id);
        Ok(true)
    }

    /// Mount: saved ids come from local persistence
    pub fn load_saved_ids(&self, state: &SearchState) {
        state.set_saved_ids(self.saved_store.load_ids());
    }

    /// Teardown: the in-memory ids replace what was persisted
    pub fn flush_saved_ids(&self, state: &SearchState) -> Result<(), AppError> {
        self.saved_store.save_ids(&state.get_saved_ids())
    }
}

/// Label of a result's save button and whether it is disabled
pub fn save_button(already_saved: bool) -> (&'static str, bool) {
    if already_saved {
        ("Already Saved", true)
    } else {
        ("Save Book", false)
    }
}
