// ============================================================================
// SAVED BOOKS VIEWMODEL - The user's shelf (me query + removeBook)
// ============================================================================

use std::rc::Rc;

use crate::error::AppError;
use crate::models::User;
use crate::services::{AuthService, BookshelfApi, SavedBookStore};
use crate::state::{AppServices, Notifier, SavedBooksState};

pub struct SavedBooksViewModel {
    bookshelf: Rc<dyn BookshelfApi>,
    saved_store: Rc<dyn SavedBookStore>,
    auth: AuthService,
    notify: Notifier,
}

impl SavedBooksViewModel {
    pub fn new(services: &AppServices) -> Self {
        Self {
            bookshelf: services.bookshelf.clone(),
            saved_store: services.saved_store.clone(),
            auth: services.auth.clone(),
            notify: Rc::new(|| {}),
        }
    }

    pub fn with_notifier(mut self, notify: Notifier) -> Self {
        self.notify = notify;
        self
    }

    fn set_loading(&self, state: &SavedBooksState, loading: bool) {
        state.set_loading(loading);
        (self.notify)();
    }

    /// Fetches the current user. `Ok(false)` when logged out.
    pub async fn load(&self, state: &SavedBooksState) -> Result<bool, AppError> {
        let Some(token) = self.auth.valid_token() else {
            state.set_user(None);
            return Ok(false);
        };

        self.set_loading(state, true);
        let me = self.bookshelf.me(&token).await;
        self.set_loading(state, false);

        let user = me?;
        log::info!("📚 [SAVED] {} has {} saved books", user.username, user.saved_books.len());
        state.set_user(Some(user));
        Ok(true)
    }

    pub async fn delete_book(&self, state: &SavedBooksState, book_id: &str) -> Result<bool, AppError> {
        let Some(token) = self.auth.valid_token() else {
            return Ok(false);
        };

        let user = self.bookshelf.remove_book(&token, book_id).await?;
        state.set_user(Some(user));

        if !self.saved_store.remove_id(book_id)? {
            log::debug!("🗑️ [SAVED] {} was not in local saved ids", book_id);
        }
        Ok(true)
    }
}

pub fn saved_heading(user: &User) -> String {
    match user.saved_books.len() {
        0 => "You have no saved books!".to_string(),
        1 => "Viewing 1 saved book:".to_string(),
        n => format!("Viewing {} saved books:", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{logged_in_auth, logged_out_auth, FakeBooksApi, FakeBookshelf, MemoryStorage};
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn setup(logged_in: bool) -> (SavedBooksViewModel, Rc<FakeBookshelf>, Rc<MemoryStorage>) {
        let (auth, storage) = if logged_in { logged_in_auth() } else { logged_out_auth() };
        storage.save_ids(&["abc123".to_string(), "def456".to_string()]).unwrap();
        let shelf = Rc::new(FakeBookshelf::with_saved_books(&[
            ("abc123", "Heir to the Empire"),
            ("def456", "Dark Force Rising"),
        ]));
        let services = AppServices {
            auth,
            saved_store: storage.clone(),
            books: Rc::new(FakeBooksApi::default()),
            bookshelf: shelf.clone(),
        };
        (SavedBooksViewModel::new(&services), shelf, storage)
    }

    #[test]
    fn load_fills_user() {
        let (vm, _, _) = setup(true);
        let state = SavedBooksState::new();
        assert!(block_on(vm.load(&state)).unwrap());
        let user = state.get_user().unwrap();
        assert_eq!(user.saved_books.len(), 2);
        assert_eq!(saved_heading(&user), "Viewing 2 saved books:");
        assert!(!state.is_loading());
    }

    #[test]
    fn loading_flag_is_announced_around_me_query() {
        let (vm, _, _) = setup(true);
        let state = SavedBooksState::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let vm = {
            let state = state.clone();
            let seen = seen.clone();
            vm.with_notifier(Rc::new(move || seen.borrow_mut().push(state.is_loading())))
        };

        block_on(vm.load(&state)).unwrap();

        assert_eq!(seen.borrow().as_slice(), [true, false]);
    }

    #[test]
    fn load_while_logged_out_skips_query() {
        let (vm, shelf, _) = setup(false);
        let state = SavedBooksState::new();
        assert!(!block_on(vm.load(&state)).unwrap());
        assert!(shelf.tokens.borrow().is_empty());
        assert!(state.get_user().is_none());
    }

    #[test]
    fn delete_updates_user_and_local_ids() {
        let (vm, shelf, storage) = setup(true);
        let state = SavedBooksState::new();
        block_on(vm.load(&state)).unwrap();

        assert!(block_on(vm.delete_book(&state, "abc123")).unwrap());

        assert_eq!(shelf.removed.borrow().as_slice(), ["abc123".to_string()]);
        assert_eq!(state.get_user().unwrap().saved_books.len(), 1);
        assert_eq!(storage.load_ids(), vec!["def456".to_string()]);
    }

    #[test]
    fn failed_delete_keeps_local_ids() {
        let (vm, shelf, storage) = setup(true);
        let state = SavedBooksState::new();
        shelf.fail.set(true);
        assert!(block_on(vm.delete_book(&state, "abc123")).is_err());
        assert_eq!(storage.load_ids().len(), 2);
    }

    #[test]
    fn heading_variants() {
        let mut user = User::default();
        assert_eq!(saved_heading(&user), "You have no saved books!");
        let shelf = FakeBookshelf::with_saved_books(&[("a", "A")]);
        user.saved_books = shelf.user.borrow().saved_books.clone();
        assert_eq!(saved_heading(&user), "Viewing 1 saved book:");
    }
}
