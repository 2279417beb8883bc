// ============================================================================
// APP STATE - Global application state + injected services
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::{
    AuthService, BookSearchApi, BookshelfApi, GoogleBooksClient, GraphQlClient,
    LocalStorageService, SavedBookStore,
};
use crate::state::{NavState, SavedBooksState, SearchState};

/// Re-render request handed to view models around their awaits
pub type Notifier = Rc<dyn Fn()>;

/// Everything that talks to the outside world
#[derive(Clone)]
pub struct AppServices {
    pub auth: AuthService,
    pub saved_store: Rc<dyn SavedBookStore>,
    pub books: Rc<dyn BookSearchApi>,
    pub bookshelf: Rc<dyn BookshelfApi>,
}

impl AppServices {
    /// localStorage + Google Books + the configured GraphQL endpoint
    pub fn browser() -> Self {
        let storage = Rc::new(LocalStorageService::new());
        Self {
            auth: AuthService::new(storage.clone()),
            saved_store: storage,
            books: Rc::new(GoogleBooksClient::new()),
            bookshelf: Rc::new(GraphQlClient::new()),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub services: AppServices,
    pub search: SearchState,
    pub saved_books: SavedBooksState,
    pub nav: NavState,

    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_services(AppServices::browser())
    }

    pub fn with_services(services: AppServices) -> Self {
        Self {
            services,
            search: SearchState::new(),
            saved_books: SavedBooksState::new(),
            nav: NavState::new(),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn auth(&self) -> &AuthService {
        &self.services.auth
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notifier(&self) -> Notifier {
        let state = self.clone();
        Rc::new(move || state.notify_changes())
    }

    /// Ask subscribers (the app) to re-render
    pub fn notify_changes(&self) {
        // Clone out so a subscriber may subscribe again without a double borrow
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
