// ============================================================================
// APP - Root element, route lifecycle and rendering
// ============================================================================
// Every render tears down the previous page and mounts the current one. The
// search page reads saved ids at mount and flushes them at teardown; the
// saved books page fetches the user when it is entered.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, location_hash, set_inner_html};
use crate::state::{AppState, Route};
use crate::viewmodels::{SavedBooksViewModel, SearchViewModel};
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Option<Element>,
    lifecycle: Lifecycle,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        state.nav.set_route(Route::from_hash(&location_hash()));

        if state.auth().logged_in() {
            let username = state.auth().get_profile().map(|p| p.username).unwrap_or_default();
            log::info!("✅ [APP] Restored login for {}", username);
        }

        // Batch several notifications into one render
        state.subscribe_to_changes(move || {
            Timeout::new(0, crate::rerender_app).forget();
        });

        Ok(Self {
            state,
            root: Some(root),
            lifecycle: Lifecycle::default(),
        })
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        self.lifecycle.remount(&self.state);

        if let Some(root) = &self.root {
            set_inner_html(root, "");
            let view = render_app(&self.state)?;
            append_child(root, &view)?;
        }
        Ok(())
    }

    /// Picks the route up from `location.hash` and re-renders
    pub fn handle_route_change(&mut self) -> Result<(), JsValue> {
        let route = Route::from_hash(&location_hash());
        log::debug!("🧭 [APP] Route -> {:?}", route);
        self.state.nav.set_route(route);
        self.render()
    }

    /// Page is going away (pagehide). It may come back from the bfcache.
    pub fn shutdown(&mut self) {
        self.lifecycle.hide(&self.state);
    }
}

/// The mounted page and its mount / teardown work
#[derive(Default)]
struct Lifecycle {
    mounted: Option<Route>,
}

impl Lifecycle {
    fn remount(&mut self, state: &AppState) {
        let previous = self.teardown(state);
        self.mount(state, previous);
    }

    /// Persists without unmounting
    fn hide(&self, state: &AppState) {
        if self.mounted == Some(Route::Search) {
            flush_saved_ids(state);
        }
    }

    fn teardown(&mut self, state: &AppState) -> Option<Route> {
        let previous = self.mounted.take();
        if previous == Some(Route::Search) {
            flush_saved_ids(state);
        }
        previous
    }

    fn mount(&mut self, state: &AppState, previous: Option<Route>) {
        let route = state.nav.get_route();
        match route {
            Route::Search => {
                SearchViewModel::new(&state.services).load_saved_ids(&state.search);
            }
            Route::Saved if previous != Some(Route::Saved) => {
                let state = state.clone();
                spawn_local(async move {
                    let vm = SavedBooksViewModel::new(&state.services).with_notifier(state.notifier());
                    if let Err(e) = vm.load(&state.saved_books).await {
                        log::error!("❌ [APP] Could not load saved books: {}", e);
                    }
                    state.notify_changes();
                });
            }
            Route::Saved => {}
        }
        self.mounted = Some(route);
    }
}

fn flush_saved_ids(state: &AppState) {
    let vm = SearchViewModel::new(&state.services);
    if let Err(e) = vm.flush_saved_ids(&state.search) {
        log::error!("❌ [APP] Could not persist saved ids: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::services::SavedBookStore;
    use crate::state::AppServices;
    use crate::test_support::{logged_in_auth, FakeBooksApi, FakeBookshelf};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    #[test]
    fn save_after_page_restore_survives_next_render() {
        let (auth, storage) = logged_in_auth();
        storage.save_ids(&["abc123".to_string()]).unwrap();
        let state = AppState::with_services(AppServices {
            auth,
            saved_store: storage.clone(),
            books: Rc::new(FakeBooksApi::with_volumes(vec![
                crate::test_support::volume("def456", "Dark Force Rising", &["Timothy Zahn"]),
            ])),
            bookshelf: Rc::new(FakeBookshelf::default()),
        });
        let mut lifecycle = Lifecycle::default();
        lifecycle.remount(&state);

        // pagehide, then the page is restored and the user keeps going
        lifecycle.hide(&state);
        let vm = SearchViewModel::new(&state.services);
        state.search.set_input("star wars");
        block_on(vm.submit_search(&state.search)).unwrap();
        block_on(vm.save_book(&state.search, "def456")).unwrap();
        lifecycle.remount(&state);

        let expected = vec!["abc123".to_string(), "def456".to_string()];
        assert_eq!(state.search.get_saved_ids(), expected);
        assert_eq!(storage.load_ids(), expected);
        assert!(state.search.is_saved("def456"));
    }

    #[test]
    fn hiding_persists_current_ids() {
        let (auth, storage) = logged_in_auth();
        let state = AppState::with_services(AppServices {
            auth,
            saved_store: storage.clone(),
            books: Rc::new(FakeBooksApi::default()),
            bookshelf: Rc::new(FakeBookshelf::default()),
        });
        let mut lifecycle = Lifecycle::default();
        lifecycle.remount(&state);
        state.search.push_saved_id("xyz");

        lifecycle.hide(&state);

        assert_eq!(storage.load_ids(), vec!["xyz".to_string()]);
        assert_eq!(lifecycle.mounted, Some(Route::Search));
    }
}
