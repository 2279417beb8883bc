// ============================================================================
// SEARCH STATE - Query input, current results and saved ids
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::SearchedBook;

#[derive(Clone, Default)]
pub struct SearchState {
    pub input: Rc<RefCell<String>>,
    pub results: Rc<RefCell<Vec<SearchedBook>>>,
    /// Append-only while the search view is mounted
    pub saved_ids: Rc<RefCell<Vec<String>>>,
    pub searching: Rc<RefCell<bool>>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_input(&self) -> String {
        self.input.borrow().clone()
    }

    pub fn set_input(&self, value: &str) {
        *self.input.borrow_mut() = value.to_string();
    }

    pub fn clear_input(&self) {
        self.input.borrow_mut().clear();
    }

    pub fn get_results(&self) -> Vec<SearchedBook> {
        self.results.borrow().clone()
    }

    pub fn set_results(&self, results: Vec<SearchedBook>) {
        *self.results.borrow_mut() = results;
    }

    pub fn find_book(&self, book_id: &str) -> Option<SearchedBook> {
        self.results
            .borrow()
            .iter()
            .find(|book| book.book_id == book_id)
            .cloned()
    }

    pub fn get_saved_ids(&self) -> Vec<String> {
        self.saved_ids.borrow().clone()
    }

    pub fn set_saved_ids(&self, ids: Vec<String>) {
        *self.saved_ids.borrow_mut() = ids;
    }

    pub fn push_saved_id(&self, book_id: &str) {
        self.saved_ids.borrow_mut().push(book_id.to_string());
    }

    pub fn is_saved(&self, book_id: &str) -> bool {
        self.saved_ids.borrow().iter().any(|id| id == book_id)
    }

    pub fn is_searching(&self) -> bool {
        *self.searching.borrow()
    }

    pub fn set_searching(&self, searching: bool) {
        *self.searching.borrow_mut() = searching;
    }
}
