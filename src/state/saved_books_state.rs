use std::cell::RefCell;
use std::rc::Rc;

use crate::models::User;

#[derive(Clone, Default)]
pub struct SavedBooksState {
    pub user: Rc<RefCell<Option<User>>>,
    pub loading: Rc<RefCell<bool>>,
}

impl SavedBooksState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn set_user(&self, user: Option<User>) {
        *self.user.borrow_mut() = user;
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }
}
