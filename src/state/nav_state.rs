// ============================================================================
// NAV STATE - Current route, login/signup modal and its forms
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Search,
    Saved,
}

impl Route {
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_end_matches('/') {
            "/saved" | "saved" => Route::Saved,
            _ => Route::Search,
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Route::Search => "#/",
            Route::Saved => "#/saved",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModalTab {
    #[default]
    Login,
    Signup,
}

/// Fields of the login / signup forms
#[derive(Clone, Default)]
pub struct AccountFormState {
    pub username: Rc<RefCell<String>>,
    pub email: Rc<RefCell<String>>,
    pub password: Rc<RefCell<String>>,
    pub show_alert: Rc<RefCell<bool>>,
    pub submitting: Rc<RefCell<bool>>,
}

impl AccountFormState {
    pub fn get_username(&self) -> String {
        self.username.borrow().clone()
    }

    pub fn get_email(&self) -> String {
        self.email.borrow().clone()
    }

    pub fn get_password(&self) -> String {
        self.password.borrow().clone()
    }

    pub fn set_field(&self, field: FormField, value: &str) {
        let cell = match field {
            FormField::Username => &self.username,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        };
        *cell.borrow_mut() = value.to_string();
    }

    pub fn is_alert_shown(&self) -> bool {
        *self.show_alert.borrow()
    }

    pub fn set_alert(&self, show: bool) {
        *self.show_alert.borrow_mut() = show;
    }

    pub fn is_submitting(&self) -> bool {
        *self.submitting.borrow()
    }

    pub fn set_submitting(&self, submitting: bool) {
        *self.submitting.borrow_mut() = submitting;
    }

    pub fn clear(&self) {
        self.username.borrow_mut().clear();
        self.email.borrow_mut().clear();
        self.password.borrow_mut().clear();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Username,
    Email,
    Password,
}

#[derive(Clone, Default)]
pub struct NavState {
    pub route: Rc<RefCell<Route>>,
    pub show_modal: Rc<RefCell<bool>>,
    pub active_tab: Rc<RefCell<ModalTab>>,
    pub login_form: AccountFormState,
    pub signup_form: AccountFormState,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_route(&self) -> Route {
        *self.route.borrow()
    }

    pub fn set_route(&self, route: Route) {
        *self.route.borrow_mut() = route;
    }

    pub fn is_modal_shown(&self) -> bool {
        *self.show_modal.borrow()
    }

    pub fn set_modal_shown(&self, show: bool) {
        *self.show_modal.borrow_mut() = show;
    }

    pub fn get_active_tab(&self) -> ModalTab {
        *self.active_tab.borrow()
    }

    pub fn set_active_tab(&self, tab: ModalTab) {
        *self.active_tab.borrow_mut() = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_parse_from_hash() {
        assert_eq!(Route::from_hash(""), Route::Search);
        assert_eq!(Route::from_hash("#/"), Route::Search);
        assert_eq!(Route::from_hash("#/saved"), Route::Saved);
        assert_eq!(Route::from_hash("#/saved/"), Route::Saved);
        assert_eq!(Route::from_hash("#/unknown"), Route::Search);
    }

    #[test]
    fn href_round_trips() {
        for route in [Route::Search, Route::Saved] {
            assert_eq!(Route::from_hash(route.href()), route);
        }
    }

    #[test]
    fn form_fields_are_independent() {
        let form = AccountFormState::default();
        form.set_field(FormField::Email, "r@x.io");
        form.set_field(FormField::Password, "secret");
        assert_eq!(form.get_email(), "r@x.io");
        assert_eq!(form.get_password(), "secret");
        assert_eq!(form.get_username(), "");
        form.clear();
        assert_eq!(form.get_email(), "");
    }
}
