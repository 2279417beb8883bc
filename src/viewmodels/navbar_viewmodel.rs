// ============================================================================
// NAVBAR VIEWMODEL - Links per login state + modal flag
// ============================================================================

use crate::error::AppError;
use crate::services::AuthService;
use crate::state::{AppServices, ModalTab, NavState, Route};

#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    Go(Route),
    Logout,
    OpenModal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub action: NavAction,
}

pub fn nav_links(logged_in: bool) -> Vec<NavLink> {
    let mut links = vec![NavLink { label: "Home", action: NavAction::Go(Route::Search) }];
    if logged_in {
        links.push(NavLink { label: "Saved Books", action: NavAction::Go(Route::Saved) });
        links.push(NavLink { label: "Logout", action: NavAction::Logout });
    } else {
        links.push(NavLink { label: "Login", action: NavAction::OpenModal });
    }
    links
}

pub struct NavbarViewModel {
    auth: AuthService,
}

impl NavbarViewModel {
    pub fn new(services: &AppServices) -> Self {
        Self {
            auth: services.auth.clone(),
        }
    }

    pub fn links(&self) -> Vec<NavLink> {
        nav_links(self.auth.logged_in())
    }

    /// The modal always opens on the Login tab
    pub fn open_modal(&self, nav: &NavState) {
        nav.set_active_tab(ModalTab::Login);
        nav.set_modal_shown(true);
    }

    pub fn close_modal(&self, nav: &NavState) {
        nav.set_modal_shown(false);
        nav.login_form.set_alert(false);
        nav.signup_form.set_alert(false);
    }

    pub fn select_tab(&self, nav: &NavState, tab: ModalTab) {
        nav.set_active_tab(tab);
    }

    pub fn logout(&self, nav: &NavState) -> Result<(), AppError> {
        self.auth.logout()?;
        nav.set_modal_shown(false);
        nav.set_route(Route::Search);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{logged_in_auth, logged_out_auth, FakeBooksApi, FakeBookshelf};
    use std::rc::Rc;

    fn vm(logged_in: bool) -> NavbarViewModel {
        let (auth, storage) = if logged_in { logged_in_auth() } else { logged_out_auth() };
        NavbarViewModel::new(&AppServices {
            auth,
            saved_store: storage,
            books: Rc::new(FakeBooksApi::default()),
            bookshelf: Rc::new(FakeBookshelf::default()),
        })
    }

    fn labels(links: &[NavLink]) -> Vec<&'static str> {
        links.iter().map(|l| l.label).collect()
    }

    #[test]
    fn logged_in_links() {
        assert_eq!(labels(&vm(true).links()), vec!["Home", "Saved Books", "Logout"]);
    }

    #[test]
    fn logged_out_links() {
        let links = vm(false).links();
        assert_eq!(labels(&links), vec!["Home", "Login"]);
        assert_eq!(links[1].action, NavAction::OpenModal);
    }

    #[test]
    fn modal_reopens_on_login_tab() {
        let vm = vm(false);
        let nav = NavState::new();
        vm.open_modal(&nav);
        vm.select_tab(&nav, ModalTab::Signup);
        vm.close_modal(&nav);
        assert!(!nav.is_modal_shown());
        vm.open_modal(&nav);
        assert!(nav.is_modal_shown());
        assert_eq!(nav.get_active_tab(), ModalTab::Login);
    }

    #[test]
    fn logout_clears_login_and_goes_home() {
        let vm = vm(true);
        let nav = NavState::new();
        nav.set_route(Route::Saved);
        vm.logout(&nav).unwrap();
        assert_eq!(nav.get_route(), Route::Search);
        assert_eq!(labels(&vm.links()), vec!["Home", "Login"]);
    }
}
