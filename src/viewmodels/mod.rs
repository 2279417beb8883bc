pub mod search_viewmodel;
pub mod saved_books_viewmodel;
pub mod account_viewmodel;
pub mod navbar_viewmodel;

pub use search_viewmodel::{save_button, SearchViewModel};
pub use saved_books_viewmodel::{saved_heading, SavedBooksViewModel};
pub use account_viewmodel::AccountViewModel;
pub use navbar_viewmodel::{nav_links, NavAction, NavLink, NavbarViewModel};
