pub mod app;
pub mod navbar;
pub mod auth_modal;
pub mod search_books;
pub mod saved_books;
pub mod book_card;

pub use app::render_app;
pub use navbar::render_navbar;
pub use auth_modal::render_auth_modal;
pub use search_books::render_search_books;
pub use saved_books::render_saved_books;
pub use book_card::{render_saved_card, render_search_card};
