// ============================================================================
// STATE MODULE - Rc<RefCell> state + change notifications
// ============================================================================

pub mod search_state;
pub mod saved_books_state;
pub mod nav_state;
pub mod app_state;

pub use search_state::*;
pub use saved_books_state::*;
pub use nav_state::*;
pub use app_state::*;
