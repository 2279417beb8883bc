pub mod constants;
pub mod text;

pub use constants::*;
pub use text::preview;
