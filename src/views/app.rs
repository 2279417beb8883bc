// ============================================================================
// APP VIEW - Navbar + current route + modal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::{AppState, Route};
use crate::views::{render_auth_modal, render_navbar, render_saved_books, render_search_books};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let app = ElementBuilder::new("div")?.class("app").build();

    append_child(&app, &render_navbar(state)?)?;

    let page = match state.nav.get_route() {
        Route::Search => render_search_books(state)?,
        Route::Saved => render_saved_books(state)?,
    };
    append_child(&app, &page)?;

    if state.nav.is_modal_shown() {
        append_child(&app, &render_auth_modal(state)?)?;
    }

    Ok(app)
}
