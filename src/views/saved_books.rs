// ============================================================================
// SAVED BOOKS VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::saved_heading;
use crate::views::book_card::render_saved_card;

pub fn render_saved_books(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("saved-books").build();

    let jumbotron = ElementBuilder::new("div")?
        .class("jumbotron jumbotron-fluid text-light bg-dark")
        .child(
            ElementBuilder::new("div")?
                .class("container")
                .child(ElementBuilder::new("h1")?.text("Viewing saved books!").build())?
                .build(),
        )?
        .build();
    append_child(&page, &jumbotron)?;

    let container = ElementBuilder::new("div")?.class("container").build();

    if !state.auth().logged_in() {
        append_child(
            &container,
            &ElementBuilder::new("h2")?
                .text("You need to be logged in to see this page!")
                .build(),
        )?;
    } else if state.saved_books.is_loading() {
        append_child(&container, &ElementBuilder::new("h2")?.text("LOADING...").build())?;
    } else if let Some(user) = state.saved_books.get_user() {
        append_child(&container, &ElementBuilder::new("h2")?.text(&saved_heading(&user)).build())?;

        let columns = ElementBuilder::new("div")?.class("card-columns").build();
        for book in &user.saved_books {
            append_child(&columns, &render_saved_card(state, book)?)?;
        }
        append_child(&container, &columns)?;
    }

    append_child(&page, &container)?;
    Ok(page)
}
