// ============================================================================
// BOOK CARDS - Search result card and saved book card
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::{SavedBook, SearchedBook};
use crate::state::AppState;
use crate::utils::preview;
use crate::viewmodels::{save_button, SavedBooksViewModel, SearchViewModel};

fn cover(src: &str, title: &str) -> Result<Element, JsValue> {
    let img = ElementBuilder::new("img")?
        .class("image round")
        .attr("src", src)?
        .attr("alt", &format!("The cover for {}", title))?
        .build();
    let container = ElementBuilder::new("div")?
        .class("img-container")
        .child(img)?
        .build();
    Ok(container)
}

pub fn render_search_card(state: &AppState, book: &SearchedBook, logged_in: bool) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("card")
        .attr("data-book-id", &book.book_id)?
        .build();

    if book.has_image() {
        append_child(&card, &cover(&book.image, &book.title)?)?;
    }

    let body = ElementBuilder::new("div")?.class("card-body").build();
    append_child(&body, &ElementBuilder::new("h5")?.class("card-title").text(&book.title).build())?;
    append_child(
        &body,
        &ElementBuilder::new("p")?
            .text(&format!("Authors: {}", book.authors_line()))
            .build(),
    )?;
    append_child(
        &body,
        &ElementBuilder::new("p")?
            .class("card-text")
            .text(&preview(&book.description, CONFIG.description_preview_chars))
            .build(),
    )?;

    if logged_in {
        let (label, disabled) = save_button(state.search.is_saved(&book.book_id));
        let button = ElementBuilder::new("button")?
            .class("btn-block btn-info bg-bl")
            .text(label)
            .flag("disabled", disabled)?
            .build();

        let state_clone = state.clone();
        let book_id = book.book_id.clone();
        on_click(&button, move |_| {
            let state = state_clone.clone();
            let book_id = book_id.clone();
            spawn_local(async move {
                let vm = SearchViewModel::new(&state.services);
                match vm.save_book(&state.search, &book_id).await {
                    Ok(true) => state.notify_changes(),
                    Ok(false) => {}
                    Err(e) => log::error!("❌ [SEARCH] Could not save {}: {}", book_id, e),
                }
            });
        })?;

        append_child(&body, &button)?;
    }

    append_child(&card, &body)?;
    Ok(card)
}

pub fn render_saved_card(state: &AppState, book: &SavedBook) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("card")
        .attr("data-book-id", &book.book_id)?
        .build();

    if let Some(src) = book.cover() {
        append_child(&card, &cover(src, &book.title)?)?;
    }

    let body = ElementBuilder::new("div")?.class("card-body").build();
    append_child(&body, &ElementBuilder::new("h5")?.class("card-title").text(&book.title).build())?;
    append_child(
        &body,
        &ElementBuilder::new("p")?
            .class("small")
            .text(&format!("Authors: {}", book.authors.join(", ")))
            .build(),
    )?;
    append_child(&body, &ElementBuilder::new("p")?.class("card-text").text(&book.description).build())?;

    if let Some(link) = book.link.as_deref().filter(|l| !l.is_empty()) {
        let anchor = ElementBuilder::new("a")?
            .attr("href", link)?
            .attr("target", "_blank")?
            .attr("rel", "noopener noreferrer")?
            .text("View on Google Books")
            .build();
        append_child(&body, &anchor)?;
    }

    let delete = ElementBuilder::new("button")?
        .class("btn-block btn-danger")
        .text("Delete this Book!")
        .build();

    let state_clone = state.clone();
    let book_id = book.book_id.clone();
    on_click(&delete, move |_| {
        let state = state_clone.clone();
        let book_id = book_id.clone();
        spawn_local(async move {
            let vm = SavedBooksViewModel::new(&state.services);
            match vm.delete_book(&state.saved_books, &book_id).await {
                Ok(true) => state.notify_changes(),
                Ok(false) => {}
                Err(e) => log::error!("❌ [SAVED] Could not delete {}: {}", book_id, e),
            }
        });
    })?;

    append_child(&body, &delete)?;
    append_child(&card, &body)?;
    Ok(card)
}
