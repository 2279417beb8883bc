// ============================================================================
// SEARCH BOOKS VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_input_value, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::SearchViewModel;
use crate::views::book_card::render_search_card;

pub fn render_search_books(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("search-books").build();

    // Jumbotron with the search form
    let jumbotron = ElementBuilder::new("div")?
        .class("jumbotron jumbotron-fluid text-light bg-black")
        .build();
    let container = ElementBuilder::new("div")?.class("container").build();
    append_child(&container, &ElementBuilder::new("h1")?.class("bl header").text("Google Books").build())?;

    let form = ElementBuilder::new("form")?.build();
    let row = ElementBuilder::new("div")?
        .class("form flex-row justify-content-center m-5")
        .build();

    let input = ElementBuilder::new("input")?
        .class("form-control form-control-lg input")
        .attr("name", "searchInput")?
        .attr("type", "text")?
        .attr("placeholder", "Try typing \"Star Wars\"")?
        .attr("value", &state.search.get_input())?
        .build();
    {
        let search = state.search.clone();
        on_input_value(&input, move |value| search.set_input(&value))?;
    }

    let submit = ElementBuilder::new("button")?
        .class("button bg-primary text-white")
        .attr("type", "submit")?
        .flag("disabled", state.search.is_searching())?
        .text("Submit")
        .build();

    {
        let state_clone = state.clone();
        on_submit(&form, move || {
            let state = state_clone.clone();
            spawn_local(async move {
                let vm = SearchViewModel::new(&state.services).with_notifier(state.notifier());
                match vm.submit_search(&state.search).await {
                    Ok(true) => state.notify_changes(),
                    Ok(false) => {}
                    Err(e) => log::error!("❌ [SEARCH] something went wrong! {}", e),
                }
            });
        })?;
    }

    append_child(&row, &input)?;
    append_child(&row, &submit)?;
    append_child(&form, &row)?;
    append_child(&container, &form)?;
    append_child(&jumbotron, &container)?;
    append_child(&page, &jumbotron)?;

    // Results
    let results = state.search.get_results();
    let logged_in = state.auth().logged_in();
    let columns = ElementBuilder::new("div")?.class("card-columns card-container").build();
    for book in &results {
        append_child(&columns, &render_search_card(state, book, logged_in)?)?;
    }

    let list = ElementBuilder::new("div")?.class("container").child(columns)?.build();
    append_child(&page, &list)?;

    Ok(page)
}
