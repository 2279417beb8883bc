// ============================================================================
// NAVBAR VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, set_location_hash, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::{NavAction, NavbarViewModel};

pub fn render_navbar(state: &AppState) -> Result<Element, JsValue> {
    let vm = NavbarViewModel::new(&state.services);

    let nav = ElementBuilder::new("nav")?
        .class("navbar navbar-expand-lg bg-black bl nav")
        .build();
    let links = ElementBuilder::new("div")?.class("navbar-nav ml-auto extra").build();

    for link in vm.links() {
        let anchor = ElementBuilder::new("a")?
            .class("nav-link nav-text")
            .text(link.label)
            .build();

        match link.action {
            NavAction::Go(route) => {
                anchor.set_attribute("href", route.href())?;
            }
            NavAction::Logout => {
                anchor.set_attribute("href", "#/")?;
                let state = state.clone();
                on_click(&anchor, move |e| {
                    e.prevent_default();
                    let vm = NavbarViewModel::new(&state.services);
                    if let Err(err) = vm.logout(&state.nav) {
                        log::error!("❌ [NAV] Logout failed: {}", err);
                    }
                    if let Err(err) = set_location_hash("/") {
                        log::warn!("⚠️ [NAV] Could not reset location: {:?}", err);
                    }
                    state.notify_changes();
                })?;
            }
            NavAction::OpenModal => {
                anchor.set_attribute("href", "#")?;
                let state = state.clone();
                on_click(&anchor, move |e| {
                    e.prevent_default();
                    NavbarViewModel::new(&state.services).open_modal(&state.nav);
                    state.notify_changes();
                })?;
            }
        }

        append_child(&links, &anchor)?;
    }

    append_child(&nav, &links)?;
    Ok(nav)
}
