// ============================================================================
// BOOK SEARCH APP - Pure Rust front-end (MVVM)
// ============================================================================
// - Views: functions that build DOM
// - ViewModels: UI logic over state
// - Services: HTTP, GraphQL, storage, auth token
// - State: Rc<RefCell> state + change notifications
// - Models: API and display shapes
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::dom::on_window_event;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Book search starting ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Registered once; they live for the whole page
    on_window_event("hashchange", |_| {
        APP.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                if let Err(e) = app.handle_route_change() {
                    log::error!("❌ [APP] Route change failed: {:?}", e);
                }
            }
        });
    })?;

    on_window_event("pagehide", |_| {
        APP.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                app.shutdown();
            }
        });
    })?;

    Ok(())
}

/// Full re-render of the app
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [APP] Render failed: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [APP] Not initialised yet");
        }
    });
}

/// Re-render callable from JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
