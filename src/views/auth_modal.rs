// ============================================================================
// AUTH MODAL - Login / Sign Up tabs
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, on_input_value, on_submit, set_location_hash, ElementBuilder};
use crate::state::{AccountFormState, AppState, FormField, ModalTab};
use crate::viewmodels::{AccountViewModel, NavbarViewModel};

pub fn render_auth_modal(state: &AppState) -> Result<Element, JsValue> {
    let backdrop = ElementBuilder::new("div")?
        .class("modal-backdrop show")
        .attr("role", "dialog")?
        .attr("aria-labelledby", "signup-modal")?
        .build();
    let dialog = ElementBuilder::new("div")?.class("modal-dialog modal-lg").build();
    let content = ElementBuilder::new("div")?.class("modal-content border").build();

    // Header: tabs + close
    let header = ElementBuilder::new("div")?.class("modal-header").build();
    let tabs = ElementBuilder::new("div")?
        .class("nav modal-title")
        .id("signup-modal")?
        .build();
    let active = state.nav.get_active_tab();
    for (tab, label) in [(ModalTab::Login, "Login"), (ModalTab::Signup, "Sign Up")] {
        let class = if tab == active { "nav-link bl active" } else { "nav-link bl" };
        let link = ElementBuilder::new("a")?.class(class).attr("href", "#")?.text(label).build();
        let state = state.clone();
        on_click(&link, move |e| {
            e.prevent_default();
            NavbarViewModel::new(&state.services).select_tab(&state.nav, tab);
            state.notify_changes();
        })?;
        append_child(&tabs, &link)?;
    }

    let close = ElementBuilder::new("button")?
        .class("close")
        .attr("type", "button")?
        .attr("aria-label", "Close")?
        .text("×")
        .build();
    {
        let state = state.clone();
        on_click(&close, move |_| {
            NavbarViewModel::new(&state.services).close_modal(&state.nav);
            state.notify_changes();
        })?;
    }

    append_child(&header, &tabs)?;
    append_child(&header, &close)?;

    let body = ElementBuilder::new("div")?.class("modal-body").build();
    let form = match active {
        ModalTab::Login => render_login_form(state)?,
        ModalTab::Signup => render_signup_form(state)?,
    };
    append_child(&body, &form)?;

    append_child(&content, &header)?;
    append_child(&content, &body)?;
    append_child(&dialog, &content)?;
    append_child(&backdrop, &dialog)?;
    Ok(backdrop)
}

fn input_group(
    form: &AccountFormState,
    field: FormField,
    label: &str,
    input_type: &str,
    placeholder: &str,
    value: &str,
) -> Result<Element, JsValue> {
    let name = match field {
        FormField::Username => "username",
        FormField::Email => "email",
        FormField::Password => "password",
    };

    let input = ElementBuilder::new("input")?
        .class("form-control")
        .attr("type", input_type)?
        .attr("name", name)?
        .attr("placeholder", placeholder)?
        .attr("value", value)?
        .flag("required", true)?
        .build();
    {
        let form = form.clone();
        on_input_value(&input, move |value| form.set_field(field, &value))?;
    }

    let group = ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.attr("for", name)?.text(label).build())?
        .child(input)?
        .build();
    Ok(group)
}

fn alert(form: &AccountFormState, message: &str) -> Result<Element, JsValue> {
    let dismiss = ElementBuilder::new("button")?
        .class("close")
        .attr("type", "button")?
        .text("×")
        .build();
    let alert = ElementBuilder::new("div")?
        .class("alert alert-danger alert-dismissible")
        .text(message)
        .build();
    append_child(&alert, &dismiss)?;

    let form = form.clone();
    let alert_clone = alert.clone();
    on_click(&dismiss, move |_| {
        form.set_alert(false);
        alert_clone.remove();
    })?;
    Ok(alert)
}

/// Successful login/signup: close the modal and land on the search page
fn after_login(state: &AppState) {
    NavbarViewModel::new(&state.services).close_modal(&state.nav);
    if let Err(e) = set_location_hash("/") {
        log::warn!("⚠️ [AUTH] Could not reset location: {:?}", e);
    }
    state.notify_changes();
}

fn render_login_form(state: &AppState) -> Result<Element, JsValue> {
    let form_state = state.nav.login_form.clone();
    let form = ElementBuilder::new("form")?.attr("novalidate", "")?.build();

    if form_state.is_alert_shown() {
        append_child(&form, &alert(&form_state, "Something went wrong with your login credentials!")?)?;
    }

    append_child(
        &form,
        &input_group(&form_state, FormField::Email, "Email", "email", "Your email", &form_state.get_email())?,
    )?;
    append_child(
        &form,
        &input_group(&form_state, FormField::Password, "Password", "password", "Your password", &form_state.get_password())?,
    )?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-success")
        .attr("type", "submit")?
        .flag("disabled", form_state.is_submitting())?
        .text("Submit")
        .build();
    append_child(&form, &submit)?;

    let state = state.clone();
    on_submit(&form, move || {
        let state = state.clone();
        spawn_local(async move {
            let vm = AccountViewModel::new(&state.services).with_notifier(state.notifier());
            match vm.login(&state.nav.login_form).await {
                Ok(()) => after_login(&state),
                Err(e) => {
                    log::error!("❌ [AUTH] Login failed: {}", e);
                    state.notify_changes();
                }
            }
        });
    })?;

    Ok(form)
}

fn render_signup_form(state: &AppState) -> Result<Element, JsValue> {
    let form_state = state.nav.signup_form.clone();
    let form = ElementBuilder::new("form")?.attr("novalidate", "")?.build();

    if form_state.is_alert_shown() {
        append_child(&form, &alert(&form_state, "Something went wrong with your signup!")?)?;
    }

    append_child(
        &form,
        &input_group(&form_state, FormField::Username, "Username", "text", "Your username", &form_state.get_username())?,
    )?;
    append_child(
        &form,
        &input_group(&form_state, FormField::Email, "Email", "email", "Your email address", &form_state.get_email())?,
    )?;
    append_child(
        &form,
        &input_group(&form_state, FormField::Password, "Password", "password", "Your password", &form_state.get_password())?,
    )?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-success")
        .attr("type", "submit")?
        .flag("disabled", form_state.is_submitting())?
        .text("Submit")
        .build();
    append_child(&form, &submit)?;

    let state = state.clone();
    on_submit(&form, move || {
        let state = state.clone();
        spawn_local(async move {
            let vm = AccountViewModel::new(&state.services).with_notifier(state.notifier());
            match vm.signup(&state.nav.signup_form).await {
                Ok(()) => after_login(&state),
                Err(e) => {
                    log::error!("❌ [AUTH] Signup failed: {}", e);
                    state.notify_changes();
                }
            }
        });
    })?;

    Ok(form)
}
