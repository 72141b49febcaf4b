// ============================================================================
// LOGIN VIEW - Formulario de acceso
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, input_value, on_click, on_input, on_keydown, set_text_content, ElementBuilder};
use crate::services::QueryClient;
use crate::state::AppState;
use crate::viewmodels::OrdersViewModel;

const ERROR_LABEL_ID: &str = "login-error";

/// Renderizar vista de login
pub fn render_login(state: &AppState, vm: &OrdersViewModel) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login() llamado");

    // Estado local del formulario (vive en los closures)
    let username = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));
    let submitting = Rc::new(RefCell::new(false));

    let screen = ElementBuilder::new("div")?.class("login-screen").build();
    let container = ElementBuilder::new("div")?.class("login-container").build();

    // Header
    let header = ElementBuilder::new("div")?.class("login-header").build();
    let title = ElementBuilder::new("h1")?.text("Ordens de Serviço").build();
    let subtitle = ElementBuilder::new("p")?
        .text("Acesse para gerenciar suas ordens")
        .build();
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;
    append_child(&container, &header)?;

    // Campo usuario
    let username_input = ElementBuilder::new("input")?
        .class("login-input")
        .attr("type", "text")?
        .attr("placeholder", "Usuário")?
        .attr("autocomplete", "username")?
        .build();
    {
        let username = username.clone();
        on_input(&username_input, move |event| {
            if let Some(target) = event.target() {
                if let Some(value) = input_value(target.unchecked_ref()) {
                    *username.borrow_mut() = value;
                }
            }
        })?;
    }
    append_child(&container, &username_input)?;

    // Campo contraseña
    let password_input = ElementBuilder::new("input")?
        .class("login-input")
        .attr("type", "password")?
        .attr("placeholder", "Senha")?
        .attr("autocomplete", "current-password")?
        .build();
    {
        let password = password.clone();
        on_input(&password_input, move |event| {
            if let Some(target) = event.target() {
                if let Some(value) = input_value(target.unchecked_ref()) {
                    *password.borrow_mut() = value;
                }
            }
        })?;
    }
    append_child(&container, &password_input)?;

    // Mensaje de error (vacío hasta que falle un login)
    let error_label = ElementBuilder::new("p")?
        .id(ERROR_LABEL_ID)?
        .class("login-error")
        .build();
    append_child(&container, &error_label)?;

    // Botón de submit
    let submit_button = ElementBuilder::new("button")?
        .id("login-submit")?
        .class("login-button")
        .text("Entrar")
        .build();
    {
        let submit = make_submit_handler(state, vm, username.clone(), password.clone(), submitting.clone());
        on_click(&submit_button, move |_| submit())?;
    }
    append_child(&container, &submit_button)?;

    // Enter en el campo de contraseña también envía
    {
        let submit = make_submit_handler(state, vm, username, password, submitting);
        on_keydown(&password_input, move |event| {
            if event.key() == "Enter" {
                submit();
            }
        })?;
    }

    append_child(&screen, &container)?;
    Ok(screen)
}

/// Construir el handler de submit. Reporta la falla de login como texto en
/// la vista: login() nunca lanza, solo devuelve false.
fn make_submit_handler(
    state: &AppState,
    vm: &OrdersViewModel,
    username: Rc<RefCell<String>>,
    password: Rc<RefCell<String>>,
    submitting: Rc<RefCell<bool>>,
) -> impl Fn() {
    let state = state.clone();
    let vm = vm.clone();

    move || {
        if *submitting.borrow() {
            return;
        }

        let user = username.borrow().trim().to_string();
        let pass = password.borrow().clone();
        if user.is_empty() || pass.is_empty() {
            show_error("Informe usuário e senha.");
            return;
        }

        *submitting.borrow_mut() = true;
        show_error("");

        let state = state.clone();
        let vm = vm.clone();
        let submitting = submitting.clone();

        spawn_local(async move {
            let api = QueryClient::new(state.session.credential_cell());
            let ok = state.session.login(&api, &user, &pass).await;
            *submitting.borrow_mut() = false;

            if ok {
                // El cambio de credencial dispara el primer fetch del dashboard
                vm.refresh(&state);
                crate::rerender_app();
            } else {
                show_error("Usuário ou senha inválidos.");
            }
        });
    }
}

fn show_error(message: &str) {
    if let Some(label) = get_element_by_id(ERROR_LABEL_ID) {
        set_text_content(&label, message);
    }
}
