// ============================================================================
// VIEWS - Funciones de render (sin lógica de negocio)
// ============================================================================

pub mod dashboard;
pub mod login;

pub use dashboard::render_dashboard;
pub use login::render_login;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::{AppState, SessionStatus};
use crate::viewmodels::OrdersViewModel;

/// Render raíz: decide la vista según el estado de sesión (guard de rutas).
/// Mientras la credencial persistida no fue chequeada se muestra un
/// placeholder; sin sesión, el login; con sesión, el dashboard.
pub fn render_app(state: &AppState, vm: &OrdersViewModel) -> Result<Element, JsValue> {
    match state.session.status() {
        SessionStatus::Initializing => {
            let placeholder = ElementBuilder::new("div")?
                .class("loading-screen")
                .text("Carregando...")
                .build();
            Ok(placeholder)
        }
        SessionStatus::Anonymous => render_login(state, vm),
        SessionStatus::Authenticated => render_dashboard(state, vm),
    }
}
