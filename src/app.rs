// ============================================================================
// APP - Composición raíz y ciclo de render
// ============================================================================
// Monta el estado, restaura la sesión desde localStorage, conecta la
// suscripción filtros→fetch y pinta la vista que corresponda al estado.
// ============================================================================

use std::rc::Rc;

use log::info;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::services::{BrowserDialogs, QueryClient};
use crate::state::AppState;
use crate::utils::storage::LocalStore;
use crate::viewmodels::OrdersViewModel;
use crate::views::render_app;

pub struct App {
    state: AppState,
    vm: OrdersViewModel,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No se encontró el elemento #app"))?;

        let state = AppState::new(Rc::new(LocalStore));
        state.session.restore();

        let api = QueryClient::new(state.session.credential_cell());
        let vm = OrdersViewModel::new(api, Rc::new(BrowserDialogs));

        // Cada cambio de filtros o página dispara un fetch nuevo; los
        // resultados viejos se descartan por token en OrdersState.
        {
            let fetch_state = state.clone();
            let fetch_vm = vm.clone();
            state.list.subscribe(move || {
                fetch_vm.refresh(&fetch_state);
            });
        }

        // Sesión restaurada: cargar la primera página de inmediato
        if state.session.is_authenticated() {
            info!("🎬 Sesión restaurada, cargando órdenes");
            vm.refresh(&state);
        }

        Ok(Self { state, vm, root })
    }

    /// Re-render completo: se reconstruye el árbol bajo #app
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.state, &self.vm)?;
        append_child(&self.root, &view)
    }
}
