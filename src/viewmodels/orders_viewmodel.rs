// ============================================================================
// ORDERS VIEWMODEL - Coordinador de fetch + acciones de fila
// ============================================================================
// Orquesta el lado async del dashboard: un solo request por trigger, con el
// token acuñado en OrdersState decidiendo si el resultado todavía vale.
// Ningún error de I/O cruza hacia el render: todo termina en un aviso.
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::services::{QueryClient, SharedDialogs};
use crate::state::AppState;

#[derive(Clone)]
pub struct OrdersViewModel {
    api: QueryClient,
    dialogs: SharedDialogs,
}

impl OrdersViewModel {
    pub fn new(api: QueryClient, dialogs: SharedDialogs) -> Self {
        Self { api, dialogs }
    }

    /// Disparar un fetch con el snapshot actual de filtros + página.
    /// Un fetch en vuelo no se cancela: su resultado simplemente se descarta
    /// si otro trigger acuñó un token más nuevo ("last write wins").
    pub fn refresh(&self, state: &AppState) {
        if !state.session.is_authenticated() {
            return;
        }

        let token = state.orders.begin_fetch();
        let params = state.list.with(|s| s.to_query_params());
        log::info!("📋 Fetch de órdenes (token {}): {}", token, params.to_query_string());

        // Mostrar el estado de carga
        crate::rerender_app();

        let api = self.api.clone();
        let dialogs = self.dialogs.clone();
        let state = state.clone();

        spawn_local(async move {
            match api.list_orders(&params).await {
                Ok(response) => {
                    let count = response.count;
                    if state.orders.commit_success(token, response.results) {
                        state.set_total_count(count);
                        log::info!("✅ Órdenes recibidas: {} de {}", state.orders.rows().len(), count);
                        crate::rerender_app();
                    }
                }
                Err(e) => {
                    if state.orders.commit_failure(token) {
                        // Las filas del último resultado bueno se preservan
                        log::error!("❌ Error buscando órdenes: {}", e);
                        dialogs.notify("Falha ao carregar dados.");
                        crate::rerender_app();
                    }
                }
            }
        });
    }

    /// Borrar una orden previa confirmación del usuario. Si el delete tiene
    /// éxito se refresca la lista en la página/filtros actuales (sin volver
    /// a la página 1); si falla, la lista queda intacta.
    pub fn delete_order(&self, state: &AppState, id: u64) {
        if !self.dialogs.confirm("Tem certeza que deseja deletar esta O.S.?") {
            return;
        }

        let vm = self.clone();
        let state = state.clone();

        spawn_local(async move {
            match vm.api.delete_order(id).await {
                Ok(()) => {
                    log::info!("🗑️ O.S. {} borrada", id);
                    vm.dialogs.notify("O.S. deletada com sucesso!");
                    vm.refresh(&state);
                }
                Err(e) => {
                    log::error!("❌ Error borrando O.S. {}: {}", id, e);
                    vm.dialogs.notify("Falha ao deletar.");
                }
            }
        });
    }
}
