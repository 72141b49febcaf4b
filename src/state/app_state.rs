// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Agrega los tres stores del dashboard. No es un global ambiente: se crea en
// App::new() y se pasa por referencia a quien lo necesita.
// ============================================================================

use crate::state::list_state::{FilterField, ListState};
use crate::state::orders_state::OrdersState;
use crate::state::reactivity::ReactiveState;
use crate::state::session_state::SessionState;
use crate::utils::storage::SharedKeyStore;

#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    /// Filtros + paginación; sus notificaciones disparan el fetch coordinator
    pub list: ReactiveState<ListState>,
    pub orders: OrdersState,
}

impl AppState {
    pub fn new(store: SharedKeyStore) -> Self {
        Self {
            session: SessionState::new(store),
            list: ReactiveState::new(ListState::new()),
            orders: OrdersState::new(),
        }
    }

    /// Cambiar un filtro (resetea página a 1) y notificar
    pub fn apply_filter(&self, field: FilterField, value: &str) {
        self.list.update(|s| s.apply_filter(field, value));
    }

    /// Limpiar todos los filtros y notificar
    pub fn clear_filters(&self) {
        self.list.update(|s| s.clear_filters());
    }

    /// Cambiar de página. Si queda fuera de rango se rechaza sin notificar
    /// (ningún fetch redundante por un click inválido).
    pub fn set_page(&self, page: u32) -> bool {
        self.list.update_if(|s| s.set_page(page))
    }

    /// Registrar el count que el servidor devolvió con el último resultado.
    /// Silencioso: el count no es input de ninguna query y no debe
    /// re-disparar el fetch que lo produjo.
    pub fn set_total_count(&self, count: u64) {
        self.list.update_silent(|s| s.total_count = count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderRow;
    use crate::utils::storage::MemoryStore;
    use std::cell::Cell;
    use std::rc::Rc;

    fn row(id: u64) -> OrderRow {
        OrderRow {
            id,
            so_number: format!("2025{:03}", id),
            type_code: "installation".to_string(),
            type_display: "Instalação".to_string(),
            status_code: "open".to_string(),
            status_display: "Aberta".to_string(),
            created_at: "2025-02-01".to_string(),
            recipient_name: "Beneficiário".to_string(),
            due_date: "2025-03-01".to_string(),
            sla_status: "on_time".to_string(),
        }
    }

    /// Simula lo que hace el coordinator al resolver un fetch exitoso
    fn resolve_fetch(state: &AppState, rows: Vec<OrderRow>, count: u64) {
        let token = state.orders.begin_fetch();
        assert!(state.orders.commit_success(token, rows));
        state.set_total_count(count);
    }

    #[test]
    fn dashboard_flow_login_filter_and_refresh() {
        let state = AppState::new(Rc::new(MemoryStore::new()));

        // Contar cuántas veces se dispararía un fetch
        let triggers = Rc::new(Cell::new(0u32));
        {
            let triggers = triggers.clone();
            state.list.subscribe(move || triggers.set(triggers.get() + 1));
        }

        // Login
        state.session.restore();
        state.session.apply_login("tok-1", "tecnico");
        assert!(state.session.is_authenticated());

        // Primer fetch del dashboard: page=1, page_size=10, sin filtros
        let params = state.list.with(|s| s.to_query_params());
        assert_eq!(params.keys(), vec!["page", "page_size"]);
        assert_eq!(params.get("page"), Some("1"));
        resolve_fetch(&state, (1..=10).map(row).collect(), 30);

        // El count silencioso no re-dispara ningún fetch
        assert_eq!(triggers.get(), 0);

        // Filtro por estado: nuevo fetch con page=1 y status=open
        state.apply_filter(FilterField::Status, "open");
        assert_eq!(triggers.get(), 1);
        let params = state.list.with(|s| s.to_query_params());
        assert_eq!(params.keys(), vec!["page", "page_size", "status"]);
        assert_eq!(params.get("page"), Some("1"));
        resolve_fetch(&state, (1..=10).map(row).collect(), 25);

        // Ir a la página 2
        assert!(state.set_page(2));
        assert_eq!(triggers.get(), 2);
        resolve_fetch(&state, (11..=20).map(row).collect(), 25);

        // Refresh post-delete: mismos filtros, misma página
        let params = state.list.with(|s| s.to_query_params());
        assert_eq!(params.get("page"), Some("2"));
        assert_eq!(params.get("status"), Some("open"));
    }

    #[test]
    fn rejected_page_change_does_not_trigger_fetch() {
        let state = AppState::new(Rc::new(MemoryStore::new()));
        state.set_total_count(15); // 2 páginas

        let triggers = Rc::new(Cell::new(0u32));
        {
            let triggers = triggers.clone();
            state.list.subscribe(move || triggers.set(triggers.get() + 1));
        }

        assert!(!state.set_page(9));
        assert_eq!(triggers.get(), 0);

        assert!(state.set_page(2));
        assert_eq!(triggers.get(), 1);
    }
}
