// ============================================================================
// ORDERS STATE - Cache de resultados + máquina de tokens de fetch
// ============================================================================
// Cada fetch acuña un token monotónico. Un resultado solo se aplica si su
// token sigue siendo el último acuñado: las respuestas superadas se descartan
// en silencio ("last write wins" sin cancelación real). Un fallo nunca borra
// el último resultado bueno: la tabla no se queda en blanco por un error
// transitorio.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::OrderRow;

#[derive(Clone)]
pub struct OrdersState {
    rows: Rc<RefCell<Vec<OrderRow>>>,
    loading: Rc<Cell<bool>>,
    latest_token: Rc<Cell<u64>>,
}

impl OrdersState {
    pub fn new() -> Self {
        Self {
            rows: Rc::new(RefCell::new(Vec::new())),
            loading: Rc::new(Cell::new(false)),
            latest_token: Rc::new(Cell::new(0)),
        }
    }

    /// Acuñar el token de un nuevo fetch y entrar en loading.
    /// Cualquier fetch en vuelo queda superado desde este momento.
    pub fn begin_fetch(&self) -> u64 {
        let token = self.latest_token.get() + 1;
        self.latest_token.set(token);
        self.loading.set(true);
        token
    }

    /// ¿Sigue siendo este el último fetch acuñado?
    pub fn is_current(&self, token: u64) -> bool {
        self.latest_token.get() == token
    }

    /// Aplicar un resultado exitoso. Devuelve false (sin cambio de estado)
    /// si el token quedó superado.
    pub fn commit_success(&self, token: u64, rows: Vec<OrderRow>) -> bool {
        if !self.is_current(token) {
            log::info!("🕸️ Resultado obsoleto descartado (token {})", token);
            return false;
        }
        *self.rows.borrow_mut() = rows;
        self.loading.set(false);
        true
    }

    /// Registrar un fallo. Devuelve false si el token quedó superado.
    /// Las filas del último resultado bueno se preservan.
    pub fn commit_failure(&self, token: u64) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.loading.set(false);
        true
    }

    /// Snapshot de las filas actuales
    pub fn rows(&self) -> Vec<OrderRow> {
        self.rows.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }
}

impl Default for OrdersState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u64, so_number: &str) -> OrderRow {
        OrderRow {
            id,
            so_number: so_number.to_string(),
            type_code: "inspection".to_string(),
            type_display: "Vistoria".to_string(),
            status_code: "open".to_string(),
            status_display: "Aberta".to_string(),
            created_at: "2025-02-01".to_string(),
            recipient_name: "Fulano".to_string(),
            due_date: "2025-03-01".to_string(),
            sla_status: "on_time".to_string(),
        }
    }

    #[test]
    fn stale_result_is_discarded() {
        let state = OrdersState::new();

        // Fetch A sale, luego sale B antes de que A resuelva
        let token_a = state.begin_fetch();
        let token_b = state.begin_fetch();

        // B resuelve primero y se aplica
        assert!(state.commit_success(token_b, vec![row(2, "2025002")]));

        // A resuelve después: se descarta sin tocar el estado
        assert!(!state.commit_success(token_a, vec![row(1, "2025001")]));
        let rows = state.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].so_number, "2025002");
        assert!(!state.is_loading());
    }

    #[test]
    fn failure_preserves_last_good_rows() {
        let state = OrdersState::new();

        let token = state.begin_fetch();
        assert!(state.commit_success(token, vec![row(1, "2025001")]));

        let token = state.begin_fetch();
        assert!(state.is_loading());
        assert!(state.commit_failure(token));

        assert!(!state.is_loading());
        assert_eq!(state.rows().len(), 1, "la tabla no se blanquea por un fallo");
    }

    #[test]
    fn stale_failure_does_not_end_loading_of_newer_fetch() {
        let state = OrdersState::new();

        let token_a = state.begin_fetch();
        let _token_b = state.begin_fetch();

        // A falla tarde: no debe apagar el loading del fetch B en vuelo
        assert!(!state.commit_failure(token_a));
        assert!(state.is_loading());
    }

    #[test]
    fn success_replaces_rows_wholesale() {
        let state = OrdersState::new();

        let token = state.begin_fetch();
        assert!(state.commit_success(token, vec![row(1, "a"), row(2, "b")]));

        let token = state.begin_fetch();
        assert!(state.commit_success(token, vec![row(3, "c")]));

        let rows = state.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 3);
    }

    #[test]
    fn tokens_are_strictly_increasing() {
        let state = OrdersState::new();
        let first = state.begin_fetch();
        let second = state.begin_fetch();
        assert!(second > first);
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }
}
