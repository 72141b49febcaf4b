// ============================================================================
// LIST STATE - Filtros + paginación de la lista de órdenes
// ============================================================================
// Regla central: cualquier cambio de filtro resetea la página a 1 (la página
// vigente puede quedar fuera de rango con el nuevo predicado). Cambiar de
// página nunca toca los filtros.
// ============================================================================

use crate::config::CONFIG;
use crate::services::query::QueryParams;

/// Predicado de filtrado de la lista. String vacío = sin restricción.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct OrderFilters {
    /// Búsqueda por número de O.S.
    pub search: String,
    /// Código de estado ("" = todos)
    pub status: String,
    /// Código de tipo ("" = todos)
    pub order_type: String,
    /// Fecha de apertura desde (YYYY-MM-DD, inclusive)
    pub date_from: String,
    /// Fecha de apertura hasta (YYYY-MM-DD, inclusive)
    pub date_to: String,
}

/// Campo de filtro direccionable desde la vista
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FilterField {
    Search,
    Status,
    Type,
    DateFrom,
    DateTo,
}

/// Estado de filtros + paginación de la lista
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ListState {
    pub filters: OrderFilters,
    /// Página actual, 1-based
    pub page: u32,
    /// Tamaño de página fijo
    pub page_size: u32,
    /// Último count reportado por el servidor
    pub total_count: u64,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            filters: OrderFilters::default(),
            page: 1,
            page_size: CONFIG.page_size,
            total_count: 0,
        }
    }

    /// Cambiar un campo de filtro. Resetea SIEMPRE la página a 1.
    pub fn apply_filter(&mut self, field: FilterField, value: &str) {
        let slot = match field {
            FilterField::Search => &mut self.filters.search,
            FilterField::Status => &mut self.filters.status,
            FilterField::Type => &mut self.filters.order_type,
            FilterField::DateFrom => &mut self.filters.date_from,
            FilterField::DateTo => &mut self.filters.date_to,
        };
        *slot = value.to_string();
        self.page = 1;
    }

    /// Limpiar todos los filtros y volver a la página 1
    pub fn clear_filters(&mut self) {
        self.filters = OrderFilters::default();
        self.page = 1;
    }

    /// Cambiar de página. Rechazado (sin cambio de estado) si queda fuera de
    /// [1, total_pages]. Nunca modifica los filtros.
    pub fn set_page(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.page = page;
        true
    }

    /// Total de páginas según el último count conocido
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size as u64) as u32
    }

    /// Primer ítem mostrado ("Mostrando X a Y de Z")
    pub fn first_item(&self) -> u64 {
        (self.page as u64 - 1) * self.page_size as u64 + 1
    }

    /// Último ítem mostrado
    pub fn last_item(&self) -> u64 {
        (self.page as u64 * self.page_size as u64).min(self.total_count)
    }

    /// Mapear el estado actual a los query params del endpoint de listado.
    /// Los filtros sin valor se omiten por completo.
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("page", self.page);
        params.push("page_size", self.page_size);
        params.push_opt("search", &self.filters.search);
        params.push_opt("status", &self.filters.status);
        params.push_opt("type", &self.filters.order_type);
        params.push_opt("created_at_after", &self.filters.date_from);
        params.push_opt("created_at_before", &self.filters.date_to);
        params
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_on_page(page: u32, total_count: u64) -> ListState {
        let mut state = ListState::new();
        state.total_count = total_count;
        assert!(state.set_page(page));
        state
    }

    #[test]
    fn filter_change_resets_page_to_one() {
        let mut state = state_on_page(4, 100);

        state.apply_filter(FilterField::Status, "open");
        assert_eq!(state.page, 1);

        assert!(state.set_page(7));
        state.apply_filter(FilterField::Search, "2025001");
        assert_eq!(state.page, 1);

        assert!(state.set_page(3));
        state.apply_filter(FilterField::Search, "");
        assert_eq!(state.page, 1, "incluso al borrar un filtro");
    }

    #[test]
    fn clear_filters_resets_everything() {
        let mut state = state_on_page(5, 100);
        state.apply_filter(FilterField::Type, "inspection");
        state.apply_filter(FilterField::DateFrom, "2025-01-01");

        state.clear_filters();
        assert_eq!(state.filters, OrderFilters::default());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn set_page_never_touches_filters() {
        let mut state = ListState::new();
        state.total_count = 50;
        state.apply_filter(FilterField::Status, "open");
        state.apply_filter(FilterField::DateTo, "2025-12-31");
        let filters_before = state.filters.clone();

        assert!(state.set_page(3));
        assert_eq!(state.filters, filters_before);
        assert_eq!(state.page, 3);
    }

    #[test]
    fn out_of_range_page_is_rejected() {
        let mut state = state_on_page(2, 35); // 4 páginas de 10

        assert!(!state.set_page(0));
        assert_eq!(state.page, 2);

        assert!(!state.set_page(5));
        assert_eq!(state.page, 2);

        assert!(state.set_page(4));
        assert_eq!(state.page, 4);
    }

    #[test]
    fn with_zero_count_every_page_change_is_rejected() {
        let mut state = ListState::new();
        assert_eq!(state.total_pages(), 0);
        assert!(!state.set_page(1));
        assert!(!state.set_page(2));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn query_params_omit_unset_filters() {
        let mut state = ListState::new();
        state.apply_filter(FilterField::Status, "open");

        let params = state.to_query_params();
        assert_eq!(params.keys(), vec!["page", "page_size", "status"]);
        assert_eq!(params.get("page"), Some("1"));
        assert_eq!(params.get("page_size"), Some("10"));
        assert_eq!(params.get("status"), Some("open"));
    }

    #[test]
    fn query_params_with_no_filters() {
        let params = ListState::new().to_query_params();
        assert_eq!(params.keys(), vec!["page", "page_size"]);
    }

    #[test]
    fn query_params_include_dates_as_calendar_dates() {
        let mut state = ListState::new();
        state.apply_filter(FilterField::DateFrom, "2025-01-01");
        state.apply_filter(FilterField::DateTo, "2025-06-30");

        let params = state.to_query_params();
        assert_eq!(params.get("created_at_after"), Some("2025-01-01"));
        assert_eq!(params.get("created_at_before"), Some("2025-06-30"));
        assert_eq!(params.get("search"), None);
    }

    #[test]
    fn item_range_summary() {
        let state = state_on_page(3, 42);
        assert_eq!(state.first_item(), 21);
        assert_eq!(state.last_item(), 30);

        let last = state_on_page(5, 42);
        assert_eq!(last.first_item(), 41);
        assert_eq!(last.last_item(), 42);
    }
}
