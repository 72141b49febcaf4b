// ============================================================================
// ORDER MODELS - Proyección de solo lectura de las órdenes de servicio
// ============================================================================
// Los campos vienen tal cual del backend; el cliente nunca los muta in-place.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Fila de orden de servicio, tal como la entrega el endpoint de listado
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OrderRow {
    pub id: u64,
    pub so_number: String,
    #[serde(rename = "type")]
    pub type_code: String,
    pub type_display: String,
    #[serde(rename = "status")]
    pub status_code: String,
    pub status_display: String,
    pub created_at: String,
    pub recipient_name: String,
    pub due_date: String,
    /// Calculado por el servidor: "overdue" | "nearing_due_date" | otro
    pub sla_status: String,
}

/// Respuesta paginada del endpoint de listado
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OrderListResponse {
    pub count: u64,
    pub results: Vec<OrderRow>,
}

/// Tipos de orden (código del backend, etiqueta para el select de filtros)
pub const TYPE_OPTIONS: &[(&str, &str)] = &[
    ("administrative", "Administrativa"),
    ("installation", "Instalação"),
    ("preventive_maintenance", "Manutenção Preventiva"),
    ("corrective_maintenance", "Manutenção Corretiva"),
    ("predictive_maintenance", "Manutenção Preditiva"),
    ("inspection", "Vistoria"),
    ("technical_assistance", "Assistência Técnica"),
    ("work_safety", "Segurança do Trabalho"),
    ("budget", "Orçamento"),
    ("events", "Eventos"),
];

/// Estados de orden (código del backend, etiqueta para el select de filtros)
pub const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("open", "Aberta"),
    ("in_progress", "Em andamento"),
    ("completed", "Concluída"),
    ("cancelled", "Cancelada"),
];
