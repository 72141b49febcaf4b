pub mod auth;
pub mod order;
pub mod sla;

pub use auth::{Identity, LoginRequest, LoginResponse};
pub use order::{OrderListResponse, OrderRow, STATUS_OPTIONS, TYPE_OPTIONS};
pub use sla::{classify_sla, SlaBadge, SlaSeverity};
