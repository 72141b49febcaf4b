// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod list_state;
pub mod orders_state;
pub mod reactivity;
pub mod session_state;

pub use app_state::*;
pub use list_state::*;
pub use orders_state::*;
pub use reactivity::*;
pub use session_state::*;
