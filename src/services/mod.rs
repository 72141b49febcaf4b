pub mod dialog;
pub mod query;
#[cfg(target_arch = "wasm32")]
pub mod query_client;

pub use dialog::*;
pub use query::*;
#[cfg(target_arch = "wasm32")]
pub use query_client::*;
