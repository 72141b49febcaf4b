// ============================================================================
// ORDENS DE SERVIÇO - Cliente web en Rust/WASM
// ============================================================================
// Núcleo (estado, modelos, paginación, SLA) compilable y testeable en
// nativo; el pegamento de navegador queda detrás de target_arch = "wasm32".
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod viewmodels;
#[cfg(target_arch = "wasm32")]
pub mod views;

#[cfg(target_arch = "wasm32")]
mod bootstrap {
    use std::cell::RefCell;

    use log::{error, info};
    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::config::CONFIG;

    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if CONFIG.is_logging_enabled() {
            wasm_logger::init(wasm_logger::Config::default());
        }

        info!("🎬 Iniciando Ordens de Serviço ({})", CONFIG.environment);

        let app = App::new()?;
        APP.with(|cell| {
            *cell.borrow_mut() = Some(app);
        });
        rerender_app();
        Ok(())
    }

    /// Re-render completo de la aplicación desde el estado actual
    pub fn rerender_app() {
        APP.with(|cell| {
            if let Some(app) = cell.borrow().as_ref() {
                if let Err(err) = app.render() {
                    error!("❌ Error al renderizar: {:?}", err);
                }
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
pub use bootstrap::rerender_app;
