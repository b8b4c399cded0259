// ============================================================================
// DRONE SCHEDULER - FRONTEND MVVM (RUST + WASM)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica UI (carga, envío, formateo de errores)
// - Services: SOLO comunicación API
// - State: FormState + reducer con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod utils;
mod dom;
mod views;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

// Instancia global de App (single-thread, WASM)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🚁 [APP] Drone Scheduler ({}) -> {}",
        CONFIG.environment,
        CONFIG.backend_url()
    );

    let app = App::new()?;
    app.render()?;
    app.load();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Actualizar la app tras cambios de estado
pub fn rerender_app() {
    APP.with(|app_cell| {
        match app_cell.borrow().as_ref() {
            Some(app) => {
                if let Err(e) = app.render_changes() {
                    log::error!("❌ [APP] Error re-renderizando: {:?}", e);
                } else {
                    log::debug!(
                        "✅ [APP] DOM actualizado (modal abierto: {})",
                        app.state().form().modal_open
                    );
                }
            }
            None => log::warn!("⚠️ [APP] App no está inicializada"),
        }
    });
}

/// Re-render completo llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow().as_ref() {
            if let Err(e) = app.render() {
                log::error!("❌ [APP] Error re-renderizando: {:?}", e);
            }
        }
    });
}
