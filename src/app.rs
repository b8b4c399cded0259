// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::dom::{get_element_by_id, set_inner_html, append_child};
use crate::state::AppState;
use crate::viewmodels::ScheduleViewModel;
use crate::views::render_app;
use crate::views::app::update_selector_section;

/// Aplicación principal
pub struct App {
    vm: Rc<ScheduleViewModel>,
    root: Element,
}

impl App {
    /// Crear nueva aplicación montada en #app
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Re-render tras cambios de estado, agrupando los que llegan en el mismo tick
        let render_pending = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if render_pending.replace(true) {
                return;
            }
            let render_pending = render_pending.clone();
            Timeout::new(0, move || {
                render_pending.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            vm: Rc::new(ScheduleViewModel::new(state)),
            root,
        })
    }

    /// Lanzar la carga inicial de drones y misiones (no bloquea el render)
    pub fn load(&self) {
        let vm = self.vm.clone();
        wasm_bindgen_futures::spawn_local(async move {
            vm.load_lists().await;
        });
    }

    /// Aplicar lo pendiente: parchear selectores o re-render completo
    pub fn render_changes(&self) -> Result<(), JsValue> {
        let pending = self.state().take_pending_render();
        if pending.full {
            return self.render();
        }
        for kind in pending.selectors() {
            if !update_selector_section(&self.vm, kind)? {
                log::warn!("⚠️ [APP] Selector {:?} no encontrado, re-render completo", kind);
                return self.render();
            }
        }
        Ok(())
    }

    /// Renderizar aplicación (re-render completo)
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let app_view = render_app(&self.vm)?;
        append_child(&self.root, &app_view)
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        self.vm.state()
    }
}
