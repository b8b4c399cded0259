// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::{FormAction, FormState, ListKind, ReactiveState, RenderScope};

/// Actualizaciones del DOM acumuladas hasta el próximo render
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingRender {
    pub full: bool,
    pub drones: bool,
    pub missions: bool,
}

impl PendingRender {
    fn add(&mut self, scope: RenderScope) {
        match scope {
            RenderScope::Full => self.full = true,
            RenderScope::Selector(ListKind::Drones) => self.drones = true,
            RenderScope::Selector(ListKind::Missions) => self.missions = true,
        }
    }

    /// Selectores a parchear (vacío si toca re-render completo)
    pub fn selectors(&self) -> Vec<ListKind> {
        if self.full {
            return Vec::new();
        }
        [(self.drones, ListKind::Drones), (self.missions, ListKind::Missions)]
            .into_iter()
            .filter_map(|(pending, kind)| pending.then_some(kind))
            .collect()
    }
}

/// Handle compartido al estado del formulario
/// Clonar es barato: todos los clones apuntan al mismo estado
#[derive(Clone)]
pub struct AppState {
    form: ReactiveState<FormState>,
    pending: Rc<RefCell<PendingRender>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        Self {
            form: ReactiveState::new(FormState::default()),
            pending: Rc::new(RefCell::new(PendingRender::default())),
        }
    }

    /// Aplicar una acción; notifica solo si hay que tocar el DOM
    pub fn dispatch(&self, action: FormAction) {
        log::debug!("🧭 [STATE] {:?}", action);
        match action.render_scope() {
            Some(scope) => {
                self.pending.borrow_mut().add(scope);
                self.form.update(|form| form.apply(action));
            }
            None => self.form.update_silent(|form| form.apply(action)),
        }
    }

    /// Consumir lo pendiente de renderizar
    pub fn take_pending_render(&self) -> PendingRender {
        std::mem::take(&mut *self.pending.borrow_mut())
    }

    /// Copia del estado actual del formulario
    pub fn form(&self) -> FormState {
        self.form.snapshot()
    }

    /// ¿Hay un envío en vuelo?
    pub fn is_submitting(&self) -> bool {
        self.form.read(|form| form.submitting)
    }

    /// Suscribirse a cambios de estado que requieren re-render
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.form.subscribe(callback);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
