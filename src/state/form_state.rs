// ============================================================================
// FORM STATE - Estado del formulario de scheduling + reducer
// ============================================================================
// Toda mutación pasa por FormState::apply(FormAction).
// Vive lo mismo que la página; no se persiste.
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::models::SelectItem;

/// Estado completo del formulario
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    // Listas cargadas del backend (ya filtradas)
    pub drones: Vec<SelectItem>,
    pub missions: Vec<SelectItem>,
    // Error inline (no modal) si falló la carga de la lista
    pub drones_error: Option<String>,
    pub missions_error: Option<String>,

    // Selección del usuario
    pub selected_drone: String,
    pub selected_mission: String,
    pub start: String,
    pub end: String,

    // Modal de notificación
    pub modal_open: bool,
    pub modal_message: String,

    // true mientras hay un POST /schedules/ en vuelo
    pub submitting: bool,
}

/// Mutaciones con nombre sobre FormState
#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    SelectDrone(String),
    SelectMission(String),
    SetStart(String),
    SetEnd(String),
    OpenModal(String),
    CloseModal,
    DronesLoaded(Vec<SelectItem>),
    DronesFailed(String),
    MissionsLoaded(Vec<SelectItem>),
    MissionsFailed(String),
    SubmitStarted,
    /// Fin del envío (éxito o error): libera el botón y abre el modal con el mensaje
    SubmitSettled(String),
}

/// Listas que alimentan un selector
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Drones,
    Missions,
}

/// Parte del DOM que hay que actualizar tras una acción
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderScope {
    /// Solo el selector (y su nota de error) de esa lista
    Selector(ListKind),
    /// Re-render completo
    Full,
}

impl FormAction {
    /// None para ediciones de campos: el DOM ya muestra el valor nuevo
    /// Las cargas de listas tocan solo su selector para no pisar lo que el
    /// usuario está escribiendo en los inputs de fecha
    pub fn render_scope(&self) -> Option<RenderScope> {
        match self {
            FormAction::SelectDrone(_)
            | FormAction::SelectMission(_)
            | FormAction::SetStart(_)
            | FormAction::SetEnd(_) => None,
            FormAction::DronesLoaded(_) | FormAction::DronesFailed(_) => {
                Some(RenderScope::Selector(ListKind::Drones))
            }
            FormAction::MissionsLoaded(_) | FormAction::MissionsFailed(_) => {
                Some(RenderScope::Selector(ListKind::Missions))
            }
            FormAction::OpenModal(_)
            | FormAction::CloseModal
            | FormAction::SubmitStarted
            | FormAction::SubmitSettled(_) => Some(RenderScope::Full),
        }
    }
}

impl FormState {
    /// Aplicar una acción
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SelectDrone(id) => self.selected_drone = id,
            FormAction::SelectMission(id) => self.selected_mission = id,
            FormAction::SetStart(value) => self.start = value,
            FormAction::SetEnd(value) => self.end = value,
            FormAction::OpenModal(message) => {
                self.modal_message = message;
                self.modal_open = true;
            }
            FormAction::CloseModal => self.modal_open = false,
            FormAction::DronesLoaded(items) => {
                self.drones = items;
                self.drones_error = None;
            }
            FormAction::DronesFailed(message) => {
                self.drones.clear();
                self.drones_error = Some(message);
            }
            FormAction::MissionsLoaded(items) => {
                self.missions = items;
                self.missions_error = None;
            }
            FormAction::MissionsFailed(message) => {
                self.missions.clear();
                self.missions_error = Some(message);
            }
            FormAction::SubmitStarted => self.submitting = true,
            FormAction::SubmitSettled(message) => {
                self.submitting = false;
                self.apply(FormAction::OpenModal(message));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_updates() {
        let mut form = FormState::default();
        form.apply(FormAction::SelectDrone("D1".into()));
        form.apply(FormAction::SelectMission("M1".into()));
        form.apply(FormAction::SetStart("2024-01-01T10:00".into()));
        form.apply(FormAction::SetEnd("2024-01-01T11:00".into()));

        assert_eq!(form.selected_drone, "D1");
        assert_eq!(form.selected_mission, "M1");
        assert_eq!(form.start, "2024-01-01T10:00");
        assert_eq!(form.end, "2024-01-01T11:00");
        assert!(!form.modal_open);
    }

    #[test]
    fn close_modal_keeps_form_values() {
        let mut form = FormState::default();
        form.apply(FormAction::SelectDrone("D1".into()));
        form.apply(FormAction::OpenModal("Drone scheduled successfully!".into()));
        assert!(form.modal_open);

        form.apply(FormAction::CloseModal);

        assert!(!form.modal_open);
        assert_eq!(form.selected_drone, "D1");
    }

    #[test]
    fn submit_settled_clears_flag_and_opens_modal() {
        let mut form = FormState::default();
        form.apply(FormAction::SubmitStarted);
        assert!(form.submitting);

        form.apply(FormAction::SubmitSettled("drone: not found".into()));

        assert!(!form.submitting);
        assert!(form.modal_open);
        assert_eq!(form.modal_message, "drone: not found");
    }

    #[test]
    fn load_failure_empties_list_and_sets_inline_error() {
        let mut form = FormState::default();
        form.apply(FormAction::DronesLoaded(vec![SelectItem::new("D1", "Falcon")]));
        form.apply(FormAction::DronesFailed("Could not load drones.".into()));

        assert!(form.drones.is_empty());
        assert_eq!(form.drones_error.as_deref(), Some("Could not load drones."));
        assert!(!form.modal_open);

        form.apply(FormAction::DronesLoaded(vec![SelectItem::new("D1", "Falcon")]));
        assert_eq!(form.drones_error, None);
    }

    #[test]
    fn render_scope_per_action() {
        assert_eq!(FormAction::SetStart("x".into()).render_scope(), None);
        assert_eq!(FormAction::SelectMission("M1".into()).render_scope(), None);
        assert_eq!(FormAction::CloseModal.render_scope(), Some(RenderScope::Full));
        assert_eq!(FormAction::SubmitStarted.render_scope(), Some(RenderScope::Full));
        assert_eq!(
            FormAction::MissionsLoaded(Vec::new()).render_scope(),
            Some(RenderScope::Selector(ListKind::Missions))
        );
        assert_eq!(
            FormAction::DronesFailed("Could not load drones.".into()).render_scope(),
            Some(RenderScope::Selector(ListKind::Drones))
        );
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut form = FormState::default();
        form.apply(FormAction::MissionsLoaded(vec![SelectItem::new("M1", "Survey")]));
        form.apply(FormAction::OpenModal("hello".into()));

        let json = serde_json::to_string(&form).unwrap();
        let restored: FormState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, form);
    }
}
