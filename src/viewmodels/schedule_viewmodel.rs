// ============================================================================
// SCHEDULE VIEWMODEL - LÓGICA DEL FORMULARIO DE SCHEDULING
// ============================================================================
// Carga de drones/misiones, envío del schedule y formateo de errores.
// Habla con el API vía SchedulingApi y muta el estado solo con FormAction.
// ============================================================================

use crate::models::{keep_selectable, ScheduleRequest};
use crate::services::{ApiClient, SchedulingApi};
use crate::state::{AppState, FormAction};
use crate::utils::constants::{DRONES_LOAD_ERROR, MISSIONS_LOAD_ERROR, SCHEDULE_SUCCESS_MESSAGE};
use crate::utils::format_error_detail;

/// Resultado de un intento de envío
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Ya había un envío en vuelo; no se hizo request
    Ignored,
    Scheduled,
    Failed(String),
}

/// ViewModel del formulario
pub struct ScheduleViewModel<A: SchedulingApi = ApiClient> {
    api: A,
    state: AppState,
}

impl ScheduleViewModel<ApiClient> {
    pub fn new(state: AppState) -> Self {
        Self::with_api(ApiClient::new(), state)
    }
}

impl<A: SchedulingApi> ScheduleViewModel<A> {
    pub fn with_api(api: A, state: AppState) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Carga inicial: drones y misiones en paralelo, sin orden entre ambas
    pub async fn load_lists(&self) {
        futures::join!(self.load_drones(), self.load_missions());
    }

    /// GET /drones/status -> selector de drones
    pub async fn load_drones(&self) {
        match self.api.fetch_drones().await {
            Ok(records) => {
                let items = keep_selectable(&records);
                if items.len() < records.len() {
                    log::warn!(
                        "⚠️ [VM] {} drones descartados (sin id o nombre)",
                        records.len() - items.len()
                    );
                }
                log::info!("✅ [VM] {} drones cargados", items.len());
                self.state.dispatch(FormAction::DronesLoaded(items));
            }
            Err(e) => {
                log::error!("❌ [VM] Failed to fetch drones: {}", e);
                self.state.dispatch(FormAction::DronesFailed(DRONES_LOAD_ERROR.to_string()));
            }
        }
    }

    /// GET /missions/ -> selector de misiones
    pub async fn load_missions(&self) {
        match self.api.fetch_missions().await {
            Ok(records) => {
                let items = keep_selectable(&records);
                if items.len() < records.len() {
                    log::warn!(
                        "⚠️ [VM] {} misiones descartadas (sin id o nombre)",
                        records.len() - items.len()
                    );
                }
                log::info!("✅ [VM] {} misiones cargadas", items.len());
                self.state.dispatch(FormAction::MissionsLoaded(items));
            }
            Err(e) => {
                log::error!("❌ [VM] Failed to fetch missions: {}", e);
                self.state.dispatch(FormAction::MissionsFailed(MISSIONS_LOAD_ERROR.to_string()));
            }
        }
    }

    /// POST /schedules/ con la selección actual
    /// El formulario no se resetea después del envío
    pub async fn submit(&self) -> SubmitOutcome {
        if self.state.is_submitting() {
            log::warn!("⏳ [VM] Envío ignorado: ya hay uno en curso");
            return SubmitOutcome::Ignored;
        }
        self.state.dispatch(FormAction::SubmitStarted);

        let request = ScheduleRequest::from_form(&self.state.form());

        let (outcome, message) = match self.api.create_schedule(&request).await {
            Ok(()) => (SubmitOutcome::Scheduled, SCHEDULE_SUCCESS_MESSAGE.to_string()),
            Err(e) => {
                log::error!("❌ [VM] Error creando schedule: {}", e);
                let message = format_error_detail(e.detail());
                (SubmitOutcome::Failed(message.clone()), message)
            }
        };

        self.state.dispatch(FormAction::SubmitSettled(message));
        outcome
    }

    /// Cerrar el modal de notificación
    pub fn close_modal(&self) {
        self.state.dispatch(FormAction::CloseModal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DroneRecord, MissionRecord, SelectItem};
    use crate::services::ApiError;
    use crate::utils::constants::UNEXPECTED_ERROR_MESSAGE;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// API en memoria con respuestas fijas
    struct FakeApi {
        drones: Result<Vec<Option<DroneRecord>>, ApiError>,
        missions: Result<Vec<Option<MissionRecord>>, ApiError>,
        schedule: Result<(), ApiError>,
        posted: RefCell<Vec<ScheduleRequest>>,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl FakeApi {
        fn new() -> Self {
            Self {
                drones: Ok(Vec::new()),
                missions: Ok(Vec::new()),
                schedule: Ok(()),
                posted: RefCell::new(Vec::new()),
                gate: RefCell::new(None),
            }
        }
    }

    impl SchedulingApi for FakeApi {
        async fn fetch_drones(&self) -> Result<Vec<Option<DroneRecord>>, ApiError> {
            self.drones.clone()
        }

        async fn fetch_missions(&self) -> Result<Vec<Option<MissionRecord>>, ApiError> {
            self.missions.clone()
        }

        async fn create_schedule(&self, request: &ScheduleRequest) -> Result<(), ApiError> {
            self.posted.borrow_mut().push(request.clone());
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            self.schedule.clone()
        }
    }

    fn drone(id: &str, name: &str) -> Option<DroneRecord> {
        Some(DroneRecord {
            id: Some(id.into()),
            name: Some(name.into()),
            status: Some("available".into()),
        })
    }

    fn mission(id: Option<&str>, name: Option<&str>) -> Option<MissionRecord> {
        Some(MissionRecord {
            id: id.map(Into::into),
            name: name.map(Into::into),
        })
    }

    fn rejected(detail: serde_json::Value) -> Result<(), ApiError> {
        Err(ApiError::Http {
            status: 422,
            status_text: "Unprocessable Entity".into(),
            detail: Some(detail),
        })
    }

    fn filled_form(vm: &ScheduleViewModel<FakeApi>) {
        let state = vm.state();
        state.dispatch(FormAction::SelectDrone("D1".into()));
        state.dispatch(FormAction::SelectMission("M1".into()));
        state.dispatch(FormAction::SetStart("2024-01-01T10:00".into()));
        state.dispatch(FormAction::SetEnd("2024-01-01T11:00".into()));
    }

    #[test]
    fn initial_load_fills_both_selectors() {
        let mut api = FakeApi::new();
        api.drones = Ok(vec![drone("D1", "Falcon"), drone("D2", "Heron")]);
        api.missions = Ok(vec![
            mission(Some("M1"), Some("Survey")),
            None,
            mission(None, Some("Orphan")),
            mission(Some("M2"), Some("")),
            mission(Some("M3"), Some("Delivery")),
        ]);
        let vm = ScheduleViewModel::with_api(api, AppState::new());

        block_on(vm.load_lists());

        let form = vm.state().form();
        assert_eq!(
            form.drones,
            vec![SelectItem::new("D1", "Falcon"), SelectItem::new("D2", "Heron")]
        );
        assert_eq!(
            form.missions,
            vec![SelectItem::new("M1", "Survey"), SelectItem::new("M3", "Delivery")]
        );
        assert_eq!(form.drones_error, None);
        assert_eq!(form.missions_error, None);
    }

    #[test]
    fn drone_load_failure_stays_out_of_the_modal() {
        let mut api = FakeApi::new();
        api.drones = Err(ApiError::Network("connection refused".into()));
        api.missions = Ok(vec![mission(Some("M1"), Some("Survey"))]);
        let vm = ScheduleViewModel::with_api(api, AppState::new());

        block_on(vm.load_lists());

        let form = vm.state().form();
        assert!(form.drones.is_empty());
        assert_eq!(form.drones_error.as_deref(), Some(DRONES_LOAD_ERROR));
        assert!(!form.modal_open);
        assert_eq!(form.missions, vec![SelectItem::new("M1", "Survey")]);
    }

    #[test]
    fn successful_submit_posts_form_and_opens_modal() {
        let vm = ScheduleViewModel::with_api(FakeApi::new(), AppState::new());
        filled_form(&vm);

        let outcome = block_on(vm.submit());

        assert_eq!(outcome, SubmitOutcome::Scheduled);
        let posted = vm.api.posted.borrow();
        assert_eq!(posted.len(), 1);
        assert_eq!(
            serde_json::to_value(&posted[0]).unwrap(),
            json!({
                "drone": "D1",
                "mission": "M1",
                "start": "2024-01-01T10:00",
                "end": "2024-01-01T11:00",
                "status": "occupied"
            })
        );

        let form = vm.state().form();
        assert!(form.modal_open);
        assert_eq!(form.modal_message, "Drone scheduled successfully!");
        assert!(!form.submitting);
        // El formulario conserva los valores
        assert_eq!(form.selected_drone, "D1");
        assert_eq!(form.end, "2024-01-01T11:00");
    }

    #[test]
    fn validation_list_is_shown_in_modal() {
        let mut api = FakeApi::new();
        api.schedule = rejected(json!([{ "msg": "start must be before end" }]));
        let vm = ScheduleViewModel::with_api(api, AppState::new());
        filled_form(&vm);

        let outcome = block_on(vm.submit());

        assert_eq!(outcome, SubmitOutcome::Failed("start must be before end".into()));
        let form = vm.state().form();
        assert!(form.modal_open);
        assert_eq!(form.modal_message, "start must be before end");
    }

    #[test]
    fn keyed_detail_is_shown_in_modal() {
        let mut api = FakeApi::new();
        api.schedule = rejected(json!({ "drone": "not found" }));
        let vm = ScheduleViewModel::with_api(api, AppState::new());
        filled_form(&vm);

        block_on(vm.submit());

        assert_eq!(vm.state().form().modal_message, "drone: not found");
    }

    #[test]
    fn network_failure_on_submit_uses_generic_message() {
        let mut api = FakeApi::new();
        api.schedule = Err(ApiError::Network("Failed to fetch".into()));
        let vm = ScheduleViewModel::with_api(api, AppState::new());
        filled_form(&vm);

        block_on(vm.submit());

        let form = vm.state().form();
        assert!(form.modal_open);
        assert_eq!(form.modal_message, UNEXPECTED_ERROR_MESSAGE);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let (release, gate) = oneshot::channel();
        let api = FakeApi::new();
        *api.gate.borrow_mut() = Some(gate);
        let vm = Rc::new(ScheduleViewModel::with_api(api, AppState::new()));
        filled_form(&vm);

        let mut pool = LocalPool::new();
        let outcomes = Rc::new(RefCell::new(Vec::new()));
        for _ in 0..2 {
            let vm = vm.clone();
            let outcomes = outcomes.clone();
            pool.spawner()
                .spawn_local(async move {
                    let outcome = vm.submit().await;
                    outcomes.borrow_mut().push(outcome);
                })
                .unwrap();
        }

        pool.run_until_stalled();
        assert!(vm.state().is_submitting());
        assert_eq!(vm.api.posted.borrow().len(), 1);
        assert_eq!(*outcomes.borrow(), vec![SubmitOutcome::Ignored]);

        release.send(()).unwrap();
        pool.run();

        assert!(!vm.state().is_submitting());
        assert_eq!(vm.api.posted.borrow().len(), 1);
        assert_eq!(
            *outcomes.borrow(),
            vec![SubmitOutcome::Ignored, SubmitOutcome::Scheduled]
        );
    }

    #[test]
    fn close_modal_hides_overlay() {
        let vm = ScheduleViewModel::with_api(FakeApi::new(), AppState::new());
        filled_form(&vm);
        block_on(vm.submit());

        vm.close_modal();

        assert!(!vm.state().form().modal_open);
    }
}
