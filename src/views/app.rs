// ============================================================================
// APP VIEW - Formulario "Schedule a Drone"
// ============================================================================
// Solo construye DOM a partir del estado; las acciones van al ViewModel.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, get_element_by_id, ElementBuilder};
use crate::dom::events::{on_change_value, on_submit};
use crate::models::SelectItem;
use crate::state::{AppState, FormAction, FormState, ListKind};
use crate::utils::constants::*;
use crate::viewmodels::ScheduleViewModel;
use crate::views::{render_notification_modal, render_selector};

/// Lo que muestra un selector de lista, sacado del estado
#[derive(Clone, Debug, PartialEq)]
pub struct SelectorSection<'a> {
    pub dom_id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub items: &'a [SelectItem],
    pub value: &'a str,
    /// Nota inline si falló la carga de la lista
    pub error: Option<&'a str>,
}

/// Sección del selector para una lista
pub fn selector_section(form: &FormState, kind: ListKind) -> SelectorSection<'_> {
    match kind {
        ListKind::Drones => SelectorSection {
            dom_id: "drones-field",
            label: DRONE_LABEL,
            placeholder: DRONE_PLACEHOLDER,
            items: &form.drones,
            value: &form.selected_drone,
            error: form.drones_error.as_deref(),
        },
        ListKind::Missions => SelectorSection {
            dom_id: "missions-field",
            label: MISSION_LABEL,
            placeholder: MISSION_PLACEHOLDER,
            items: &form.missions,
            value: &form.selected_mission,
            error: form.missions_error.as_deref(),
        },
    }
}

fn select_action(kind: ListKind) -> fn(String) -> FormAction {
    match kind {
        ListKind::Drones => FormAction::SelectDrone,
        ListKind::Missions => FormAction::SelectMission,
    }
}

/// Renderizar la aplicación completa
pub fn render_app(vm: &Rc<ScheduleViewModel>) -> Result<Element, JsValue> {
    let state = vm.state().clone();
    let form_state = state.form();

    let container = ElementBuilder::new("div")?
        .class("App")
        .child(ElementBuilder::new("h1")?.text(PAGE_TITLE).build())?
        .build();

    let form = ElementBuilder::new("form")?
        .id("schedule-form")?
        .build();

    for kind in [ListKind::Drones, ListKind::Missions] {
        append_child(&form, &render_selector_section(&state, &form_state, kind)?)?;
        append_child(&form, &ElementBuilder::new("br")?.build())?;
    }

    // Ventana de tiempo
    append_child(
        &form,
        &render_datetime_input(START_LABEL, &form_state.start, dispatcher(&state, FormAction::SetStart))?,
    )?;
    append_child(&form, &ElementBuilder::new("br")?.build())?;
    append_child(
        &form,
        &render_datetime_input(END_LABEL, &form_state.end, dispatcher(&state, FormAction::SetEnd))?,
    )?;
    append_child(&form, &ElementBuilder::new("br")?.build())?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .flag("disabled", form_state.submitting)?
        .text(SUBMIT_LABEL)
        .build();
    append_child(&form, &submit_btn)?;

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                vm.submit().await;
            });
        })?;
    }

    append_child(&container, &form)?;

    if let Some(modal) = render_modal(vm, &form_state)? {
        append_child(&container, &modal)?;
    }

    Ok(container)
}

/// Reemplazar solo la sección de un selector (el resto del form queda intacto)
/// Ok(false) si la sección no está en el DOM y hace falta un render completo
pub fn update_selector_section(vm: &Rc<ScheduleViewModel>, kind: ListKind) -> Result<bool, JsValue> {
    let state = vm.state();
    let form_state = state.form();
    let section = selector_section(&form_state, kind);

    let Some(current) = get_element_by_id(section.dom_id) else {
        return Ok(false);
    };
    let fresh = render_selector_section(state, &form_state, kind)?;
    current.replace_with_with_node_1(&fresh)?;
    Ok(true)
}

/// Selector + nota de error inline (no abre el modal)
fn render_selector_section(
    state: &AppState,
    form_state: &FormState,
    kind: ListKind,
) -> Result<Element, JsValue> {
    let section = selector_section(form_state, kind);

    let wrapper = ElementBuilder::new("div")?
        .id(section.dom_id)?
        .build();

    let selector = render_selector(
        section.label,
        section.items,
        section.value,
        dispatcher(state, select_action(kind)),
        section.placeholder,
    )?;
    append_child(&wrapper, &selector)?;

    if let Some(message) = section.error {
        let note = ElementBuilder::new("p")?
            .class("inline-error")
            .attr("role", "status")?
            .text(message)
            .build();
        append_child(&wrapper, &note)?;
    }

    Ok(wrapper)
}

/// Callback que despacha una acción construida con el valor nuevo
fn dispatcher(state: &AppState, action: fn(String) -> FormAction) -> Rc<dyn Fn(String)> {
    let state = state.clone();
    Rc::new(move |value| state.dispatch(action(value)))
}

/// Input datetime-local obligatorio con etiqueta
fn render_datetime_input(
    label: &str,
    value: &str,
    on_change: Rc<dyn Fn(String)>,
) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .attr("type", "datetime-local")?
        .attr("value", value)?
        .flag("required", true)?
        .build();

    on_change_value(&input, move |new_value| on_change(new_value))?;

    Ok(ElementBuilder::new("label")?
        .text(label)
        .child(input)?
        .build())
}

fn render_modal(vm: &Rc<ScheduleViewModel>, form_state: &FormState) -> Result<Option<Element>, JsValue> {
    let message = ElementBuilder::new("p")?
        .text(&form_state.modal_message)
        .build();

    let on_close: Rc<dyn Fn()> = {
        let vm = vm.clone();
        Rc::new(move || vm.close_modal())
    };

    render_notification_modal(form_state.modal_open, on_close, message)
}
