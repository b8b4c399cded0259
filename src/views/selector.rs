// ============================================================================
// SELECTOR - <select> con etiqueta, placeholder y una opción por item
// ============================================================================
// Sin estado propio: el valor viene del caller y los cambios se reportan
// por callback.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::dom::events::on_change_value;
use crate::models::SelectItem;

/// Opción renderizada en el <select>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Opciones del selector: placeholder primero, luego los items en orden
pub fn selector_options(placeholder: &str, items: &[SelectItem]) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: String::new(),
        label: placeholder.to_string(),
    })
    .chain(items.iter().map(|item| SelectOption {
        value: item.id.clone(),
        label: item.name.clone(),
    }))
    .collect()
}

/// Renderizar selector
pub fn render_selector(
    label: &str,
    items: &[SelectItem],
    value: &str,
    on_change: Rc<dyn Fn(String)>,
    placeholder: &str,
) -> Result<Element, JsValue> {
    let select = ElementBuilder::new("select")?
        .flag("required", true)?
        .build();

    for option in selector_options(placeholder, items) {
        let option_el = ElementBuilder::new("option")?
            .attr("value", &option.value)?
            .flag("selected", option.value == value)?
            .text(&option.label)
            .build();
        append_child(&select, &option_el)?;
    }

    on_change_value(&select, move |new_value| on_change(new_value))?;

    let label_el = ElementBuilder::new("label")?
        .text(label)
        .child(select)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("dropdown")
        .child(label_el)?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_items_render_only_the_placeholder() {
        let options = selector_options("Select a Drone", &[]);

        assert_eq!(
            options,
            vec![SelectOption { value: String::new(), label: "Select a Drone".into() }]
        );
        // Solo el placeholder: ningún valor seleccionable
        assert!(options.iter().all(|o| o.value.is_empty()));
    }

    #[test]
    fn items_follow_the_placeholder_in_order() {
        let items = vec![SelectItem::new("M2", "Delivery"), SelectItem::new("M1", "Survey")];

        let options = selector_options("Select a Mission", &items);

        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(values, ["", "M2", "M1"]);
        assert_eq!(labels, ["Select a Mission", "Delivery", "Survey"]);
        assert_eq!(options.iter().filter(|o| !o.value.is_empty()).count(), 2);
    }
}
