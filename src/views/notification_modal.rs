// ============================================================================
// NOTIFICATION MODAL - Overlay controlado por el caller
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::dom::events::on_click;

/// Zonas clickeables del overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayTarget {
    /// Fondo oscuro alrededor del contenido
    Backdrop,
    /// Botón ✕
    CloseButton,
    /// Caja con el mensaje
    Content,
}

impl OverlayTarget {
    /// ¿Un click aquí cierra el overlay?
    pub fn closes(self) -> bool {
        !matches!(self, OverlayTarget::Content)
    }
}

/// Contenido a mostrar: solo si está abierto
pub fn overlay_content<T>(is_open: bool, content: T) -> Option<T> {
    is_open.then_some(content)
}

/// Click sobre una zona del overlay; llama a on_close si corresponde
pub fn handle_overlay_click(target: OverlayTarget, on_close: &dyn Fn()) -> bool {
    let closes = target.closes();
    if closes {
        on_close();
    }
    closes
}

/// Renderizar modal; None si está cerrado
pub fn render_notification_modal(
    is_open: bool,
    on_close: Rc<dyn Fn()>,
    content: Element,
) -> Result<Option<Element>, JsValue> {
    let Some(content) = overlay_content(is_open, content) else {
        return Ok(None);
    };

    let modal = ElementBuilder::new("div")?
        .id("notification-modal")?
        .class("modal")
        .attr("role", "dialog")?
        .attr("aria-modal", "true")?
        .build();

    let modal_content = ElementBuilder::new("div")?
        .class("modal-content")
        .build();

    let close_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .attr("aria-label", "Close")?
        .class("btn-close")
        .text("✕")
        .build();

    for (element, target) in [
        (&modal, OverlayTarget::Backdrop),
        (&modal_content, OverlayTarget::Content),
        (&close_btn, OverlayTarget::CloseButton),
    ] {
        let on_close = on_close.clone();
        on_click(element, move |e: web_sys::MouseEvent| {
            // El click no sube al fondo: cada zona decide por sí misma
            e.stop_propagation();
            handle_overlay_click(target, on_close.as_ref());
        })?;
    }

    append_child(&modal_content, &close_btn)?;
    append_child(&modal_content, &content)?;
    append_child(&modal, &modal_content)?;

    Ok(Some(modal))
}
