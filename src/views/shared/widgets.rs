// ============================================================================
// WIDGETS - Piezas de UI reutilizadas por varias pantallas
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::InterestArea;

/// Elemento con clase y texto
pub fn text_el(tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new(tag)?.class(class).text(text).build())
}

/// Botón con handler de click
pub fn button<F>(class: &str, label: &str, disabled: bool, handler: F) -> Result<Element, JsValue>
where
    F: Fn() + 'static,
{
    let btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class(class)
        .text(label)
        .flag("disabled", disabled)?
        .build();
    on_click(&btn, move |e| {
        e.stop_propagation();
        handler();
    })?;
    Ok(btn)
}

#[derive(Clone, Copy)]
pub enum MessageKind {
    Success,
    Error,
}

/// Banner de éxito/error; `on_dismiss` añade una ✕
pub fn message_banner(kind: MessageKind, text: &str, on_dismiss: Option<Rc<dyn Fn()>>) -> Result<Element, JsValue> {
    let class = match kind {
        MessageKind::Success => "message message-success",
        MessageKind::Error => "message message-error",
    };
    let banner = ElementBuilder::new("div")?
        .class(class)
        .attr("role", "status")?
        .child(text_el("span", "message-text", text)?)?
        .build();
    if let Some(dismiss) = on_dismiss {
        let close = button("message-close", "✕", false, move || dismiss())?;
        append_child(&banner, &close)?;
    }
    Ok(banner)
}

/// Callbacks del desplegable de áreas
pub struct AreaDropdownHandlers {
    pub on_toggle_menu: Rc<dyn Fn()>,
    pub on_toggle_area: Rc<dyn Fn(InterestArea)>,
    pub on_clear: Rc<dyn Fn()>,
}

/// Desplegable multiselección de áreas de interés
pub fn area_dropdown(
    placeholder: &str,
    selected: &[InterestArea],
    open: bool,
    handlers: AreaDropdownHandlers,
) -> Result<Element, JsValue> {
    let summary = match selected {
        [] => placeholder.to_string(),
        [one] => one.label().to_string(),
        many => format!("{} áreas selecionadas", many.len()),
    };

    let toggle = {
        let on_toggle_menu = handlers.on_toggle_menu.clone();
        button("dropdown-toggle", &format!("{} ▾", summary), false, move || on_toggle_menu())?
    };

    let dropdown = ElementBuilder::new("div")?
        .class("area-dropdown")
        .class_if(open, "open")?
        .child(toggle)?
        .build();

    if !open {
        return Ok(dropdown);
    }

    let menu = ElementBuilder::new("div")?.class("dropdown-menu").build();
    for area in InterestArea::all() {
        let checked = selected.contains(&area);
        let item = ElementBuilder::new("label")?
            .class("dropdown-item")
            .class_if(checked, "selected")?
            .child(
                ElementBuilder::new("input")?
                    .attr("type", "checkbox")?
                    .flag("checked", checked)?
                    .build(),
            )?
            .child(text_el("span", "dropdown-item-label", area.label())?)?
            .build();
        let on_toggle_area = handlers.on_toggle_area.clone();
        on_click(&item, move |e| {
            e.prevent_default();
            on_toggle_area(area);
        })?;
        append_child(&menu, &item)?;
    }
    if !selected.is_empty() {
        let on_clear = handlers.on_clear.clone();
        append_child(&menu, &button("dropdown-clear", "Limpar seleção", false, move || on_clear())?)?;
    }
    append_child(&dropdown, &menu)?;
    Ok(dropdown)
}

/// Avatar con iniciales
pub fn avatar(name: &str) -> Result<Element, JsValue> {
    text_el("div", "avatar", &crate::models::profile::initials(name))
}
