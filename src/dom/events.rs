// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Los listeners van sobre elementos que se destruyen en cada re-render
// (set_inner_html("")); el navegador los libera con el elemento, así que
// closure.forget() no acumula nada.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};

fn listen<E, F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", handler)
}

/// `input` con el valor actual del campo ya extraído
pub fn on_input_value<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    listen(element, "input", move |e: Event| handler(event_value(&e)))
}

/// `change` (select, checkbox, file) con el valor actual
pub fn on_change_value<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    listen(element, "change", move |e: Event| handler(event_value(&e)))
}

/// `change` de un `<input type="file">`: primer fichero elegido
pub fn on_file_change<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(Option<web_sys::File>) + 'static,
{
    listen(element, "change", move |e: Event| {
        let file = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        handler(file)
    })
}

/// `submit` de un formulario, sin recarga de página
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(element, "submit", move |e: Event| {
        e.prevent_default();
        handler()
    })
}

/// Valor de input/textarea/select que disparó el evento
pub fn event_value(event: &Event) -> String {
    let Some(target) = event.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = target.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}
