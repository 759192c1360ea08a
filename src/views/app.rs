// ============================================================================
// APP VIEW - Layout principal: login o header + pantalla activa
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::{AppState, Screen};
use crate::views::{
    render_feedback, render_header, render_home, render_login, render_materials,
    render_mentor_search, render_mentored_search, render_session_history,
};

/// Renderizar aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let screen = state.current_screen();
    if screen == Screen::Login {
        return render_login(state);
    }

    let content = match screen {
        Screen::Home => render_home(state)?,
        Screen::SessionHistory => render_session_history(state)?,
        Screen::MentorSearch => render_mentor_search(state)?,
        Screen::MentoredSearch => render_mentored_search(state)?,
        Screen::Materials => render_materials(state)?,
        Screen::Feedback => render_feedback(state)?,
        Screen::Login => render_login(state)?,
    };

    Ok(ElementBuilder::new("div")?
        .class("app-shell")
        .child(render_header(state)?)?
        .child(ElementBuilder::new("main")?.class("app-content").child(content)?.build())?
        .build())
}
