// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, focused_element_id, get_element_by_id, restore_focus, set_inner_html, window};
use crate::state::AppState;
use crate::viewmodels::{AuthViewModel, NavigationViewModel};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;
        let state = AppState::new();

        // Varias notificaciones seguidas → un solo re-render
        let scheduled = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if scheduled.replace(true) {
                return;
            }
            let scheduled = scheduled.clone();
            Timeout::new(0, move || {
                scheduled.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Acciones de arranque: restaurar usuario y cargar la pantalla inicial
    pub fn start(&self) {
        if self.state.auth.is_logged_in() {
            NavigationViewModel::new(&self.state).enter(self.state.current_screen());
        } else {
            AuthViewModel::new(&self.state).restore();
        }
    }

    /// Renderizar aplicación (re-render completo)
    pub fn render(&mut self) -> Result<(), JsValue> {
        // Foco y scroll sobreviven al re-render
        let focused = focused_element_id();
        let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);

        set_inner_html(&self.root, "");
        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)?;

        if let Some(id) = focused {
            restore_focus(&id);
        }
        if let Some(w) = window() {
            w.scroll_to_with_x_and_y(0.0, scroll_y);
        }
        log::debug!("🎬 [APP] Render completo ({:?})", self.state.current_screen());
        Ok(())
    }
}
