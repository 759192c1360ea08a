// ============================================================================
// HEADER VIEW - Navegación principal + logout
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::state::{AppState, Screen};
use crate::viewmodels::{AuthViewModel, NavigationViewModel};
use crate::views::shared::widgets::{button, text_el};

pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let current = state.current_screen();
    let user = state.auth.get_current_user();

    let nav = ElementBuilder::new("nav")?.class("main-nav").build();
    if let Some(user) = &user {
        for screen in Screen::nav_items(user.role) {
            let s = state.clone();
            let item = button(
                if screen == current { "nav-item active" } else { "nav-item" },
                screen.title(),
                false,
                move || NavigationViewModel::new(&s).go(screen),
            )?;
            append_child(&nav, &item)?;
        }
    }

    let user_box = ElementBuilder::new("div")?.class("user-box").build();
    if let Some(user) = &user {
        let who = user.email.clone().unwrap_or_else(|| format!("#{}", user.id));
        append_child(&user_box, &text_el("span", "user-email", &who)?)?;
        append_child(&user_box, &text_el("span", "user-role", user.role.label())?)?;
    }
    let s = state.clone();
    append_child(&user_box, &button("btn-logout", "Sair", false, move || AuthViewModel::new(&s).logout())?)?;

    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(text_el("div", "app-brand", "Mentoria")?)?
        .child(nav)?
        .child(user_box)?
        .build())
}
