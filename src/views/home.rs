use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::Role;
use crate::state::{AppState, Screen};
use crate::viewmodels::NavigationViewModel;
use crate::views::shared::widgets::text_el;

fn card_description(screen: Screen, role: Role) -> &'static str {
    match (screen, role) {
        (Screen::SessionHistory, Role::Mentor) => "Gerencie o status das suas sessões de mentoria.",
        (Screen::SessionHistory, Role::Mentorado) => "Acompanhe suas sessões e avalie as concluídas.",
        (Screen::MentorSearch, _) => "Encontre mentores por área e especialização.",
        (Screen::MentoredSearch, _) => "Encontre mentorados pelas áreas de interesse.",
        (Screen::Materials, _) => "Documentos, vídeos e links compartilhados.",
        (Screen::Feedback, _) => "Veja as avaliações que você recebeu.",
        (Screen::Home, _) | (Screen::Login, _) => "",
    }
}

/// Inicio: una tarjeta por pantalla disponible para el rol
pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let Some(user) = state.auth.get_current_user() else {
        return text_el("div", "home-screen", "");
    };

    let grid = ElementBuilder::new("div")?.class("home-grid").build();
    for screen in Screen::nav_items(user.role).into_iter().filter(|s| *s != Screen::Home) {
        let card = ElementBuilder::new("div")?
            .class("home-card")
            .child(text_el("h3", "home-card-title", screen.title())?)?
            .child(text_el("p", "home-card-text", card_description(screen, user.role))?)?
            .build();
        let s = state.clone();
        on_click(&card, move |_| NavigationViewModel::new(&s).go(screen))?;
        append_child(&grid, &card)?;
    }

    Ok(ElementBuilder::new("section")?
        .class("home-screen")
        .child(text_el("h2", "screen-title", &format!("Bem-vindo(a), {}", user.role.label()))?)?
        .child(grid)?
        .build())
}
