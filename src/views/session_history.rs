// ============================================================================
// SESSION HISTORY VIEW - Histórico, filtros, avaliação y cambio de estado
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_change_value, on_click, on_input_value, ElementBuilder};
use crate::models::review::MAX_COMMENT_CHARS;
use crate::models::{CurrentUser, MentorshipSession, SessionStatus};
use crate::state::{AppState, SessionHistoryState};
use crate::utils::{format_iso_date, format_time};
use crate::viewmodels::eligibility::{can_review, can_update_status, session_hint};
use crate::viewmodels::review_form::star_values;
use crate::viewmodels::SessionHistoryViewModel;
use crate::views::shared::widgets::{button, message_banner, text_el, MessageKind};

pub fn render_session_history(state: &AppState) -> Result<Element, JsValue> {
    let Some(user) = state.auth.get_current_user() else {
        return text_el("section", "history-screen", "");
    };
    let history = state.history.borrow();

    let screen = ElementBuilder::new("section")?
        .class("history-screen")
        .child(render_toolbar(state, &history)?)?
        .build();

    if history.show_filters {
        append_child(&screen, &render_filters(state, &history)?)?;
    }

    if let Some(message) = &history.success_message {
        append_child(&screen, &message_banner(MessageKind::Success, message, None)?)?;
    }
    if let Some(message) = &history.error_message {
        let s = state.clone();
        let dismiss: Rc<dyn Fn()> = Rc::new(move || SessionHistoryViewModel::new(&s).dismiss_error());
        append_child(&screen, &message_banner(MessageKind::Error, message, Some(dismiss))?)?;
    }

    append_child(&screen, &render_list(state, &history, &user)?)?;
    Ok(screen)
}

fn render_toolbar(state: &AppState, history: &SessionHistoryState) -> Result<Element, JsValue> {
    let s = state.clone();
    let filters_label = if history.filter.all_selected() {
        "Filtros".to_string()
    } else {
        let active = SessionStatus::ALL.iter().filter(|st| history.filter.is_enabled(**st)).count();
        format!("Filtros ({})", active)
    };
    let s_reload = state.clone();
    Ok(ElementBuilder::new("div")?
        .class("screen-toolbar")
        .child(text_el("h2", "screen-title", "Histórico de sessões")?)?
        .child(button("btn-secondary", &filters_label, false, move || {
            SessionHistoryViewModel::new(&s).toggle_filters_panel()
        })?)?
        .child(button("btn-secondary", "Atualizar", history.loading, move || {
            SessionHistoryViewModel::new(&s_reload).load()
        })?)?
        .build())
}

fn render_filters(state: &AppState, history: &SessionHistoryState) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("div")?.class("filters-panel").build();

    for status in SessionStatus::ALL {
        let enabled = history.filter.is_enabled(status);
        let chip = ElementBuilder::new("label")?
            .class("filter-chip")
            .class_if(enabled, "active")?
            .child(
                ElementBuilder::new("input")?
                    .attr("type", "checkbox")?
                    .flag("checked", enabled)?
                    .build(),
            )?
            .child(text_el("span", &status.css_class(), status.label())?)?
            .build();
        let s = state.clone();
        on_click(&chip, move |e| {
            e.prevent_default();
            SessionHistoryViewModel::new(&s).toggle_filter(status);
        })?;
        append_child(&panel, &chip)?;
    }

    let s_all = state.clone();
    let s_none = state.clone();
    append_child(&panel, &button("btn-link", "Selecionar todos", history.filter.all_selected(), move || {
        SessionHistoryViewModel::new(&s_all).set_all_filters(true)
    })?)?;
    append_child(&panel, &button("btn-link", "Limpar", history.filter.none_selected(), move || {
        SessionHistoryViewModel::new(&s_none).set_all_filters(false)
    })?)?;
    Ok(panel)
}

fn render_list(state: &AppState, history: &SessionHistoryState, user: &CurrentUser) -> Result<Element, JsValue> {
    if history.loading && history.sessions.is_empty() {
        return text_el("p", "list-placeholder", "Carregando sessões...");
    }
    if let Some(error) = &history.load_error {
        return message_banner(MessageKind::Error, error, None);
    }
    if history.sessions.is_empty() {
        return text_el("p", "list-placeholder", "Nenhuma sessão encontrada.");
    }

    let visible = history.visible_sessions();
    if visible.is_empty() {
        return text_el("p", "list-placeholder", "Nenhuma sessão corresponde aos filtros selecionados.");
    }

    let list = ElementBuilder::new("ul")?.class("session-list").build();
    for session in visible {
        append_child(&list, &render_row(state, history, user, session)?)?;
    }
    Ok(list)
}

fn render_row(
    state: &AppState,
    history: &SessionHistoryState,
    user: &CurrentUser,
    session: &MentorshipSession,
) -> Result<Element, JsValue> {
    let expandable = history.can_expand(session, Some(user));
    let expanded = history.is_expanded(session.id);

    let when = match (&session.date, &session.time) {
        (Some(d), Some(t)) => format!("{} às {}", format_iso_date(d), format_time(t)),
        (Some(d), None) => format_iso_date(d),
        _ => "Data a definir".to_string(),
    };
    let counterpart = session.counterpart_name(user.role).unwrap_or("—");

    let summary = ElementBuilder::new("div")?
        .class("session-summary")
        .child(
            ElementBuilder::new("div")?
                .class("session-main")
                .child(text_el("span", "session-counterpart", counterpart)?)?
                .child(text_el("span", "session-when", &when)?)?
                .child(text_el("span", "session-topic", session.topic.as_deref().unwrap_or(""))?)?
                .build(),
        )?
        .child(text_el("span", &format!("status-badge {}", session.status.css_class()), session.status.label())?)?
        .child(text_el("span", "session-hint", session_hint(session, user.role))?)?
        .build();

    if expandable || expanded {
        let s = state.clone();
        let id = session.id;
        on_click(&summary, move |_| SessionHistoryViewModel::new(&s).toggle_expansion(id))?;
    }

    let row = ElementBuilder::new("li")?
        .class("session-row")
        .class_if(expandable, "expandable")?
        .class_if(expanded, "expanded")?
        .child(summary)?
        .build();

    if expanded {
        append_child(&row, &render_panel(state, history, user, session)?)?;
    }
    Ok(row)
}

fn render_panel(
    state: &AppState,
    history: &SessionHistoryState,
    user: &CurrentUser,
    session: &MentorshipSession,
) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("div")?.class("session-panel").build();
    // Los clicks dentro del panel no deben plegar la fila
    on_click(&panel, |e| e.stop_propagation())?;

    if can_review(session, &history.reviewed) {
        append_child(&panel, &render_review_form(state, history, session)?)?;
    }
    if can_update_status(session, user) {
        append_child(&panel, &render_status_form(state, history, user, session)?)?;
    }
    Ok(panel)
}

fn render_review_form(
    state: &AppState,
    history: &SessionHistoryState,
    session: &MentorshipSession,
) -> Result<Element, JsValue> {
    let form = &history.review_form;
    let busy = history.submitting_review;

    let stars = ElementBuilder::new("div")?
        .class("star-rating")
        .attr("role", "radiogroup")?
        .build();
    for value in star_values() {
        let s = state.clone();
        let star = button(
            if value <= form.score { "star full" } else { "star" },
            "★",
            busy,
            move || SessionHistoryViewModel::new(&s).set_score(value),
        )?;
        star.set_attribute("aria-label", &format!("{} estrela(s)", value))?;
        append_child(&stars, &star)?;
    }

    let comment = ElementBuilder::new("textarea")?
        .id(&format!("review-comment-{}", session.id))?
        .class("form-textarea")
        .attr("maxlength", &MAX_COMMENT_CHARS.to_string())?
        .attr("placeholder", "Conte como foi a sessão (opcional)")?
        .flag("disabled", busy)?
        .text(&form.comment)
        .build();
    let counter = text_el("span", "char-counter", &remaining_label(form.remaining_chars()))?;
    {
        let s = state.clone();
        let counter = counter.clone();
        on_input_value(&comment, move |v| {
            SessionHistoryViewModel::new(&s).set_comment(v);
            let remaining = s.history.borrow().review_form.remaining_chars();
            counter.set_text_content(Some(&remaining_label(remaining)));
        })?;
    }

    let s = state.clone();
    let id = session.id;
    let submit = button(
        "btn-primary",
        if busy { "Enviando..." } else { "Enviar avaliação" },
        busy || !form.is_valid(),
        move || SessionHistoryViewModel::new(&s).submit_review(id),
    )?;

    Ok(ElementBuilder::new("div")?
        .class("review-form")
        .child(text_el("h4", "panel-title", "Avaliar sessão")?)?
        .child(stars)?
        .child(comment)?
        .child(counter)?
        .child(submit)?
        .build())
}

fn render_status_form(
    state: &AppState,
    history: &SessionHistoryState,
    user: &CurrentUser,
    session: &MentorshipSession,
) -> Result<Element, JsValue> {
    let busy = history.updating_status;
    let selected = history.status_form.new_status;

    let select = ElementBuilder::new("select")?
        .class("form-select")
        .flag("disabled", busy)?
        .child(
            ElementBuilder::new("option")?
                .attr("value", "")?
                .flag("selected", selected.is_none())?
                .text("Selecione o novo status")
                .build(),
        )?
        .build();
    for target in session.status.transitions_for(user.role) {
        let option = ElementBuilder::new("option")?
            .attr("value", target.code())?
            .flag("selected", selected == Some(*target))?
            .text(target.label())
            .build();
        append_child(&select, &option)?;
    }
    {
        let s = state.clone();
        on_change_value(&select, move |v| {
            SessionHistoryViewModel::new(&s).set_new_status(SessionStatus::from_code(&v))
        })?;
    }

    let s = state.clone();
    let id = session.id;
    let submit = button(
        "btn-primary",
        if busy { "Atualizando..." } else { "Atualizar status" },
        busy,
        move || SessionHistoryViewModel::new(&s).update_status(id),
    )?;

    Ok(ElementBuilder::new("div")?
        .class("status-form")
        .child(text_el("h4", "panel-title", "Alterar status")?)?
        .child(
            ElementBuilder::new("p")?
                .class("status-current")
                .text(&format!("Status atual: {}", session.status.label()))
                .build(),
        )?
        .child(select)?
        .child(submit)?
        .build())
}

fn remaining_label(remaining: i64) -> String {
    format!("{} caracteres restantes", remaining)
}
