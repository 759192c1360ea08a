// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_input_value, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::AuthViewModel;
use crate::views::shared::widgets::{message_banner, text_el, MessageKind};

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let form_state = state.login_form.borrow().clone();

    let email = ElementBuilder::new("input")?
        .id("login-email")?
        .class("form-input")
        .attr("type", "email")?
        .attr("placeholder", "seu.email@universidade.br")?
        .attr("autocomplete", "username")?
        .attr("value", &form_state.email)?
        .flag("disabled", form_state.submitting)?
        .build();
    {
        let s = state.clone();
        on_input_value(&email, move |v| AuthViewModel::new(&s).set_email(v))?;
    }

    let password = ElementBuilder::new("input")?
        .id("login-password")?
        .class("form-input")
        .attr("type", "password")?
        .attr("placeholder", "Senha")?
        .attr("autocomplete", "current-password")?
        .flag("disabled", form_state.submitting)?
        .build();
    {
        let s = state.clone();
        on_input_value(&password, move |v| AuthViewModel::new(&s).set_password(v))?;
    }

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-login")
        .text(if form_state.submitting { "Entrando..." } else { "Entrar" })
        .flag("disabled", form_state.submitting)?
        .build();

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .child(
            ElementBuilder::new("div")?
                .class("form-group")
                .child(text_el("label", "form-label", "E-mail")?)?
                .child(email)?
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("form-group")
                .child(text_el("label", "form-label", "Senha")?)?
                .child(password)?
                .build(),
        )?
        .build();

    if let Some(error) = &form_state.error_message {
        append_child(&form, &message_banner(MessageKind::Error, error, None)?)?;
    }
    append_child(&form, &submit)?;

    {
        let s = state.clone();
        on_submit(&form, move || AuthViewModel::new(&s).login())?;
    }

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(
            ElementBuilder::new("div")?
                .class("login-container")
                .child(text_el("div", "logo-icon", "🎓")?)?
                .child(text_el("h1", "login-title", "Mentoria")?)?
                .child(text_el("p", "login-subtitle", "Conectando mentores e mentorados")?)?
                .child(form)?
                .build(),
        )?
        .build())
}
