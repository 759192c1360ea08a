use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::models::Review;
use crate::state::{stars, AppState};
use crate::utils::format_date;
use crate::views::shared::widgets::{message_banner, text_el, MessageKind};

/// Avaliações recibidas
pub fn render_feedback(state: &AppState) -> Result<Element, JsValue> {
    let feedback = state.feedback.borrow();

    let screen = ElementBuilder::new("section")?
        .class("feedback-screen")
        .child(text_el("h2", "screen-title", "Feedbacks recebidos")?)?
        .build();

    if let Some(average) = feedback.average_score() {
        append_child(&screen, &text_el(
            "p",
            "feedback-average",
            &format!("Média: {:.1} de 5 ({} avaliações)", average, feedback.reviews.len()),
        )?)?;
    }

    if let Some(error) = &feedback.error_message {
        append_child(&screen, &message_banner(MessageKind::Error, error, None)?)?;
    }

    let content = if feedback.loading {
        text_el("p", "list-placeholder", "Carregando avaliações...")?
    } else if feedback.reviews.is_empty() {
        text_el("p", "list-placeholder", "Você ainda não recebeu avaliações.")?
    } else {
        let list = ElementBuilder::new("ul")?.class("feedback-list").build();
        for review in &feedback.reviews {
            append_child(&list, &render_review(review)?)?;
        }
        list
    };
    append_child(&screen, &content)?;
    Ok(screen)
}

fn render_review(review: &Review) -> Result<Element, JsValue> {
    let star_row = ElementBuilder::new("div")?
        .class("star-rating readonly")
        .attr("aria-label", &format!("{} de 5", review.score))?
        .build();
    for full in stars(review.score) {
        append_child(&star_row, &text_el("span", if full { "star full" } else { "star" }, "★")?)?;
    }

    let item = ElementBuilder::new("li")?
        .class("feedback-item")
        .child(star_row)?
        .child(text_el("span", "feedback-role", &format!("Por: {}", review.reviewer_role.label()))?)?
        .build();

    if let Some(date) = &review.created_at {
        append_child(&item, &text_el("span", "feedback-date", &format_date(date))?)?;
    }
    if !review.comment.trim().is_empty() {
        append_child(&item, &text_el("p", "feedback-comment", &review.comment)?)?;
    }
    Ok(item)
}
