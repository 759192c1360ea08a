// ============================================================================
// SEARCH VIEWS - Buscar mentores / Buscar mentorados
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_input_value, ElementBuilder};
use crate::models::profile::course_label;
use crate::models::{InterestArea, Mentor, Mentored};
use crate::state::AppState;
use crate::viewmodels::SearchViewModel;
use crate::views::shared::widgets::{area_dropdown, avatar, message_banner, text_el, AreaDropdownHandlers, MessageKind};

pub fn render_mentor_search(state: &AppState) -> Result<Element, JsValue> {
    let search = state.mentor_search.borrow();

    let input = ElementBuilder::new("input")?
        .id("mentor-specializations")?
        .class("form-input")
        .attr("type", "search")?
        .attr("placeholder", "Especializações (separadas por vírgula)")?
        .attr("value", &search.specializations_input)?
        .build();
    {
        let s = state.clone();
        on_input_value(&input, move |v| SearchViewModel::new(&s).on_specializations_input(v))?;
    }

    let s_menu = state.clone();
    let s_area = state.clone();
    let s_clear = state.clone();
    let dropdown = area_dropdown(
        "Área de interesse",
        &search.selected_areas,
        search.areas_menu_open,
        AreaDropdownHandlers {
            on_toggle_menu: Rc::new(move || SearchViewModel::new(&s_menu).toggle_mentor_areas_menu()),
            on_toggle_area: Rc::new(move |area: InterestArea| SearchViewModel::new(&s_area).toggle_mentor_area(area)),
            on_clear: Rc::new(move || SearchViewModel::new(&s_clear).clear_mentor_areas()),
        },
    )?;

    let screen = ElementBuilder::new("section")?
        .class("search-screen")
        .child(text_el("h2", "screen-title", "Buscar mentores")?)?
        .child(
            ElementBuilder::new("div")?
                .class("search-filters")
                .child(dropdown)?
                .child(input)?
                .build(),
        )?
        .build();

    if let Some(error) = &search.error_message {
        append_child(&screen, &message_banner(MessageKind::Error, error, None)?)?;
    }

    let results = if search.loading {
        text_el("p", "list-placeholder", "Buscando...")?
    } else if !search.search_performed {
        text_el("p", "list-placeholder", "Escolha uma área ou digite especializações para buscar.")?
    } else if search.results.is_empty() {
        text_el("p", "list-placeholder", "Nenhum mentor encontrado.")?
    } else {
        let list = ElementBuilder::new("div")?.class("profile-grid").build();
        for mentor in &search.results {
            append_child(&list, &render_mentor_card(mentor)?)?;
        }
        list
    };
    append_child(&screen, &results)?;
    Ok(screen)
}

fn render_mentor_card(mentor: &Mentor) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("article")?
        .class("profile-card")
        .child(avatar(&mentor.full_name)?)?
        .child(text_el("h3", "profile-name", &mentor.full_name)?)?
        .build();
    if let Some(course) = &mentor.course {
        append_child(&card, &text_el("p", "profile-course", course_label(course))?)?;
    }
    if let Some(affiliation) = &mentor.affiliation_type {
        append_child(&card, &text_el("p", "profile-affiliation", affiliation)?)?;
    }
    if let Some(summary) = &mentor.professional_summary {
        append_child(&card, &text_el("p", "profile-summary", summary)?)?;
    }
    append_child(&card, &tag_list(mentor.specializations.iter().map(String::as_str))?)?;
    append_child(&card, &tag_list(mentor.interest_area.iter().map(|a| a.label()))?)?;
    Ok(card)
}

pub fn render_mentored_search(state: &AppState) -> Result<Element, JsValue> {
    let search = state.mentored_search.borrow();

    let s_menu = state.clone();
    let s_area = state.clone();
    let s_clear = state.clone();
    let dropdown = area_dropdown(
        "Áreas de interesse",
        &search.selected_areas,
        search.areas_menu_open,
        AreaDropdownHandlers {
            on_toggle_menu: Rc::new(move || SearchViewModel::new(&s_menu).toggle_mentored_areas_menu()),
            on_toggle_area: Rc::new(move |area: InterestArea| SearchViewModel::new(&s_area).toggle_mentored_area(area)),
            on_clear: Rc::new(move || SearchViewModel::new(&s_clear).clear_mentored_areas()),
        },
    )?;

    let results = if search.loading {
        text_el("p", "list-placeholder", "Buscando...")?
    } else if !search.search_performed {
        text_el("p", "list-placeholder", "Selecione uma ou mais áreas para buscar mentorados.")?
    } else if search.results.is_empty() {
        text_el("p", "list-placeholder", "Nenhum mentorado encontrado.")?
    } else {
        let list = ElementBuilder::new("div")?.class("profile-grid").build();
        for mentored in &search.results {
            append_child(&list, &render_mentored_card(mentored)?)?;
        }
        list
    };

    Ok(ElementBuilder::new("section")?
        .class("search-screen")
        .child(text_el("h2", "screen-title", "Buscar mentorados")?)?
        .child(ElementBuilder::new("div")?.class("search-filters").child(dropdown)?.build())?
        .child(results)?
        .build())
}

fn render_mentored_card(mentored: &Mentored) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("article")?
        .class("profile-card")
        .child(avatar(&mentored.full_name)?)?
        .child(text_el("h3", "profile-name", &mentored.full_name)?)?
        .build();
    if let Some(course) = &mentored.course {
        append_child(&card, &text_el("p", "profile-course", course_label(course))?)?;
    }
    if let Some(summary) = &mentored.academic_summary {
        append_child(&card, &text_el("p", "profile-summary", summary)?)?;
    }
    append_child(&card, &tag_list(mentored.interest_area.iter().map(|a| a.label()))?)?;
    Ok(card)
}

fn tag_list<'a>(tags: impl Iterator<Item = &'a str>) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("div")?.class("tag-list").build();
    for tag in tags {
        append_child(&list, &text_el("span", "tag", tag)?)?;
    }
    Ok(list)
}
