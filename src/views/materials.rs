// ============================================================================
// MATERIALS VIEW - Lista, filtros por área y modal de alta/edición
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_change_value, on_click, on_file_change, on_input_value, ElementBuilder};
use crate::models::interest_area::GROUPS;
use crate::models::material::MAX_TITLE_CHARS;
use crate::models::{InterestArea, Material, MaterialType};
use crate::state::{AppState, MaterialLibraryState, ModalMode};
use crate::utils::format_date;
use crate::viewmodels::MaterialViewModel;
use crate::views::shared::widgets::{button, message_banner, text_el, MessageKind};

pub fn render_materials(state: &AppState) -> Result<Element, JsValue> {
    let library = state.materials.borrow();

    let s_filters = state.clone();
    let s_add = state.clone();
    let toolbar = ElementBuilder::new("div")?
        .class("screen-toolbar")
        .child(text_el("h2", "screen-title", "Materiais de apoio")?)?
        .child(button("btn-secondary", "Filtrar por área", false, move || {
            MaterialViewModel::new(&s_filters).toggle_filters_panel()
        })?)?
        .child(button("btn-primary", "+ Novo material", false, move || {
            MaterialViewModel::new(&s_add).open_add()
        })?)?
        .build();

    let screen = ElementBuilder::new("section")?
        .class("materials-screen")
        .child(toolbar)?
        .build();

    if library.show_filters {
        append_child(&screen, &render_filters(state, &library)?)?;
    }
    if let Some(error) = &library.error_message {
        append_child(&screen, &message_banner(MessageKind::Error, error, None)?)?;
    }

    let filtered = library.filtered();
    let content = if library.loading && library.materials.is_empty() {
        text_el("p", "list-placeholder", "Carregando materiais...")?
    } else if filtered.is_empty() {
        text_el("p", "list-placeholder", "Nenhum material encontrado.")?
    } else {
        let grid = ElementBuilder::new("div")?.class("material-grid").build();
        for material in filtered {
            append_child(&grid, &render_material_card(state, &library, material)?)?;
        }
        grid
    };
    append_child(&screen, &content)?;

    if !library.suggestions.is_empty() {
        let list = ElementBuilder::new("ul")?.class("suggestion-list").build();
        for material in &library.suggestions {
            append_child(&list, &text_el("li", "suggestion-item", &material.title)?)?;
        }
        append_child(
            &screen,
            &ElementBuilder::new("aside")?
                .class("suggestions")
                .child(text_el("h3", "panel-title", "Sugestões para você")?)?
                .child(list)?
                .build(),
        )?;
    }

    if let Some(mode) = library.modal {
        append_child(&screen, &render_modal(state, &library, mode)?)?;
    }
    Ok(screen)
}

fn render_filters(state: &AppState, library: &MaterialLibraryState) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("div")?.class("filters-panel").build();
    for area in InterestArea::all() {
        let active = library.filter_areas.contains(&area);
        let s = state.clone();
        let chip = button(
            if active { "filter-chip active" } else { "filter-chip" },
            area.label(),
            false,
            move || MaterialViewModel::new(&s).toggle_filter_area(area),
        )?;
        append_child(&panel, &chip)?;
    }
    let s = state.clone();
    append_child(&panel, &button("btn-link", "Limpar filtros", library.filter_areas.is_empty(), move || {
        MaterialViewModel::new(&s).clear_filters()
    })?)?;
    Ok(panel)
}

fn type_icon(material_type: MaterialType) -> &'static str {
    match material_type {
        MaterialType::Documento => "📄",
        MaterialType::Video => "🎬",
        MaterialType::Link => "🔗",
    }
}

fn render_material_card(state: &AppState, library: &MaterialLibraryState, material: &Material) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("article")?
        .class("material-card")
        .child(text_el("span", "material-icon", type_icon(material.material_type))?)?
        .child(text_el("h3", "material-title", &material.title)?)?
        .child(text_el("span", "material-type", material.material_type.label())?)?
        .build();

    if let Some(created) = &material.created_at {
        append_child(&card, &text_el("span", "material-date", &format!("Adicionado em {}", format_date(created)))?)?;
    }

    let tags = ElementBuilder::new("div")?.class("tag-list").build();
    for area in &material.interest_area {
        append_child(&tags, &text_el("span", "tag", area.label())?)?;
    }
    append_child(&card, &tags)?;

    let link = match material.material_type {
        MaterialType::Link => material.url.clone(),
        MaterialType::Documento | MaterialType::Video => MaterialViewModel::download_url(material),
    };
    if let Some(href) = link {
        let label = if material.material_type == MaterialType::Link { "Abrir link" } else { "Baixar" };
        append_child(
            &card,
            &ElementBuilder::new("a")?
                .class("material-open")
                .attr("href", &href)?
                .attr("target", "_blank")?
                .attr("rel", "noopener noreferrer")?
                .text(label)
                .build(),
        )?;
    }

    let Some(id) = material.id else {
        return Ok(card);
    };

    let s_menu = state.clone();
    append_child(&card, &button("material-menu-toggle", "⋮", false, move || {
        MaterialViewModel::new(&s_menu).toggle_menu(id)
    })?)?;

    if library.open_menu == Some(id) {
        let s_edit = state.clone();
        let s_delete = state.clone();
        let menu = ElementBuilder::new("div")?
            .class("material-menu")
            .child(button("menu-item", "Editar", false, move || MaterialViewModel::new(&s_edit).open_edit(id))?)?
            .child(button("menu-item danger", "Excluir", false, move || {
                let confirmed = web_sys::window()
                    .and_then(|w| w.confirm_with_message("Excluir este material?").ok())
                    .unwrap_or(false);
                if confirmed {
                    MaterialViewModel::new(&s_delete).delete(id);
                }
            })?)?
            .build();
        append_child(&card, &menu)?;
    }
    Ok(card)
}

fn render_modal(state: &AppState, library: &MaterialLibraryState, mode: ModalMode) -> Result<Element, JsValue> {
    let form = &library.form;
    let title = match mode {
        ModalMode::Add => "Novo material",
        ModalMode::Edit(_) => "Editar material",
    };

    let title_input = ElementBuilder::new("input")?
        .id("material-title")?
        .class("form-input")
        .attr("type", "text")?
        .attr("maxlength", &MAX_TITLE_CHARS.to_string())?
        .attr("value", &form.title)?
        .build();
    {
        let s = state.clone();
        on_input_value(&title_input, move |v| MaterialViewModel::new(&s).set_title(v))?;
    }

    let type_select = ElementBuilder::new("select")?
        .class("form-select")
        .child(
            ElementBuilder::new("option")?
                .attr("value", "")?
                .flag("selected", form.material_type.is_none())?
                .text("Selecione o tipo")
                .build(),
        )?
        .build();
    for (idx, material_type) in MaterialType::ALL.iter().enumerate() {
        append_child(
            &type_select,
            &ElementBuilder::new("option")?
                .attr("value", &idx.to_string())?
                .flag("selected", form.material_type == Some(*material_type))?
                .text(material_type.label())
                .build(),
        )?;
    }
    {
        let s = state.clone();
        on_change_value(&type_select, move |v| {
            let selected = v.parse::<usize>().ok().and_then(|i| MaterialType::ALL.get(i).copied());
            MaterialViewModel::new(&s).set_type(selected)
        })?;
    }

    let body = ElementBuilder::new("div")?
        .class("modal-body")
        .child(field("Título", title_input)?)?
        .child(field("Tipo", type_select)?)?
        .build();

    match form.material_type {
        Some(MaterialType::Link) => {
            let url_input = ElementBuilder::new("input")?
                .id("material-url")?
                .class("form-input")
                .attr("type", "url")?
                .attr("placeholder", "https://")?
                .attr("value", &form.url)?
                .build();
            let s = state.clone();
            on_input_value(&url_input, move |v| MaterialViewModel::new(&s).set_url(v))?;
            append_child(&body, &field("URL", url_input)?)?;
        }
        Some(MaterialType::Documento) | Some(MaterialType::Video) => {
            let file_input = ElementBuilder::new("input")?
                .class("form-file")
                .attr("type", "file")?
                .build();
            let s = state.clone();
            on_file_change(&file_input, move |file| MaterialViewModel::new(&s).set_file(file))?;
            append_child(&body, &field("Arquivo", file_input)?)?;
        }
        None => {}
    }

    append_child(&body, &render_area_groups(state, library)?)?;

    if let Some(error) = &library.form_error {
        append_child(&body, &message_banner(MessageKind::Error, error, None)?)?;
    }

    let s_cancel = state.clone();
    let s_save = state.clone();
    let footer = ElementBuilder::new("div")?
        .class("modal-footer")
        .child(button("btn-secondary", "Cancelar", library.saving, move || {
            MaterialViewModel::new(&s_cancel).close_modal()
        })?)?
        .child(button(
            "btn-primary",
            if library.saving { "Salvando..." } else { "Salvar" },
            library.saving,
            move || MaterialViewModel::new(&s_save).save(),
        )?)?
        .build();

    let dialog = ElementBuilder::new("div")?
        .class("modal")
        .attr("role", "dialog")?
        .child(text_el("h3", "modal-title", title)?)?
        .child(body)?
        .child(footer)?
        .build();
    on_click(&dialog, |e| e.stop_propagation())?;

    let overlay = ElementBuilder::new("div")?.class("modal-overlay").child(dialog)?.build();
    if !library.saving {
        let s = state.clone();
        on_click(&overlay, move |_| MaterialViewModel::new(&s).close_modal())?;
    }
    Ok(overlay)
}

/// Áreas del formulario agrupadas (cada grupo se despliega por separado)
fn render_area_groups(state: &AppState, library: &MaterialLibraryState) -> Result<Element, JsValue> {
    let form = &library.form;
    let container = ElementBuilder::new("div")?
        .class("area-groups")
        .child(text_el("label", "form-label", "Áreas de interesse")?)?
        .build();

    for group in GROUPS.iter() {
        let expanded = form.expanded_groups.contains(group.key);
        let count = group.items.iter().filter(|a| form.interest_areas.contains(*a)).count();
        let header_label = if count > 0 {
            format!("{} ({})", group.name, count)
        } else {
            group.name.to_string()
        };
        let key = group.key;
        let s = state.clone();
        let header = button("area-group-header", &header_label, false, move || {
            MaterialViewModel::new(&s).toggle_form_group(key)
        })?;

        let section = ElementBuilder::new("div")?
            .class("area-group")
            .class_if(expanded, "expanded")?
            .child(header)?
            .build();

        if expanded {
            for area in group.items.iter().copied() {
                let checked = form.interest_areas.contains(&area);
                let s = state.clone();
                let item = button(
                    if checked { "area-option selected" } else { "area-option" },
                    area.label(),
                    false,
                    move || MaterialViewModel::new(&s).toggle_form_area(area),
                )?;
                append_child(&section, &item)?;
            }
        }
        append_child(&container, &section)?;
    }
    Ok(container)
}

fn field(label: &str, input: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(text_el("label", "form-label", label)?)?
        .child(input)?
        .build())
}
