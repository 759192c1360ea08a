// ============================================================================
// MATERIAL STATE - Biblioteca de materiales de apoyo
// ============================================================================

use std::collections::HashSet;
use crate::error::{ApiError, MaterialFormError};
use crate::models::material::MAX_TITLE_CHARS;
use crate::models::{InterestArea, Material, MaterialType};

/// Modal de alta/edición
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Add,
    Edit(i64),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialForm {
    pub title: String,
    pub material_type: Option<MaterialType>,
    pub url: String,
    pub interest_areas: Vec<InterestArea>,
    /// Grupos de áreas desplegados (clave del grupo)
    pub expanded_groups: HashSet<&'static str>,
}

impl MaterialForm {
    pub fn from_material(material: &Material) -> Self {
        Self {
            title: material.title.clone(),
            material_type: Some(material.material_type),
            url: material.url.clone().unwrap_or_default(),
            interest_areas: material.interest_area.clone(),
            expanded_groups: HashSet::new(),
        }
    }

    pub fn toggle_area(&mut self, area: InterestArea) {
        if let Some(pos) = self.interest_areas.iter().position(|a| *a == area) {
            self.interest_areas.remove(pos);
        } else {
            self.interest_areas.push(area);
        }
    }

    pub fn toggle_group(&mut self, key: &'static str) {
        if !self.expanded_groups.remove(key) {
            self.expanded_groups.insert(key);
        }
    }

    /// Construye el material a enviar; los campos de servidor quedan vacíos
    pub fn validate(&self) -> Result<Material, MaterialFormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(MaterialFormError::MissingTitle);
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(MaterialFormError::TitleTooLong);
        }
        let material_type = self.material_type.ok_or(MaterialFormError::MissingType)?;

        let url = self.url.trim();
        let url = match material_type {
            MaterialType::Link if url.is_empty() => return Err(MaterialFormError::MissingUrl),
            MaterialType::Link => Some(url.to_string()),
            MaterialType::Documento | MaterialType::Video => None,
        };

        if self.interest_areas.is_empty() {
            return Err(MaterialFormError::MissingInterestArea);
        }

        Ok(Material {
            id: None,
            title: title.to_string(),
            material_type,
            url,
            file_path: None,
            interest_area: self.interest_areas.clone(),
            user_uploader_id: None,
            created_at: None,
            updated_at: None,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct MaterialLibraryState {
    pub materials: Vec<Material>,
    pub suggestions: Vec<Material>,
    pub filter_areas: Vec<InterestArea>,
    pub show_filters: bool,
    pub open_menu: Option<i64>,
    pub modal: Option<ModalMode>,
    pub form: MaterialForm,
    pub form_error: Option<String>,
    pub saving: bool,
    pub loading: bool,
    pub error_message: Option<String>,
}

impl MaterialLibraryState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error_message = None;
    }

    /// Más recientes primero; sin fecha al final
    pub fn set_materials(&mut self, result: Result<Vec<Material>, ApiError>) {
        self.loading = false;
        match result {
            Ok(mut materials) => {
                materials.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                self.materials = materials;
            }
            Err(e) => {
                log::error!("❌ [MATERIAIS] Error cargando materiales: {}", e);
                self.error_message = Some(e.to_string());
            }
        }
    }

    pub fn set_suggestions(&mut self, result: Result<Vec<Material>, ApiError>) {
        match result {
            Ok(materials) => self.suggestions = materials,
            Err(e) => log::warn!("⚠️ [MATERIAIS] Sin sugerencias: {}", e),
        }
    }

    /// Materiales con al menos un área en común con el filtro (sin filtro: todos)
    pub fn filtered(&self) -> Vec<&Material> {
        self.materials
            .iter()
            .filter(|m| {
                self.filter_areas.is_empty()
                    || m.interest_area.iter().any(|a| self.filter_areas.contains(a))
            })
            .collect()
    }

    pub fn toggle_filter_area(&mut self, area: InterestArea) {
        if let Some(pos) = self.filter_areas.iter().position(|a| *a == area) {
            self.filter_areas.remove(pos);
        } else {
            self.filter_areas.push(area);
        }
    }

    pub fn clear_filters(&mut self) {
        self.filter_areas.clear();
    }

    /// Un solo menú de acciones abierto a la vez
    pub fn toggle_menu(&mut self, id: i64) {
        self.open_menu = if self.open_menu == Some(id) { None } else { Some(id) };
    }

    pub fn open_add(&mut self) {
        self.open_menu = None;
        self.form = MaterialForm::default();
        self.form_error = None;
        self.modal = Some(ModalMode::Add);
    }

    pub fn open_edit(&mut self, id: i64) {
        self.open_menu = None;
        let Some(material) = self.materials.iter().find(|m| m.id == Some(id)) else {
            log::warn!("⚠️ [MATERIAIS] Material {} no encontrado", id);
            return;
        };
        self.form = MaterialForm::from_material(material);
        self.form_error = None;
        self.modal = Some(ModalMode::Edit(id));
    }

    /// `saving` lo libera solo `complete_save`
    pub fn close_modal(&mut self) {
        self.modal = None;
        self.form = MaterialForm::default();
        self.form_error = None;
    }

    /// Valida el formulario y marca el guardado en curso
    pub fn begin_save(&mut self) -> Option<(ModalMode, Material)> {
        if self.saving {
            return None;
        }
        let mode = self.modal?;
        match self.form.validate() {
            Ok(material) => {
                self.saving = true;
                self.form_error = None;
                Some((mode, material))
            }
            Err(e) => {
                self.form_error = Some(e.to_string());
                None
            }
        }
    }

    /// `true` si hay que recargar la lista
    pub fn complete_save(&mut self, result: Result<Material, ApiError>) -> bool {
        self.saving = false;
        match result {
            Ok(_) => {
                self.close_modal();
                true
            }
            Err(e) => {
                log::error!("❌ [MATERIAIS] Error guardando material: {}", e);
                self.form_error = Some(e.to_string());
                false
            }
        }
    }

    pub fn complete_delete(&mut self, result: Result<(), ApiError>) -> bool {
        self.open_menu = None;
        match result {
            Ok(()) => true,
            Err(e) => {
                log::error!("❌ [MATERIAIS] Error eliminando material: {}", e);
                self.error_message = Some(e.to_string());
                false
            }
        }
    }
}

/// URL de descarga de un material con fichero
pub fn download_url(files_base_url: &str, material: &Material) -> Option<String> {
    let path = material.file_path.as_deref()?.trim_start_matches('/');
    Some(format!("{}/{}", files_base_url.trim_end_matches('/'), path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn material(id: i64, day: Option<u32>, areas: Vec<InterestArea>) -> Material {
        Material {
            id: Some(id),
            title: format!("Material {}", id),
            material_type: MaterialType::Documento,
            url: None,
            file_path: Some(format!("uploads/{}.pdf", id)),
            interest_area: areas,
            user_uploader_id: None,
            created_at: day.and_then(|d| NaiveDate::from_ymd_opt(2024, 5, d)?.and_hms_opt(10, 0, 0)),
            updated_at: None,
        }
    }

    fn valid_form() -> MaterialForm {
        MaterialForm {
            title: "Guia".to_string(),
            material_type: Some(MaterialType::Link),
            url: "https://example.com".to_string(),
            interest_areas: vec![InterestArea::Educacao],
            expanded_groups: HashSet::new(),
        }
    }

    #[test]
    fn test_sorted_newest_first() {
        let mut state = MaterialLibraryState::default();
        state.set_materials(Ok(vec![material(1, Some(1), vec![]), material(2, None, vec![]), material(3, Some(9), vec![])]));
        let ids: Vec<Option<i64>> = state.materials.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
    }

    #[test]
    fn test_filter_by_any_area() {
        let mut state = MaterialLibraryState::default();
        state.set_materials(Ok(vec![
            material(1, Some(1), vec![InterestArea::Medicina]),
            material(2, Some(2), vec![InterestArea::Letras, InterestArea::Historia]),
        ]));
        assert_eq!(state.filtered().len(), 2);

        state.toggle_filter_area(InterestArea::Historia);
        let ids: Vec<Option<i64>> = state.filtered().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![Some(2)]);

        state.clear_filters();
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn test_form_validation() {
        assert!(valid_form().validate().is_ok());

        let mut form = valid_form();
        form.title = "   ".to_string();
        assert_eq!(form.validate(), Err(MaterialFormError::MissingTitle));

        let mut form = valid_form();
        form.title = "x".repeat(181);
        assert_eq!(form.validate(), Err(MaterialFormError::TitleTooLong));

        let mut form = valid_form();
        form.material_type = None;
        assert_eq!(form.validate(), Err(MaterialFormError::MissingType));

        let mut form = valid_form();
        form.url.clear();
        assert_eq!(form.validate(), Err(MaterialFormError::MissingUrl));

        // Sin URL es válido para documentos
        form.material_type = Some(MaterialType::Documento);
        assert_eq!(form.validate().map(|m| m.url), Ok(None));

        let mut form = valid_form();
        form.interest_areas.clear();
        assert_eq!(form.validate(), Err(MaterialFormError::MissingInterestArea));
    }

    #[test]
    fn test_single_open_menu() {
        let mut state = MaterialLibraryState::default();
        state.toggle_menu(1);
        state.toggle_menu(2);
        assert_eq!(state.open_menu, Some(2));
        state.toggle_menu(2);
        assert_eq!(state.open_menu, None);
    }

    #[test]
    fn test_edit_prefills_and_save_closes() {
        let mut state = MaterialLibraryState::default();
        state.set_materials(Ok(vec![material(4, Some(1), vec![InterestArea::Letras])]));
        state.open_edit(4);
        assert_eq!(state.modal, Some(ModalMode::Edit(4)));
        assert_eq!(state.form.title, "Material 4");

        let (mode, payload) = state.begin_save().unwrap();
        assert_eq!(mode, ModalMode::Edit(4));
        assert_eq!(payload.id, None);
        assert!(state.begin_save().is_none());

        assert!(state.complete_save(Ok(payload)));
        assert_eq!(state.modal, None);
        assert!(!state.saving);
    }

    #[test]
    fn test_close_during_save_keeps_guard() {
        let mut state = MaterialLibraryState::default();
        state.open_add();
        state.form = valid_form();
        let (_, payload) = state.begin_save().unwrap();

        state.close_modal();
        assert!(state.saving);

        state.open_add();
        state.form = valid_form();
        assert!(state.begin_save().is_none());

        assert!(state.complete_save(Ok(payload)));
        assert!(!state.saving);
        state.open_add();
        state.form = valid_form();
        assert!(state.begin_save().is_some());
    }

    #[test]
    fn test_invalid_save_keeps_modal() {
        let mut state = MaterialLibraryState::default();
        state.open_add();
        assert!(state.begin_save().is_none());
        assert_eq!(state.modal, Some(ModalMode::Add));
        assert!(state.form_error.is_some());
    }

    #[test]
    fn test_download_url() {
        let m = material(1, None, vec![]);
        assert_eq!(
            download_url("http://localhost:8080/", &m).as_deref(),
            Some("http://localhost:8080/uploads/1.pdf")
        );
        let mut link = m.clone();
        link.file_path = None;
        assert_eq!(download_url("http://x", &link), None);
    }
}
