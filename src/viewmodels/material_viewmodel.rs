// ============================================================================
// MATERIAL VIEWMODEL - Biblioteca de materiales
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use crate::config::CONFIG;
use crate::models::{InterestArea, Material, MaterialType};
use crate::services::ApiClient;
use crate::state::{download_url, AppState, ModalMode};
use crate::viewmodels::AuthViewModel;

pub struct MaterialViewModel {
    state: AppState,
}

impl MaterialViewModel {
    pub fn new(state: &AppState) -> Self {
        Self { state: state.clone() }
    }

    fn api(&self) -> ApiClient {
        ApiClient::new(self.state.auth.get_token())
    }

    pub fn load(&self) {
        self.state.materials.borrow_mut().begin_load();
        self.state.notify_subscribers();

        let state = self.state.clone();
        let api = self.api();
        spawn_local(async move {
            let materials = api.materials().await;
            if let Err(e) = &materials {
                if AuthViewModel::new(&state).handle_unauthorized(e) {
                    return;
                }
            }
            state.materials.borrow_mut().set_materials(materials);
            state.notify_subscribers();

            let suggestions = api.suggested_materials().await;
            state.materials.borrow_mut().set_suggestions(suggestions);
            state.notify_subscribers();
        });
    }

    pub fn toggle_filter_area(&self, area: InterestArea) {
        self.state.materials.borrow_mut().toggle_filter_area(area);
        self.state.notify_subscribers();
    }

    pub fn clear_filters(&self) {
        self.state.materials.borrow_mut().clear_filters();
        self.state.notify_subscribers();
    }

    pub fn toggle_filters_panel(&self) {
        {
            let mut materials = self.state.materials.borrow_mut();
            materials.show_filters = !materials.show_filters;
        }
        self.state.notify_subscribers();
    }

    pub fn toggle_menu(&self, id: i64) {
        self.state.materials.borrow_mut().toggle_menu(id);
        self.state.notify_subscribers();
    }

    pub fn open_add(&self) {
        self.state.materials.borrow_mut().open_add();
        *self.state.material_file.borrow_mut() = None;
        self.state.notify_subscribers();
    }

    pub fn open_edit(&self, id: i64) {
        self.state.materials.borrow_mut().open_edit(id);
        *self.state.material_file.borrow_mut() = None;
        self.state.notify_subscribers();
    }

    pub fn close_modal(&self) {
        self.state.materials.borrow_mut().close_modal();
        *self.state.material_file.borrow_mut() = None;
        self.state.notify_subscribers();
    }

    // Campos de texto: sin re-render para no perder el foco
    pub fn set_title(&self, title: String) {
        self.state.materials.borrow_mut().form.title = title;
    }

    pub fn set_url(&self, url: String) {
        self.state.materials.borrow_mut().form.url = url;
    }

    pub fn set_type(&self, material_type: Option<MaterialType>) {
        self.state.materials.borrow_mut().form.material_type = material_type;
        self.state.notify_subscribers();
    }

    pub fn set_file(&self, file: Option<web_sys::File>) {
        *self.state.material_file.borrow_mut() = file;
    }

    pub fn toggle_form_area(&self, area: InterestArea) {
        self.state.materials.borrow_mut().form.toggle_area(area);
        self.state.notify_subscribers();
    }

    pub fn toggle_form_group(&self, key: &'static str) {
        self.state.materials.borrow_mut().form.toggle_group(key);
        self.state.notify_subscribers();
    }

    pub fn save(&self) {
        let begun = self.state.materials.borrow_mut().begin_save();
        self.state.notify_subscribers();
        let Some((mode, material)) = begun else {
            return;
        };

        let file = self.state.material_file.borrow().clone();
        let state = self.state.clone();
        let api = self.api();
        spawn_local(async move {
            let result = match mode {
                ModalMode::Add => {
                    log::info!("📤 [MATERIAIS] Creando material '{}'", material.title);
                    api.create_material(&material, file.as_ref()).await
                }
                ModalMode::Edit(id) => {
                    log::info!("📝 [MATERIAIS] Actualizando material {}", id);
                    api.update_material(id, &material, file.as_ref()).await
                }
            };
            if let Err(e) = &result {
                if AuthViewModel::new(&state).handle_unauthorized(e) {
                    return;
                }
            }
            let reload = state.materials.borrow_mut().complete_save(result);
            if reload {
                *state.material_file.borrow_mut() = None;
                MaterialViewModel::new(&state).load();
            } else {
                state.notify_subscribers();
            }
        });
    }

    pub fn delete(&self, id: i64) {
        let state = self.state.clone();
        let api = self.api();
        log::info!("🗑️ [MATERIAIS] Eliminando material {}", id);
        spawn_local(async move {
            let result = api.delete_material(id).await;
            if let Err(e) = &result {
                if AuthViewModel::new(&state).handle_unauthorized(e) {
                    return;
                }
            }
            let reload = state.materials.borrow_mut().complete_delete(result);
            if reload {
                MaterialViewModel::new(&state).load();
            } else {
                state.notify_subscribers();
            }
        });
    }

    pub fn download_url(material: &Material) -> Option<String> {
        download_url(&CONFIG.files_base_url, material)
    }
}
