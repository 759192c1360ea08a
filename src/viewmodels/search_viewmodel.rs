// ============================================================================
// SEARCH VIEWMODEL - Búsqueda de mentores (debounce) y de mentorados
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use crate::config::CONFIG;
use crate::models::InterestArea;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::viewmodels::AuthViewModel;

pub struct SearchViewModel {
    state: AppState,
}

impl SearchViewModel {
    pub fn new(state: &AppState) -> Self {
        Self { state: state.clone() }
    }

    fn api(&self) -> ApiClient {
        ApiClient::new(self.state.auth.get_token())
    }

    // ------------------------------------------------------------------------
    // Mentores (el usuario es mentorado)
    // ------------------------------------------------------------------------

    /// Texto libre: solo se busca tras `search_debounce_ms` sin teclear
    pub fn on_specializations_input(&self, value: String) {
        self.state.mentor_search.borrow_mut().set_specializations_input(value);
        let state = self.state.clone();
        self.state
            .search_debouncer
            .schedule(CONFIG.search_debounce_ms, move || SearchViewModel::new(&state).search_mentors_now());
    }

    /// Cambio de área: búsqueda inmediata, descartando la diferida
    pub fn toggle_mentor_area(&self, area: InterestArea) {
        self.state.mentor_search.borrow_mut().toggle_area(area);
        self.state.search_debouncer.cancel();
        self.search_mentors_now();
    }

    pub fn clear_mentor_areas(&self) {
        self.state.mentor_search.borrow_mut().clear_areas();
        self.state.search_debouncer.cancel();
        self.search_mentors_now();
    }

    pub fn toggle_mentor_areas_menu(&self) {
        {
            let mut search = self.state.mentor_search.borrow_mut();
            search.areas_menu_open = !search.areas_menu_open;
        }
        self.state.notify_subscribers();
    }

    pub fn search_mentors_now(&self) {
        let query = self.state.mentor_search.borrow().query();
        let Some(query) = query else {
            self.state.mentor_search.borrow_mut().reset_results();
            self.state.notify_subscribers();
            return;
        };

        let seq = self.state.mentor_search.borrow_mut().begin_request();
        self.state.notify_subscribers();
        log::info!(
            "🔍 [BUSCA] Mentores: área={:?} especializaciones={:?}",
            query.interest_area,
            query.specializations
        );

        let state = self.state.clone();
        let api = self.api();
        spawn_local(async move {
            let result = api.search_mentors(query.interest_area, &query.specializations).await;
            if let Err(e) = &result {
                if AuthViewModel::new(&state).handle_unauthorized(e) {
                    return;
                }
            }
            let applied = state.mentor_search.borrow_mut().apply_results(seq, result);
            if applied {
                state.notify_subscribers();
            } else {
                log::debug!("⏭️ [BUSCA] Respuesta {} obsoleta, descartada", seq);
            }
        });
    }

    // ------------------------------------------------------------------------
    // Mentorados (el usuario es mentor)
    // ------------------------------------------------------------------------

    pub fn toggle_mentored_area(&self, area: InterestArea) {
        self.state.mentored_search.borrow_mut().toggle_area(area);
        self.search_mentoreds_now();
    }

    pub fn clear_mentored_areas(&self) {
        self.state.mentored_search.borrow_mut().clear_areas();
        self.search_mentoreds_now();
    }

    pub fn toggle_mentored_areas_menu(&self) {
        {
            let mut search = self.state.mentored_search.borrow_mut();
            search.areas_menu_open = !search.areas_menu_open;
        }
        self.state.notify_subscribers();
    }

    /// Una petición por área seleccionada; se fusionan sin duplicados
    pub fn search_mentoreds_now(&self) {
        let areas = self.state.mentored_search.borrow().selected_areas.clone();
        if areas.is_empty() {
            self.state.mentored_search.borrow_mut().reset_results();
            self.state.notify_subscribers();
            return;
        }

        let seq = self.state.mentored_search.borrow_mut().begin_request();
        self.state.notify_subscribers();
        log::info!("🔍 [BUSCA] Mentorados en {} áreas", areas.len());

        let state = self.state.clone();
        let api = self.api();
        spawn_local(async move {
            let mut per_area = Vec::with_capacity(areas.len());
            for area in areas {
                let result = api.search_mentoreds(area).await;
                if let Err(e) = &result {
                    if AuthViewModel::new(&state).handle_unauthorized(e) {
                        return;
                    }
                }
                per_area.push(result);
            }
            if state.mentored_search.borrow_mut().apply_results(seq, per_area) {
                state.notify_subscribers();
            }
        });
    }
}
