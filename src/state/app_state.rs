// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::Role;
use crate::services::auth_service;
use crate::state::{
    AuthState, FeedbackState, LoginForm, MaterialLibraryState, MentorSearchState,
    MentoredSearchState, SessionHistoryState,
};
use crate::utils::{load_raw, save_raw, Debouncer, LAST_SCREEN_STORAGE_KEY};

/// Pantalla activa (una sola a la vez)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
    SessionHistory,
    MentorSearch,
    MentoredSearch,
    Materials,
    Feedback,
}

impl Screen {
    pub fn key(self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Home => "home",
            Screen::SessionHistory => "historico",
            Screen::MentorSearch => "buscar-mentores",
            Screen::MentoredSearch => "buscar-mentorados",
            Screen::Materials => "materiais",
            Screen::Feedback => "feedback",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    const ALL: [Screen; 7] = [
        Screen::Login,
        Screen::Home,
        Screen::SessionHistory,
        Screen::MentorSearch,
        Screen::MentoredSearch,
        Screen::Materials,
        Screen::Feedback,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Login => "Entrar",
            Screen::Home => "Início",
            Screen::SessionHistory => "Histórico de sessões",
            Screen::MentorSearch => "Buscar mentores",
            Screen::MentoredSearch => "Buscar mentorados",
            Screen::Materials => "Materiais de apoio",
            Screen::Feedback => "Feedbacks recebidos",
        }
    }

    /// Buscar mentores es cosa de mentorados y viceversa
    pub fn available_for(self, role: Role) -> bool {
        match (self, role) {
            (Screen::Login, _) => false,
            (Screen::MentorSearch, Role::Mentor) => false,
            (Screen::MentoredSearch, Role::Mentorado) => false,
            _ => true,
        }
    }

    /// Entradas del menú de navegación
    pub fn nav_items(role: Role) -> Vec<Screen> {
        Self::ALL.into_iter().filter(|s| s.available_for(role)).collect()
    }

    /// Pantalla efectiva: sin sesión siempre Login; con sesión nunca Login
    /// ni una pantalla del otro rol.
    pub fn resolve(requested: Screen, role: Option<Role>) -> Screen {
        match role {
            None => Screen::Login,
            Some(role) if requested.available_for(role) => requested,
            Some(_) => Screen::Home,
        }
    }
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub screen: Rc<RefCell<Screen>>,

    pub login_form: Rc<RefCell<LoginForm>>,
    pub history: Rc<RefCell<SessionHistoryState>>,
    pub mentor_search: Rc<RefCell<MentorSearchState>>,
    pub mentored_search: Rc<RefCell<MentoredSearchState>>,
    pub materials: Rc<RefCell<MaterialLibraryState>>,
    /// Fichero elegido en el modal de material (no serializable)
    pub material_file: Rc<RefCell<Option<web_sys::File>>>,
    pub feedback: Rc<RefCell<FeedbackState>>,

    pub search_debouncer: Debouncer,

    // Reactivity: callbacks tras cada cambio
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear estado restaurando token, usuario y última pantalla de localStorage
    pub fn new() -> Self {
        let auth = AuthState::new();
        auth.set_token(auth_service::load_token());
        auth.set_current_user(auth_service::load_cached_user());

        let last = load_raw(LAST_SCREEN_STORAGE_KEY)
            .and_then(|k| Screen::from_key(&k))
            .unwrap_or(Screen::Home);
        let screen = Screen::resolve(last, auth.role().filter(|_| auth.is_logged_in()));
        log::info!("🧭 [STATE] Pantalla inicial: {:?}", screen);

        Self {
            auth,
            screen: Rc::new(RefCell::new(screen)),
            login_form: Rc::new(RefCell::new(LoginForm::default())),
            history: Rc::new(RefCell::new(SessionHistoryState::new())),
            mentor_search: Rc::new(RefCell::new(MentorSearchState::default())),
            mentored_search: Rc::new(RefCell::new(MentoredSearchState::default())),
            materials: Rc::new(RefCell::new(MaterialLibraryState::default())),
            material_file: Rc::new(RefCell::new(None)),
            feedback: Rc::new(RefCell::new(FeedbackState::default())),
            search_debouncer: Debouncer::new(),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn current_screen(&self) -> Screen {
        *self.screen.borrow()
    }

    /// Cambiar de pantalla (aplicando la guarda de auth/rol) y recordarla
    pub fn set_screen(&self, requested: Screen) -> Screen {
        let role = self.auth.role().filter(|_| self.auth.is_logged_in());
        let screen = Screen::resolve(requested, role);
        *self.screen.borrow_mut() = screen;
        if screen != Screen::Login {
            if let Err(e) = save_raw(LAST_SCREEN_STORAGE_KEY, screen.key()) {
                log::warn!("⚠️ [STATE] No se pudo guardar la pantalla: {}", e);
            }
        }
        screen
    }

    /// Vaciar todo lo que dependa del usuario
    pub fn reset_user_data(&self) {
        self.search_debouncer.cancel();
        *self.history.borrow_mut() = SessionHistoryState::new();
        *self.mentor_search.borrow_mut() = MentorSearchState::default();
        *self.mentored_search.borrow_mut() = MentoredSearchState::default();
        *self.materials.borrow_mut() = MaterialLibraryState::default();
        *self.material_file.borrow_mut() = None;
        *self.feedback.borrow_mut() = FeedbackState::default();
        self.login_form.borrow_mut().reset();
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a los subscribers y re-renderizar
    pub fn notify_subscribers(&self) {
        // Copia para no mantener el borrow durante los callbacks
        let callbacks: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
