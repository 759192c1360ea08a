use crate::state::{AppState, Screen};
use crate::viewmodels::{FeedbackViewModel, MaterialViewModel, SessionHistoryViewModel};

/// Cambio de pantalla + carga de datos de la pantalla destino
pub struct NavigationViewModel {
    state: AppState,
}

impl NavigationViewModel {
    pub fn new(state: &AppState) -> Self {
        Self { state: state.clone() }
    }

    pub fn go(&self, requested: Screen) {
        let screen = self.state.set_screen(requested);
        log::info!("🧭 [NAV] {:?} → {:?}", requested, screen);
        self.enter(screen);
        self.state.notify_subscribers();
    }

    /// Cargar lo que necesite la pantalla (también al arrancar)
    pub fn enter(&self, screen: Screen) {
        match screen {
            Screen::SessionHistory => SessionHistoryViewModel::new(&self.state).load(),
            Screen::Materials => MaterialViewModel::new(&self.state).load(),
            Screen::Feedback => FeedbackViewModel::new(&self.state).load(),
            Screen::Login | Screen::Home | Screen::MentorSearch | Screen::MentoredSearch => {}
        }
    }
}
