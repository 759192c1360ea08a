use wasm_bindgen_futures::spawn_local;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::viewmodels::AuthViewModel;

/// Avaliações recibidas por el usuario actual
pub struct FeedbackViewModel {
    state: AppState,
}

impl FeedbackViewModel {
    pub fn new(state: &AppState) -> Self {
        Self { state: state.clone() }
    }

    pub fn load(&self) {
        self.state.feedback.borrow_mut().begin_load();
        self.state.notify_subscribers();

        let state = self.state.clone();
        let api = ApiClient::new(self.state.auth.get_token());
        spawn_local(async move {
            let reviews = api.received_reviews().await;
            if let Err(e) = &reviews {
                if AuthViewModel::new(&state).handle_unauthorized(e) {
                    return;
                }
            }
            state.feedback.borrow_mut().set_reviews(reviews);
            state.notify_subscribers();
        });
    }
}
