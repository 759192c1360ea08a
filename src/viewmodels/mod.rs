// ============================================================================
// VIEWMODELS - Reglas de la UI + flujos asíncronos
// ============================================================================

pub mod status_filter;
pub mod eligibility;
pub mod review_form;
pub mod auth_viewmodel;
pub mod session_history_viewmodel;
pub mod search_viewmodel;
pub mod material_viewmodel;
pub mod feedback_viewmodel;
pub mod navigation_viewmodel;

pub use auth_viewmodel::AuthViewModel;
pub use session_history_viewmodel::SessionHistoryViewModel;
pub use search_viewmodel::SearchViewModel;
pub use material_viewmodel::MaterialViewModel;
pub use feedback_viewmodel::FeedbackViewModel;
pub use navigation_viewmodel::NavigationViewModel;
