// ============================================================================
// VIEWS - Funciones que construyen DOM a partir del estado (sin lógica)
// ============================================================================

pub mod app;
pub mod shared;
pub mod login;
pub mod home;
pub mod session_history;
pub mod search;
pub mod materials;
pub mod feedback;

pub use app::render_app;
pub use shared::render_header;
pub use login::render_login;
pub use home::render_home;
pub use session_history::render_session_history;
pub use search::{render_mentor_search, render_mentored_search};
pub use materials::render_materials;
pub use feedback::render_feedback;
