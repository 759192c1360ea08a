// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod auth_state;
pub mod session_state;
pub mod search_state;
pub mod material_state;
pub mod feedback_state;
pub mod app_state;

pub use auth_state::*;
pub use session_state::*;
pub use search_state::*;
pub use material_state::*;
pub use feedback_state::*;
pub use app_state::*;
