// Utils compartidos

pub mod constants;
pub mod storage;
pub mod debounce;
pub mod format;

pub use constants::*;
pub use storage::*;
pub use debounce::Debouncer;
pub use format::*;
