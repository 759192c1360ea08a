pub mod header;
pub mod widgets;

pub use header::render_header;
