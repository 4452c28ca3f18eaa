//! Server rendered pages
mod router;
pub mod templates;
pub mod views;
pub use router::router;
pub use templates::{LoadingSize, Page, loading_indicator, render_page, templates};
