//! Home page: paginated image grid with a detail modal.

pub mod grid;
pub mod modal;
pub mod page;
pub mod placeholder;
pub mod query;
pub mod view;

pub use page::{HomePage, DEFAULT_PAGE_SIZE};
pub use view::render_home;
