//! Terminal gallery for a public cat image API.
//!
//! Images are fetched page by page, shown in a grid, opened in a detail
//! modal, and marked as favorites through the same API. Shared state lives
//! in a reducer-driven [`store`].

pub mod api;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
