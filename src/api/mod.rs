//! HTTP client for the cat image API.

mod client;
mod error;

pub use client::CatApiClient;
pub use error::ApiError;
