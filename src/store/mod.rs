//! Global application store.
//!
//! A single [`AppState`] owned by an [`AppProvider`]. Views reach it either
//! through the [`StoreContext`] handed to [`AppProvider::provide`], or through
//! the free accessors [`use_app_state`] and [`use_app_dispatch`], which only
//! work while a provider scope is open on the current thread.

mod action;
mod provider;
mod reducer;
mod state;

pub use action::AppAction;
pub use provider::{
    try_use_app_dispatch, try_use_app_state, use_app_dispatch, use_app_state, AppProvider,
    Dispatch, StateHandle, StoreContext, StoreError,
};
pub use reducer::AppReducer;
pub use state::AppState;
