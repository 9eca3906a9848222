//! Provider scope and the handles it distributes.

use std::cell::RefCell;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};
use thiserror::Error;

use crate::store::action::AppAction;
use crate::store::reducer::AppReducer;
use crate::store::state::AppState;
use crate::ui::mvi::Reducer;

/// Store wiring errors. These indicate a bug in how views are mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{accessor} must be used within an AppProvider")]
    OutsideProvider { accessor: &'static str },
}

type SharedState = Arc<RwLock<AppState>>;

thread_local! {
    /// Providers whose scope is open on this thread, innermost last.
    static PROVIDERS: RefCell<Vec<SharedState>> = const { RefCell::new(Vec::new()) };
}

/// Owner of the application state and its reducer.
pub struct AppProvider {
    state: SharedState,
}

impl Default for AppProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AppProvider {
    /// Provider starting from the empty default state.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Provider seeded with a prepared snapshot.
    pub fn with_state(initial: AppState) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
        }
    }

    pub fn from_optional(initial: Option<AppState>) -> Self {
        Self::with_state(initial.unwrap_or_default())
    }

    /// Open the provider scope for the duration of `f`.
    ///
    /// While `f` runs, [`use_app_state`] and [`use_app_dispatch`] resolve to
    /// this provider (or to a provider nested inside it). The scope is closed
    /// when `f` returns or unwinds.
    pub fn provide<R>(&self, f: impl FnOnce(&StoreContext<'_>) -> R) -> R {
        PROVIDERS.with(|stack| stack.borrow_mut().push(Arc::clone(&self.state)));
        let _scope = ScopeExit;
        let ctx = StoreContext { state: &self.state };
        f(&ctx)
    }

    /// Current state, readable after the scope has closed.
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }
}

struct ScopeExit;

impl Drop for ScopeExit {
    fn drop(&mut self) {
        PROVIDERS.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Access to the store, only obtainable inside [`AppProvider::provide`].
pub struct StoreContext<'a> {
    state: &'a SharedState,
}

impl StoreContext<'_> {
    pub fn state(&self) -> AppState {
        self.state.read().clone()
    }

    pub fn read(&self) -> RwLockReadGuard<'_, AppState> {
        self.state.read()
    }

    pub fn dispatcher(&self) -> Dispatch {
        Dispatch {
            state: Arc::clone(self.state),
        }
    }

    pub fn state_handle(&self) -> StateHandle {
        StateHandle {
            state: Arc::clone(self.state),
        }
    }
}

/// Write side of the store: the only way to change [`AppState`].
#[derive(Clone)]
pub struct Dispatch {
    state: SharedState,
}

impl Dispatch {
    pub fn dispatch(&self, action: AppAction) {
        let name = action.name();
        let mut guard = self.state.write();
        *guard = AppReducer::reduce(std::mem::take(&mut *guard), action);
        tracing::debug!(action = name, "Dispatched");
    }
}

/// Read side of the store.
#[derive(Clone)]
pub struct StateHandle {
    state: SharedState,
}

impl StateHandle {
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    pub fn read(&self) -> RwLockReadGuard<'_, AppState> {
        self.state.read()
    }
}

fn innermost() -> Option<SharedState> {
    PROVIDERS.with(|stack| stack.borrow().last().cloned())
}

pub fn try_use_app_state() -> Result<AppState, StoreError> {
    innermost()
        .map(|state| state.read().clone())
        .ok_or(StoreError::OutsideProvider {
            accessor: "use_app_state",
        })
}

pub fn try_use_app_dispatch() -> Result<Dispatch, StoreError> {
    innermost()
        .map(|state| Dispatch { state })
        .ok_or(StoreError::OutsideProvider {
            accessor: "use_app_dispatch",
        })
}

/// Snapshot of the innermost provider's state.
///
/// # Panics
///
/// Panics when no provider scope is open on this thread.
pub fn use_app_state() -> AppState {
    match try_use_app_state() {
        Ok(state) => state,
        Err(err) => panic!("{err}"),
    }
}

/// Dispatch handle of the innermost provider.
///
/// # Panics
///
/// Panics when no provider scope is open on this thread.
pub fn use_app_dispatch() -> Dispatch {
    match try_use_app_dispatch() {
        Ok(dispatch) => dispatch,
        Err(err) => panic!("{err}"),
    }
}
