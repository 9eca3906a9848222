//! Model-View-Intent (MVI) primitives.
//!
//! The application store is built on these traits: every state
//! transition goes through a [`Reducer`] fed with an [`Intent`].
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: snapshot of everything a view needs to render
//! - **Intent**: user actions or fetch completions
//! - **Reducer**: pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
