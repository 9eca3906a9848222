//! Base trait for state held by an MVI store.

/// Marker trait for state objects.
///
/// States are cloned to hand out snapshots, compared to detect changes,
/// and start from `Default` when no seed is supplied.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
