//! Base trait for UI state in MVI architecture.

/// Marker trait for state objects held by a [`Store`](crate::store::Store).
///
/// States should be:
/// - Values (Clone to hand out snapshots)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq so old and new states can be compared)
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
