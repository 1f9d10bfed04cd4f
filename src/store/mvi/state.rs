//! Base trait for slice state.

/// Marker trait for slice state objects.
///
/// States should be:
/// - Cheap to snapshot (Clone)
/// - Self-contained (all data a consumer needs)
/// - Comparable (PartialEq for change detection)
pub trait SliceState: Clone + PartialEq + Default + Send + 'static {}
