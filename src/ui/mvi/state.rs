/// Marker for screen state.
///
/// `Default` is the mount-time state, `PartialEq` lets callers tell whether
/// a dispatch changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
