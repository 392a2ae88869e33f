/// Marker for the actions a reducer accepts.
///
/// Intents come from key presses routed by the input layer and from the
/// step panels when they ask for the shared selection to change.
pub trait Intent: Send + 'static {}
