//! Tuning knobs for the session controllers.

/// Shortest entity-name prefix that triggers an autocomplete lookup.
/// Below this the suggestion list is cleared without touching the network.
pub const MIN_SUGGESTION_PREFIX: usize = 2;

/// Keystroke debounce before an autocomplete lookup is issued, in ms.
pub const SUGGESTION_DEBOUNCE_MS: u32 = 200;
