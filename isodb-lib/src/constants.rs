/// Allowed deviation of an element's abundance sum from 100 (percentage points).
pub const ABUNDANCE_SUM_TOLERANCE: f64 = 0.5;

/// Half-width of the window around 100 within which a weight total is
/// interpreted as percentages rather than arbitrary mass weights.
pub const WEIGHT_PERCENT_WINDOW: f64 = 1.0;
