use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Default)]
pub struct Counters {
    /// A count of the interpretations examined during the last decision.
    pub interpretations: usize,

    /// The time taken during the last decision.
    pub time: Duration,
}
