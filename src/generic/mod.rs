//! Generic structures, not specific to formulas or interpretations.

pub mod odometer;
pub mod random;
