/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, keyed to the stages of reading and deciding a formula.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [normalization](crate::builder::normalize)
    pub const NORMALIZE: &str = "normalize";

    /// Logs related to [parsing](crate::builder::parse)
    pub const PARSE: &str = "parse";

    /// Logs related to the [well-formedness check](crate::builder::check)
    pub const CHECK: &str = "check";

    /// Logs related to [generating interpretations](crate::procedures::generate)
    pub const GENERATE: &str = "generate";

    /// Logs related to [evaluation](crate::procedures::evaluate)
    pub const EVALUATE: &str = "evaluate";

    /// Logs related to [deciding theoremhood](crate::procedures::decide)
    pub const DECIDE: &str = "decide";
}
