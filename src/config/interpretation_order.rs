use std::str::FromStr;

/// Variant orders in which to examine interpretations when deciding theoremhood.
///
/// The order has no influence on whether a formula is a theorem, though if a formula is not a theorem the counterexample found may differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum InterpretationOrder {
    /// The order of [generation](crate::procedures::generate).
    ///
    /// Interpretations are generated only when required, and generation stops at the first counterexample.
    Canonical = 0,

    /// All interpretations are generated, and then shuffled using the rng of the context.
    Shuffled,
}

impl std::fmt::Display for InterpretationOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Canonical => write!(f, "Canonical"),
            Self::Shuffled => write!(f, "Shuffled"),
        }
    }
}

impl InterpretationOrder {
    /// The minimum InterpretationOrder type.
    pub const MIN: InterpretationOrder = InterpretationOrder::Canonical;

    /// The maximum InterpretationOrder type.
    pub const MAX: InterpretationOrder = InterpretationOrder::Shuffled;
}

impl FromStr for InterpretationOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Canonical" => Ok(Self::Canonical),

            "Shuffled" => Ok(Self::Shuffled),

            _unknown_string => Err(()),
        }
    }
}

#[cfg(test)]
mod order_tests {
    use super::*;

    #[test]
    fn strings() {
        for order in [InterpretationOrder::MIN, InterpretationOrder::MAX] {
            assert_eq!(order.to_string().parse::<InterpretationOrder>(), Ok(order));
        }
        assert!("Random".parse::<InterpretationOrder>().is_err());
    }
}
