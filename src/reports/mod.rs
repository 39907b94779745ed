/*!
Reports for the context, and the verdict of a decision.
*/

use crate::{context::ContextState, structures::interpretation::Interpretation};

/// High-level reports regarding a decision.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is a theorem.
    Theorem,

    /// The formula of the context is not a theorem.
    NotTheorem,

    /// Theoremhood of the formula of the context is unknown, for some reason.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Configuration | ContextState::Input | ContextState::Deciding => {
                Self::Unknown
            }
            ContextState::Theorem => Self::Theorem,
            ContextState::Refuted => Self::NotTheorem,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Theorem => write!(f, "Theorem"),
            Self::NotTheorem => write!(f, "Not a theorem"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The verdict of a decision.
///
/// Either the formula is a theorem, or the formula is false on some (counter)model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Theorem,
    Countermodel(Interpretation),
}

impl Verdict {
    pub fn is_theorem(&self) -> bool {
        matches!(self, Self::Theorem)
    }

    /// The counterexample to the formula, if the formula is not a theorem.
    pub fn counterexample(&self) -> Option<&Interpretation> {
        match self {
            Self::Theorem => None,
            Self::Countermodel(interpretation) => Some(interpretation),
        }
    }
}

impl From<&Verdict> for Report {
    fn from(value: &Verdict) -> Self {
        match value {
            Verdict::Theorem => Self::Theorem,
            Verdict::Countermodel(_) => Self::NotTheorem,
        }
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;
    use crate::structures::interpretation::Assignment;

    #[test]
    fn states() {
        assert_eq!(Report::from(ContextState::Input), Report::Unknown);
        assert_eq!(Report::from(ContextState::Theorem), Report::Theorem);
        assert_eq!(Report::from(ContextState::Refuted), Report::NotTheorem);
    }

    #[test]
    fn verdicts() {
        let interpretation = Interpretation::from_assignments(vec![Assignment::default()]).unwrap();
        let refuted = Verdict::Countermodel(interpretation.clone());

        assert!(Verdict::Theorem.is_theorem());
        assert!(!refuted.is_theorem());
        assert_eq!(refuted.counterexample(), Some(&interpretation));
        assert_eq!(Report::from(&refuted).to_string(), "Not a theorem");
    }
}
