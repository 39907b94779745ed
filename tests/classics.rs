use otter_monadic::{
    builder::check_formula,
    procedures::{decide::decide, generate::Interpretations},
    structures::interpretation::Assignment,
};

mod theorems {
    use super::*;

    #[test]
    fn quantifier_exchange() {
        for formula in [
            "@x(Px)>!x(Px)",
            "-@x(Px)>!x(-Px)",
            "-!x(Px)>@x(-Px)",
            "!x@y(x=y)>@x@y(x=y)",
            "@x(=xx)",
        ] {
            assert!(decide(formula).unwrap().is_theorem(), "{formula}");
        }
    }

    #[test]
    fn distribution() {
        for formula in [
            "@x(Px*Qx)>(@x(Px)*@x(Qx))",
            "(@x(Px)+@x(Qx))>@x(Px+Qx)",
            "!x(Px*Qx)>(!x(Px)*!x(Qx))",
        ] {
            assert!(decide(formula).unwrap().is_theorem(), "{formula}");
        }
    }

    #[test]
    fn syllogism() {
        let formula = "(@x(Px>Qx)*@x(Qx>Rx))>@x(Px>Rx)";
        assert!(decide(formula).unwrap().is_theorem());

        let signature = check_formula(formula).unwrap().signature();
        assert_eq!(Interpretations::count_of(&signature), Some(255));
    }
}

mod non_theorems {
    use super::*;

    #[test]
    fn some_is_not_all() {
        let verdict = decide("!x(Px)>@x(Px)").unwrap();
        let Some(counterexample) = verdict.counterexample() else {
            panic!("A counterexample");
        };

        let domain = counterexample
            .iter()
            .map(|(_, assignment)| assignment.clone())
            .collect::<Vec<_>>();
        assert_eq!(
            domain,
            vec![
                Assignment::from([('P', true)]),
                Assignment::from([('P', false)])
            ]
        );
    }

    #[test]
    fn disjunction_does_not_distribute() {
        let verdict = decide("@x(Px+Qx)>(@x(Px)+@x(Qx))").unwrap();
        let Some(counterexample) = verdict.counterexample() else {
            panic!("A counterexample");
        };
        assert_eq!(counterexample.size(), 2);

        let conjunction = decide("(!x(Px)*!x(Qx))>!x(Px*Qx)").unwrap();
        assert!(!conjunction.is_theorem());
    }

    #[test]
    fn counting() {
        let verdict = decide("@x@y(x=y)").unwrap();
        let Some(counterexample) = verdict.counterexample() else {
            panic!("A counterexample");
        };
        assert_eq!(counterexample.size(), 2);
        assert!(counterexample.iter().all(|(_, assignment)| assignment.is_empty()));

        assert!(!decide("@x!y-(x=y)").unwrap().is_theorem());
        assert!(!decide("!x!y-(x=y)").unwrap().is_theorem());
    }

    #[test]
    fn closure_and_scope() {
        for formula in ["((Px))", "@x!x(Px)", "@x(Py)"] {
            assert!(!decide(formula).unwrap().is_theorem(), "{formula}");
        }
    }
}
