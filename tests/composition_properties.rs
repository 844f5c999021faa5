//! Property-based tests for rule composition

use proptest::prelude::*;
use sentinel::testing::Counting;
use sentinel::{Rule, Session, Value};

fn stubs(verdicts: &[bool]) -> Vec<Counting> {
    verdicts
        .iter()
        .map(|&pass| if pass { Counting::passing() } else { Counting::failing() })
        .collect()
}

fn rules(stubs: &[Counting]) -> Vec<Rule> {
    stubs.iter().map(Counting::rule).collect()
}

fn subject() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9@.]{0,20}".prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn prop_all_matches_iterator_all(
        verdicts in prop::collection::vec(any::<bool>(), 0..12),
        value in subject(),
    ) {
        let stubs = stubs(&verdicts);
        let session = Session::new(value, sentinel::all(rules(&stubs)));

        let expected = !verdicts.is_empty() && verdicts.iter().all(|&v| v);
        prop_assert_eq!(session.is_valid(), expected);
    }

    #[test]
    fn prop_any_matches_iterator_any(
        verdicts in prop::collection::vec(any::<bool>(), 0..12),
        value in subject(),
    ) {
        let stubs = stubs(&verdicts);
        let session = Session::new(value, sentinel::any(rules(&stubs)));

        prop_assert_eq!(session.is_valid(), verdicts.iter().any(|&v| v));
    }

    #[test]
    fn prop_flat_list_matches_all(
        verdicts in prop::collection::vec(any::<bool>(), 0..12),
    ) {
        let stubs = stubs(&verdicts);
        let flat = Session::new(1, rules(&stubs)).is_valid();
        let grouped = Session::new(1, sentinel::all(rules(&stubs))).is_valid();

        prop_assert_eq!(flat, grouped);
    }

    #[test]
    fn prop_all_stops_at_first_failure(
        verdicts in prop::collection::vec(any::<bool>(), 1..12),
    ) {
        let stubs = stubs(&verdicts);
        Session::new(1, sentinel::all(rules(&stubs)));

        let cutoff = verdicts.iter().position(|&v| !v).unwrap_or(verdicts.len() - 1);
        for (index, stub) in stubs.iter().enumerate() {
            let expected = usize::from(index <= cutoff);
            prop_assert_eq!(stub.calls(), expected, "rule {}", index);
        }
    }

    #[test]
    fn prop_any_stops_at_first_success(
        verdicts in prop::collection::vec(any::<bool>(), 1..12),
    ) {
        let stubs = stubs(&verdicts);
        Session::new(1, sentinel::any(rules(&stubs)));

        let cutoff = verdicts.iter().position(|&v| v).unwrap_or(verdicts.len() - 1);
        for (index, stub) in stubs.iter().enumerate() {
            let expected = usize::from(index <= cutoff);
            prop_assert_eq!(stub.calls(), expected, "rule {}", index);
        }
    }

    #[test]
    fn prop_one_level_flattening_preserves_verdict(
        head in prop::collection::vec(any::<bool>(), 0..6),
        tail in prop::collection::vec(any::<bool>(), 0..6),
    ) {
        let head_stubs = stubs(&head);
        let tail_stubs = stubs(&tail);

        let nested = sentinel::all([Rule::from(rules(&head_stubs)), Rule::from(rules(&tail_stubs))]);
        let mut joined = rules(&head_stubs);
        joined.extend(rules(&tail_stubs));

        prop_assert_eq!(
            Session::new(1, nested).is_valid(),
            Session::new(1, sentinel::all(joined)).is_valid()
        );
    }

    #[test]
    fn prop_verdict_is_boolean_complement(
        verdicts in prop::collection::vec(any::<bool>(), 0..8),
        use_any in any::<bool>(),
        value in subject(),
    ) {
        let stubs = stubs(&verdicts);
        let session = if use_any {
            Session::new(value, sentinel::any(rules(&stubs)))
        } else {
            Session::new(value, sentinel::all(rules(&stubs)))
        };

        prop_assert_eq!(session.is_invalid(), !session.is_valid());
    }
}
