//! Evaluation engine
//!
//! A [`ValidatorSet`] is the normalized form of the arguments handed to a
//! [`Session`](crate::Session). The shape is decided once, when the set is
//! built:
//!
//! - the argument list is flattened one level;
//! - if the first entry is an `all` group, the set is [`ValidatorSet::AllOf`]
//!   over that group's rules;
//! - if the first entry is an `any` group, the set is [`ValidatorSet::AnyOf`];
//! - otherwise the whole list is [`ValidatorSet::Flat`], evaluated with AND
//!   semantics.
//!
//! A composite in first position takes precedence: any arguments after it
//! are dropped. A composite anywhere else is an entry that cannot produce a
//! validator, so it fails. Empty sets never pass.

use crate::compose::{flatten, Composite};
use crate::validator::Rule;
use crate::value::Value;

/// How a rule sequence combines its results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Every rule must pass. Stops at the first failure.
    All,
    /// At least one rule must pass. Stops at the first success.
    Any,
    /// An ungrouped list; evaluated like [`Mode::All`].
    Flat,
}

impl Mode {
    /// Lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::Any => "any",
            Mode::Flat => "flat",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized validator arguments.
///
/// # Example
///
/// ```rust
/// use sentinel::engine::{Mode, ValidatorSet};
/// use sentinel::{all, is_number, is_required, Rule, Value};
///
/// let set = ValidatorSet::from_args([Rule::from(all([is_number()])), is_required()]);
/// assert_eq!(set.mode(), Mode::All);
/// assert_eq!(set.len(), 1);
///
/// let set = ValidatorSet::from_args([is_required(), is_number()]);
/// assert_eq!(set.mode(), Mode::Flat);
/// assert!(set.evaluate(&Value::from(36)));
/// ```
#[derive(Clone, Debug)]
pub enum ValidatorSet {
    /// Rules of a leading `all` group.
    AllOf(Vec<Rule>),
    /// Rules of a leading `any` group.
    AnyOf(Vec<Rule>),
    /// An ungrouped rule list.
    Flat(Vec<Rule>),
}

impl ValidatorSet {
    /// Normalize a heterogeneous argument list.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Rule>,
    {
        let mut entries = flatten(args);
        if let Some(Rule::Group(_)) = entries.first() {
            #[cfg(feature = "tracing")]
            if entries.len() > 1 {
                tracing::debug!(
                    dropped = entries.len() - 1,
                    "leading group takes precedence; ignoring trailing arguments"
                );
            }
            entries.truncate(1);
            if let Some(Rule::Group(composite)) = entries.pop() {
                return composite.into();
            }
        }
        ValidatorSet::Flat(entries)
    }

    /// The combination mode.
    pub fn mode(&self) -> Mode {
        match self {
            ValidatorSet::AllOf(_) => Mode::All,
            ValidatorSet::AnyOf(_) => Mode::Any,
            ValidatorSet::Flat(_) => Mode::Flat,
        }
    }

    /// The rules, in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        match self {
            ValidatorSet::AllOf(rules) | ValidatorSet::AnyOf(rules) | ValidatorSet::Flat(rules) => {
                rules
            }
        }
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules().len()
    }

    /// Returns true if the set holds no rules. Empty sets never pass.
    pub fn is_empty(&self) -> bool {
        self.rules().is_empty()
    }

    /// Evaluate the value against the set.
    pub fn evaluate(&self, value: &Value) -> bool {
        match self {
            ValidatorSet::AllOf(rules) | ValidatorSet::Flat(rules) => every(rules, value),
            ValidatorSet::AnyOf(rules) => some(rules, value),
        }
    }
}

impl From<Composite> for ValidatorSet {
    fn from(composite: Composite) -> Self {
        match composite {
            Composite::All(rules) => ValidatorSet::AllOf(rules),
            Composite::Any(rules) => ValidatorSet::AnyOf(rules),
        }
    }
}

impl From<Rule> for ValidatorSet {
    fn from(rule: Rule) -> Self {
        ValidatorSet::from_args([rule])
    }
}

impl From<Vec<Rule>> for ValidatorSet {
    fn from(rules: Vec<Rule>) -> Self {
        ValidatorSet::from_args(rules)
    }
}

impl<const N: usize> From<[Rule; N]> for ValidatorSet {
    fn from(rules: [Rule; N]) -> Self {
        ValidatorSet::from_args(rules)
    }
}

/// AND over a rule sequence. Stops at the first failure; empty fails.
pub(crate) fn every(rules: &[Rule], value: &Value) -> bool {
    match rules.iter().position(|rule| !rule.evaluate(value)) {
        Some(_index) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(index = _index, total = rules.len(), "all: short-circuit on failure");
            false
        }
        None => !rules.is_empty(),
    }
}

/// OR over a rule sequence. Stops at the first success; empty fails.
pub(crate) fn some(rules: &[Rule], value: &Value) -> bool {
    match rules.iter().position(|rule| rule.evaluate(value)) {
        Some(_index) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(index = _index, total = rules.len(), "any: short-circuit on success");
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{all, any};
    use crate::testing::Counting;
    use serde_json::json;

    #[test]
    fn test_flat_list() {
        let set = ValidatorSet::from_args([Rule::from_fn(|_| true), Rule::from_fn(|_| true)]);
        assert_eq!(set.mode(), Mode::Flat);
        assert!(set.evaluate(&json!(1)));
    }

    #[test]
    fn test_flat_list_flattens_one_level() {
        let set = ValidatorSet::from_args([
            Rule::from_fn(|_| true),
            Rule::from(vec![Rule::from_fn(|_| true), Rule::from_fn(|_| false)]),
        ]);
        assert_eq!(set.len(), 3);
        assert!(!set.evaluate(&json!(1)));
    }

    #[test]
    fn test_leading_all_group() {
        let set = ValidatorSet::from(all([Rule::from_fn(|_| true)]));
        assert_eq!(set.mode(), Mode::All);
        assert!(set.evaluate(&json!(1)));
    }

    #[test]
    fn test_leading_any_group_inside_list() {
        let set = ValidatorSet::from(vec![Rule::from(vec![Rule::from(any([
            Rule::from_fn(|_| false),
            Rule::from_fn(|_| true),
        ]))])]);
        assert_eq!(set.mode(), Mode::Any);
        assert!(set.evaluate(&json!(1)));
    }

    #[test]
    fn test_leading_group_drops_trailing_arguments() {
        let trailing = Counting::failing();
        let set = ValidatorSet::from_args([
            Rule::from(all([Rule::from_fn(|_| true)])),
            trailing.rule(),
        ]);
        assert_eq!(set.len(), 1);
        assert!(set.evaluate(&json!(1)));
        assert_eq!(trailing.calls(), 0);
    }

    #[test]
    fn test_group_after_first_position_fails_closed() {
        let inner = Counting::passing();
        let set = ValidatorSet::from_args([
            Rule::from_fn(|_| true),
            Rule::from(any([inner.rule()])),
        ]);
        assert_eq!(set.mode(), Mode::Flat);
        assert!(!set.evaluate(&json!(1)));
        assert_eq!(inner.calls(), 0);
    }

    #[test]
    fn test_group_nested_in_leading_group_fails_closed() {
        let set = ValidatorSet::from(all([Rule::from(any([Rule::from_fn(|_| true)]))]));
        assert_eq!(set.mode(), Mode::All);
        assert!(!set.evaluate(&json!(1)));
    }

    #[test]
    fn test_empty_sets_fail() {
        assert!(!ValidatorSet::from(Vec::<Rule>::new()).evaluate(&json!(1)));
        assert!(!ValidatorSet::from(all(Vec::<Rule>::new())).evaluate(&json!(1)));
        assert!(!ValidatorSet::from(any(Vec::<Rule>::new())).evaluate(&json!(1)));
        assert!(ValidatorSet::from(Vec::<Rule>::new()).is_empty());
    }

    #[test]
    fn test_every_short_circuits() {
        let first = Counting::failing();
        let second = Counting::passing();
        assert!(!every(&[first.rule(), second.lazy_rule()], &json!(1)));
        assert_eq!(first.calls(), 1);
        assert_eq!(second.resolutions(), 0);
        assert_eq!(second.calls(), 0);
    }

    #[test]
    fn test_some_short_circuits() {
        let first = Counting::passing();
        let second = Counting::passing();
        assert!(some(&[first.rule(), second.rule()], &json!(1)));
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 0);
    }

    #[test]
    fn test_unresolvable_entry_fails_flat_list() {
        let set = ValidatorSet::from_args([Rule::from_fn(|_| true), Rule::Unresolvable]);
        assert!(!set.evaluate(&json!(1)));
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::All.to_string(), "all");
        assert_eq!(Mode::Any.as_str(), "any");
        assert_eq!(Mode::Flat.to_string(), "flat");
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn logs_dropped_trailing_arguments() {
            ValidatorSet::from_args([
                Rule::from(all([Rule::from_fn(|_| true)])),
                Rule::from_fn(|_| true),
            ]);
            assert!(logs_contain("leading group takes precedence"));
            assert!(logs_contain("dropped=1"));
        }

        #[traced_test]
        #[test]
        fn logs_group_outside_leading_position() {
            let set = ValidatorSet::from_args([
                Rule::from_fn(|_| true),
                Rule::from(any([Rule::from_fn(|_| true)])),
            ]);
            assert!(!set.evaluate(&json!(1)));
            assert!(logs_contain("rule entry cannot produce a validator"));
        }

        #[traced_test]
        #[test]
        fn logs_short_circuit() {
            every(&[Rule::from_fn(|_| false), Rule::from_fn(|_| true)], &json!(1));
            assert!(logs_contain("all: short-circuit on failure"));
        }
    }
}
