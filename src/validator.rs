//! Core validator trait and rule entries
//!
//! A [`Validator`] is a stateless predicate over a [`Value`]. A [`Rule`] is
//! an entry in a rule list: something that yields a validator when
//! evaluation reaches it.

use std::fmt;
use std::sync::Arc;

use crate::compose::Composite;
use crate::value::Value;

/// A stateless predicate over subject values.
///
/// Implementations must be total: on a type mismatch or missing data they
/// return `false`, never panic.
///
/// # Example
///
/// ```rust
/// use sentinel::{Validator, Value};
///
/// let is_even = |value: &Value| value.as_i64().is_some_and(|n| n % 2 == 0);
/// assert!(is_even.evaluate(&Value::from(4)));
/// assert!(!is_even.evaluate(&Value::from("4")));
/// ```
pub trait Validator: Send + Sync {
    /// Check whether the value passes this validator.
    fn evaluate(&self, value: &Value) -> bool;
}

// Blanket impl for closures
impl<F> Validator for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    #[inline]
    fn evaluate(&self, value: &Value) -> bool {
        self(value)
    }
}

/// Validator that rejects every value.
///
/// Stands in for entries that cannot produce a validator.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysFalse;

impl Validator for AlwaysFalse {
    #[inline]
    fn evaluate(&self, _value: &Value) -> bool {
        false
    }
}

type FactoryFn = dyn Fn() -> Arc<dyn Validator> + Send + Sync;

/// One entry of a rule list.
///
/// Every rule constructor in [`crate::rules`] returns a `Rule`. Entries are
/// cheap to clone and resolve to a validator with [`Rule::resolve`].
///
/// # Example
///
/// ```rust
/// use sentinel::{is_number, Rule, Value};
///
/// let rule = is_number();
/// assert!(rule.resolve().evaluate(&Value::from(36)));
///
/// let custom = Rule::from_fn(|value| value.is_string());
/// assert!(custom.evaluate(&Value::from("text")));
/// ```
#[derive(Clone)]
pub enum Rule {
    /// A validator built ahead of time.
    Validator(Arc<dyn Validator>),
    /// A factory invoked each time the rule is resolved.
    Factory(Arc<FactoryFn>),
    /// An all/any group.
    ///
    /// Only the leading argument of a session is read as a group. Anywhere
    /// else the entry cannot produce a validator and resolves to
    /// [`AlwaysFalse`].
    Group(Composite),
    /// A list of entries, spliced in place by one-level flattening.
    ///
    /// A list that is still present after flattening cannot produce a
    /// validator and resolves to [`AlwaysFalse`].
    List(Vec<Rule>),
    /// An entry that cannot produce a validator. Always fails.
    Unresolvable,
}

impl Rule {
    /// Wrap a pre-built validator.
    pub fn new<V: Validator + 'static>(validator: V) -> Self {
        Rule::Validator(Arc::new(validator))
    }

    /// Wrap a closure as a rule.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(f)
    }

    /// Wrap a factory that builds the validator when the rule is resolved.
    ///
    /// The factory runs once per resolution, so it is skipped entirely for
    /// entries after a short-circuit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sentinel::{Rule, Value};
    ///
    /// let rule = Rule::factory(|| |value: &Value| value.is_null());
    /// assert!(rule.evaluate(&Value::Null));
    /// ```
    pub fn factory<F, V>(f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Validator + 'static,
    {
        Rule::Factory(Arc::new(move || Arc::new(f()) as Arc<dyn Validator>))
    }

    /// Resolve this entry to a validator.
    pub fn resolve(&self) -> Arc<dyn Validator> {
        match self {
            Rule::Validator(validator) => Arc::clone(validator),
            Rule::Factory(factory) => factory(),
            Rule::Group(_) | Rule::List(_) | Rule::Unresolvable => {
                #[cfg(feature = "tracing")]
                tracing::warn!(entry = ?self, "rule entry cannot produce a validator; failing closed");
                Arc::new(AlwaysFalse)
            }
        }
    }

    /// Resolve and evaluate in one step.
    pub fn evaluate(&self, value: &Value) -> bool {
        self.resolve().evaluate(value)
    }

    /// Returns true if this entry always fails when resolved.
    pub fn is_unresolvable(&self) -> bool {
        matches!(self, Rule::Group(_) | Rule::List(_) | Rule::Unresolvable)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Validator(_) => f.write_str("Rule::Validator(..)"),
            Rule::Factory(_) => f.write_str("Rule::Factory(..)"),
            Rule::Group(composite) => f.debug_tuple("Rule::Group").field(composite).finish(),
            Rule::List(items) => f.debug_tuple("Rule::List").field(items).finish(),
            Rule::Unresolvable => f.write_str("Rule::Unresolvable"),
        }
    }
}

impl From<Composite> for Rule {
    fn from(composite: Composite) -> Self {
        Rule::Group(composite)
    }
}

impl From<Vec<Rule>> for Rule {
    fn from(rules: Vec<Rule>) -> Self {
        Rule::List(rules)
    }
}

impl<const N: usize> From<[Rule; N]> for Rule {
    fn from(rules: [Rule; N]) -> Self {
        Rule::List(rules.into())
    }
}

impl From<Option<Rule>> for Rule {
    fn from(rule: Option<Rule>) -> Self {
        rule.unwrap_or(Rule::Unresolvable)
    }
}
