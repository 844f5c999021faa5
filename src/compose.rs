//! Rule composers
//!
//! [`all`] and [`any`] tag a list of rules as an AND group or an OR group.
//! Composing never evaluates anything: it only shapes the rule list, keeping
//! declaration order, which is also evaluation order.
//!
//! A group decides the verdict only as the leading argument of a
//! [`Session`](crate::Session). Groups nested inside other groups, or placed
//! after the first entry of a list, cannot produce a validator and fail.
//!
//! # Example
//!
//! ```rust
//! use sentinel::{all, any, has_min_max_length, is_email, is_greater_than, Session};
//!
//! let strict = all([is_email(), has_min_max_length(10, 13)]);
//! assert!(Session::new("johndoe@example.com", strict).is_invalid());
//!
//! let loose = any([is_email(), is_greater_than(30)]);
//! assert!(Session::new(36, loose).is_valid());
//! ```

use crate::engine::Mode;
use crate::validator::Rule;

/// A tagged AND/OR grouping of rules.
///
/// Built by [`all`] / [`any`] (or the [`all!`](crate::all!) /
/// [`any!`](crate::any!) macros) and consumed by
/// [`ValidatorSet`](crate::ValidatorSet).
#[derive(Clone, Debug)]
pub enum Composite {
    /// Every rule must pass.
    All(Vec<Rule>),
    /// At least one rule must pass.
    Any(Vec<Rule>),
}

impl Composite {
    /// The group's combination mode.
    pub fn mode(&self) -> Mode {
        match self {
            Composite::All(_) => Mode::All,
            Composite::Any(_) => Mode::Any,
        }
    }

    /// The grouped rules, in declaration order.
    pub fn rules(&self) -> &[Rule] {
        match self {
            Composite::All(rules) | Composite::Any(rules) => rules,
        }
    }

    /// Number of grouped rules.
    pub fn len(&self) -> usize {
        self.rules().len()
    }

    /// Returns true if the group holds no rules. Empty groups never pass.
    pub fn is_empty(&self) -> bool {
        self.rules().is_empty()
    }
}

/// Flatten entries one level: [`Rule::List`] entries are spliced in place.
///
/// Lists nested deeper than one level stay as entries and fail when resolved.
pub(crate) fn flatten<I>(entries: I) -> Vec<Rule>
where
    I: IntoIterator,
    I::Item: Into<Rule>,
{
    let mut flat = Vec::new();
    for entry in entries {
        match entry.into() {
            Rule::List(items) => flat.extend(items),
            other => flat.push(other),
        }
    }
    flat
}

/// Group rules so that every one must pass.
///
/// Lists among the entries are flattened one level.
///
/// # Example
///
/// ```rust
/// use sentinel::{all, is_greater_than, is_number, Rule, Session};
///
/// let group = all([is_number(), Rule::from(vec![is_greater_than(30)])]);
/// assert_eq!(group.len(), 2);
/// assert!(Session::new(36, group.clone()).is_valid());
/// assert!(Session::new(20, group).is_invalid());
/// ```
pub fn all<I>(rules: I) -> Composite
where
    I: IntoIterator,
    I::Item: Into<Rule>,
{
    Composite::All(flatten(rules))
}

/// Group rules so that at least one must pass.
///
/// Lists among the entries are flattened one level.
///
/// # Example
///
/// ```rust
/// use sentinel::{any, is_email, is_greater_than, Session};
///
/// let group = any([is_email(), is_greater_than(30)]);
/// assert!(Session::new(36, group.clone()).is_valid());
/// assert!(Session::new(12, group).is_invalid());
/// ```
pub fn any<I>(rules: I) -> Composite
where
    I: IntoIterator,
    I::Item: Into<Rule>,
{
    Composite::Any(flatten(rules))
}

/// Build an AND group from a heterogeneous list of rules, rule lists and
/// composites.
///
/// # Example
///
/// ```rust
/// use sentinel::{is_greater_than, is_number, is_required, Session};
///
/// let group = sentinel::all![is_required(), vec![is_number(), is_greater_than(30)]];
/// assert_eq!(group.len(), 3);
/// assert!(Session::new(36, group).is_valid());
/// ```
#[macro_export]
macro_rules! all {
    ($($rule:expr),* $(,)?) => {
        $crate::all(::std::vec::Vec::<$crate::Rule>::from([$($crate::Rule::from($rule)),*]))
    };
}

/// Build an OR group from a heterogeneous list of rules, rule lists and
/// composites.
///
/// # Example
///
/// ```rust
/// use sentinel::{any, is_email, is_number, Session};
///
/// let group = sentinel::any![is_email(), vec![is_number()]];
/// assert!(Session::new("36", group).is_valid());
/// ```
#[macro_export]
macro_rules! any {
    ($($rule:expr),* $(,)?) => {
        $crate::any(::std::vec::Vec::<$crate::Rule>::from([$($crate::Rule::from($rule)),*]))
    };
}
