use crate::value::Opt;

// =============================================================================
// Matching builder
// =============================================================================

/// Starts a match expression over `context`.
///
/// Every branch condition tests the context; the first branch that holds
/// computes the value from it.
///
/// # Examples
///
/// ```rust
/// use indolent::expr::matching;
///
/// let describe = |n: i32| {
///     matching(n)
///         .when(|n| *n < 0).then_with(|n| format!("minus {}", -n))
///         .when_eq(0).then(String::from("zero"))
///         .none_with(|n| n.to_string())
/// };
///
/// assert_eq!(describe(-3), "minus 3");
/// assert_eq!(describe(0), "zero");
/// assert_eq!(describe(12), "12");
/// ```
#[inline]
pub const fn matching<C>(context: C) -> Matching<C> {
    Matching { context }
}

/// A match expression without branches yet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a match expression does nothing until it is given a branch"]
pub struct Matching<C> {
    context: C,
}

impl<C> Matching<C> {
    /// Adds a branch taken when `predicate` holds for the context.
    pub fn when<P>(self, predicate: P) -> MatchArm<C>
    where
        P: FnOnce(&C) -> bool,
    {
        let matched = predicate(&self.context);
        MatchArm {
            context: self.context,
            matched,
        }
    }

    /// Adds a branch taken when the context equals `expected`.
    pub fn when_eq(self, expected: C) -> MatchArm<C>
    where
        C: PartialEq,
    {
        self.when(|context| *context == expected)
    }
}

/// The opening branch condition, before the value type is known.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a condition does nothing until it is given a branch value"]
pub struct MatchArm<C> {
    context: C,
    matched: bool,
}

impl<C> MatchArm<C> {
    /// The value of the expression when this branch is taken.
    #[inline]
    pub fn then<T>(self, value: T) -> MatchThen<C, T> {
        self.then_with(|_| value)
    }

    /// Computes the value from the context when this branch is taken.
    pub fn then_with<T, F>(self, value: F) -> MatchThen<C, T>
    where
        F: FnOnce(&C) -> T,
    {
        let resolved = self.matched.then(|| value(&self.context));
        MatchThen {
            context: self.context,
            resolved,
        }
    }
}

/// A later branch condition waiting for its value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a condition does nothing until it is given a branch value"]
pub struct MatchCase<C, T> {
    context: C,
    resolved: Option<T>,
    matched: bool,
}

impl<C, T> MatchCase<C, T> {
    /// The value of the expression when this branch is taken.
    #[inline]
    pub fn then(self, value: T) -> MatchThen<C, T> {
        self.then_with(|_| value)
    }

    /// Computes the value from the context when this branch is taken.
    pub fn then_with<F>(self, value: F) -> MatchThen<C, T>
    where
        F: FnOnce(&C) -> T,
    {
        let resolved = match self.resolved {
            Some(earlier) => Some(earlier),
            None => self.matched.then(|| value(&self.context)),
        };
        MatchThen {
            context: self.context,
            resolved,
        }
    }
}

/// A match expression with at least one branch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a match expression has no value until it is closed"]
pub struct MatchThen<C, T> {
    context: C,
    resolved: Option<T>,
}

impl<C, T> MatchThen<C, T> {
    /// Adds a branch taken when `predicate` holds and no earlier branch was taken.
    ///
    /// `predicate` is not called once a branch has been taken.
    pub fn when<P>(self, predicate: P) -> MatchCase<C, T>
    where
        P: FnOnce(&C) -> bool,
    {
        let matched = self.resolved.is_none() && predicate(&self.context);
        MatchCase {
            context: self.context,
            resolved: self.resolved,
            matched,
        }
    }

    /// Adds a branch taken when the context equals `expected`.
    pub fn when_eq(self, expected: C) -> MatchCase<C, T>
    where
        C: PartialEq,
    {
        self.when(|context| *context == expected)
    }

    /// Closes the expression with a fallback value.
    #[inline]
    pub fn none(self, fallback: T) -> T {
        self.resolved.unwrap_or(fallback)
    }

    /// Closes the expression with a fallback computed from the context.
    pub fn none_with<F>(self, fallback: F) -> T
    where
        F: FnOnce(&C) -> T,
    {
        match self.resolved {
            Some(value) => value,
            None => fallback(&self.context),
        }
    }

    /// Closes the expression with an error computed from the context.
    ///
    /// # Errors
    ///
    /// Returns the result of `error` when no branch was taken.
    pub fn fail<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce(&C) -> E,
    {
        match self.resolved {
            Some(value) => Ok(value),
            None => Err(error(&self.context)),
        }
    }

    /// Closes the expression, absent when no branch was taken.
    #[inline]
    pub fn opt(self) -> Opt<T> {
        Opt::from(self.resolved)
    }
}

// =============================================================================
// Match
// =============================================================================

/// A partial function from a context to an optional value.
///
/// Every closure `Fn(&C) -> Opt<V>` is a `Match`. [`defaults`](Self::defaults)
/// and [`failure`](Self::failure) complete it into a total function.
///
/// # Examples
///
/// ```rust
/// use indolent::prelude::*;
///
/// let small = |n: &i32| Opt::of(*n).filter(|n| *n < 10);
/// let clamp = small.defaults(|_| 9);
/// assert_eq!(clamp(&4), 4);
/// assert_eq!(clamp(&40), 9);
/// ```
pub trait Match<C, V> {
    /// Applies the match to `context`.
    fn apply(&self, context: &C) -> Opt<V>;

    /// Completes the match with a default computed from the context.
    fn defaults<F>(self, fallback: F) -> impl Fn(&C) -> V
    where
        Self: Sized,
        F: Fn(&C) -> V,
    {
        move |context: &C| self.apply(context).or_else_get(|| fallback(context))
    }

    /// Completes the match with an error computed from the context.
    fn failure<E, F>(self, error: F) -> impl Fn(&C) -> Result<V, E>
    where
        Self: Sized,
        F: Fn(&C) -> E,
    {
        move |context: &C| self.apply(context).or_fail_with(|| error(context))
    }
}

impl<C, V, M> Match<C, V> for M
where
    M: Fn(&C) -> Opt<V>,
{
    #[inline]
    fn apply(&self, context: &C) -> Opt<V> {
        self(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "one")]
    #[case(2, "two")]
    #[case(3, "two or more")]
    #[case(0, "many")]
    fn test_first_matching_branch_wins(#[case] n: i32, #[case] expected: &str) {
        let name = matching(n)
            .when_eq(1)
            .then("one")
            .when(|n| *n == 2)
            .then("two")
            .when(|n| *n >= 2)
            .then("two or more")
            .none("many");
        assert_eq!(name, expected);
    }

    #[rstest]
    fn test_predicates_after_a_match_are_not_called() {
        let value = matching("ctx")
            .when(|_| true)
            .then(1)
            .when(|_| panic!("predicate evaluated"))
            .then_with(|_| panic!("value evaluated"))
            .none(0);
        assert_eq!(value, 1);
    }

    #[rstest]
    fn test_fail_reports_the_context() {
        let result = matching(7)
            .when(|n| *n < 0)
            .then("negative")
            .fail(|n| format!("unmatched {n}"));
        assert_eq!(result, Err(String::from("unmatched 7")));
    }

    #[rstest]
    fn test_match_failure() {
        let even = |n: &i32| Opt::of(*n / 2).filter(|_| n % 2 == 0);
        let halve = even.failure(|n| format!("{n} is odd"));
        assert_eq!(halve(&8), Ok(4));
        assert_eq!(halve(&3), Err(String::from("3 is odd")));
    }
}
