use crate::value::Opt;

/// Starts a conditional expression with `condition`.
///
/// The first branch whose condition holds decides the value. Later
/// conditions and values are not evaluated once a branch has been taken.
///
/// # Examples
///
/// ```rust
/// use indolent::expr::when;
///
/// let n = 7;
/// let parity = when(n % 2 == 0).then("even").when(n % 2 == 1).then("odd").none("?");
/// assert_eq!(parity, "odd");
///
/// let size = when(n > 100).then("large").when(n > 10).then("medium").none("small");
/// assert_eq!(size, "small");
/// ```
#[inline]
pub const fn when(condition: bool) -> When {
    When { matched: condition }
}

/// Starts a conditional expression with a lazily evaluated condition.
#[inline]
pub fn when_with<H>(condition: H) -> When
where
    H: FnOnce() -> bool,
{
    when(condition())
}

/// The opening condition of a [`when`] chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a condition does nothing until it is given a branch value"]
pub struct When {
    matched: bool,
}

impl When {
    /// The value of the chain when this condition holds.
    #[inline]
    pub fn then<T>(self, value: T) -> Then<T> {
        Then {
            resolved: self.matched.then_some(value),
        }
    }

    /// Like [`then`](Self::then), evaluating `value` only when the condition holds.
    #[inline]
    pub fn then_with<T, F>(self, value: F) -> Then<T>
    where
        F: FnOnce() -> T,
    {
        Then {
            resolved: self.matched.then(value),
        }
    }
}

/// A chain with at least one branch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a chain has no value until it is closed with `none`, `fail` or `opt`"]
pub struct Then<T> {
    resolved: Option<T>,
}

impl<T> Then<T> {
    /// Adds an `else if` branch.
    #[inline]
    pub fn when(self, condition: bool) -> Case<T> {
        let matched = self.resolved.is_none() && condition;
        Case {
            resolved: self.resolved,
            matched,
        }
    }

    /// Adds an `else if` branch whose condition is evaluated only when no
    /// earlier branch was taken.
    #[inline]
    pub fn when_with<H>(self, condition: H) -> Case<T>
    where
        H: FnOnce() -> bool,
    {
        let matched = self.resolved.is_none() && condition();
        Case {
            resolved: self.resolved,
            matched,
        }
    }

    /// Closes the chain with a fallback value.
    #[inline]
    pub fn none(self, fallback: T) -> T {
        self.resolved.unwrap_or(fallback)
    }

    /// Closes the chain with a lazily evaluated fallback.
    #[inline]
    pub fn none_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.resolved.unwrap_or_else(fallback)
    }

    /// Closes the chain with an error when no branch was taken.
    ///
    /// # Errors
    ///
    /// Returns the result of `error` when every condition was false.
    #[inline]
    pub fn fail<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.resolved.ok_or_else(error)
    }

    /// Closes the chain, absent when no branch was taken.
    #[inline]
    pub fn opt(self) -> Opt<T> {
        Opt::from(self.resolved)
    }
}

/// An `else if` condition waiting for its value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a condition does nothing until it is given a branch value"]
pub struct Case<T> {
    resolved: Option<T>,
    matched: bool,
}

impl<T> Case<T> {
    /// The value of the chain when this condition holds.
    #[inline]
    pub fn then(self, value: T) -> Then<T> {
        self.then_with(|| value)
    }

    /// Like [`then`](Self::then), evaluating `value` only when this branch is taken.
    #[inline]
    pub fn then_with<F>(self, value: F) -> Then<T>
    where
        F: FnOnce() -> T,
    {
        let resolved = match self.resolved {
            Some(earlier) => Some(earlier),
            None => self.matched.then(value),
        };
        Then { resolved }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, false, 3)]
    #[case(false, true, 2)]
    #[case(true, false, 1)]
    #[case(true, true, 1)]
    fn test_first_true_branch_wins(#[case] first: bool, #[case] second: bool, #[case] expected: i32) {
        assert_eq!(when(first).then(1).when(second).then(2).none(3), expected);
    }

    #[rstest]
    fn test_lazy_parts_are_skipped_after_a_match() {
        let value = when(true)
            .then(1)
            .when_with(|| panic!("condition evaluated"))
            .then_with(|| panic!("value evaluated"))
            .none_with(|| panic!("fallback evaluated"));
        assert_eq!(value, 1);
    }

    #[rstest]
    fn test_fail_and_opt_when_nothing_matches() {
        assert_eq!(when(false).then(1).fail(|| "no branch"), Err("no branch"));
        assert_eq!(when(false).then(1).opt(), Opt::none());
        assert_eq!(when_with(|| true).then_with(|| 5).opt(), Opt::of(5));
    }
}
