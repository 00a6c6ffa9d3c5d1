//! A sugared regex matcher.

use std::fmt;
use std::str::FromStr;

use regex::{Captures, Regex};

use crate::collection::Slist;
use crate::error::{SugarError, SugarResult};
use crate::iter::{SIter, Source};
use crate::value::Opt;

/// A compiled pattern with fluent matching helpers.
///
/// [`matches`](Self::matches) requires the whole haystack to match; the other
/// operations look for matches anywhere in it.
///
/// # Examples
///
/// ```rust
/// use indolent::text::SMatcher;
///
/// let digits = SMatcher::new(r"\d+")?;
///
/// assert!(digits.matches("2024"));
/// assert!(!digits.matches("year 2024"));
/// assert_eq!(digits.iter("a1 b22 c333").list().into_vec(), vec!["1", "22", "333"]);
/// assert_eq!(digits.replace_with("a1 b22", |found| format!("<{found}>")), "a<1> b<22>");
/// # Ok::<(), indolent::error::SugarError>(())
/// ```
#[derive(Clone)]
pub struct SMatcher {
    pattern: String,
    regex: Regex,
    whole: Regex,
}

impl SMatcher {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`SugarError::InvalidPattern`] when `pattern` does not compile.
    pub fn new(pattern: &str) -> SugarResult<Self> {
        Self::build(pattern, pattern)
    }

    /// Compiles `pattern` with case-insensitive matching.
    ///
    /// # Errors
    ///
    /// Returns [`SugarError::InvalidPattern`] when `pattern` does not compile.
    pub fn ignore_case(pattern: &str) -> SugarResult<Self> {
        Self::build(&format!("(?i:{pattern})"), pattern)
    }

    fn build(source: &str, pattern: &str) -> SugarResult<Self> {
        Ok(Self {
            pattern: pattern.to_owned(),
            regex: compile(source, pattern)?,
            whole: compile(&format!("^(?:{source})$"), pattern)?,
        })
    }

    /// The pattern as passed in, without any flags added by the constructor.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns `true` when the whole `haystack` matches.
    #[inline]
    pub fn matches(&self, haystack: &str) -> bool {
        self.whole.is_match(haystack)
    }

    /// Returns `true` when `haystack` contains a match.
    #[inline]
    pub fn contains(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// Returns the first match.
    pub fn find<'h>(&self, haystack: &'h str) -> Opt<&'h str> {
        Opt::from(self.regex.find(haystack).map(|found| found.as_str()))
    }

    /// Returns a lazy iterator over every match.
    pub fn iter<'h>(&self, haystack: &'h str) -> SIter<Source<impl Iterator<Item = &'h str>>> {
        SIter::of(self.regex.find_iter(haystack).map(|found| found.as_str()))
    }

    /// Counts the matches.
    pub fn count(&self, haystack: &str) -> usize {
        self.regex.find_iter(haystack).count()
    }

    /// Returns the groups of the first match.
    ///
    /// Position 0 is the whole match; groups that did not take part in the
    /// match are absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use indolent::prelude::*;
    ///
    /// let pair = SMatcher::new(r"(\w+)=(\d+)?")?;
    /// let groups = pair.captures("name=").or_else_get(Slist::new);
    /// assert_eq!(groups, slist![Opt::of("name="), Opt::of("name"), Opt::none()]);
    /// # Ok::<(), indolent::error::SugarError>(())
    /// ```
    pub fn captures<'h>(&self, haystack: &'h str) -> Opt<Slist<Opt<&'h str>>> {
        Opt::from(self.regex.captures(haystack)).map(|captures| {
            captures
                .iter()
                .map(|group| Opt::from(group.map(|found| found.as_str())))
                .collect()
        })
    }

    /// Runs `action` on every match.
    pub fn each<F>(&self, haystack: &str, mut action: F) -> &Self
    where
        F: FnMut(&str),
    {
        for found in self.regex.find_iter(haystack) {
            action(found.as_str());
        }
        self
    }

    /// Replaces every match with the result of `replacement` applied to it.
    pub fn replace_with<F>(&self, haystack: &str, mut replacement: F) -> String
    where
        F: FnMut(&str) -> String,
    {
        self.regex
            .replace_all(haystack, |captures: &Captures<'_>| {
                replacement(captures.get(0).map_or("", |found| found.as_str()))
            })
            .into_owned()
    }

    /// Replaces every match with `replacement`, expanding `$n` group references.
    pub fn replace_matches(&self, haystack: &str, replacement: &str) -> String {
        self.regex.replace_all(haystack, replacement).into_owned()
    }

    /// Splits `haystack` around the matches.
    pub fn split<'h>(&self, haystack: &'h str) -> Slist<&'h str> {
        self.regex.split(haystack).collect()
    }
}

fn compile(source: &str, pattern: &str) -> SugarResult<Regex> {
    Regex::new(source).map_err(|error| SugarError::InvalidPattern {
        pattern: pattern.to_owned(),
        message: error.to_string(),
    })
}

impl FromStr for SMatcher {
    type Err = SugarError;

    fn from_str(pattern: &str) -> SugarResult<Self> {
        Self::new(pattern)
    }
}

impl fmt::Debug for SMatcher {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("SMatcher").field(&self.pattern()).finish()
    }
}

impl fmt::Display for SMatcher {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.pattern())
    }
}
