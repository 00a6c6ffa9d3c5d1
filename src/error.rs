//! Error types for the sugar layer.
//!
//! Every fallible operation in this crate reports a [`SugarError`]. Errors are
//! returned to the direct caller and never retried or translated.

use thiserror::Error;

/// Represents errors that can occur when using the sugared wrappers.
///
/// # Examples
///
/// ```rust
/// use indolent::error::SugarError;
/// use indolent::value::Opt;
///
/// let absent: Opt<i32> = Opt::none();
/// assert_eq!(absent.or_fail(), Err(SugarError::Absent));
/// assert_eq!(
///     format!("{}", SugarError::NoSuchElement),
///     "no such element: the iterator is exhausted"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SugarError {
    /// A value was required but the optional wrapper was absent.
    #[error("value required but not present")]
    Absent,

    /// An argument was outside the accepted domain (for example a chunk size of zero).
    #[error("illegal argument `{name}`: {reason}")]
    IllegalArgument {
        /// The name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A bounds-checked index operation received an index outside the collection.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The index as given by the caller (possibly negative).
        index: isize,
        /// The length of the collection at the time of the call.
        len: usize,
    },

    /// An element was pulled from an exhausted iterator.
    #[error("no such element: the iterator is exhausted")]
    NoSuchElement,

    /// A mutation path that is intentionally blocked was used.
    #[error("unsupported operation `{operation}`: {hint}")]
    Unsupported {
        /// The blocked operation.
        operation: &'static str,
        /// The operation to use instead.
        hint: &'static str,
    },

    /// A string could not be parsed into the requested type.
    #[error("cannot parse {input:?} as {target}")]
    Parse {
        /// The rejected input.
        input: String,
        /// The name of the requested type.
        target: &'static str,
    },

    /// A regular expression failed to compile.
    #[error("invalid regular expression {pattern:?}: {message}")]
    InvalidPattern {
        /// The rejected pattern source.
        pattern: String,
        /// The compiler diagnostic.
        message: String,
    },
}

/// Result alias used throughout the crate.
pub type SugarResult<T> = Result<T, SugarError>;

impl SugarError {
    pub(crate) fn illegal_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::IllegalArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn parse<T>(input: &str) -> Self {
        Self::Parse {
            input: input.to_owned(),
            target: std::any::type_name::<T>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_illegal_argument_display() {
        let error = SugarError::illegal_argument("size", "must be greater than 0");
        assert_eq!(
            format!("{error}"),
            "illegal argument `size`: must be greater than 0"
        );
    }

    #[rstest]
    fn test_index_out_of_bounds_display() {
        let error = SugarError::IndexOutOfBounds { index: -7, len: 3 };
        assert_eq!(format!("{error}"), "index -7 out of bounds for length 3");
    }

    #[rstest]
    fn test_parse_error_names_the_target_type() {
        let error = SugarError::parse::<i32>("forty-two");
        assert_eq!(format!("{error}"), "cannot parse \"forty-two\" as i32");
    }

    #[rstest]
    fn test_unsupported_display() {
        let error = SugarError::Unsupported {
            operation: "Entry::set_value",
            hint: "use Entry::update",
        };
        assert_eq!(
            format!("{error}"),
            "unsupported operation `Entry::set_value`: use Entry::update"
        );
    }
}
