use std::str::FromStr;

use crate::error::{SugarError, SugarResult};
use crate::value::Opt;

/// Parses `input` as any [`FromStr`] type.
///
/// # Errors
///
/// Returns [`SugarError::Parse`] naming the input and the target type.
///
/// # Examples
///
/// ```rust
/// use indolent::text::parse_as;
///
/// let port: u16 = parse_as("8080")?;
/// assert_eq!(port, 8080);
/// assert!(parse_as::<u8>("256").is_err());
/// # Ok::<(), indolent::error::SugarError>(())
/// ```
pub fn parse_as<T: FromStr>(input: &str) -> SugarResult<T> {
    input.parse::<T>().map_err(|_| SugarError::parse::<T>(input))
}

/// Parses `input` as any [`FromStr`] type, absent when malformed.
pub fn parse_opt<T: FromStr>(input: &str) -> Opt<T> {
    match input.parse::<T>() {
        Ok(value) => Opt::of(value),
        Err(_) => {
            tracing::trace!(
                input,
                type_name = std::any::type_name::<T>(),
                "discarding malformed input"
            );
            Opt::none()
        }
    }
}

macro_rules! parse_family {
    ($($name:ident => $target:ty),+ $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("Parses `input` as `", stringify!($target), "`.")]
                ///
                /// # Errors
                ///
                /// Returns [`SugarError::Parse`] when `input` is malformed or out of range.
                #[inline]
                pub fn [<as_ $name>](input: &str) -> SugarResult<$target> {
                    parse_as(input)
                }

                #[doc = concat!("Parses `input` as `", stringify!($target), "`, absent when malformed.")]
                #[inline]
                pub fn [<parse_ $name>](input: &str) -> Opt<$target> {
                    parse_opt(input)
                }
            )+
        }
    };
}

parse_family! {
    int => i32,
    long => i64,
    short => i16,
    byte => i8,
    float => f32,
    double => f64,
}

/// Parses `"true"` or `"false"`, ignoring ASCII case.
///
/// # Errors
///
/// Returns [`SugarError::Parse`] for any other input.
pub fn as_bool(input: &str) -> SugarResult<bool> {
    if input.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if input.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(SugarError::parse::<bool>(input))
    }
}

/// Parses `"true"` or `"false"`, ignoring ASCII case; absent otherwise.
pub fn parse_bool(input: &str) -> Opt<bool> {
    match as_bool(input) {
        Ok(flag) => Opt::of(flag),
        Err(_) => {
            tracing::trace!(input, type_name = "bool", "discarding malformed input");
            Opt::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", Ok(42))]
    #[case("-7", Ok(-7))]
    #[case("2147483648", Err(SugarError::parse::<i32>("2147483648")))]
    #[case(" 1", Err(SugarError::parse::<i32>(" 1")))]
    fn test_as_int(#[case] input: &str, #[case] expected: SugarResult<i32>) {
        assert_eq!(as_int(input), expected);
    }

    #[rstest]
    fn test_soft_parsers_are_absent_on_malformed_input() {
        assert_eq!(parse_int("x"), Opt::none());
        assert_eq!(parse_byte("128"), Opt::none());
        assert_eq!(parse_short("-32768"), Opt::of(i16::MIN));
        assert_eq!(parse_float("1.5"), Opt::of(1.5_f32));
    }

    #[rstest]
    #[case("true", Some(true))]
    #[case("FALSE", Some(false))]
    #[case("yes", None)]
    #[case("", None)]
    fn test_bool_parsing(#[case] input: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_bool(input), Opt::from(expected));
        assert_eq!(as_bool(input).ok(), expected);
    }

    #[rstest]
    fn test_parse_error_names_target() {
        let error = as_long("ten").unwrap_err();
        assert_eq!(error.to_string(), "cannot parse \"ten\" as i64");
    }
}
