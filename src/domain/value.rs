//! Typed text conversion for option values.
//!
//! Every type an option can carry implements [`OptionValue`]: one function to read a
//! command-line token, one to write a value back (usage output prints defaults with it).

use std::num::IntErrorKind;
use std::path::PathBuf;

use crate::domain::error::ValueError;

/// A type a `CliOption` can hold.
///
/// `parse_value` must consume the whole input. `render_value` should produce text that
/// `parse_value` accepts again.
pub trait OptionValue: Sized {
    /// Convert one raw argument.
    fn parse_value(raw: &str) -> Result<Self, ValueError>;

    /// Text form, as shown in usage output.
    fn render_value(&self) -> String;
}

impl OptionValue for String {
    fn parse_value(raw: &str) -> Result<Self, ValueError> {
        Ok(raw.to_string())
    }

    fn render_value(&self) -> String {
        self.clone()
    }
}

impl OptionValue for PathBuf {
    fn parse_value(raw: &str) -> Result<Self, ValueError> {
        Ok(PathBuf::from(raw))
    }

    fn render_value(&self) -> String {
        self.display().to_string()
    }
}

macro_rules! impl_integer_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl OptionValue for $ty {
                fn parse_value(raw: &str) -> Result<Self, ValueError> {
                    raw.parse::<$ty>().map_err(|e| match e.kind() {
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                            ValueError::OutOfRange {
                                raw: raw.to_string(),
                                expected: stringify!($ty),
                            }
                        }
                        _ => ValueError::Malformed {
                            raw: raw.to_string(),
                            expected: stringify!($ty),
                        },
                    })
                }

                fn render_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_integer_value!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_float_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl OptionValue for $ty {
                fn parse_value(raw: &str) -> Result<Self, ValueError> {
                    let value = raw.parse::<$ty>().map_err(|_| ValueError::Malformed {
                        raw: raw.to_string(),
                        expected: stringify!($ty),
                    })?;
                    // 1e999 parses to inf
                    if !value.is_finite() {
                        return Err(ValueError::OutOfRange {
                            raw: raw.to_string(),
                            expected: stringify!($ty),
                        });
                    }
                    Ok(value)
                }

                fn render_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_float_value!(f32, f64);

impl OptionValue for bool {
    fn parse_value(raw: &str) -> Result<Self, ValueError> {
        match raw {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ValueError::Malformed {
                raw: raw.to_string(),
                expected: "bool",
            }),
        }
    }

    fn render_value(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("5", Ok(5))]
    #[case("0", Ok(0))]
    #[case("4294967295", Ok(u32::MAX))]
    fn test_u32_accepts_whole_numbers(
        #[case] raw: &str,
        #[case] expected: Result<u32, ValueError>,
    ) {
        assert_eq!(u32::parse_value(raw), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("5x")]
    #[case("")]
    #[case("-1")]
    #[case(" 5")]
    fn test_u32_rejects_malformed_input(#[case] raw: &str) {
        assert!(matches!(
            u32::parse_value(raw),
            Err(ValueError::Malformed { .. })
        ));
    }

    #[test]
    fn test_integer_overflow_is_out_of_range() {
        assert_eq!(
            u8::parse_value("256"),
            Err(ValueError::OutOfRange {
                raw: "256".to_string(),
                expected: "u8",
            })
        );
        assert!(matches!(
            i8::parse_value("-129"),
            Err(ValueError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_float_rejects_trailing_text_and_infinity() {
        assert_eq!(f64::parse_value("2.5"), Ok(2.5));
        assert!(matches!(
            f64::parse_value("2.5s"),
            Err(ValueError::Malformed { .. })
        ));
        assert!(matches!(
            f32::parse_value("1e40"),
            Err(ValueError::OutOfRange { .. })
        ));
    }

    #[rstest]
    #[case("true", true)]
    #[case("yes", true)]
    #[case("1", true)]
    #[case("false", false)]
    #[case("no", false)]
    #[case("0", false)]
    fn test_bool_words(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(bool::parse_value(raw), Ok(expected));
    }

    #[test]
    fn test_text_values_accept_anything() {
        assert_eq!(String::parse_value(""), Ok(String::new()));
        assert_eq!(
            PathBuf::parse_value("dict.txt"),
            Ok(PathBuf::from("dict.txt"))
        );
    }

    #[test]
    fn test_render_is_accepted_by_parse() {
        let value: i64 = -42;
        assert_eq!(i64::parse_value(&value.render_value()), Ok(value));
        let value = 0.25_f64;
        assert_eq!(f64::parse_value(&value.render_value()), Ok(value));
    }
}
