use crate::model::Validator;
use crate::prelude::FlagValue;

impl FlagValue for bool {
    fn default_validator() -> Validator {
        Validator::new(|value| match value {
            None => true,
            Some(v) => v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("false"),
        })
    }

    fn from_value(value: &str) -> Option<Self> {
        Some(value.is_empty() || value.eq_ignore_ascii_case("true"))
    }

    fn to_value(&self) -> String {
        self.to_string()
    }

    fn implicit_default() -> Option<Self> {
        Some(false)
    }
}

impl FlagValue for String {
    fn default_validator() -> Validator {
        Validator::present()
    }

    fn from_value(value: &str) -> Option<Self> {
        Some(value.to_string())
    }

    fn to_value(&self) -> String {
        self.clone()
    }
}

macro_rules! impl_flag_value_integer {
    ($($t:ty),*) => {
        $(
            impl FlagValue for $t {
                fn default_validator() -> Validator {
                    Validator::new(|value| matches!(value, Some(v) if v.parse::<$t>().is_ok()))
                }

                fn from_value(value: &str) -> Option<Self> {
                    value.parse().ok()
                }

                fn to_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_flag_value_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, true)]
    #[case(Some("true"), true)]
    #[case(Some("TRUE"), true)]
    #[case(Some("False"), true)]
    #[case(Some(""), false)]
    #[case(Some("yes"), false)]
    #[case(Some("1"), false)]
    fn bool_validator(#[case] value: Option<&str>, #[case] expected: bool) {
        assert_eq!(bool::default_validator().test(value), expected);
    }

    #[rstest]
    #[case("", true)]
    #[case("true", true)]
    #[case("tRuE", true)]
    #[case("false", false)]
    #[case("FALSE", false)]
    fn bool_from_value(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(bool::from_value(value), Some(expected));
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(""), true)]
    #[case(Some("abc"), true)]
    fn string_validator(#[case] value: Option<&str>, #[case] expected: bool) {
        assert_eq!(String::default_validator().test(value), expected);
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(""), false)]
    #[case(Some("1"), true)]
    #[case(Some("-1"), true)]
    #[case(Some("1.0"), false)]
    #[case(Some("2147483648"), false)]
    #[case(Some(" 1"), false)]
    fn integer_validator(#[case] value: Option<&str>, #[case] expected: bool) {
        assert_eq!(i32::default_validator().test(value), expected);
    }

    #[test]
    fn integer_unsigned() {
        assert!(!u8::default_validator().test(Some("-1")));
        assert!(!u8::default_validator().test(Some("256")));
        assert_eq!(u8::from_value("255"), Some(255));
        assert_eq!(u64::from_value("abc"), None);
        assert_eq!(i64::implicit_default(), None);
        assert_eq!(bool::implicit_default(), Some(false));
        assert_eq!(17u16.to_value(), "17");
    }
}
