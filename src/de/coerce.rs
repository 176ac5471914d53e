//! Lenient text to scalar coercion.
//!
//! Each parser returns `None` when the text does not describe a value of the
//! requested kind. Empty text always yields the zero value, which is how a
//! missing query key ends up as `0`, `false` or `""` in the record.

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "" => Some(false),
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

macro_rules! parse_number {
    ($($ty:ty => $name:ident,)*) => {
        $(
            /// Base-10 parse; `None` on invalid or out of range text.
            pub fn $name(text: &str) -> Option<$ty> {
                if text.is_empty() {
                    return Some(<$ty>::default());
                }
                text.parse::<$ty>().ok()
            }
        )*
    };
}

parse_number! {
    i64 => parse_int,
    u64 => parse_uint,
    f64 => parse_float,
}

#[cfg(test)]
mod test {
    use super::{parse_bool, parse_float, parse_int, parse_uint};

    #[test]
    fn bools() {
        for truthy in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(truthy), Some(true), "{truthy}");
        }
        for falsy in ["", "0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(falsy), Some(false), "{falsy}");
        }
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool("tRuE"), None);
    }

    #[test]
    fn integers() {
        assert_eq!(parse_int("-666"), Some(-666));
        assert_eq!(parse_int("+12"), Some(12));
        assert_eq!(parse_int(""), Some(0));
        assert_eq!(parse_int("12abc"), None);
        assert_eq!(parse_int("9223372036854775808"), None);

        assert_eq!(parse_uint("7777"), Some(7777));
        assert_eq!(parse_uint("-1"), None);
        assert_eq!(parse_uint("0x10"), None);
    }

    #[test]
    fn floats() {
        assert_eq!(parse_float("0.25"), Some(0.25));
        assert_eq!(parse_float("-1e3"), Some(-1000.0));
        assert_eq!(parse_float(""), Some(0.0));
        assert_eq!(parse_float("one"), None);
    }
}
