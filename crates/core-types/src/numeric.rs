/// Parses an integer held in a text field, falling back to `0`.
///
/// The dataset stores every count as a string and some cells are blank or
/// hold placeholders such as `"-"`. Every comparison, sort, and total in the
/// workspace goes through this function so they all default the same way.
/// Surrounding whitespace and a leading sign are accepted.
pub fn parse_int_or_zero(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_int_or_zero("42"), 42);
        assert_eq!(parse_int_or_zero("0"), 0);
    }

    #[test]
    fn accepts_whitespace_and_sign() {
        assert_eq!(parse_int_or_zero(" 17 "), 17);
        assert_eq!(parse_int_or_zero("-3"), -3);
        assert_eq!(parse_int_or_zero("+8"), 8);
    }

    #[test]
    fn garbage_defaults_to_zero() {
        assert_eq!(parse_int_or_zero(""), 0);
        assert_eq!(parse_int_or_zero("abc"), 0);
        assert_eq!(parse_int_or_zero("12.5"), 0);
        assert_eq!(parse_int_or_zero("-"), 0);
        assert_eq!(parse_int_or_zero("99999999999999999999999"), 0);
    }
}
