// Parser combinators using nom for textual field values
// Field values travel as strings; these parsers reject anything that is not
// a plain unsigned decimal instead of silently truncating it.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, digit1, multispace0},
    combinator::{all_consuming, map_res, rest},
    sequence::{delimited, separated_pair},
    IResult, Parser,
};

/// Parse an unsigned decimal number, surrounding whitespace allowed
pub fn decimal(input: &str) -> IResult<&str, u64> {
    delimited(multispace0, map_res(digit1, str::parse::<u64>), multispace0).parse(input)
}

/// Parse a complete string as an unsigned decimal number
pub fn parse_decimal(input: &str) -> Option<u64> {
    all_consuming(decimal)
        .parse(input)
        .ok()
        .map(|(_, value)| value)
}

/// Parse a `Name=Value` assignment; the value may be empty or contain `=`
pub fn field_assignment(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_while1(|c: char| c != '='), char('='), rest).parse(input)
}

/// Parse a complete `Name=Value` string
pub fn parse_field_assignment(input: &str) -> Option<(String, String)> {
    all_consuming(field_assignment)
        .parse(input)
        .ok()
        .map(|(_, (name, value))| (name.trim().to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("42"), Some(42));
        assert_eq!(parse_decimal(" 480 "), Some(480));
        assert_eq!(parse_decimal("0"), Some(0));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("12abc"), None);
        assert_eq!(parse_decimal("-1"), None);
        assert_eq!(parse_decimal("99999999999999999999999"), None);
    }

    #[test]
    fn test_parse_field_assignment() {
        assert_eq!(
            parse_field_assignment("StationIdentifier=42"),
            Some(("StationIdentifier".to_string(), "42".to_string()))
        );
        assert_eq!(
            parse_field_assignment("Payload=a=b"),
            Some(("Payload".to_string(), "a=b".to_string()))
        );
        assert_eq!(
            parse_field_assignment("Payload="),
            Some(("Payload".to_string(), String::new()))
        );
        assert_eq!(parse_field_assignment("=42"), None);
        assert_eq!(parse_field_assignment("NoEquals"), None);
    }
}
