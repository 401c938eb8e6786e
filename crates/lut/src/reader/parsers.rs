//! Library of parser functions

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::{is_not, take_till1};
use nom::character::complete::{char, digit1, space0, u64 as uint64};
use nom::combinator::{all_consuming, map_res, opt, recognize, rest, verify};
use nom::number::complete::double;
use nom::sequence::{delimited, pair, terminated};
use nom::IResult;

// ! Boolean checks
/// Check for a section marker, e.g. `[Version]` or `</Data>`
pub(crate) fn is_marker(i: &str) -> bool {
    all_consuming(marker)(i.trim()).is_ok()
}

/// Check for a comment line starting with `#`
pub(crate) fn is_comment(i: &str) -> bool {
    i.trim_start().starts_with('#')
}

// ! Parser combinators

/// Recognise a whole `[...]` or `<...>` marker
fn marker(i: &str) -> IResult<&str, &str> {
    alt((
        recognize(delimited(char('['), is_not("[]"), char(']'))),
        recognize(delimited(char('<'), is_not("<>"), char('>'))),
    ))(i)
}

/// Unsigned integer value used for counts and point indices
fn index(i: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(i)
}

/// Finite floating point value in any common notation
fn value(i: &str) -> IResult<&str, f64> {
    verify(double, |v: &f64| v.is_finite())(i)
}

/// Variable name with an optional `index:` prefix, e.g. `1:Temperature`
fn variable_name(i: &str) -> IResult<&str, &str> {
    let (i, _) = opt(terminated(uint64, pair(space0, char(':'))))(i)?;
    let (i, _) = space0(i)?;
    let (i, name) = verify(rest, |s: &str| !s.trim().is_empty())(i)?;
    Ok((i, name.trim_end()))
}

/// A single whitespace-free token such as a version string
fn word(i: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace())(i)
}

// ! Whole-token helpers, `None` unless the entire token is consumed

/// Parse a count or point index token
pub(crate) fn parse_index(token: &str) -> Option<usize> {
    all_consuming(index)(token).ok().map(|(_, v)| v)
}

/// Parse a data or coordinate token
pub(crate) fn parse_value(token: &str) -> Option<f64> {
    all_consuming(value)(token).ok().map(|(_, v)| v)
}

/// Parse a variable name line
pub(crate) fn parse_variable_name(line: &str) -> Option<&str> {
    variable_name(line.trim()).ok().map(|(_, name)| name)
}

/// Parse a line holding exactly one word
pub(crate) fn parse_word(line: &str) -> Option<&str> {
    all_consuming(word)(line.trim()).ok().map(|(_, w)| w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers() {
        assert!(is_marker("[Version]"));
        assert!(is_marker("  [Number of table levels]  "));
        assert!(is_marker("<Data>"));
        assert!(is_marker("</Hull>"));
        // need the full line to be the marker
        assert!(!is_marker("[Version] 2.1"));
        assert!(!is_marker("[]"));
        assert!(!is_marker("300 310 320"));
        assert!(!is_marker("<Data"));
    }

    #[test]
    fn comments() {
        assert!(is_comment("# generated by a table writer"));
        assert!(is_comment("   #indented"));
        assert!(!is_comment("1:T # not a comment line"));
    }

    #[test]
    fn indices() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("42"), Some(42));
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("1.0"), None);
        assert_eq!(parse_index("4a"), None);
    }

    #[test]
    fn values() {
        assert_eq!(parse_value("300"), Some(300.0));
        assert_eq!(parse_value("-1.5e-03"), Some(-1.5e-3));
        assert_eq!(parse_value("1.00E+02"), Some(100.0));
        assert_eq!(parse_value("nan"), None);
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value("3.0x"), None);
    }

    #[test]
    fn variable_names() {
        assert_eq!(parse_variable_name("1:T"), Some("T"));
        assert_eq!(parse_variable_name("12 : Y_fuel  "), Some("Y_fuel"));
        assert_eq!(parse_variable_name("Heat Release"), Some("Heat Release"));
        assert_eq!(parse_variable_name("3:"), None);
    }

    #[test]
    fn words() {
        assert_eq!(parse_word(" 2.1.0 "), Some("2.1.0"));
        assert_eq!(parse_word("2.1.0 beta"), None);
    }
}
