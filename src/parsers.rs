//! Reusable parsers for the `loose-versions` library.

use nom::bytes::complete::take_till;
use nom::character::complete::{char, digit1, satisfy};
use nom::combinator::{map_res, peek, recognize};
use nom::sequence::{preceded, terminated};
use nom::{IResult, Parser};
use num_bigint::BigUint;

/// Parse an unsigned integer of any size.
pub fn unsigned(i: &str) -> IResult<&str, BigUint> {
    map_res(digit1, |s: &str| s.parse::<BigUint>()).parse(i)
}

/// Three dot-separated digit groups that are immediately followed by a
/// letter, like the `2.0.0` of `2.0.0b1`. The letter is not consumed.
pub(crate) fn lettered_core(i: &str) -> IResult<&str, &str> {
    terminated(
        recognize((digit1, char('.'), digit1, char('.'), digit1)),
        peek(satisfy(|c| c.is_ascii_alphabetic())),
    )
    .parse(i)
}

/// The value of the first contiguous run of digits anywhere in the input,
/// skipping whatever precedes it.
pub(crate) fn first_digits(i: &str) -> IResult<&str, BigUint> {
    preceded(take_till(|c: char| c.is_ascii_digit()), unsigned).parse(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lettered() {
        assert_eq!(Ok(("b1", "2.0.0")), lettered_core("2.0.0b1"));
        assert_eq!(Ok(("alpha", "1.0.0")), lettered_core("1.0.0alpha"));
        assert!(lettered_core("1.0.0").is_err());
        assert!(lettered_core("1.0b").is_err());
        assert!(lettered_core("1.0.0.1a").is_err());
    }

    #[test]
    fn digit_runs() {
        assert_eq!(Ok(("c3", BigUint::from(12u32))), first_digits("rc12c3"));
        assert_eq!(Ok(("", BigUint::from(7u32))), first_digits("007"));
        assert!(first_digits("beta").is_err());
        assert!(first_digits("").is_err());
    }
}
