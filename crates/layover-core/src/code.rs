//! Packed airport and country codes.
//!
//! Both codes are short fixed-width ASCII strings that appear millions
//! of times across a dataset, so they are stored inline as byte arrays
//! instead of heap strings. Parsing uppercases the input; comparison and
//! ordering are therefore case-insensitive with respect to the source.

use std::fmt;
use std::str::FromStr;

/// Error returned when a code string has the wrong length or alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseCodeError {
    expected: &'static str,
}

impl fmt::Display for ParseCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid code: expected {}", self.expected)
    }
}

impl std::error::Error for ParseCodeError {}

fn parse_letters<const N: usize>(s: &str, expected: &'static str) -> Result<[u8; N], ParseCodeError> {
    let bytes = s.as_bytes();
    if bytes.len() != N || !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
        return Err(ParseCodeError { expected });
    }
    let mut out = [0u8; N];
    for (o, b) in out.iter_mut().zip(bytes) {
        *o = b.to_ascii_uppercase();
    }
    Ok(out)
}

/// A three-letter airport code (`LIS`, `OPO`, ...), stored uppercased.
///
/// `Ord` is the lexicographic order of the uppercased code, used as the
/// deterministic tie-break when ranking airports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).expect("airport codes are ASCII letters")
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AirportCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_letters(s, "a 3-letter airport code").map(Self)
    }
}

/// A two-letter country code (`PT`, `GB`, ...), stored uppercased.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).expect("country codes are ASCII letters")
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_letters(s, "a 2-letter country code").map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airport_code_uppercases() {
        let code: AirportCode = "lis".parse().unwrap();
        assert_eq!(code.as_str(), "LIS");
        assert_eq!(code, "LIS".parse().unwrap());
    }

    #[test]
    fn airport_code_rejects_bad_input() {
        assert!("LISB".parse::<AirportCode>().is_err());
        assert!("L1S".parse::<AirportCode>().is_err());
        assert!("".parse::<AirportCode>().is_err());
    }

    #[test]
    fn airport_code_orders_lexicographically() {
        let a: AirportCode = "AMS".parse().unwrap();
        let b: AirportCode = "ZRH".parse().unwrap();
        assert!(a < b);
    }

    #[test]
    fn country_code_round_trip() {
        let code: CountryCode = "pt".parse().unwrap();
        assert_eq!(code.to_string(), "PT");
    }
}
