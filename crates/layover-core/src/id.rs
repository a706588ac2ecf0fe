//! Strongly-typed dataset and query identifiers.
//!
//! Flight, reservation and hotel identifiers are numeric in storage but
//! carry a fixed textual form in the dataset (`0000000042`,
//! `Book0000000042`, `HTL1001`). Parsing strips the prefix and padding;
//! `Display` restores it.

use std::fmt;
use std::str::FromStr;

/// Error returned when an identifier string does not match its format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseIdError {
    expected: &'static str,
}

impl ParseIdError {
    fn new(expected: &'static str) -> Self {
        Self { expected }
    }
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid identifier: expected {}", self.expected)
    }
}

impl std::error::Error for ParseIdError {}

/// Parse a non-empty all-digit string, rejecting signs and whitespace.
fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Identifies a flight.
///
/// The dataset writes flight identifiers as zero-padded digit strings
/// (`0000000042`); `Display` reproduces that padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightId(pub u64);

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:010}", self.0)
    }
}

impl FromStr for FlightId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_digits(s)
            .map(Self)
            .ok_or_else(|| ParseIdError::new("a digit-only flight identifier"))
    }
}

impl From<u64> for FlightId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a hotel reservation (`Book0000000042` in the dataset).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReservationId(pub u64);

impl ReservationId {
    /// Textual prefix of every reservation identifier.
    pub const PREFIX: &'static str = "Book";
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:010}", Self::PREFIX, self.0)
    }
}

impl FromStr for ReservationId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(Self::PREFIX)
            .and_then(parse_digits)
            .map(Self)
            .ok_or_else(|| ParseIdError::new("a reservation identifier (Book prefix)"))
    }
}

impl From<u64> for ReservationId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a hotel (`HTL1001` in the dataset).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HotelId(pub u64);

impl HotelId {
    /// Textual prefix of every hotel identifier.
    pub const PREFIX: &'static str = "HTL";
}

impl fmt::Display for HotelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl FromStr for HotelId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(Self::PREFIX)
            .and_then(parse_digits)
            .map(Self)
            .ok_or_else(|| ParseIdError::new("a hotel identifier (HTL prefix)"))
    }
}

impl From<u64> for HotelId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a registered query type (the query's number in a batch file).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryTypeId(pub u32);

impl fmt::Display for QueryTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QueryTypeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
