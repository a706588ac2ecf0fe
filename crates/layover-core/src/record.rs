//! Small dataset enums shared by entity records.
//!
//! Each enum carries the textual forms the dataset uses. Parsing is the
//! loader's job; these types only define the accepted spellings and the
//! canonical output form.

use std::fmt;
use std::str::FromStr;

/// Error returned when a record field does not match any accepted form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseRecordError {
    field: &'static str,
}

impl ParseRecordError {
    fn new(field: &'static str) -> Self {
        Self { field }
    }
}

impl fmt::Display for ParseRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value for field: {}", self.field)
    }
}

impl std::error::Error for ParseRecordError {}

/// A user's registered sex (`M` or `F` in the dataset).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Registered as male.
    Male,
    /// Registered as female.
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "M",
            Self::Female => "F",
        })
    }
}

impl FromStr for Sex {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            _ => Err(ParseRecordError::new("sex")),
        }
    }
}

/// Whether a user account is active.
///
/// Inactive users exist in the catalog but are excluded from identity
/// query output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountStatus {
    /// The account is active.
    Active,
    /// The account has been deactivated.
    Inactive,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        })
    }
}

impl FromStr for AccountStatus {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("active") {
            Ok(Self::Active)
        } else if s.eq_ignore_ascii_case("inactive") {
            Ok(Self::Inactive)
        } else {
            Err(ParseRecordError::new("account_status"))
        }
    }
}

/// Whether breakfast is included in a reservation.
///
/// The dataset is permissive here: `""`, `"0"`, `"f"` and `"false"` mean
/// no; `"1"`, `"t"` and `"true"` mean yes (case-insensitive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IncludesBreakfast {
    /// Breakfast not included.
    No,
    /// Breakfast included.
    Yes,
}

impl fmt::Display for IncludesBreakfast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::No => "False",
            Self::Yes => "True",
        })
    }
}

impl FromStr for IncludesBreakfast {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty()
            || s == "0"
            || s.eq_ignore_ascii_case("f")
            || s.eq_ignore_ascii_case("false")
        {
            Ok(Self::No)
        } else if s == "1" || s.eq_ignore_ascii_case("t") || s.eq_ignore_ascii_case("true") {
            Ok(Self::Yes)
        } else {
            Err(ParseRecordError::new("includes_breakfast"))
        }
    }
}
