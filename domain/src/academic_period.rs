//! Academic period selector ("<year>.<term>").

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A (year, term) pair such as "2025.1".
///
/// Both segments are kept verbatim: no numeric or range validation happens here, so a
/// malformed selector reaches SUAP unchanged and fails there. A value without a `.` is
/// taken whole as the year with an empty term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicPeriod {
    pub year: String,
    pub term: String,
}

impl AcademicPeriod {
    pub fn new(year: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            term: term.into(),
        }
    }

    /// Selected period from an optional request parameter, falling back to `default`.
    pub fn selected_or(selected: Option<&str>, default: &str) -> Self {
        let value = selected
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(default);
        Self::from(value)
    }

    /// Path segment of the report card resource for this period, e.g. "2025/1/".
    pub fn resource_segment(&self) -> String {
        format!(
            "{}/{}/",
            urlencoding::encode(&self.year),
            urlencoding::encode(&self.term)
        )
    }
}

impl From<&str> for AcademicPeriod {
    fn from(value: &str) -> Self {
        let (year, term) = value.split_once('.').unwrap_or((value, ""));
        Self::new(year, term)
    }
}

impl FromStr for AcademicPeriod {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(value))
    }
}

impl fmt::Display for AcademicPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.year, self.term)
    }
}
