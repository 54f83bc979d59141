//! Basketball position categories.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Player position category as reported by the stats API.
///
/// The API reports single-letter codes (`G`, `F`, `C`) and hybrid codes
/// such as `G-F` or `F-C`. Only the three single-letter codes carry their
/// own statistical profile; every other code, including the empty string,
/// maps to [`Position::Unknown`].
///
/// # Examples
///
/// ```rust
/// use nba_dash::Position;
///
/// assert_eq!(Position::from_code("C"), Position::Center);
/// assert_eq!(Position::from_code("G-F"), Position::Unknown);
/// assert_eq!(Position::Guard.to_string(), "G");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    Guard,
    Forward,
    Center,
    #[default]
    Unknown,
}

impl Position {
    /// Map an API position code to a category. Never fails.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "G" => Position::Guard,
            "F" => Position::Forward,
            "C" => Position::Center,
            _ => Position::Unknown,
        }
    }

    /// The single-letter code, or an empty string for unknown positions.
    pub fn code(&self) -> &'static str {
        match self {
            Position::Guard => "G",
            Position::Forward => "F",
            Position::Center => "C",
            Position::Unknown => "",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Position::Unknown)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Unknown => write!(f, "N/A"),
            known => write!(f, "{}", known.code()),
        }
    }
}

impl FromStr for Position {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Position::from_code(s))
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Position::from_code(&code))
    }
}
