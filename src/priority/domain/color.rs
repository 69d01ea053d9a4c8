//! Presentation colour tokens for priority reference data.

use super::PriorityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic colour token attached to a priority.
///
/// Tokens name entries in the UI palette; mapping a token to an actual
/// colour value is the presentation layer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    /// Neutral gray.
    Gray,
    /// Red.
    Red,
    /// Pink.
    Pink,
    /// Grape.
    Grape,
    /// Violet.
    Violet,
    /// Indigo.
    Indigo,
    /// Blue.
    Blue,
    /// Cyan.
    Cyan,
    /// Teal.
    Teal,
    /// Green.
    Green,
    /// Lime.
    Lime,
    /// Yellow.
    Yellow,
    /// Orange.
    Orange,
}

impl ColorToken {
    /// Returns the token in canonical storage format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Pink => "pink",
            Self::Grape => "grape",
            Self::Violet => "violet",
            Self::Indigo => "indigo",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Teal => "teal",
            Self::Green => "green",
            Self::Lime => "lime",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
        }
    }
}

impl TryFrom<&str> for ColorToken {
    type Error = PriorityDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "gray" => Ok(Self::Gray),
            "red" => Ok(Self::Red),
            "pink" => Ok(Self::Pink),
            "grape" => Ok(Self::Grape),
            "violet" => Ok(Self::Violet),
            "indigo" => Ok(Self::Indigo),
            "blue" => Ok(Self::Blue),
            "cyan" => Ok(Self::Cyan),
            "teal" => Ok(Self::Teal),
            "green" => Ok(Self::Green),
            "lime" => Ok(Self::Lime),
            "yellow" => Ok(Self::Yellow),
            "orange" => Ok(Self::Orange),
            _ => Err(PriorityDomainError::UnknownColorToken(value.to_owned())),
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
