//! Speed input kinds.

use crate::error::AeroError;
use std::fmt;
use std::str::FromStr;

/// How the speed passed to the evaluator is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum SpeedType {
    /// True airspeed [m/s]
    Tas,
    /// Equivalent airspeed [m/s]
    Eas,
    /// Mach number [-]
    Mach,
}

impl SpeedType {
    pub const ALL: [SpeedType; 3] = [Self::Tas, Self::Eas, Self::Mach];

    pub fn label(self) -> &'static str {
        match self {
            Self::Tas => "TAS",
            Self::Eas => "EAS",
            Self::Mach => "mach",
        }
    }

    /// Unit of the raw speed value for this kind.
    pub fn unit_label(self) -> &'static str {
        match self {
            Self::Tas | Self::Eas => "m/s",
            Self::Mach => "-",
        }
    }
}

impl fmt::Display for SpeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive: `TAS`, `eas`, `Mach` all parse.
impl FromStr for SpeedType {
    type Err = AeroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tas" => Ok(Self::Tas),
            "eas" => Ok(Self::Eas),
            "mach" => Ok(Self::Mach),
            _ => Err(AeroError::InvalidSpeedType {
                given: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for SpeedType {
    type Error = AeroError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SpeedType> for String {
    fn from(value: SpeedType) -> Self {
        value.label().to_string()
    }
}
