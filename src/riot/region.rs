use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::AppError;

/// Regional routing values for Riot API (Account-v1, Match-v5).
///
/// This is the only region value accepted from callers; the platform used by
/// Summoner-v4 and League-v4 is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Americas,
    Asia,
    Europe,
}

impl Region {
    /// Lower-cased routing host, e.g. `americas`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Americas => "Americas",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
        }
    }

    pub fn platform(self) -> Platform {
        match self {
            Self::Americas => Platform::NA1,
            Self::Asia => Platform::KR,
            Self::Europe => Platform::EUW1,
        }
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "americas" | "na" | "na1" => Ok(Self::Americas),
            "asia" | "kr" => Ok(Self::Asia),
            "europe" | "euw" | "euw1" => Ok(Self::Europe),
            _ => Err(AppError::InvalidRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

/// Platform routing values for Riot API (Summoner-v4, League-v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    NA1,
    KR,
    EUW1,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NA1 => "na1",
            Self::KR => "kr",
            Self::EUW1 => "euw1",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}
