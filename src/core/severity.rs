//! Severity scale

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered severity levels.
///
/// `Off` ranks above every real level and is only ever used as a threshold;
/// it is never the level of an emitted message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Severity {
    #[serde(rename = "DBG")]
    Debug = 0,
    #[default]
    #[serde(rename = "INF")]
    Info = 1,
    #[serde(rename = "WRN")]
    Warn = 2,
    #[serde(rename = "ERR")]
    Error = 3,
    #[serde(rename = "OFF")]
    Off = 4,
}

impl Severity {
    /// The levels a message can be emitted at, lowest first.
    pub const LEVELS: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DBG",
            Severity::Info => "INF",
            Severity::Warn => "WRN",
            Severity::Error => "ERR",
            Severity::Off => "OFF",
        }
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn is_emittable(self) -> bool {
        !matches!(self, Severity::Off)
    }

    #[cfg(feature = "console")]
    pub fn color_code(self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Debug => Blue,
            Severity::Info => Green,
            Severity::Warn => Yellow,
            Severity::Error => Red,
            Severity::Off => BrightBlack,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DBG" => Ok(Severity::Debug),
            "INF" => Ok(Severity::Info),
            "WRN" => Ok(Severity::Warn),
            "ERR" => Ok(Severity::Error),
            "OFF" => Ok(Severity::Off),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(rank: u8) -> Result<Self, LoggerError> {
        match rank {
            0 => Ok(Severity::Debug),
            1 => Ok(Severity::Info),
            2 => Ok(Severity::Warn),
            3 => Ok(Severity::Error),
            4 => Ok(Severity::Off),
            _ => Err(LoggerError::invalid_level(rank.to_string())),
        }
    }
}

impl From<Severity> for u8 {
    fn from(level: Severity) -> Self {
        level.rank()
    }
}
