//! Severity labels accepted by the facade.
//!
//! The set is closed and carries no ordering: `Debug` is declared after `Info`, and
//! nothing in the crate filters on position. Every label is always admitted.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity label attached to every emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Debug,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// All labels in declaration order.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    /// Canonical upper-case label.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw codes follow declaration order, `0..=4`.
impl TryFrom<u8> for LogLevel {
    type Error = UnknownLevel;

    fn try_from(code: u8) -> Result<Self, UnknownLevel> {
        LogLevel::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| UnknownLevel(code.to_string()))
    }
}

impl FromStr for LogLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "critical" | "fault" => Ok(LogLevel::Critical),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

/// A raw level code or name that maps to no label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level: {0}")]
pub struct UnknownLevel(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_declaration_order() {
        assert_eq!(LogLevel::try_from(0u8), Ok(LogLevel::Info));
        assert_eq!(LogLevel::try_from(1u8), Ok(LogLevel::Debug));
        assert_eq!(LogLevel::try_from(4u8), Ok(LogLevel::Critical));
        assert!(LogLevel::try_from(5u8).is_err());
        assert!(LogLevel::try_from(u8::MAX).is_err());
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!(" warning ".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("fault".parse::<LogLevel>(), Ok(LogLevel::Critical));
        assert_eq!("Critical".parse::<LogLevel>(), Ok(LogLevel::Critical));
        assert!("trace".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
        }
    }
}
