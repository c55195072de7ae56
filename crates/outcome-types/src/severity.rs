use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MappingFailure, OutcomeError};

/// Rank of a single diagnostic finding.
///
/// Variants are declared in ascending order, so the derived `Ord` is the
/// escalation order: `Info < Warn < Error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Informational; never raises the aggregate status.
    Info,
    /// Advisory finding.
    Warn,
    /// Blocking finding.
    Error,
}

impl Severity {
    /// All severities in ascending rank.
    pub const ALL: [Severity; 3] = [Self::Info, Self::Warn, Self::Error];

    /// 0-based position in the escalation order.
    pub fn rank(self) -> u8 {
        match self {
            Self::Info => 0,
            Self::Warn => 1,
            Self::Error => 2,
        }
    }

    /// Inverse of [`Self::rank`].
    ///
    /// Returns `Err(InvalidMapping)` for ranks with no variant.
    pub fn from_rank(rank: u8) -> Result<Self, OutcomeError> {
        match rank {
            0 => Ok(Self::Info),
            1 => Ok(Self::Warn),
            2 => Ok(Self::Error),
            _ => Err(MappingFailure::Rank(rank).into()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_declaration() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert_eq!(Severity::ALL.iter().max(), Some(&Severity::Error));
    }

    #[test]
    fn rank_round_trips_and_rejects_out_of_range() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_rank(severity.rank()), Ok(severity));
        }
        assert_eq!(
            Severity::from_rank(3),
            Err(OutcomeError::InvalidMapping(MappingFailure::Rank(3)))
        );
    }

    #[test]
    fn serializes_as_upper_case_name() {
        assert_eq!(serde_json::to_string(&Severity::Warn).unwrap(), "\"WARN\"");
        assert_eq!(
            serde_json::from_str::<Severity>("\"ERROR\"").unwrap(),
            Severity::Error
        );
    }
}
