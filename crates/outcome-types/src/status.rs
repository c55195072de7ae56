use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MappingFailure, OutcomeError};
use crate::severity::Severity;

/// Aggregate rank of an outcome, derived from the highest event severity.
///
/// Ordered `Ok < Warn < Error`; an outcome's status only ever moves up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    #[default]
    Ok,
    Warn,
    Error,
}

impl Status {
    /// All statuses in ascending rank.
    pub const ALL: [Status; 3] = [Self::Ok, Self::Warn, Self::Error];

    /// The status of equal rank to `severity`.
    ///
    /// The match is exhaustive in both directions: adding a variant to either
    /// enum without extending this table fails to compile.
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Info => Self::Ok,
            Severity::Warn => Self::Warn,
            Severity::Error => Self::Error,
        }
    }

    /// Like [`Self::for_severity`], for callers holding a possibly absent severity.
    ///
    /// An absent severity is `Err(InvalidMapping)`, never a default status.
    pub fn try_from_severity(severity: Option<Severity>) -> Result<Self, OutcomeError> {
        severity
            .map(Self::for_severity)
            .ok_or(OutcomeError::InvalidMapping(MappingFailure::AbsentSeverity))
    }

    /// The severity of equal rank.
    pub fn severity(self) -> Severity {
        match self {
            Self::Ok => Severity::Info,
            Self::Warn => Severity::Warn,
            Self::Error => Severity::Error,
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Warn => 1,
            Self::Error => 2,
        }
    }

    /// Returns `Err(InvalidMapping)` for ranks with no variant.
    pub fn from_rank(rank: u8) -> Result<Self, OutcomeError> {
        match rank {
            0 => Ok(Self::Ok),
            1 => Ok(Self::Warn),
            2 => Ok(Self::Error),
            _ => Err(MappingFailure::Rank(rank).into()),
        }
    }

    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl From<Severity> for Status {
    fn from(severity: Severity) -> Self {
        Self::for_severity(severity)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_preserves_rank() {
        for severity in Severity::ALL {
            let status = Status::for_severity(severity);
            assert_eq!(status.rank(), severity.rank());
            assert_eq!(status.severity(), severity);
        }
    }

    #[test]
    fn mapping_is_a_bijection() {
        let mapped: Vec<Status> = Severity::ALL.into_iter().map(Status::from).collect();
        assert_eq!(mapped, Status::ALL.to_vec());
    }

    #[test]
    fn absent_severity_fails_loudly() {
        assert_eq!(
            Status::try_from_severity(None),
            Err(OutcomeError::InvalidMapping(MappingFailure::AbsentSeverity))
        );
        assert_eq!(Status::try_from_severity(Some(Severity::Warn)), Ok(Status::Warn));
    }

    #[test]
    fn out_of_range_rank_is_rejected() {
        assert_eq!(Status::from_rank(2), Ok(Status::Error));
        assert!(Status::from_rank(u8::MAX).unwrap_err().is_invalid_mapping());
    }

    #[test]
    fn default_is_ok() {
        assert_eq!(Status::default(), Status::Ok);
        assert!(Status::default().is_ok());
        assert_eq!(Status::Error.to_string(), "ERROR");
    }
}
