use std::fmt;

/// Names the required value that was absent when an operation ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingArgument {
    /// An event was built without a severity.
    Severity,
    /// An event was built without a key.
    Key,
    /// An event was built without a message.
    Message,
    /// A single event handed to an outcome was absent.
    Event,
    /// The sequence of events handed to an outcome was absent.
    Events,
    /// One element of an event sequence was absent, at this 0-based position.
    EventAt(usize),
}

/// Describes why a severity could not be mapped onto a status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MappingFailure {
    /// No variant exists at this rank.
    Rank(u8),
    /// There was no severity to map.
    AbsentSeverity,
}

/// Errors produced by the outcome model.
///
/// Both kinds are caller contract violations and are returned at the point of
/// detection; nothing in the model recovers from them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OutcomeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(MissingArgument),
    #[error("invalid mapping: {0}")]
    InvalidMapping(MappingFailure),
}

impl OutcomeError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_invalid_mapping(&self) -> bool {
        matches!(self, Self::InvalidMapping(_))
    }
}

impl From<MissingArgument> for OutcomeError {
    fn from(missing: MissingArgument) -> Self {
        Self::InvalidArgument(missing)
    }
}

impl From<MappingFailure> for OutcomeError {
    fn from(failure: MappingFailure) -> Self {
        Self::InvalidMapping(failure)
    }
}

impl fmt::Display for MissingArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Severity => write!(f, "severity mustn't be absent"),
            Self::Key => write!(f, "key mustn't be absent"),
            Self::Message => write!(f, "message mustn't be absent"),
            Self::Event => write!(f, "event mustn't be absent"),
            Self::Events => write!(f, "list of events mustn't be absent"),
            Self::EventAt(index) => {
                write!(f, "list of events contains an absent event at index {index}")
            }
        }
    }
}

impl fmt::Display for MappingFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rank(rank) => write!(f, "no variant found for rank {rank}"),
            Self::AbsentSeverity => write!(f, "no status found for an absent severity"),
        }
    }
}
