//! Aggregation of diagnostic events into a single outcome.
//!
//! - [`Outcome`] accumulates events next to an optional payload and keeps a
//!   status that only moves up: `Ok < Warn < Error`.
//! - [`status`] holds the escalation step and the reference fold over an
//!   event log.
//! - [`ResultConverter`] turns [`Violation`]s from an external validation
//!   engine into events on a fresh outcome.
//!
//! Everything here is synchronous and free of I/O. An [`Outcome`] is mutated
//! through `&mut self` and is meant to have a single owner.

mod converter;
mod outcome;
pub mod status;
mod violation;

pub use converter::{ConverterConfig, ResultConverter};
pub use outcome::Outcome;
pub use outcome_types::{
    Event, EventBuilder, MappingFailure, MissingArgument, OutcomeError, Severity, Status,
};
pub use violation::{ConstraintViolation, Violation, ViolationKind};
