use std::fmt;

use outcome_types::{Event, MissingArgument, OutcomeError, Severity, Status};
use serde::Serialize;

use crate::status::escalate;

/// Accumulator pairing an optional payload with an append-only event log and
/// the status derived from it.
///
/// Invariants:
/// - `status` is `Ok` while `events` is empty, otherwise the highest status
///   of equal rank to any appended severity.
/// - `status` never decreases; events are never removed or reordered.
/// - `data` is only set by [`Outcome::of`].
///
/// Mutation goes through `&mut self`, so an outcome has a single owner. Share
/// it across threads only behind an external lock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Outcome<T> {
    status: Status,
    data: Option<T>,
    events: Vec<Event>,
}

impl<T> Outcome<T> {
    /// Empty outcome: `Ok`, no data, no events.
    pub fn new() -> Self {
        Self {
            status: Status::Ok,
            data: None,
            events: Vec::new(),
        }
    }

    /// Outcome carrying `data`, with status `Ok` and no events.
    pub fn of(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::new()
        }
    }

    /// Empty outcome with one informational event. Status stays `Ok`.
    pub fn info(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_event(Event::info(key, message))
    }

    /// Empty outcome with one warning event. Status is `Warn`.
    pub fn warn(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_event(Event::warn(key, message))
    }

    /// Empty outcome with one error event. Status is `Error`.
    pub fn error(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_event(Event::error(key, message))
    }

    fn with_event(event: Event) -> Self {
        let mut outcome = Self::new();
        outcome.add_event(event);
        outcome
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Events in insertion order, duplicates included.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// Highest severity appended so far, `None` while the log is empty.
    pub fn highest_severity(&self) -> Option<Severity> {
        self.events.iter().map(Event::severity).max()
    }

    pub fn events_with_severity(&self, severity: Severity) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(move |event| event.severity() == severity)
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn into_parts(self) -> (Status, Option<T>, Vec<Event>) {
        (self.status, self.data, self.events)
    }

    /// Append `event` and escalate the status.
    ///
    /// Complexity: O(1) amortized.
    pub fn add_event(&mut self, event: Event) {
        let next = escalate(self.status, event.severity());
        if next != self.status {
            tracing::trace!(
                from = %self.status,
                to = %next,
                key = event.key(),
                "outcome status escalated"
            );
        }
        self.status = next;
        self.events.push(event);
    }

    /// Append each event in order.
    pub fn add_events(&mut self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.add_event(event);
        }
    }

    /// Append an event that may be absent.
    ///
    /// Returns `Err(InvalidArgument)` for `None` and leaves the outcome untouched.
    pub fn try_add_event(&mut self, event: Option<Event>) -> Result<(), OutcomeError> {
        let event = event.ok_or(MissingArgument::Event)?;
        self.add_event(event);
        Ok(())
    }

    /// Append a possibly absent sequence of possibly absent events.
    ///
    /// An absent sequence is `Err(InvalidArgument)` with no effect. An absent
    /// element is `Err(InvalidArgument)` reporting its index; elements before
    /// it stay appended and the status stays escalated for them. There is no
    /// rollback.
    pub fn try_add_events<I>(&mut self, events: Option<I>) -> Result<(), OutcomeError>
    where
        I: IntoIterator<Item = Option<Event>>,
    {
        let events = events.ok_or(MissingArgument::Events)?;
        for (index, event) in events.into_iter().enumerate() {
            let event = event.ok_or(MissingArgument::EventAt(index))?;
            self.add_event(event);
        }
        Ok(())
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<Event> for Outcome<T> {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        self.add_events(iter);
    }
}

impl<T> FromIterator<Event> for Outcome<T> {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut outcome = Self::new();
        outcome.add_events(iter);
        outcome
    }
}

impl<T: fmt::Debug> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Outcome [status={}, data={:?}, events=[", self.status, self.data)?;
        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{event}")?;
        }
        f.write_str("]]")
    }
}
