use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MissingArgument, OutcomeError};
use crate::severity::Severity;

/// One immutable diagnostic finding.
///
/// `key` is an opaque identifier (for example a field path followed by a rule
/// name); `message` is free-form text. Two events are equal when all three
/// fields are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    severity: Severity,
    key: String,
    message: String,
}

impl Event {
    pub fn new(severity: Severity, key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn info(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, key, message)
    }

    pub fn warn(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warn, key, message)
    }

    pub fn error(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, key, message)
    }

    /// Starts an [`EventBuilder`] for inputs where any field may be absent.
    pub fn builder() -> EventBuilder {
        EventBuilder::default()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.key, self.message)
    }
}

/// Collects possibly absent event fields and validates them on [`Self::build`].
///
/// The `maybe_*` setters take `Option`s so values from loosely typed
/// producers can be passed straight through.
#[derive(Clone, Debug, Default)]
pub struct EventBuilder {
    severity: Option<Severity>,
    key: Option<String>,
    message: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn severity(self, severity: Severity) -> Self {
        self.maybe_severity(Some(severity))
    }

    pub fn key(self, key: impl Into<String>) -> Self {
        self.maybe_key(Some(key))
    }

    pub fn message(self, message: impl Into<String>) -> Self {
        self.maybe_message(Some(message))
    }

    pub fn maybe_severity(mut self, severity: Option<Severity>) -> Self {
        self.severity = severity;
        self
    }

    pub fn maybe_key<S: Into<String>>(mut self, key: Option<S>) -> Self {
        self.key = key.map(Into::into);
        self
    }

    pub fn maybe_message<S: Into<String>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(Into::into);
        self
    }

    /// Returns `Err(InvalidArgument)` naming the first absent field, checked
    /// in the order severity, key, message.
    pub fn build(self) -> Result<Event, OutcomeError> {
        let severity = self.severity.ok_or(MissingArgument::Severity)?;
        let key = self.key.ok_or(MissingArgument::Key)?;
        let message = self.message.ok_or(MissingArgument::Message)?;
        Ok(Event {
            severity,
            key,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn equality_is_structural() {
        let a = Event::new(Severity::Warn, "key", "message");
        let b = Event::warn(String::from("key"), String::from("message"));

        assert_eq!(a, b);
        assert_ne!(a, Event::error("key", "message"));
        assert_ne!(a, Event::warn("other", "message"));
        assert_ne!(a, Event::warn("key", "other"));

        let set: HashSet<Event> = [a.clone(), b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(set.contains(&a));
    }

    #[test]
    fn builder_with_all_fields_matches_new() {
        let event = Event::builder()
            .severity(Severity::Info)
            .key("key")
            .message("message")
            .build()
            .unwrap();

        assert_eq!(event, Event::info("key", "message"));
    }

    #[test]
    fn builder_reports_first_missing_field() {
        let missing_severity = EventBuilder::new().key("key").message("message").build();
        let missing_key = EventBuilder::new()
            .severity(Severity::Error)
            .maybe_key(None::<String>)
            .message("message")
            .build();
        let missing_message = EventBuilder::new()
            .severity(Severity::Error)
            .key("key")
            .build();
        let missing_everything = EventBuilder::new().build();

        assert_eq!(
            missing_severity,
            Err(OutcomeError::InvalidArgument(MissingArgument::Severity))
        );
        assert_eq!(
            missing_key,
            Err(OutcomeError::InvalidArgument(MissingArgument::Key))
        );
        assert_eq!(
            missing_message,
            Err(OutcomeError::InvalidArgument(MissingArgument::Message))
        );
        assert_eq!(
            missing_everything,
            Err(OutcomeError::InvalidArgument(MissingArgument::Severity))
        );
    }

    #[test]
    fn empty_strings_are_present_values() {
        let event = Event::builder()
            .severity(Severity::Warn)
            .key("")
            .message("")
            .build()
            .unwrap();

        assert_eq!(event.key(), "");
        assert_eq!(event.message(), "");
    }

    #[test]
    fn display_and_json_shape() {
        let event = Event::error("numberMin", "Value must be greater than 5.");

        assert_eq!(
            event.to_string(),
            "ERROR numberMin: Value must be greater than 5."
        );
        similar_asserts::assert_eq!(
            serde_json::to_value(&event).unwrap(),
            serde_json::json!({
                "severity": "ERROR",
                "key": "numberMin",
                "message": "Value must be greater than 5.",
            })
        );
    }
}
