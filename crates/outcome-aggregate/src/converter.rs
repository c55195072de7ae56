use std::fmt;
use std::marker::PhantomData;

use outcome_types::{Event, OutcomeError};

use crate::outcome::Outcome;
use crate::violation::Violation;

/// Settings for [`ResultConverter`].
#[derive(Debug, Clone, Default)]
pub struct ConverterConfig {
    key_separator: String,
}

impl ConverterConfig {
    /// Text placed between the subject path and the rule name in event keys.
    ///
    /// Defaults to empty, so `text` + `NotNull` becomes `textNotNull`. Never
    /// inserted when the path is empty.
    pub fn key_separator(mut self, separator: impl Into<String>) -> Self {
        self.key_separator = separator.into();
        self
    }

    pub fn separator(&self) -> &str {
        &self.key_separator
    }
}

/// Folds violations from an external validation engine into a fresh [`Outcome`].
///
/// `U` is the payload type of the produced outcome. The converter never sets a
/// payload; it only reports diagnostics.
pub struct ResultConverter<U> {
    config: ConverterConfig,
    _payload: PhantomData<fn() -> U>,
}

impl<U> ResultConverter<U> {
    pub fn new() -> Self {
        Self::with_config(ConverterConfig::default())
    }

    pub fn with_config(config: ConverterConfig) -> Self {
        Self {
            config,
            _payload: PhantomData,
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert violations into an outcome, keeping the input order.
    ///
    /// Empty input returns an empty `Ok` outcome without building any event.
    /// Otherwise every violation becomes one event: `Warn` when advisory,
    /// `Error` when blocking, keyed by path and rule name, with the message
    /// passed through unchanged. All events are built before any is appended,
    /// so a violation without a rule name or message returns
    /// `Err(InvalidArgument)` and no outcome.
    pub fn convert<I>(&self, violations: I) -> Result<Outcome<U>, OutcomeError>
    where
        I: IntoIterator,
        I::Item: Violation,
    {
        let mut violations = violations.into_iter().peekable();
        if violations.peek().is_none() {
            return Ok(Outcome::new());
        }

        let events = violations
            .map(|violation| self.event_for(&violation))
            .collect::<Result<Vec<_>, _>>()?;
        let count = events.len();

        let mut outcome = Outcome::new();
        outcome.add_events(events);
        tracing::debug!(
            violations = count,
            status = %outcome.status(),
            "converted violations"
        );
        Ok(outcome)
    }

    /// Like [`Self::convert`], treating an absent collection as empty.
    pub fn convert_optional<I>(&self, violations: Option<I>) -> Result<Outcome<U>, OutcomeError>
    where
        I: IntoIterator,
        I::Item: Violation,
    {
        match violations {
            Some(violations) => self.convert(violations),
            None => Ok(Outcome::new()),
        }
    }

    fn event_for<V: Violation>(&self, violation: &V) -> Result<Event, OutcomeError> {
        let key = violation.rule_name().map(|rule| self.key(&violation.path(), rule));
        Event::builder()
            .severity(violation.kind().severity())
            .maybe_key(key)
            .maybe_message(violation.message())
            .build()
    }

    fn key(&self, path: &str, rule: &str) -> String {
        let separator = if path.is_empty() {
            ""
        } else {
            self.config.separator()
        };
        format!("{path}{separator}{rule}")
    }
}

impl<U> Default for ResultConverter<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> Clone for ResultConverter<U> {
    fn clone(&self) -> Self {
        Self::with_config(self.config.clone())
    }
}

impl<U> fmt::Debug for ResultConverter<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultConverter")
            .field("config", &self.config)
            .finish()
    }
}
