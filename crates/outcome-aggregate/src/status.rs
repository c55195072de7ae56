use outcome_types::{Event, Severity, Status};

/// Derive the aggregate status by folding event severities left-to-right from `Ok`.
///
/// This is the reference reduction: an [`Outcome`](crate::Outcome) keeps the
/// same value incrementally, one [`escalate`] step per appended event.
///
/// Complexity: O(n) over `events.len()`. An empty log derives `Ok`.
pub fn derive_status(events: &[Event]) -> Status {
    events
        .iter()
        .fold(Status::Ok, |status, event| escalate(status, event.severity()))
}

/// Apply a single escalation step.
///
/// The status of equal rank to `severity` replaces `current` only when it
/// ranks strictly higher; equal or lower ranks return `current` unchanged.
pub fn escalate(current: Status, severity: Severity) -> Status {
    let candidate = Status::for_severity(severity);
    if current >= candidate {
        current
    } else {
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(severities: &[Severity]) -> Vec<Event> {
        severities
            .iter()
            .map(|severity| Event::new(*severity, "key", "message"))
            .collect()
    }

    #[test]
    fn empty_log_is_ok() {
        assert_eq!(derive_status(&[]), Status::Ok);
    }

    #[test]
    fn escalate_never_lowers_status() {
        for current in Status::ALL {
            for severity in Severity::ALL {
                let next = escalate(current, severity);
                assert!(next >= current);
                assert_eq!(next, current.max(Status::for_severity(severity)));
            }
        }
    }

    #[test]
    fn lower_or_equal_rank_is_a_no_op() {
        assert_eq!(escalate(Status::Warn, Severity::Info), Status::Warn);
        assert_eq!(escalate(Status::Warn, Severity::Warn), Status::Warn);
        assert_eq!(escalate(Status::Error, Severity::Warn), Status::Error);
        assert_eq!(escalate(Status::Ok, Severity::Info), Status::Ok);
    }

    #[test]
    fn outcome_is_independent_of_event_order() {
        use Severity::*;

        let permutations = [
            [Info, Warn, Error],
            [Info, Error, Warn],
            [Warn, Info, Error],
            [Warn, Error, Info],
            [Error, Info, Warn],
            [Error, Warn, Info],
        ];

        for permutation in permutations {
            assert_eq!(derive_status(&log(&permutation)), Status::Error);
        }
        assert_eq!(derive_status(&log(&[Info, Warn, Info])), Status::Warn);
        assert_eq!(derive_status(&log(&[Info, Info])), Status::Ok);
    }
}
