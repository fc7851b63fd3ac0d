//! Request lifecycle state.
//!
//! Every network-calling operation reports to its caller through a
//! [`RequestState`]: nothing issued yet, call outstanding, or a final
//! success/failure value. The state lives in a [`RequestSlot`], one per
//! user-facing affordance.
//!
//! Overlapping calls on one slot are resolved by generation counting:
//! [`RequestSlot::begin`] stamps each call with a ticket, and a completion
//! is applied only while its ticket is still the newest issued. A stale
//! completion is discarded, so the visible state always belongs to the
//! most recently issued call. In-flight superseded calls are not
//! cancelled; their results are simply ignored on arrival.

use std::sync::Mutex;

use tracing::debug;

/// The lifecycle of one asynchronous call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T, E> {
    /// No call has been issued (or the slot was reset).
    Idle,
    /// A call is outstanding.
    InProgress,
    /// The newest call finished with a value.
    Success(T),
    /// The newest call finished with an error.
    Failure(E),
}

impl<T, E> RequestState<T, E> {
    /// The success value, if that is the current state.
    pub fn success(&self) -> Option<&T> {
        match self {
            RequestState::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The failure value, if that is the current state.
    pub fn failure(&self) -> Option<&E> {
        match self {
            RequestState::Failure(error) => Some(error),
            _ => None,
        }
    }
}

/// Proof that a call was issued on a slot; pass it back to
/// [`RequestSlot::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A generation-counted state box for one logical operation.
#[derive(Debug)]
pub struct RequestSlot<T, E> {
    inner: Mutex<Inner<T, E>>,
}

#[derive(Debug)]
struct Inner<T, E> {
    generation: u64,
    state: RequestState<T, E>,
}

impl<T: Clone, E: Clone> RequestSlot<T, E> {
    /// Create an idle slot.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                generation: 0,
                state: RequestState::Idle,
            }),
        }
    }

    /// Mark a new call outstanding and return its ticket.
    ///
    /// Any previously issued call on this slot becomes stale.
    pub fn begin(&self) -> Ticket {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.state = RequestState::InProgress;
        Ticket(inner.generation)
    }

    /// Apply a call's outcome, unless the call has been superseded.
    ///
    /// Returns whether the outcome was applied.
    pub fn complete(&self, ticket: Ticket, result: Result<T, E>) -> bool {
        let mut inner = self.lock();
        if ticket.0 != inner.generation {
            debug!(
                issued = ticket.0,
                current = inner.generation,
                "discarding stale completion"
            );
            return false;
        }
        inner.state = match result {
            Ok(value) => RequestState::Success(value),
            Err(error) => RequestState::Failure(error),
        };
        true
    }

    /// Return the slot to idle, superseding any outstanding call.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.state = RequestState::Idle;
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> RequestState<T, E> {
        self.lock().state.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<T, E>> {
        self.inner.lock().expect("request slot lock poisoned")
    }
}

impl<T: Clone, E: Clone> Default for RequestSlot<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Slot = RequestSlot<u32, String>;

    #[test]
    fn starts_idle() {
        let slot = Slot::new();
        assert_eq!(slot.state(), RequestState::Idle);
    }

    #[test]
    fn begin_then_complete_reaches_success() {
        let slot = Slot::new();
        let ticket = slot.begin();
        assert_eq!(slot.state(), RequestState::InProgress);

        assert!(slot.complete(ticket, Ok(7)));
        assert_eq!(slot.state(), RequestState::Success(7));
    }

    #[test]
    fn failure_carries_the_error() {
        let slot = Slot::new();
        let ticket = slot.begin();
        assert!(slot.complete(ticket, Err("boom".to_string())));
        assert_eq!(slot.state(), RequestState::Failure("boom".to_string()));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let slot = Slot::new();
        let first = slot.begin();
        let second = slot.begin();

        // The superseded call finishes late; its result must not win.
        assert!(!slot.complete(first, Ok(1)));
        assert_eq!(slot.state(), RequestState::InProgress);

        assert!(slot.complete(second, Ok(2)));
        assert_eq!(slot.state(), RequestState::Success(2));
    }

    #[test]
    fn newest_call_wins_even_when_older_finishes_later() {
        let slot = Slot::new();
        let first = slot.begin();
        let second = slot.begin();

        assert!(slot.complete(second, Ok(2)));
        assert!(!slot.complete(first, Ok(1)));
        assert_eq!(slot.state(), RequestState::Success(2));
    }

    #[test]
    fn reset_supersedes_outstanding_calls() {
        let slot = Slot::new();
        let ticket = slot.begin();
        slot.reset();

        assert!(!slot.complete(ticket, Ok(1)));
        assert_eq!(slot.state(), RequestState::Idle);
    }

    #[test]
    fn completed_ticket_cannot_be_reused_after_a_new_call() {
        let slot = Slot::new();
        let first = slot.begin();
        assert!(slot.complete(first, Ok(1)));

        let _second = slot.begin();
        assert!(!slot.complete(first, Ok(99)));
        assert_eq!(slot.state(), RequestState::InProgress);
    }
}
