//! Three-phase asynchronous actions.
//!
//! Every remote operation is dispatched as up to three actions sharing one
//! [`RequestId`] and the argument it was invoked with: `Pending` before the
//! network call, then exactly one of `Fulfilled` or `Rejected`.

use std::fmt;

use uuid::Uuid;

/// Identity of one invocation of an asynchronous operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Phase of a single operation invocation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase<P> {
    /// Not started yet.
    #[default]
    Idle,
    /// Request issued, no response yet.
    Pending,
    /// Request succeeded with a payload.
    Fulfilled(P),
    /// Request failed with a human-readable message.
    Rejected(String),
}

impl<P> Phase<P> {
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Fulfilled(_) | Self::Rejected(_))
    }

    /// The payload, if the operation succeeded.
    pub fn fulfilled(self) -> Option<P> {
        match self {
            Self::Fulfilled(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) => Some(message),
            _ => None,
        }
    }

    /// Short tag used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Fulfilled(_) => "fulfilled",
            Self::Rejected(_) => "rejected",
        }
    }
}

/// One phase action of an asynchronous operation.
///
/// `A` is the argument the operation was invoked with, `P` the payload
/// returned by the server on success.
#[derive(Debug, Clone, PartialEq)]
pub struct AsyncAction<A, P> {
    pub request_id: RequestId,
    pub arg: A,
    pub phase: Phase<P>,
}

impl<A, P> AsyncAction<A, P> {
    pub fn pending(request_id: RequestId, arg: A) -> Self {
        Self {
            request_id,
            arg,
            phase: Phase::Pending,
        }
    }

    pub fn fulfilled(request_id: RequestId, arg: A, payload: P) -> Self {
        Self {
            request_id,
            arg,
            phase: Phase::Fulfilled(payload),
        }
    }

    pub fn rejected(request_id: RequestId, arg: A, error: impl Into<String>) -> Self {
        Self {
            request_id,
            arg,
            phase: Phase::Rejected(error.into()),
        }
    }
}

/// Loading/error flags carried by every slice that talks to the API.
pub trait AsyncFlags {
    fn loading_mut(&mut self) -> &mut bool;
    fn error_mut(&mut self) -> &mut Option<String>;

    /// Pending: start loading and forget the previous error.
    fn begin(&mut self) {
        *self.loading_mut() = true;
        *self.error_mut() = None;
    }

    fn succeed(&mut self) {
        *self.loading_mut() = false;
        *self.error_mut() = None;
    }

    fn fail(&mut self, message: String) {
        *self.loading_mut() = false;
        *self.error_mut() = Some(message);
    }
}

/// Apply the flag half of a phase and return the payload for the caller to
/// merge, if any.
pub fn fold_phase<S: AsyncFlags, P>(state: &mut S, phase: Phase<P>) -> Option<P> {
    match phase {
        Phase::Idle => None,
        Phase::Pending => {
            state.begin();
            None
        }
        Phase::Fulfilled(payload) => {
            state.succeed();
            Some(payload)
        }
        Phase::Rejected(message) => {
            state.fail(message);
            None
        }
    }
}
