//! # Async-call controller
//!
//! [`CallState`] tracks one logical async call: its last `data`, whether it is
//! `loading`, and the `error` message of the last failure. Pages drive it with
//! [`begin`](CallState::begin) before awaiting and [`settle`](CallState::settle)
//! afterwards; [`AsyncCall`] bundles both steps for code that is not tied to a
//! UI framework.
//!
//! Every `begin` hands out a [`Ticket`]. Only the holder of the newest ticket
//! may change the state, so when calls overlap the most recently *issued* call
//! wins, whatever order the responses arrive in. `reset` invalidates every
//! outstanding ticket.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use api::ApiError;

pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Generation number of one issued call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct CallState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    issued: u64,
}

impl<T> Default for CallState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            issued: 0,
        }
    }
}

impl<T: Clone> CallState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a call: loading on, error cleared, older tickets superseded.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        Ticket(self.issued)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Apply the outcome of the call holding `ticket`.
    ///
    /// Returns what the caller of `execute` sees: the value on success, `None`
    /// on failure. A superseded ticket gets the same return value but leaves
    /// the state untouched.
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> Option<T> {
        if !self.is_current(ticket) {
            tracing::debug!(
                "Discarding result of superseded call #{} (latest is #{})",
                ticket.0,
                self.issued
            );
            return result.ok();
        }

        self.loading = false;
        match result {
            Ok(value) => {
                self.data = Some(value.clone());
                Some(value)
            }
            Err(err) => {
                self.error = Some(message_for(&err));
                None
            }
        }
    }

    /// Back to the initial state. In-flight calls will be discarded.
    pub fn reset(&mut self) {
        self.issued += 1;
        self.data = None;
        self.loading = false;
        self.error = None;
    }
}

/// Text shown for a failed call.
pub fn message_for(err: &ApiError) -> String {
    let message = err.user_message();
    if message.trim().is_empty() {
        UNEXPECTED_ERROR.to_string()
    } else {
        message
    }
}

/// [`CallState`] behind a shared handle, for use outside a UI framework.
#[derive(Debug)]
pub struct AsyncCall<T> {
    state: Rc<RefCell<CallState<T>>>,
}

impl<T> Clone for AsyncCall<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: Clone> Default for AsyncCall<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> AsyncCall<T> {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(CallState::new())),
        }
    }

    pub async fn execute<F>(&self, call: F) -> Option<T>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let ticket = self.state.borrow_mut().begin();
        let result = call.await;
        self.state.borrow_mut().settle(ticket, result)
    }

    pub fn reset(&self) {
        self.state.borrow_mut().reset();
    }

    pub fn snapshot(&self) -> CallState<T> {
        self.state.borrow().clone()
    }

    pub fn data(&self) -> Option<T> {
        self.state.borrow().data.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }
}
