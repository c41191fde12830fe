//! TTL panel state machine.
//!
//! ```text
//! Idle ──edit──▶ Editing ──submit──▶ Validating ──invalid──▶ Editing
//!                                        │
//!                                      valid
//!                                        ▼
//!                                   Submitting ──set ok──▶ Idle (+ confirmation)
//!                                        └────set err────▶ Editing
//! ```
//!
//! [`PanelState`] holds the state and the synchronous transitions; the
//! backend round trip lives in [`submit_ttl`]. Event-loop front ends call
//! them separately, everything else can use [`TtlPanel`].

use std::sync::Arc;

use crate::error::{TtlError, TtlResult};
use crate::input::{InputEdit, InputMode, TtlInput};
use crate::traits::TtlBackend;
use crate::types::{Ttl, TtlValues};

/// Pending success acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    /// The value that was written
    pub ttl: Ttl,
}

/// Result of a `set` followed, on success, by a refreshing `get`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// `set` succeeded; `refreshed` is the follow-up `get`
    Applied {
        ttl: Ttl,
        refreshed: TtlResult<TtlValues>,
    },
    /// `set` failed
    Rejected(TtlError),
}

/// Run `set(ttl)` and, only once it has succeeded, `get()`.
pub async fn submit_ttl(backend: &dyn TtlBackend, ttl: Ttl) -> SubmitOutcome {
    match backend.set(ttl).await {
        Ok(()) => SubmitOutcome::Applied {
            ttl,
            refreshed: backend.get().await,
        },
        Err(e) => SubmitOutcome::Rejected(e),
    }
}

/// Issued when a `get` is started and handed back with its result.
///
/// Fetches started before the latest write are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Panel state: displayed values, pending input, error row and dialog.
#[derive(Debug)]
pub struct PanelState {
    values: TtlValues,
    input: Box<dyn TtlInput>,
    error: Option<String>,
    submitting: bool,
    confirmation: Option<Confirmation>,
    // bumped when a write starts and when it completes
    write_epoch: u64,
}

impl PanelState {
    pub fn new(mode: InputMode) -> Self {
        Self::with_input(mode.build())
    }

    pub fn with_input(input: Box<dyn TtlInput>) -> Self {
        Self {
            values: TtlValues::default(),
            input,
            error: None,
            submitting: false,
            confirmation: None,
            write_epoch: 0,
        }
    }

    pub fn values(&self) -> TtlValues {
        self.values
    }

    pub fn input(&self) -> &dyn TtlInput {
        self.input.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A valid submission is waiting for the backend.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn confirmation(&self) -> Option<Confirmation> {
        self.confirmation
    }

    fn show_error(&mut self, e: &TtlError) {
        if e.is_expected() {
            log::warn!("{e}");
        } else {
            log::error!("{e}");
        }
        self.error = Some(e.to_string());
    }

    /// Apply the result of a `get`.
    ///
    /// On failure the previously displayed values stay in place.
    pub fn apply_fetch(&mut self, result: TtlResult<TtlValues>) {
        match result {
            Ok(values) => {
                self.values = values;
                self.error = None;
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Ticket for a `get` about to be dispatched.
    pub fn begin_fetch(&self) -> FetchTicket {
        FetchTicket(self.write_epoch)
    }

    /// Apply the result of a `get` started with `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when a write started
    /// or completed after the ticket was issued.
    pub fn apply_fetch_for(&mut self, ticket: FetchTicket, result: TtlResult<TtlValues>) -> bool {
        if ticket.0 != self.write_epoch {
            log::debug!("Dropped TTL fetch issued before the latest write");
            return false;
        }
        self.apply_fetch(result);
        true
    }

    /// Feed an edit to the input control. Clears any shown error.
    ///
    /// Returns whether the input accepted the edit. Edits are ignored while
    /// a submission is in flight.
    pub fn handle_ttl_change(&mut self, edit: InputEdit) -> bool {
        if self.submitting {
            log::debug!("Edit ignored: submission in flight");
            return false;
        }
        self.error = None;
        self.input.apply(edit)
    }

    /// Validate the pending input and enter the submitting state.
    ///
    /// Returns the value to hand to the backend. Invalid input sets the error
    /// row; a submission already in flight yields [`TtlError::Busy`] and
    /// leaves the state untouched.
    pub fn begin_submit(&mut self) -> TtlResult<Ttl> {
        if self.submitting {
            log::debug!("Submission ignored: previous request still in flight");
            return Err(TtlError::Busy);
        }
        match Ttl::validate(self.input.candidate()) {
            Ok(ttl) => {
                self.submitting = true;
                self.write_epoch += 1;
                Ok(ttl)
            }
            Err(e) => {
                log::debug!("Rejected TTL input {:?}", self.input.display());
                self.show_error(&e);
                Err(e)
            }
        }
    }

    /// Apply the outcome of [`submit_ttl`] and leave the submitting state.
    pub fn apply_submit(&mut self, outcome: SubmitOutcome) {
        self.submitting = false;
        self.write_epoch += 1;
        match outcome {
            SubmitOutcome::Applied { ttl, refreshed } => {
                self.input.reset();
                self.error = None;
                self.confirmation = Some(Confirmation { ttl });
                self.apply_fetch(refreshed);
            }
            SubmitOutcome::Rejected(e) => self.show_error(&e),
        }
    }

    /// Close the success dialog.
    pub fn dismiss_confirmation(&mut self) {
        self.confirmation = None;
    }
}

/// Panel bound to a backend, driving the full contract with awaited calls.
pub struct TtlPanel {
    backend: Arc<dyn TtlBackend>,
    state: PanelState,
}

impl TtlPanel {
    pub fn new(backend: Arc<dyn TtlBackend>, mode: InputMode) -> Self {
        Self {
            backend,
            state: PanelState::new(mode),
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    /// Call `get` and update the displayed values or the error row.
    pub async fn fetch_ttl_values(&mut self) -> TtlResult<TtlValues> {
        let result = self.backend.get().await;
        self.state.apply_fetch(result.clone());
        result
    }

    pub fn handle_ttl_change(&mut self, edit: InputEdit) -> bool {
        self.state.handle_ttl_change(edit)
    }

    /// Validate, `set`, then refresh with `get`.
    ///
    /// Returns the written value when `set` succeeded, whatever the refresh
    /// produced; validation and `set` failures are returned as errors and also
    /// shown in the error row.
    pub async fn handle_set_ttl(&mut self) -> TtlResult<Ttl> {
        let ttl = self.state.begin_submit()?;
        let outcome = submit_ttl(self.backend.as_ref(), ttl).await;
        let result = match &outcome {
            SubmitOutcome::Applied { ttl, .. } => Ok(*ttl),
            SubmitOutcome::Rejected(e) => Err(e.clone()),
        };
        self.state.apply_submit(outcome);
        result
    }
}
