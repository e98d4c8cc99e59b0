//! Live form session.
//!
//! A [`FormSession`] owns the current values and display state of one form,
//! maps view events onto validators, drives the submit state machine and
//! schedules the post-success reset.
//!
//! # Example
//!
//! ```
//! use signup_lib::view::NoopView;
//! use signup_lib::{FieldName, FormConfig, FormEvent, FormSession};
//!
//! let session = FormSession::new(FormConfig::default(), NoopView);
//! session.set_value(FieldName::Email, "ada@example");
//!
//! let response = session.handle(FormEvent::Blur(FieldName::Email));
//! assert!(!response.verdicts()[0].1.valid);
//! ```

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, info};

use crate::config::FormConfig;
use crate::controller::reset::{self, ResetHandle};
use crate::controller::{OutcomeKind, SubmissionController, SubmitOutcome, SubmitState};
use crate::engine;
use crate::events::FormEvent;
use crate::field::{FieldName, FormValues};
use crate::verdict::FieldVerdict;
use crate::view::FormView;

/// Display state of a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldDisplay {
    /// Not validated since the last reset.
    #[default]
    Neutral,
    Valid,
    /// Invalid, with the inline error text.
    Error(String),
}

impl From<&FieldVerdict> for FieldDisplay {
    fn from(verdict: &FieldVerdict) -> Self {
        if verdict.valid {
            Self::Valid
        } else {
            Self::Error(verdict.message.clone())
        }
    }
}

/// The aggregate message shown after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: OutcomeKind,
    pub text: String,
}

/// What handling an event produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResponse {
    /// Live validation of the listed fields.
    Validated(Vec<(FieldName, FieldVerdict)>),
    /// A full submit.
    Submitted(SubmitOutcome),
}

impl EventResponse {
    /// Field verdicts produced, in order.
    pub fn verdicts(&self) -> Vec<(FieldName, FieldVerdict)> {
        match self {
            Self::Validated(verdicts) => verdicts.clone(),
            Self::Submitted(outcome) => outcome
                .verdict
                .iter()
                .map(|(field, verdict)| (field, verdict.clone()))
                .collect(),
        }
    }
}

/// Read-only copy of a session's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub values: FormValues,
    pub fields: BTreeMap<FieldName, FieldDisplay>,
    pub message: Option<FormMessage>,
    pub state: SubmitState,
}

impl SessionSnapshot {
    pub fn display(&self, field: FieldName) -> &FieldDisplay {
        static NEUTRAL: FieldDisplay = FieldDisplay::Neutral;
        self.fields.get(&field).unwrap_or(&NEUTRAL)
    }
}

#[derive(Debug, Default)]
struct SessionState {
    values: FormValues,
    fields: BTreeMap<FieldName, FieldDisplay>,
    message: Option<FormMessage>,
    state: SubmitState,
    last_reset: Option<ResetHandle>,
}

/// A single form session bound to a view.
///
/// Cloning yields another handle to the same session.
#[derive(Clone)]
pub struct FormSession {
    controller: Arc<SubmissionController>,
    state: Arc<Mutex<SessionState>>,
    view: Arc<dyn FormView>,
}

impl FormSession {
    /// Creates a session with empty values.
    pub fn new(config: FormConfig, view: impl FormView + 'static) -> Self {
        Self::with_view(config, Arc::new(view))
    }

    /// Creates a session rendering into a shared view.
    pub fn with_view(config: FormConfig, view: Arc<dyn FormView>) -> Self {
        Self {
            controller: Arc::new(SubmissionController::new(config)),
            state: Arc::new(Mutex::new(SessionState::default())),
            view,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Stores a raw value without validating it.
    pub fn set_value(&self, field: FieldName, value: impl Into<String>) {
        self.lock().values.set(field, value);
    }

    /// Current raw value of a field.
    pub fn value(&self, field: FieldName) -> String {
        self.lock().values.get(field).to_string()
    }

    /// Stores a value and handles the matching input event.
    pub fn input(&self, field: FieldName, value: impl Into<String>) -> EventResponse {
        self.set_value(field, value);
        self.handle(FormEvent::Input(field))
    }

    /// Handles a view event.
    ///
    /// Live events re-validate only the fields wired to them. Submit runs
    /// [`FormSession::submit`].
    pub fn handle(&self, event: FormEvent) -> EventResponse {
        if event == FormEvent::Submit {
            return EventResponse::Submitted(self.submit());
        }

        let fields = event.fields_to_validate();
        debug!("{:?} on {:?}", event, event.target());
        let values = {
            let mut state = self.lock();
            if state.state == SubmitState::FailureShown {
                state.state = SubmitState::Idle;
            }
            state.values.clone()
        };

        let verdicts: Vec<(FieldName, FieldVerdict)> = fields
            .iter()
            .map(|&field| (field, engine::validate_field(field, &values)))
            .collect();

        {
            let mut state = self.lock();
            for (field, verdict) in &verdicts {
                state.fields.insert(*field, FieldDisplay::from(verdict));
            }
        }

        for (field, verdict) in &verdicts {
            self.view.show_field(*field, verdict);
        }

        EventResponse::Validated(verdicts)
    }

    /// Validates every field and shows the aggregate outcome.
    ///
    /// On success a reset is scheduled after the configured delay; it clears
    /// all values and display state and calls [`FormView::reset`]. A pending
    /// reset is never cancelled, so each successful submit resets once.
    ///
    /// Outside a tokio runtime no reset is scheduled; the session stays in
    /// [`SubmitState::SuccessPendingReset`] until [`FormSession::reset`] is
    /// called.
    pub fn submit(&self) -> SubmitOutcome {
        let values = {
            let mut state = self.lock();
            state.state = SubmitState::Validating;
            state.values.clone()
        };

        let outcome = self.controller.submit(&values);
        let message = FormMessage {
            kind: outcome.kind,
            text: outcome.message.clone(),
        };

        {
            let mut state = self.lock();
            for (field, verdict) in outcome.verdict.iter() {
                state.fields.insert(field, FieldDisplay::from(verdict));
            }
            state.message = Some(message.clone());
            state.state = if outcome.is_success() {
                SubmitState::SuccessPendingReset
            } else {
                SubmitState::FailureShown
            };
        }

        for (field, verdict) in outcome.verdict.iter() {
            self.view.show_field(field, verdict);
        }
        self.view.show_message(&message);

        if outcome.is_success() {
            let session = self.clone();
            if let Some(handle) =
                reset::schedule(self.controller.reset_delay(), move || session.reset())
            {
                self.lock().last_reset = Some(handle);
            }
        }

        outcome
    }

    /// Clears all values, field displays and the aggregate message.
    pub fn reset(&self) {
        {
            let mut state = self.lock();
            state.values.clear();
            for field in FieldName::ALL {
                state.fields.insert(field, FieldDisplay::Neutral);
            }
            state.message = None;
            state.state = SubmitState::Idle;
        }
        info!("form reset");
        self.view.reset();
    }

    /// Handle of the most recently scheduled reset, if any.
    pub fn last_reset(&self) -> Option<ResetHandle> {
        self.lock().last_reset.clone()
    }

    pub fn state(&self) -> SubmitState {
        self.lock().state
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock();
        debug!("snapshot in state {:?}", state.state);
        SessionSnapshot {
            values: state.values.clone(),
            fields: state.fields.clone(),
            message: state.message.clone(),
            state: state.state,
        }
    }
}
