//! Submit aggregation.
//!
//! [`SubmissionController`] runs every field through the engine and turns the
//! result into a [`SubmitOutcome`]. Scheduling the post-success reset is left
//! to the caller via [`reset::schedule`], so submitting itself stays pure.

pub mod reset;

use std::time::Duration;

use log::info;

use crate::config::FormConfig;
use crate::engine;
use crate::field::{FieldName, FormValues};
use crate::verdict::FormVerdict;

/// Whether a submit was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Failure,
}

impl OutcomeKind {
    /// Style class a view applies to the aggregate message.
    pub fn style_class(self) -> &'static str {
        match self {
            Self::Success => "high-five",
            Self::Failure => "error",
        }
    }
}

/// Aggregate result of a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub kind: OutcomeKind,
    /// Aggregate message, independent of which fields failed.
    pub message: String,
    /// Per-field verdicts for every field.
    pub verdict: FormVerdict,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }
}

/// Phase of the submit flow.
///
/// `Idle → Validating → SuccessPendingReset → Idle` on success and
/// `Idle → Validating → FailureShown → Idle` on failure. `Validating` can be
/// re-entered from any phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Validating,
    SuccessPendingReset,
    FailureShown,
}

/// Validates whole forms and decides submit outcomes.
#[derive(Debug, Clone, Default)]
pub struct SubmissionController {
    config: FormConfig,
}

impl SubmissionController {
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    /// Delay between a successful submit and the reset.
    pub fn reset_delay(&self) -> Duration {
        self.config.reset_delay
    }

    /// Validates every field. No field is skipped when an earlier one fails.
    pub fn validate_all(&self, values: &FormValues) -> FormVerdict {
        let mut verdict = FormVerdict::new();
        for field in FieldName::ALL {
            verdict.insert(field, engine::validate_field(field, values));
        }
        verdict
    }

    /// Validates the form and builds the aggregate outcome.
    pub fn submit(&self, values: &FormValues) -> SubmitOutcome {
        let verdict = self.validate_all(values);

        let outcome = if verdict.all_valid() {
            SubmitOutcome {
                kind: OutcomeKind::Success,
                message: self.config.success_message.clone(),
                verdict,
            }
        } else {
            SubmitOutcome {
                kind: OutcomeKind::Failure,
                message: self.config.failure_message.clone(),
                verdict,
            }
        };

        info!(
            "submit {:?}, invalid fields: {:?}",
            outcome.kind,
            outcome.verdict.invalid_fields()
        );
        outcome
    }
}
