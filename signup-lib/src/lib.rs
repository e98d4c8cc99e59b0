//! Registration form validation library
//!
//! Field rules, submit aggregation and the delayed-reset flow for a signup
//! form. Rendering is left to a [`view::FormView`] implementation.

pub mod config;
pub mod controller;
pub mod country;
pub mod engine;
pub mod error;
pub mod events;
pub mod field;
pub mod session;
pub mod verdict;
pub mod view;

pub use config::FormConfig;
pub use controller::{OutcomeKind, SubmissionController, SubmitOutcome, SubmitState};
pub use country::CountryCode;
pub use events::{EventKind, FormEvent};
pub use field::{FieldName, FormValues};
pub use session::{EventResponse, FieldDisplay, FormMessage, FormSession, SessionSnapshot};
pub use verdict::{FailureReason, FieldVerdict, FormVerdict};
pub use view::FormView;
