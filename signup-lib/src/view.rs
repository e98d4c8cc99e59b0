//! View contract for rendering a form session.

use crate::field::FieldName;
use crate::session::FormMessage;
use crate::verdict::FieldVerdict;

/// Renders verdicts and messages produced by a [`crate::FormSession`].
///
/// Implementations own the live presentation (input widgets, styling, error
/// text). Methods are called synchronously from the session, and `reset`
/// also from the delayed reset task.
pub trait FormView: Send + Sync {
    /// Show a field verdict: error styling and the message when invalid,
    /// valid styling and no message otherwise.
    fn show_field(&self, field: FieldName, verdict: &FieldVerdict);

    /// Show the aggregate submit message.
    fn show_message(&self, message: &FormMessage);

    /// Blank every field and clear all verdict styling, error text and the
    /// aggregate message.
    fn reset(&self);
}

/// A view that renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopView;

impl FormView for NoopView {
    fn show_field(&self, _field: FieldName, _verdict: &FieldVerdict) {}

    fn show_message(&self, _message: &FormMessage) {}

    fn reset(&self) {}
}
