//! Typed messages between the UI layer and the session controller.

use std::sync::Arc;

use corrector_common::{ServiceError, ValidationError};
use corrector_core::{ErrorSummary, MarkerDetail, RenderedDocument};

/// Input from the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Check this text (trimmed before validation).
    SubmitRequested(String),
    /// A marker was clicked or activated from the keyboard.
    MarkerActivated(usize),
    /// A suggestion in the open detail view was chosen.
    SuggestionChosen(String),
    /// "Ignore" was chosen in the open detail view.
    IgnoreChosen,
    /// The detail view was dismissed without an action.
    DetailClosed,
    ClearRequested,
}

/// What the UI should show.
#[derive(Debug, Clone)]
pub enum RenderSignal {
    /// Nothing checked, or the session was cleared.
    Idle,
    Checking,
    Rendered {
        document: RenderedDocument,
        summary: ErrorSummary,
    },
    NoErrors,
    /// Input rejected before any request was made. Session state is unchanged.
    Validation(ValidationError),
    /// The check failed. The previous results are kept and stay interactive;
    /// `previous` is their document, None when nothing is left to show.
    ServiceFailed {
        error: Arc<ServiceError>,
        previous: Option<RenderedDocument>,
    },
}

impl RenderSignal {
    /// Localized message for the error variants.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Validation(error) => Some(error.user_message()),
            Self::ServiceFailed { error, .. } => Some(error.user_message().to_owned()),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::ServiceFailed { .. })
    }
}

/// Output of the session towards the UI layer.
#[derive(Debug, Clone)]
pub enum SessionOutput {
    Render(RenderSignal),
    DetailOpened(MarkerDetail),
    DetailClosed,
}

impl From<RenderSignal> for SessionOutput {
    fn from(signal: RenderSignal) -> Self {
        Self::Render(signal)
    }
}
