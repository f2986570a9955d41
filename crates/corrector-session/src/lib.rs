//! corrector-session: the check session controller.
//!
//! - `CheckSession` - owns the checked text, spans and ignore set, and turns
//!   [`UiEvent`]s into [`SessionOutput`]s
//! - `drive` - runs a session against a checking service over tokio channels

pub mod controller;
pub mod driver;
pub mod error;
pub mod events;

pub use controller::{
    CheckCompletion, CheckPhase, CheckSession, Generation, OpenDetail, PendingCheck, Reaction,
    SessionState,
};
pub use driver::drive;
pub use error::CorrectionError;
pub use events::{RenderSignal, SessionOutput, UiEvent};
