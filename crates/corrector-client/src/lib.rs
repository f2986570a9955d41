//! corrector-client: HTTP adapter for LanguageTool-compatible checking services.

pub mod client;
pub mod types;

pub use client::LanguageToolClient;
pub use types::{CheckResponse, Match};
