//! The check session controller.
//!
//! `CheckSession` owns the session state and is its only writer. It does no
//! I/O itself: starting a check returns a [`PendingCheck`] which the caller
//! runs against a checking service and feeds back through
//! [`CheckSession::complete`]. Every check and every clear bumps the session
//! [`Generation`], and completions carrying an older generation are
//! discarded.

use std::sync::Arc;
use std::time::Duration;

use corrector_common::{CheckerConfig, ServiceError, ValidationError};
use corrector_core::{
    CheckRequest, IgnoredOffsets, LocalCheckingService, MarkerDetail, SourceText, Span,
    active_spans, annotate, ignore_marker, resolve_marker, retain_valid, summarize,
};

use crate::error::CorrectionError;
use crate::events::{RenderSignal, SessionOutput, UiEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckPhase {
    #[default]
    Idle,
    Checking,
    Rendered,
    NoErrors,
    Failed,
}

/// Version tag of the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Text, spans and ignores of the last successful check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The text `spans` were computed against.
    pub current_text: SourceText,
    /// All spans from the last check, in service order.
    pub spans: Vec<Span>,
    pub ignored: IgnoredOffsets,
}

/// The span behind the currently open detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenDetail {
    pub index: usize,
    pub offset: usize,
    pub length: usize,
}

/// A check that has been started but not yet completed.
#[derive(Debug, Clone)]
pub struct PendingCheck {
    generation: Generation,
    request: CheckRequest,
}

impl PendingCheck {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn text(&self) -> &str {
        &self.request.text
    }

    pub fn request(&self) -> &CheckRequest {
        &self.request
    }

    /// Run the check against `service`, failing with
    /// [`ServiceError::Timeout`] if it takes longer than `timeout`.
    pub async fn run<S: LocalCheckingService>(
        self,
        service: &S,
        timeout: Duration,
    ) -> CheckCompletion {
        let result = match tokio::time::timeout(timeout, service.check(&self.request)).await {
            Ok(result) => result,
            Err(_) => Err(ServiceError::Timeout { after: timeout }),
        };
        self.finish(result)
    }

    /// Pair the service result with this check's generation.
    pub fn finish(self, result: Result<Vec<Span>, ServiceError>) -> CheckCompletion {
        CheckCompletion {
            generation: self.generation,
            text: self.request.text,
            result,
        }
    }
}

/// The outcome of a [`PendingCheck`].
#[derive(Debug)]
pub struct CheckCompletion {
    generation: Generation,
    text: String,
    result: Result<Vec<Span>, ServiceError>,
}

impl CheckCompletion {
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

/// What handling a [`UiEvent`] produced.
#[derive(Debug, Default)]
pub struct Reaction {
    pub outputs: Vec<SessionOutput>,
    /// A check to run, if the event started one.
    pub check: Option<PendingCheck>,
}

#[derive(Debug)]
pub struct CheckSession {
    config: CheckerConfig,
    state: SessionState,
    phase: CheckPhase,
    generation: Generation,
    detail: Option<OpenDetail>,
    last_error: Option<Arc<ServiceError>>,
}

impl CheckSession {
    pub fn new(config: CheckerConfig) -> Self {
        let state = SessionState {
            current_text: SourceText::new("", config.offset_unit),
            ..SessionState::default()
        };
        Self {
            config,
            state,
            phase: CheckPhase::Idle,
            generation: Generation::default(),
            detail: None,
            last_error: None,
        }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    pub fn phase(&self) -> CheckPhase {
        self.phase
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn open_detail(&self) -> Option<OpenDetail> {
        self.detail
    }

    pub fn active_spans(&self) -> Vec<&Span> {
        active_spans(&self.state.spans, &self.state.ignored)
    }

    /// Start a check of user-submitted text.
    ///
    /// The text is trimmed, then rejected if empty or longer than
    /// `max_chars` in the configured offset unit. A rejected submission
    /// changes nothing.
    pub fn submit(&mut self, text: &str) -> Result<PendingCheck, ValidationError> {
        self.begin_check(text.trim().to_owned())
    }

    fn validate(&self, text: &str) -> Result<(), ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::Empty);
        }
        let len = self.config.offset_unit.measure(text);
        if len > self.config.max_chars {
            return Err(ValidationError::TooLong {
                len,
                max: self.config.max_chars,
            });
        }
        Ok(())
    }

    fn begin_check(&mut self, text: String) -> Result<PendingCheck, ValidationError> {
        self.validate(&text)?;

        self.state.ignored.clear();
        self.detail = None;
        self.generation = self.generation.next();
        self.phase = CheckPhase::Checking;

        tracing::debug!(
            target: "corrector::session",
            generation = self.generation.get(),
            len = text.len(),
            "check started"
        );

        Ok(PendingCheck {
            generation: self.generation,
            request: CheckRequest::new(text, &self.config),
        })
    }

    /// Apply a finished check.
    ///
    /// Returns None when the completion is stale (a newer check or a clear
    /// happened since it started). On success the text and spans are replaced
    /// wholesale. On failure they are left as they were.
    pub fn complete(&mut self, completion: CheckCompletion) -> Option<RenderSignal> {
        if completion.generation != self.generation || self.phase != CheckPhase::Checking {
            tracing::warn!(
                target: "corrector::session",
                stale = completion.generation.get(),
                current = self.generation.get(),
                "discarding stale check result"
            );
            return None;
        }

        match completion.result {
            Ok(spans) => {
                let text = SourceText::new(&completion.text, self.config.offset_unit);
                let spans = retain_valid(&text, spans);
                tracing::debug!(
                    target: "corrector::session",
                    generation = self.generation.get(),
                    spans = spans.len(),
                    "check complete"
                );
                self.state.current_text = text;
                self.state.spans = spans;
                self.last_error = None;
                self.settle_phase();
            }
            Err(error) => {
                tracing::error!(
                    target: "corrector::session",
                    generation = self.generation.get(),
                    %error,
                    "check failed"
                );
                self.last_error = Some(Arc::new(error));
                self.phase = CheckPhase::Failed;
            }
        }
        Some(self.render())
    }

    fn settle_phase(&mut self) {
        self.phase = if self.active_spans().is_empty() {
            CheckPhase::NoErrors
        } else {
            CheckPhase::Rendered
        };
    }

    /// Results are on screen: after a check, including a failed one that
    /// left the previous results in place.
    fn showing_results(&self) -> bool {
        matches!(
            self.phase,
            CheckPhase::Rendered | CheckPhase::NoErrors | CheckPhase::Failed
        )
    }

    /// Ignore the span behind active marker `index` and re-render.
    ///
    /// Returns None, changing nothing, if no results are showing or the index
    /// is out of range.
    pub fn ignore(&mut self, index: usize) -> Option<RenderSignal> {
        if !self.showing_results() {
            return None;
        }
        let Some(offset) = ignore_marker(&self.state.spans, &mut self.state.ignored, index) else {
            tracing::debug!(target: "corrector::session", index, "ignore: no such marker");
            return None;
        };
        tracing::debug!(target: "corrector::session", index, offset, "span ignored");

        self.detail = None;
        if self.phase != CheckPhase::Failed {
            self.settle_phase();
        }
        Some(self.render())
    }

    /// Open the detail view for active marker `index`.
    pub fn activate_marker(&mut self, index: usize) -> Option<MarkerDetail> {
        if !self.showing_results() {
            return None;
        }
        let span = resolve_marker(&self.state.spans, &self.state.ignored, index)?;
        let detail = MarkerDetail::new(
            index,
            span,
            &self.state.current_text,
            self.config.max_suggestions,
        );
        self.detail = Some(OpenDetail {
            index,
            offset: span.offset,
            length: span.length,
        });
        Some(detail)
    }

    /// Close the detail view. Returns false if none was open.
    pub fn close_detail(&mut self) -> bool {
        self.detail.take().is_some()
    }

    /// Ignore the span of the open detail view.
    pub fn ignore_open(&mut self) -> Option<RenderSignal> {
        let detail = self.detail.take()?;
        self.ignore(detail.index)
    }

    /// Apply `value` over the span of the open detail view and start a check
    /// of the corrected text. None if no detail view is open.
    pub fn choose_suggestion(
        &mut self,
        value: &str,
    ) -> Option<Result<PendingCheck, CorrectionError>> {
        let detail = self.detail.take()?;
        Some(self.apply_correction(detail.offset, detail.length, value))
    }

    /// Replace `length` units at `offset` of the current text and start a
    /// full check of the result.
    ///
    /// Every span of the old text is dropped once the new check completes;
    /// ignores are cleared immediately. The corrected text is not trimmed.
    pub fn apply_correction(
        &mut self,
        offset: usize,
        length: usize,
        replacement: &str,
    ) -> Result<PendingCheck, CorrectionError> {
        let text = corrector_core::apply_correction(
            &self.state.current_text,
            offset,
            length,
            replacement,
        )?;
        tracing::debug!(
            target: "corrector::session",
            offset,
            length,
            replacement,
            "correction applied"
        );
        Ok(self.begin_check(text)?)
    }

    /// Reset to an empty, idle session. In-flight checks become stale.
    pub fn clear(&mut self) -> RenderSignal {
        self.generation = self.generation.next();
        self.state = SessionState {
            current_text: SourceText::new("", self.config.offset_unit),
            ..SessionState::default()
        };
        self.phase = CheckPhase::Idle;
        self.detail = None;
        self.last_error = None;
        tracing::debug!(
            target: "corrector::session",
            generation = self.generation.get(),
            "session cleared"
        );
        RenderSignal::Idle
    }

    /// The render signal for the current state, computed fresh.
    pub fn render(&self) -> RenderSignal {
        match self.phase {
            CheckPhase::Idle => RenderSignal::Idle,
            CheckPhase::Checking => RenderSignal::Checking,
            CheckPhase::Failed => match &self.last_error {
                Some(error) => {
                    let active = self.active_spans();
                    RenderSignal::ServiceFailed {
                        error: Arc::clone(error),
                        previous: (!active.is_empty())
                            .then(|| annotate(&self.state.current_text, &active)),
                    }
                }
                None => RenderSignal::Idle,
            },
            CheckPhase::Rendered | CheckPhase::NoErrors => {
                let active = self.active_spans();
                if active.is_empty() {
                    RenderSignal::NoErrors
                } else {
                    RenderSignal::Rendered {
                        document: annotate(&self.state.current_text, &active),
                        summary: summarize(&active),
                    }
                }
            }
        }
    }

    /// Handle one UI event.
    pub fn handle(&mut self, event: UiEvent) -> Reaction {
        let mut reaction = Reaction::default();
        match event {
            UiEvent::SubmitRequested(text) => {
                let had_detail = self.detail.is_some();
                match self.submit(&text) {
                    Ok(check) => {
                        if had_detail {
                            reaction.outputs.push(SessionOutput::DetailClosed);
                        }
                        reaction.outputs.push(RenderSignal::Checking.into());
                        reaction.check = Some(check);
                    }
                    Err(error) => reaction.outputs.push(RenderSignal::Validation(error).into()),
                }
            }
            UiEvent::MarkerActivated(index) => {
                if let Some(detail) = self.activate_marker(index) {
                    reaction.outputs.push(SessionOutput::DetailOpened(detail));
                }
            }
            UiEvent::SuggestionChosen(value) => match self.choose_suggestion(&value) {
                None => {}
                Some(Ok(check)) => {
                    reaction.outputs.push(SessionOutput::DetailClosed);
                    reaction.outputs.push(RenderSignal::Checking.into());
                    reaction.check = Some(check);
                }
                Some(Err(CorrectionError::Validation(error))) => {
                    reaction.outputs.push(SessionOutput::DetailClosed);
                    reaction.outputs.push(RenderSignal::Validation(error).into());
                }
                Some(Err(CorrectionError::Span(error))) => {
                    tracing::warn!(
                        target: "corrector::session",
                        %error,
                        "suggestion does not fit the current text"
                    );
                    reaction.outputs.push(SessionOutput::DetailClosed);
                }
            },
            UiEvent::IgnoreChosen => {
                let had_detail = self.detail.is_some();
                let signal = self.ignore_open();
                if had_detail {
                    reaction.outputs.push(SessionOutput::DetailClosed);
                }
                if let Some(signal) = signal {
                    reaction.outputs.push(signal.into());
                }
            }
            UiEvent::DetailClosed => {
                if self.close_detail() {
                    reaction.outputs.push(SessionOutput::DetailClosed);
                }
            }
            UiEvent::ClearRequested => {
                if self.detail.is_some() {
                    reaction.outputs.push(SessionOutput::DetailClosed);
                }
                reaction.outputs.push(self.clear().into());
            }
        }
        reaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corrector_common::OffsetUnit;
    use corrector_core::Segment;

    fn session() -> CheckSession {
        CheckSession::new(CheckerConfig::default())
    }

    fn concordance() -> Span {
        Span::new(11, 7)
            .with_category("GRAMMAR")
            .with_message("Concordancia")
            .with_replacements(["una prueba"])
    }

    fn checked(text: &str, spans: Vec<Span>) -> CheckSession {
        let mut session = session();
        let check = session.submit(text).unwrap();
        session.complete(check.finish(Ok(spans))).unwrap();
        session
    }

    #[test]
    fn test_concordance_scenario() {
        let mut session = session();
        let check = session.submit("Este es un pruebas.").unwrap();
        assert_eq!(session.phase(), CheckPhase::Checking);

        let signal = session.complete(check.finish(Ok(vec![concordance()]))).unwrap();
        assert_eq!(session.phase(), CheckPhase::Rendered);
        let RenderSignal::Rendered { document, summary } = signal else {
            panic!("expected rendered document");
        };
        assert_eq!(summary.total, 1);
        assert_eq!(document.segments.len(), 3);
        assert!(matches!(&document.segments[0], Segment::Literal { text } if text == "Este es un "));
        let marker = document.markers().next().unwrap();
        assert_eq!(marker.text, "pruebas");
        assert_eq!(marker.tooltip, "Concordancia");

        let detail = session.activate_marker(0).unwrap();
        assert_eq!(detail.suggestions, vec!["una prueba".to_owned()]);

        let recheck = session.choose_suggestion("una prueba").unwrap().unwrap();
        assert_eq!(recheck.text(), "Este es un una prueba.");
        assert_eq!(session.phase(), CheckPhase::Checking);
        assert_eq!(session.open_detail(), None);
    }

    #[test]
    fn test_correction_replaces_spans_wholesale() {
        let mut session = checked("Este es un pruebas.", vec![concordance(), Span::new(0, 4)]);
        session.ignore(1).unwrap();
        assert_eq!(session.state().ignored.len(), 1);

        let recheck = session.apply_correction(11, 7, "una prueba").unwrap();
        // ignores are cleared as soon as the new check starts
        assert!(session.state().ignored.is_empty());

        let signal = session.complete(recheck.finish(Ok(vec![]))).unwrap();
        assert!(matches!(signal, RenderSignal::NoErrors));
        assert!(session.state().spans.is_empty());
        assert_eq!(
            session.state().current_text.to_string(),
            "Este es un una prueba."
        );
    }

    #[test]
    fn test_no_errors() {
        let mut session = session();
        let check = session.submit("Todo bien.").unwrap();
        let signal = session.complete(check.finish(Ok(vec![]))).unwrap();
        assert!(matches!(signal, RenderSignal::NoErrors));
        assert_eq!(session.phase(), CheckPhase::NoErrors);
    }

    #[test]
    fn test_ignoring_last_span_means_no_errors() {
        let mut session = checked("Este es un pruebas.", vec![concordance()]);
        assert_eq!(session.phase(), CheckPhase::Rendered);

        let signal = session.ignore(0).unwrap();
        assert!(matches!(signal, RenderSignal::NoErrors));
        assert_eq!(session.phase(), CheckPhase::NoErrors);
        assert_eq!(session.state().spans.len(), 1);
        assert_eq!(session.state().ignored.len(), 1);
    }

    #[test]
    fn test_ignore_out_of_range_is_noop() {
        let mut session = checked("Este es un pruebas.", vec![concordance()]);
        let before = session.state().clone();
        assert!(session.ignore(3).is_none());
        assert_eq!(session.state(), &before);
        assert_eq!(session.phase(), CheckPhase::Rendered);
    }

    #[test]
    fn test_ignore_while_checking_is_noop() {
        let mut session = checked("Este es un pruebas.", vec![concordance()]);
        let _pending = session.submit("otro texto").unwrap();
        assert!(session.ignore(0).is_none());
        assert!(session.activate_marker(0).is_none());
    }

    #[test]
    fn test_submit_trims_and_validates() {
        let mut session = session();
        let check = session.submit("  hola  \n").unwrap();
        assert_eq!(check.text(), "hola");

        let generation = session.generation();
        assert!(matches!(
            session.submit("   \n\t"),
            Err(ValidationError::Empty)
        ));
        assert_eq!(session.generation(), generation);

        let long = "a".repeat(CheckerConfig::DEFAULT_MAX_CHARS + 1);
        assert!(matches!(
            session.submit(&long),
            Err(ValidationError::TooLong { len: 20_001, max: 20_000 })
        ));
        assert_eq!(session.generation(), generation);
    }

    #[test]
    fn test_length_limit_counts_service_units() {
        // each emoji is one char but two UTF-16 code units
        let emoji = "🙂".repeat(10_001);

        let mut session = session();
        assert!(matches!(
            session.submit(&emoji),
            Err(ValidationError::TooLong { len: 20_002, max: 20_000 })
        ));

        let mut session = CheckSession::new(CheckerConfig {
            offset_unit: OffsetUnit::Char,
            ..CheckerConfig::default()
        });
        assert!(session.submit(&emoji).is_ok());
    }

    #[test]
    fn test_validation_leaves_results_alone() {
        let mut session = checked("Este es un pruebas.", vec![concordance()]);
        session.ignore(0);
        let before = session.state().clone();
        assert!(session.submit("").is_err());
        assert_eq!(session.state(), &before);
        assert_eq!(session.phase(), CheckPhase::NoErrors);
    }

    #[test]
    fn test_failure_keeps_previous_results() {
        let mut session = checked("Este es un pruebas.", vec![concordance()]);
        let check = session.submit("Otro texto").unwrap();
        let signal = session
            .complete(check.finish(Err(ServiceError::Status { status: 500 })))
            .unwrap();

        assert!(matches!(signal, RenderSignal::ServiceFailed { .. }));
        assert!(signal.is_error());
        assert_eq!(session.phase(), CheckPhase::Failed);
        assert_eq!(
            session.state().current_text.to_string(),
            "Este es un pruebas."
        );
        assert_eq!(session.state().spans, vec![concordance()]);
    }

    #[test]
    fn test_results_stay_usable_after_failure() {
        let mut session = checked("Este es un pruebas.", vec![concordance(), Span::new(0, 4)]);
        session.ignore(1).unwrap();

        let check = session.submit("Otro texto").unwrap();
        let signal = session
            .complete(check.finish(Err(ServiceError::Status { status: 500 })))
            .unwrap();

        // ignores were cleared when the failed check started, so both markers are back
        let RenderSignal::ServiceFailed {
            previous: Some(document),
            ..
        } = signal
        else {
            panic!("expected the previous document alongside the failure");
        };
        assert_eq!(document.marker_count(), 2);

        let detail = session.activate_marker(0).unwrap();
        assert_eq!(detail.text, "pruebas");

        let signal = session.ignore(0).unwrap();
        assert_eq!(session.phase(), CheckPhase::Failed);
        let RenderSignal::ServiceFailed {
            previous: Some(document),
            ..
        } = signal
        else {
            panic!("expected the previous document alongside the failure");
        };
        let marked: Vec<&str> = document.markers().map(|m| m.text.as_str()).collect();
        assert_eq!(marked, vec!["Este"]);
        assert_eq!(document.markers().next().map(|m| m.index), Some(0));

        let recheck = session.apply_correction(11, 7, "una prueba").unwrap();
        assert_eq!(recheck.text(), "Este es un una prueba.");
        assert_eq!(session.phase(), CheckPhase::Checking);
    }

    #[test]
    fn test_failure_with_nothing_to_show() {
        let mut session = session();
        let check = session.submit("hola").unwrap();
        let signal = session
            .complete(check.finish(Err(ServiceError::Status { status: 502 })))
            .unwrap();
        assert!(matches!(
            signal,
            RenderSignal::ServiceFailed { previous: None, .. }
        ));
        assert!(session.activate_marker(0).is_none());
        assert!(session.ignore(0).is_none());
    }

    #[test]
    fn test_completion_after_clear_is_discarded() {
        let mut session = session();
        let check = session.submit("Este es un pruebas.").unwrap();
        assert!(matches!(session.clear(), RenderSignal::Idle));

        assert!(session.complete(check.finish(Ok(vec![concordance()]))).is_none());
        assert_eq!(session.phase(), CheckPhase::Idle);
        assert!(session.state().spans.is_empty());
        assert!(session.state().current_text.is_empty());
    }

    #[test]
    fn test_older_completion_is_discarded() {
        let mut session = session();
        let first = session.submit("primero").unwrap();
        let second = session.submit("segundo").unwrap();
        assert!(second.generation() > first.generation());

        let signal = session.complete(second.finish(Ok(vec![]))).unwrap();
        assert!(matches!(signal, RenderSignal::NoErrors));
        assert!(session.complete(first.finish(Ok(vec![Span::new(0, 3)]))).is_none());
        assert_eq!(session.state().current_text.to_string(), "segundo");
        assert!(session.state().spans.is_empty());
    }

    #[test]
    fn test_invalid_service_spans_dropped() {
        let session = checked("corto", vec![Span::new(2, 10), Span::new(0, 2)]);
        assert_eq!(session.state().spans, vec![Span::new(0, 2)]);
    }

    #[test]
    fn test_utf16_offsets_from_service() {
        let mut session = CheckSession::new(CheckerConfig {
            offset_unit: OffsetUnit::Utf16,
            ..CheckerConfig::default()
        });
        let check = session.submit("🙂 ola").unwrap();
        session.complete(check.finish(Ok(vec![Span::new(3, 3)]))).unwrap();
        let detail = session.activate_marker(0).unwrap();
        assert_eq!(detail.text, "ola");
    }

    #[test]
    fn test_bad_correction_range() {
        let mut session = checked("hola", vec![Span::new(0, 4)]);
        assert!(matches!(
            session.apply_correction(2, 10, "x"),
            Err(CorrectionError::Span(_))
        ));
        assert_eq!(session.phase(), CheckPhase::Rendered);
    }

    #[test]
    fn test_correction_to_empty_text_is_rejected() {
        let mut session = checked("hola", vec![Span::new(0, 4)]);
        let generation = session.generation();
        assert!(matches!(
            session.apply_correction(0, 4, ""),
            Err(CorrectionError::Validation(ValidationError::Empty))
        ));
        assert_eq!(session.generation(), generation);
        assert_eq!(session.state().spans.len(), 1);
    }

    #[test]
    fn test_handle_detail_flow() {
        let mut session = checked("Este es un pruebas.", vec![concordance()]);

        let reaction = session.handle(UiEvent::MarkerActivated(0));
        assert!(matches!(
            reaction.outputs.as_slice(),
            [SessionOutput::DetailOpened(detail)] if detail.text == "pruebas"
        ));

        let reaction = session.handle(UiEvent::IgnoreChosen);
        assert!(matches!(
            reaction.outputs.as_slice(),
            [
                SessionOutput::DetailClosed,
                SessionOutput::Render(RenderSignal::NoErrors)
            ]
        ));
        assert!(reaction.check.is_none());

        // nothing open any more
        assert!(session.handle(UiEvent::IgnoreChosen).outputs.is_empty());
        assert!(session.handle(UiEvent::DetailClosed).outputs.is_empty());
    }

    #[test]
    fn test_handle_submit_and_clear() {
        let mut session = session();
        let reaction = session.handle(UiEvent::SubmitRequested("   ".into()));
        assert!(matches!(
            reaction.outputs.as_slice(),
            [SessionOutput::Render(RenderSignal::Validation(ValidationError::Empty))]
        ));
        assert!(reaction.check.is_none());

        let reaction = session.handle(UiEvent::SubmitRequested("hola".into()));
        assert!(matches!(
            reaction.outputs.as_slice(),
            [SessionOutput::Render(RenderSignal::Checking)]
        ));
        assert!(reaction.check.is_some());

        let reaction = session.handle(UiEvent::ClearRequested);
        assert!(matches!(
            reaction.outputs.as_slice(),
            [SessionOutput::Render(RenderSignal::Idle)]
        ));
        assert_eq!(session.phase(), CheckPhase::Idle);
    }
}
