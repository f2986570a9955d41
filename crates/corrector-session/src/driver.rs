//! Runs a [`CheckSession`] against a checking service over channels.

use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use tokio::sync::mpsc;

use corrector_core::LocalCheckingService;

use crate::controller::CheckSession;
use crate::events::{SessionOutput, UiEvent};

/// Drive `session` until the event channel closes or the output receiver is
/// dropped, then return it.
///
/// Checks run concurrently with event handling. A completion whose
/// generation is no longer current produces no output.
///
/// Checks still in flight when the event channel closes are dropped without
/// completing. The returned session is left as it was, so its phase can
/// still be [`CheckPhase::Checking`](crate::controller::CheckPhase::Checking).
pub async fn drive<S: LocalCheckingService>(
    mut session: CheckSession,
    service: &S,
    mut events: mpsc::Receiver<UiEvent>,
    outputs: mpsc::Sender<SessionOutput>,
) -> CheckSession {
    let timeout = session.config().timeout();
    let mut in_flight = FuturesUnordered::new();

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    tracing::debug!(
                        target: "corrector::driver",
                        in_flight = in_flight.len(),
                        "event channel closed"
                    );
                    break;
                };
                let reaction = session.handle(event);
                if let Some(check) = reaction.check {
                    in_flight.push(check.run(service, timeout));
                }
                for output in reaction.outputs {
                    if outputs.send(output).await.is_err() {
                        return session;
                    }
                }
            }
            Some(completion) = in_flight.next(), if !in_flight.is_empty() => {
                if let Some(signal) = session.complete(completion) {
                    if outputs.send(signal.into()).await.is_err() {
                        return session;
                    }
                }
            }
        }
    }

    session
}
