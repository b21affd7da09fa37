//! Dispatch controller
//!
//! Validates discovered text, hands it to the synthesis engine, and
//! converts every failure into a diagnostics entry. No error leaves this
//! boundary: a synthesis failure manifests as silence plus a log line,
//! never as a crash of the hosting process.

use std::fmt;
use std::sync::Arc;

use domain::entities::Utterance;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, trace, warn};
use tts_engine::{Engine, MAX_TEXT_BYTES, SynthesisEvent, TtsError, encoded_len};

use crate::ports::DiagnosticsPort;

/// Outcome of one dispatch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Text was empty; nothing to do, not an error
    Skipped,
    /// The engine accepted and finished the utterance
    Spoken(Utterance),
    /// The request was dropped; the utterance records why
    Dropped(Utterance),
}

/// Controller owning the engine handle for one service lifecycle
pub struct DispatchController {
    engine: Engine,
    diagnostics: Arc<dyn DiagnosticsPort>,
}

impl fmt::Debug for DispatchController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchController")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

impl DispatchController {
    /// Create a controller around an initialized engine
    pub fn new(engine: Engine, diagnostics: Arc<dyn DiagnosticsPort>) -> Self {
        Self {
            engine,
            diagnostics,
        }
    }

    /// The engine this controller owns
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Validate text and forward it to the engine
    ///
    /// Empty or whitespace-only text is a no-op. Text longer than
    /// `MAX_TEXT_BYTES` in the engine's legacy encoding is dropped before
    /// any engine call. Engine failures are reported to the diagnostics
    /// sink with the originating operation name and status code.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn dispatch(&self, text: &str) -> DispatchOutcome {
        if text.trim().is_empty() {
            debug!("Empty text, nothing to dispatch");
            return DispatchOutcome::Skipped;
        }

        let bytes = encoded_len(text);
        if bytes > MAX_TEXT_BYTES {
            let err = TtsError::TextTooLong {
                bytes,
                max: MAX_TEXT_BYTES,
            };
            warn!(bytes, max = MAX_TEXT_BYTES, "Text rejected before dispatch");
            self.diagnostics.report_message("dispatch", &err.to_string());
            let mut utterance = Utterance::new(text);
            utterance.mark_failed(err.to_string());
            return DispatchOutcome::Dropped(utterance);
        }

        let mut utterance = Utterance::new(text);
        utterance.start_speaking();

        match self.engine.speak(utterance.id, text).await {
            Ok(()) => {
                utterance.mark_spoken();
                debug!(utterance = %utterance.id, "Utterance spoken");
                DispatchOutcome::Spoken(utterance)
            }
            Err(TtsError::SynthesisStatus { operation, code }) => {
                self.diagnostics.report_status(&operation, code);
                utterance.mark_failed(format!("engine status {code} from {operation}"));
                DispatchOutcome::Dropped(utterance)
            }
            Err(err) => {
                self.diagnostics.report_message("speak", &err.to_string());
                utterance.mark_failed(err.to_string());
                DispatchOutcome::Dropped(utterance)
            }
        }
    }

    /// Interrupt any in-flight synthesis and release the engine
    ///
    /// Terminal: every later dispatch is dropped with an engine-released
    /// diagnostic.
    pub async fn interrupt(&self) {
        info!("Interrupt requested, releasing engine");
        self.engine.release().await;
    }

    /// Release the engine on service teardown
    pub async fn shutdown(&self) {
        self.engine.release().await;
    }

    /// Drain the synthesis result channel into trace logs
    ///
    /// Runs until the engine (the sending side) is dropped. Makes the
    /// ordering of synthesis results observable instead of leaving it
    /// implicit in a host message loop.
    pub fn spawn_event_pump(mut events: UnboundedReceiver<SynthesisEvent>) -> JoinHandle<()> {
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                match event {
                    SynthesisEvent::Started { utterance } => {
                        trace!(%utterance, "Synthesis started");
                    }
                    SynthesisEvent::Finished { utterance } => {
                        trace!(%utterance, "Synthesis finished");
                    }
                    SynthesisEvent::Failed {
                        utterance,
                        operation,
                        code,
                    } => {
                        debug!(%utterance, operation, code, "Synthesis failed");
                    }
                }
            }
        })
    }
}
