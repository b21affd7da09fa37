//! Engine handle and lifecycle
//!
//! `Engine` is the exclusively-owned handle over the vendor synthesis
//! backend. The host may deliver callbacks on a different thread from the
//! one issuing `speak`, so every state mutation (`speak`, `stop`,
//! `release`) is funneled through a single async mutex. Synthesis results
//! are additionally published on an explicit result channel instead of a
//! host-provided message loop, so ordering and cancellation are observable.

use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::error::TtsError;
use crate::ports::SynthesisBackend;

/// Lifecycle state of the engine handle
///
/// An unconfigured engine is represented by the handle not existing yet;
/// `Engine::initialize` is the only constructor and returns a `Ready`
/// engine or a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Configured and idle
    Ready,
    /// A speak request is with the backend
    Speaking,
    /// Permanently released; all further speak calls fail fast
    Released,
}

/// Message on the synthesis result channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisEvent {
    /// The utterance was handed to the backend
    Started {
        /// Utterance id
        utterance: Uuid,
    },
    /// The backend accepted the utterance (status 0)
    Finished {
        /// Utterance id
        utterance: Uuid,
    },
    /// The backend rejected the utterance with a non-zero status
    Failed {
        /// Utterance id
        utterance: Uuid,
        /// Engine operation that produced the status
        operation: String,
        /// Vendor status code
        code: i32,
    },
}

/// Exclusively-owned handle over a live synthesis engine instance
pub struct Engine {
    backend: Arc<dyn SynthesisBackend>,
    config: EngineConfig,
    state: Mutex<EngineState>,
    events: UnboundedSender<SynthesisEvent>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("mode", &self.config.mode)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Validate the configuration and bring up the engine
    ///
    /// Returns the handle together with the receiving end of the synthesis
    /// result channel.
    ///
    /// # Errors
    ///
    /// Returns `TtsError::Configuration` or `TtsError::ResourceMissing`
    /// when the configuration is invalid; the engine never enters the
    /// ready state in that case.
    pub fn initialize(
        config: EngineConfig,
        backend: Arc<dyn SynthesisBackend>,
    ) -> Result<(Self, UnboundedReceiver<SynthesisEvent>), TtsError> {
        config.validate()?;
        let (events, receiver) = mpsc::unbounded_channel();
        info!(mode = %config.mode, "Synthesis engine initialized");
        Ok((
            Self {
                backend,
                config,
                state: Mutex::new(EngineState::Ready),
                events,
            },
            receiver,
        ))
    }

    /// The configuration this engine was built with
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current lifecycle state
    pub async fn state(&self) -> EngineState {
        *self.state.lock().await
    }

    /// Whether the handle has been permanently released
    pub async fn is_released(&self) -> bool {
        self.state().await == EngineState::Released
    }

    /// Hand text to the backend and report the outcome
    ///
    /// Emits `Started` and then `Finished` or `Failed` on the result
    /// channel. The state lock is held for the duration of the backend
    /// call; concurrent `speak`/`release` calls serialize behind it.
    ///
    /// # Errors
    ///
    /// Returns `TtsError::EngineReleased` after `release`, or
    /// `TtsError::SynthesisStatus` when the backend reports a non-zero
    /// status code.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn speak(&self, utterance: Uuid, text: &str) -> Result<(), TtsError> {
        let mut state = self.state.lock().await;
        if *state == EngineState::Released {
            warn!("speak called on released engine");
            return Err(TtsError::EngineReleased);
        }

        *state = EngineState::Speaking;
        let _ = self.events.send(SynthesisEvent::Started { utterance });

        let code = self.backend.speak(text).await;
        *state = EngineState::Ready;

        if code == 0 {
            debug!("Backend accepted utterance");
            let _ = self.events.send(SynthesisEvent::Finished { utterance });
            Ok(())
        } else {
            let _ = self.events.send(SynthesisEvent::Failed {
                utterance,
                operation: "speak".to_string(),
                code,
            });
            Err(TtsError::status("speak", code))
        }
    }

    /// Ask the backend to stop any in-flight synthesis
    ///
    /// A no-op once the engine has been released.
    pub async fn stop(&self) {
        let mut state = self.state.lock().await;
        if *state == EngineState::Released {
            debug!("stop ignored on released engine");
            return;
        }
        self.backend.stop().await;
        *state = EngineState::Ready;
    }

    /// Stop and permanently release the engine
    ///
    /// Idempotent at this boundary: the backend sees `stop` and `release`
    /// exactly once even though the vendor does not guarantee idempotency
    /// itself.
    pub async fn release(&self) {
        let mut state = self.state.lock().await;
        if *state == EngineState::Released {
            debug!("release ignored, engine already released");
            return;
        }
        self.backend.stop().await;
        self.backend.release().await;
        *state = EngineState::Released;
        info!("Synthesis engine released");
    }
}
