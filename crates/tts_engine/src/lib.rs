//! TTS Engine - speech-synthesis boundary for ReadAloud
//!
//! Wraps the vendor speech-synthesis SDK behind ports and gives the rest of
//! the service a safe lifecycle to hold on to:
//!
//! - `config` - the engine configuration policy (online / offline / mixed
//!   mode, synthesis parameters, credentials)
//! - `ports` - the traits the vendor backend and the resource provisioner
//!   must implement
//! - `engine` - the exclusively-owned engine handle with serialized access
//!   and an explicit asynchronous result channel
//! - `resources` - filesystem-backed model-file and credential resolution
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern: the vendor engine's
//! internals (including its own online/offline fallback heuristics) stay
//! behind `SynthesisBackend`; this crate only decides how the engine is
//! configured and how its lifecycle is driven.
//!
//! # Example
//!
//! ```ignore
//! use tts_engine::{DirProvisioner, Engine, EngineConfig, OfflineVoice, TtsMode};
//!
//! let provisioner = DirProvisioner::new("/var/lib/readaloud");
//! let credentials = provisioner.load_credentials()?;
//! let config = EngineConfig::build(
//!     TtsMode::Offline,
//!     credentials,
//!     OfflineVoice::Male,
//!     &provisioner,
//! )?;
//! let (engine, events) = Engine::initialize(config, backend)?;
//! engine.speak(utterance_id, "Hello, world!").await?;
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod ports;
pub mod resources;

pub use config::{
    Credentials, EngineConfig, MAX_TEXT_BYTES, OfflineParams, OfflineVoice, OnlineParams,
    SynthesisParams, TtsMode, encoded_len,
};
pub use engine::{Engine, EngineState, SynthesisEvent};
pub use error::TtsError;
pub use ports::{ResourceProvisioner, SynthesisBackend};
pub use resources::{DirProvisioner, VoiceFiles};
