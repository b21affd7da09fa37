//! Port definitions for the speech-engine boundary
//!
//! Defines the traits the vendor synthesis backend and the resource
//! provisioner must implement.

use async_trait::async_trait;

use crate::config::{Credentials, OfflineVoice};
use crate::error::TtsError;
use crate::resources::VoiceFiles;

/// Port for the vendor speech-synthesis backend
///
/// The backend is a fixed external capability: it accepts text, produces
/// audio on its own output path, and reports acceptance through a vendor
/// status code. Its internal online/offline fallback heuristics are not
/// modeled here.
#[async_trait]
pub trait SynthesisBackend: Send + Sync {
    /// Hand text to the backend for synthesis
    ///
    /// # Returns
    ///
    /// The vendor status code; `0` means the request was accepted.
    async fn speak(&self, text: &str) -> i32;

    /// Ask the backend to stop any in-flight synthesis
    async fn stop(&self);

    /// Destroy the backend instance
    ///
    /// The vendor does not guarantee idempotency; callers must track
    /// released state themselves (see `Engine`).
    async fn release(&self);
}

/// Port for offline model files and credential resolution
pub trait ResourceProvisioner: Send + Sync {
    /// Resolve the acoustic model files for an offline voice
    ///
    /// # Errors
    ///
    /// Returns `TtsError::ResourceMissing` when a model file does not
    /// exist.
    fn resolve_voice_files(&self, voice: OfflineVoice) -> Result<VoiceFiles, TtsError>;

    /// Load the vendor SDK credentials
    ///
    /// # Errors
    ///
    /// Returns `TtsError::Configuration` when credentials cannot be read
    /// or parsed.
    fn load_credentials(&self) -> Result<Credentials, TtsError>;
}
