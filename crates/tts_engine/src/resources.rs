//! Filesystem-backed resource provisioning
//!
//! Resolves offline acoustic model files and loads vendor credentials from
//! a resource directory prepared ahead of engine initialization.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{Credentials, OfflineVoice};
use crate::error::TtsError;
use crate::ports::ResourceProvisioner;

/// Resolved acoustic model files for one offline voice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceFiles {
    /// Text model file, shared by all voices
    pub text_model: PathBuf,
    /// Speech (acoustic) model file for the selected voice
    pub speech_model: PathBuf,
}

/// Provisioner backed by a single resource directory
///
/// Expects the layout:
///
/// ```text
/// <resource_dir>/
///   credentials.toml
///   etts_text.dat
///   etts_speech_<voice>.dat
/// ```
#[derive(Debug, Clone)]
pub struct DirProvisioner {
    resource_dir: PathBuf,
}

const CREDENTIALS_FILE: &str = "credentials.toml";

impl DirProvisioner {
    /// Create a provisioner over the given resource directory
    pub fn new(resource_dir: impl Into<PathBuf>) -> Self {
        Self {
            resource_dir: resource_dir.into(),
        }
    }

    /// The directory this provisioner resolves against
    pub fn resource_dir(&self) -> &std::path::Path {
        &self.resource_dir
    }

    fn existing_file(&self, name: &str) -> Result<PathBuf, TtsError> {
        let path = self.resource_dir.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(TtsError::ResourceMissing(path))
        }
    }
}

impl ResourceProvisioner for DirProvisioner {
    fn resolve_voice_files(&self, voice: OfflineVoice) -> Result<VoiceFiles, TtsError> {
        let text_model = self.existing_file(OfflineVoice::text_model_file())?;
        let speech_model = self.existing_file(voice.speech_model_file())?;
        debug!(
            text_model = %text_model.display(),
            speech_model = %speech_model.display(),
            "Resolved offline voice files"
        );
        Ok(VoiceFiles {
            text_model,
            speech_model,
        })
    }

    fn load_credentials(&self) -> Result<Credentials, TtsError> {
        let path = self.existing_file(CREDENTIALS_FILE)?;
        let raw = std::fs::read_to_string(&path)?;
        let credentials: Credentials = toml::from_str(&raw).map_err(|e| {
            TtsError::configuration(format!("invalid credentials file {}: {e}", path.display()))
        })?;
        Ok(credentials)
    }
}
