//! Engine configuration policy
//!
//! Decides how the speech engine is configured for a service lifecycle:
//! online cloud synthesis, on-device offline synthesis, or the engine's
//! mixed mode. The synthesis mode is fixed at build time; the online and
//! offline parameter sets are mutually exclusive by construction.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::TtsError;
use crate::ports::ResourceProvisioner;

/// Maximum text length the engine accepts, in bytes of the vendor SDK's
/// legacy encoding (GBK).
pub const MAX_TEXT_BYTES: usize = 1024;

/// Numeric synthesis parameters are constrained to `0..=PARAM_MAX`
pub const PARAM_MAX: u8 = 15;

/// Length of `text` in the vendor SDK's legacy encoding (GBK): one byte
/// per ASCII character, two bytes for every other encodable character.
pub fn encoded_len(text: &str) -> usize {
    text.chars()
        .map(|c| if c.is_ascii() { 1 } else { 2 })
        .sum()
}

/// Synthesis mode, fixed when the engine is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TtsMode {
    /// Cloud synthesis over the network
    Online,
    /// On-device synthesis from local acoustic models
    Offline,
    /// Engine-managed switching between online and offline
    Mixed,
}

impl TtsMode {
    /// Whether this mode needs offline acoustic model files
    pub const fn needs_model_files(&self) -> bool {
        matches!(self, Self::Offline | Self::Mixed)
    }
}

impl std::fmt::Display for TtsMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Offline => write!(f, "offline"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

/// Offline acoustic model selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OfflineVoice {
    /// Standard male voice
    #[default]
    Male,
    /// Standard female voice
    Female,
    /// Expressive male voice
    Duxy,
    /// Child voice
    Duyy,
}

impl OfflineVoice {
    /// File name of the speech (acoustic) model for this voice
    pub const fn speech_model_file(&self) -> &'static str {
        match self {
            Self::Male => "etts_speech_male.dat",
            Self::Female => "etts_speech_female.dat",
            Self::Duxy => "etts_speech_duxy.dat",
            Self::Duyy => "etts_speech_duyy.dat",
        }
    }

    /// File name of the text model shared by all voices
    pub const fn text_model_file() -> &'static str {
        "etts_text.dat"
    }
}

/// Credentials issued for the vendor SDK
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Application id
    pub app_id: String,
    /// Application key
    pub app_key: String,
    /// Secret key
    pub secret_key: String,
    /// Authorization code; required for the pure-offline engine build,
    /// absent for the free online/mixed build
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
}

impl Credentials {
    fn validate(&self) -> Result<(), TtsError> {
        if self.app_id.trim().is_empty() {
            return Err(TtsError::configuration("app_id must not be empty"));
        }
        if self.app_key.trim().is_empty() {
            return Err(TtsError::configuration("app_key must not be empty"));
        }
        if self.secret_key.trim().is_empty() {
            return Err(TtsError::configuration("secret_key must not be empty"));
        }
        Ok(())
    }
}

/// Parameters for online (cloud) synthesis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnlineParams {
    /// Speaker voice id (0 = standard female)
    #[serde(default = "default_speaker")]
    pub speaker: u8,
    /// Volume, 0-15
    #[serde(default = "default_volume")]
    pub volume: u8,
    /// Speed, 0-15
    #[serde(default = "default_speed")]
    pub speed: u8,
    /// Pitch, 0-15
    #[serde(default = "default_pitch")]
    pub pitch: u8,
}

/// Parameters for offline (on-device) synthesis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineParams {
    /// Speaker voice id
    #[serde(default = "default_speaker")]
    pub speaker: u8,
    /// Volume, 0-15
    #[serde(default = "default_volume")]
    pub volume: u8,
    /// Speed, 0-15
    #[serde(default = "default_speed")]
    pub speed: u8,
    /// Pitch, 0-15
    #[serde(default = "default_pitch")]
    pub pitch: u8,
    /// Path to the text model file
    pub text_model: PathBuf,
    /// Path to the speech (acoustic) model file
    pub speech_model: PathBuf,
}

const fn default_speaker() -> u8 {
    0
}

const fn default_volume() -> u8 {
    15
}

const fn default_speed() -> u8 {
    5
}

const fn default_pitch() -> u8 {
    5
}

impl Default for OnlineParams {
    fn default() -> Self {
        Self {
            speaker: default_speaker(),
            volume: default_volume(),
            speed: default_speed(),
            pitch: default_pitch(),
        }
    }
}

impl OfflineParams {
    /// Engine-default parameters with the given model files
    pub fn with_models(text_model: PathBuf, speech_model: PathBuf) -> Self {
        Self {
            speaker: default_speaker(),
            volume: default_volume(),
            speed: default_speed(),
            pitch: default_pitch(),
            text_model,
            speech_model,
        }
    }
}

fn check_range(name: &str, value: u8) -> Result<(), TtsError> {
    if value > PARAM_MAX {
        return Err(TtsError::configuration(format!(
            "{name} must be in 0..={PARAM_MAX}, got {value}"
        )));
    }
    Ok(())
}

/// Synthesis parameters for one engine configuration
///
/// The two variants are mutually exclusive: an online configuration never
/// carries model file paths and an offline configuration always does. The
/// policy can therefore never compute both parameter sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynthesisParams {
    /// Cloud synthesis parameters
    Online(OnlineParams),
    /// On-device synthesis parameters
    Offline(OfflineParams),
}

impl SynthesisParams {
    /// Validate numeric ranges and, for offline parameters, model file
    /// existence
    pub fn validate(&self) -> Result<(), TtsError> {
        match self {
            Self::Online(p) => {
                check_range("speaker", p.speaker)?;
                check_range("volume", p.volume)?;
                check_range("speed", p.speed)?;
                check_range("pitch", p.pitch)?;
            }
            Self::Offline(p) => {
                check_range("speaker", p.speaker)?;
                check_range("volume", p.volume)?;
                check_range("speed", p.speed)?;
                check_range("pitch", p.pitch)?;
                if !p.text_model.is_file() {
                    return Err(TtsError::ResourceMissing(p.text_model.clone()));
                }
                if !p.speech_model.is_file() {
                    return Err(TtsError::ResourceMissing(p.speech_model.clone()));
                }
            }
        }
        Ok(())
    }

    /// Render the parameters as the vendor SDK's string parameter map
    pub fn to_param_map(&self) -> HashMap<&'static str, String> {
        let mut map = HashMap::new();
        match self {
            Self::Online(p) => {
                map.insert("speaker", p.speaker.to_string());
                map.insert("volume", p.volume.to_string());
                map.insert("speed", p.speed.to_string());
                map.insert("pitch", p.pitch.to_string());
            }
            Self::Offline(p) => {
                map.insert("speaker", p.speaker.to_string());
                map.insert("volume", p.volume.to_string());
                map.insert("speed", p.speed.to_string());
                map.insert("pitch", p.pitch.to_string());
                map.insert("text_model_file", p.text_model.display().to_string());
                map.insert("speech_model_file", p.speech_model.display().to_string());
            }
        }
        map
    }
}

/// Immutable engine configuration for one service lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Synthesis mode, fixed at build time
    pub mode: TtsMode,
    /// Vendor SDK credentials
    pub credentials: Credentials,
    /// Mode-specific synthesis parameters
    pub params: SynthesisParams,
}

impl EngineConfig {
    /// Build an engine configuration for the requested mode
    ///
    /// Online mode never resolves voice files; offline and mixed modes
    /// require both acoustic model files and fail with a configuration
    /// error when they cannot be resolved. Pure-offline mode additionally
    /// requires an authorization code in the credentials.
    ///
    /// # Errors
    ///
    /// Returns `TtsError::Configuration` or `TtsError::ResourceMissing`
    /// when the mode's requirements are not met.
    pub fn build(
        mode: TtsMode,
        credentials: Credentials,
        voice: OfflineVoice,
        provisioner: &dyn ResourceProvisioner,
    ) -> Result<Self, TtsError> {
        credentials.validate()?;

        let params = if mode.needs_model_files() {
            if mode == TtsMode::Offline && credentials.auth_code.is_none() {
                return Err(TtsError::configuration(
                    "offline mode requires an authorization code",
                ));
            }
            let files = provisioner.resolve_voice_files(voice)?;
            SynthesisParams::Offline(OfflineParams::with_models(
                files.text_model,
                files.speech_model,
            ))
        } else {
            SynthesisParams::Online(OnlineParams::default())
        };

        let config = Self {
            mode,
            credentials,
            params,
        };
        config.validate()?;
        Ok(config)
    }

    /// Re-check the configuration invariants
    ///
    /// # Errors
    ///
    /// Returns an error when credentials are incomplete, numeric parameters
    /// fall outside `0..=15`, the parameter set does not match the mode, or
    /// an offline model file no longer exists.
    pub fn validate(&self) -> Result<(), TtsError> {
        self.credentials.validate()?;
        match (&self.params, self.mode.needs_model_files()) {
            (SynthesisParams::Online(_), true) => {
                return Err(TtsError::configuration(format!(
                    "{} mode requires offline parameters",
                    self.mode
                )));
            }
            (SynthesisParams::Offline(_), false) => {
                return Err(TtsError::configuration(
                    "online mode must not carry model file parameters",
                ));
            }
            _ => {}
        }
        self.params.validate()
    }
}
