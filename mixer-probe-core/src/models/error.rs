use thiserror::Error;

/// Errors that can occur while probing cards and mixers.
///
/// Backends carry the host library's error text in `reason`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("no soundcards found...")]
    NoCards,

    #[error("card enumeration failed: {0}")]
    Enumeration(String),

    #[error("control open ({device}): {reason}")]
    ControlOpen { device: String, reason: String },

    #[error("control hardware info ({device}): {reason}")]
    CardInfo { device: String, reason: String },

    #[error("Mixer {device} open error: {reason}")]
    MixerOpen { device: String, reason: String },

    #[error("Mixer {device} register error: {reason}")]
    MixerRegister { device: String, reason: String },

    #[error("Mixer {device} load error: {reason}")]
    MixerLoad { device: String, reason: String },

    #[error("Mixer {device} simple element '{name}',{index} not found")]
    ElementNotFound {
        device: String,
        name: String,
        index: u32,
    },

    #[error("enumerated item {item}: {reason}")]
    EnumItem { item: u32, reason: String },

    #[error("{query} failed: {reason}")]
    Query { query: &'static str, reason: String },

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("invalid configuration: {0}")]
    Configuration(String),
}
