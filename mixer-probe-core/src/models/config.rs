use std::str::FromStr;

use super::card::device_name;
use super::error::ProbeError;

/// Environment variable selecting the output format.
pub const OUTPUT_ENV: &str = "MIXER_PROBE_OUTPUT";

/// Environment variable toggling pretty-printed JSON.
pub const PRETTY_ENV: &str = "MIXER_PROBE_PRETTY";

/// Simple-element abstraction requested when registering a mixer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Abstraction {
    /// Raw simple elements, no abstraction layer.
    #[default]
    None,
}

/// Registration options for one mixer session.
///
/// Built per card and handed to [`AudioHost::open_mixer`]; nothing about a
/// registration outlives the session it was passed to.
///
/// [`AudioHost::open_mixer`]: crate::traits::audio_host::AudioHost::open_mixer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixerOptions {
    /// Device the mixer attaches to, e.g. `hw:0`.
    pub device: String,
    pub abstraction: Abstraction,
}

impl MixerOptions {
    pub fn for_device(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            abstraction: Abstraction::None,
        }
    }

    pub fn for_card(index: u32) -> Self {
        Self::for_device(device_name(index))
    }
}

/// Output format of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    /// JSON document followed by the text report.
    Both,
}

impl OutputFormat {
    pub fn wants_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn wants_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

impl FromStr for OutputFormat {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "both" => Ok(OutputFormat::Both),
            other => Err(ProbeError::Configuration(format!(
                "unknown output format: {}",
                other
            ))),
        }
    }
}

/// Configuration of one probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfiguration {
    /// Output format (default: text).
    pub output_format: OutputFormat,

    /// Pretty-print the JSON document (default: true).
    pub pretty_json: bool,
}

impl ProbeConfiguration {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ProbeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from a key lookup, falling back to defaults
    /// for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProbeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(OUTPUT_ENV) {
            config.output_format = value.parse()?;
        }

        if let Some(value) = lookup(PRETTY_ENV) {
            config.pretty_json = parse_flag(&value).ok_or_else(|| {
                ProbeError::Configuration(format!("{} must be a boolean, got {}", PRETTY_ENV, value))
            })?;
        }

        Ok(config)
    }
}

impl Default for ProbeConfiguration {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ProbeConfiguration::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ProbeConfiguration::default());
        assert!(config.output_format.wants_text());
        assert!(!config.output_format.wants_json());
    }

    #[test]
    fn reads_output_and_pretty() {
        let config =
            ProbeConfiguration::from_lookup(lookup(&[(OUTPUT_ENV, "JSON"), (PRETTY_ENV, "off")]))
                .unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(!config.pretty_json);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = ProbeConfiguration::from_lookup(lookup(&[(OUTPUT_ENV, "xml")])).unwrap_err();
        assert!(matches!(err, ProbeError::Configuration(_)));
    }

    #[test]
    fn rejects_bad_flag() {
        let err = ProbeConfiguration::from_lookup(lookup(&[(PRETTY_ENV, "maybe")])).unwrap_err();
        assert!(matches!(err, ProbeError::Configuration(_)));
    }

    #[test]
    fn mixer_options_for_card() {
        let options = MixerOptions::for_card(3);
        assert_eq!(options.device, "hw:3");
        assert_eq!(options.abstraction, Abstraction::None);
    }
}
