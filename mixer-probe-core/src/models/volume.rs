use serde::{Deserialize, Serialize};

/// Inclusive raw volume range of one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeRange {
    pub min: i64,
    pub max: i64,
}

impl VolumeRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

/// Volume limits of a value-shaped element.
///
/// Either `common` is set (shared playback/capture volume), or any of
/// `playback` / `capture` are set for the sides that carry a volume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeLimits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common: Option<VolumeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playback: Option<VolumeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture: Option<VolumeRange>,
}

/// A single volume reading of one channel in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeReading {
    /// Raw level as reported by the driver.
    pub raw: i64,
    /// Raw level normalized to 0-100 against the direction's range.
    pub perc: i64,
    /// Level in hundredths of a dB, when the driver exposes a dB scale.
    #[serde(rename = "dB", default, skip_serializing_if = "Option::is_none")]
    pub db: Option<i64>,
}

/// Switch position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchState {
    On,
    Off,
}

impl SwitchState {
    pub fn as_str(self) -> &'static str {
        match self {
            SwitchState::On => "on",
            SwitchState::Off => "off",
        }
    }
}

impl From<bool> for SwitchState {
    fn from(on: bool) -> Self {
        if on {
            SwitchState::On
        } else {
            SwitchState::Off
        }
    }
}

/// Per-direction sub-record of a channel value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetReading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<VolumeReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch: Option<SwitchState>,
}

impl FacetReading {
    pub fn is_empty(&self) -> bool {
        self.volume.is_none() && self.switch.is_none()
    }

    /// `None` when no facet was read, so empty sub-records never surface.
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}
