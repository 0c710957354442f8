use std::fmt;

use serde::{Deserialize, Serialize};

/// Capability tag of a simple mixer element.
///
/// Variants are declared in emission order; a classified element lists its
/// tags in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Capability {
    #[serde(rename = "volume")]
    Volume,
    #[serde(rename = "volume-joined")]
    VolumeJoined,
    #[serde(rename = "pvolume")]
    PlaybackVolume,
    #[serde(rename = "pvolume-joined")]
    PlaybackVolumeJoined,
    #[serde(rename = "cvolume")]
    CaptureVolume,
    #[serde(rename = "cvolume-joined")]
    CaptureVolumeJoined,
    #[serde(rename = "switch")]
    Switch,
    #[serde(rename = "switch-joined")]
    SwitchJoined,
    #[serde(rename = "pswitch")]
    PlaybackSwitch,
    #[serde(rename = "pswitch-joined")]
    PlaybackSwitchJoined,
    #[serde(rename = "cswitch")]
    CaptureSwitch,
    #[serde(rename = "cswitch-joined")]
    CaptureSwitchJoined,
    #[serde(rename = "cswitch-exclusive")]
    CaptureSwitchExclusive,
    #[serde(rename = "penum")]
    PlaybackEnum,
    #[serde(rename = "cenum")]
    CaptureEnum,
    #[serde(rename = "enum")]
    Enum,
}

impl Capability {
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Volume => "volume",
            Capability::VolumeJoined => "volume-joined",
            Capability::PlaybackVolume => "pvolume",
            Capability::PlaybackVolumeJoined => "pvolume-joined",
            Capability::CaptureVolume => "cvolume",
            Capability::CaptureVolumeJoined => "cvolume-joined",
            Capability::Switch => "switch",
            Capability::SwitchJoined => "switch-joined",
            Capability::PlaybackSwitch => "pswitch",
            Capability::PlaybackSwitchJoined => "pswitch-joined",
            Capability::CaptureSwitch => "cswitch",
            Capability::CaptureSwitchJoined => "cswitch-joined",
            Capability::CaptureSwitchExclusive => "cswitch-exclusive",
            Capability::PlaybackEnum => "penum",
            Capability::CaptureEnum => "cenum",
            Capability::Enum => "enum",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
