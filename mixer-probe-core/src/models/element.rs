use std::fmt;

use serde::{Deserialize, Serialize};

use super::capability::Capability;
use super::channel::Channel;
use super::volume::{FacetReading, SwitchState, VolumeLimits, VolumeReading};

/// Identity of a simple element within one mixer: name plus index, where the
/// index disambiguates elements sharing a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId {
    pub name: String,
    pub index: u32,
}

impl ElementId {
    pub fn new(name: impl Into<String>, index: u32) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}',{}", self.name, self.index)
    }
}

/// Structured description of one simple mixer element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDescription {
    pub name: String,
    pub index: u32,
    pub capabilities: Vec<Capability>,
    #[serde(flatten)]
    pub shape: ElementShape,
    /// Only ever serialized as `true`; active elements omit the key.
    #[serde(default, skip_serializing_if = "is_false")]
    pub inactive: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ElementDescription {
    pub fn is_enumerated(&self) -> bool {
        matches!(self.shape, ElementShape::Enumerated(_))
    }

    pub fn as_enum(&self) -> Option<&EnumDescription> {
        match &self.shape {
            ElementShape::Enumerated(desc) => Some(desc),
            ElementShape::Value(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&ValueDescription> {
        match &self.shape {
            ElementShape::Value(desc) => Some(desc),
            ElementShape::Enumerated(_) => None,
        }
    }
}

/// The two mutually exclusive element shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementShape {
    Enumerated(EnumDescription),
    Value(ValueDescription),
}

/// Enumerated element: a selection among named alternatives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDescription {
    pub alternatives: Vec<String>,
    /// Labels of the currently selected items, one per selection slot.
    #[serde(rename = "value")]
    pub selected: Vec<String>,
}

/// Volume and/or switch shaped element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_exclusive_group: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playback_channels: Option<Vec<Channel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_channels: Option<Vec<Channel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<VolumeLimits>,
    #[serde(rename = "value")]
    pub channels: Vec<ChannelValue>,
}

/// Readings of one channel of a value-shaped element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelValue {
    pub channel: Channel,
    /// Shared playback/capture volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<VolumeReading>,
    /// Shared playback/capture switch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch: Option<SwitchState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playback: Option<FacetReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture: Option<FacetReading>,
}

impl ChannelValue {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            volume: None,
            switch: None,
            playback: None,
            capture: None,
        }
    }

    /// No reading of any kind was taken for the channel.
    pub fn is_empty(&self) -> bool {
        self.volume.is_none()
            && self.switch.is_none()
            && self.playback.is_none()
            && self.capture.is_none()
    }
}
