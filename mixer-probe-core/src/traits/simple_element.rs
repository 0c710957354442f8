use crate::models::channel::{Channel, Direction};
use crate::models::error::ProbeError;
use crate::models::volume::VolumeRange;

/// How a volume level is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Driver-native integer steps.
    Raw,
    /// Hundredths of a dB.
    Decibel,
}

/// Key of the volume query table: one direction, one representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VolumeQuery {
    pub direction: Direction,
    pub representation: Representation,
}

impl VolumeQuery {
    pub const fn raw(direction: Direction) -> Self {
        Self {
            direction,
            representation: Representation::Raw,
        }
    }

    pub const fn decibel(direction: Direction) -> Self {
        Self {
            direction,
            representation: Representation::Decibel,
        }
    }
}

/// Read-only view of one simple mixer element.
///
/// Implemented by platform backends. Every method is a direct query against
/// the host library; nothing is cached and nothing is written.
pub trait SimpleElement {
    fn name(&self) -> String;

    fn index(&self) -> u32;

    fn is_active(&self) -> bool;

    /// Volume shared by playback and capture.
    fn has_common_volume(&self) -> bool;

    fn has_volume(&self, direction: Direction) -> bool;

    /// All channels of the direction's volume move together.
    fn has_volume_joined(&self, direction: Direction) -> bool;

    /// Switch shared by playback and capture.
    fn has_common_switch(&self) -> bool;

    fn has_switch(&self, direction: Direction) -> bool;

    fn has_switch_joined(&self, direction: Direction) -> bool;

    fn has_capture_switch_exclusive(&self) -> bool;

    fn capture_group(&self) -> i32;

    fn is_mono(&self, direction: Direction) -> bool;

    fn has_channel(&self, direction: Direction, channel: Channel) -> bool;

    fn is_enumerated(&self) -> bool;

    fn is_enum_playback(&self) -> bool;

    fn is_enum_capture(&self) -> bool;

    fn enum_item_count(&self) -> Result<u32, ProbeError>;

    /// Label of item `item`, truncated to at most 39 bytes.
    fn enum_item_name(&self, item: u32) -> Result<String, ProbeError>;

    /// Item selected in selection slot `slot`; an error marks the end of the
    /// selections.
    fn selected_enum_item(&self, slot: u32) -> Result<u32, ProbeError>;

    fn volume_range(&self, query: VolumeQuery) -> Result<VolumeRange, ProbeError>;

    fn volume(&self, query: VolumeQuery, channel: Channel) -> Result<i64, ProbeError>;

    fn switch(&self, direction: Direction, channel: Channel) -> Result<bool, ProbeError>;
}
