use std::fmt;

use serde::{Deserialize, Serialize};

/// Signal direction of a mixer facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Playback,
    Capture,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Playback => f.write_str("Playback"),
            Direction::Capture => f.write_str("Capture"),
        }
    }
}

/// Simple-element channel identifier.
///
/// The positional channels form a closed, ordered space that matches the
/// host library's channel numbering. `Mono` is not a separate slot: it
/// aliases the first position (front left) and is only used for the
/// synthetic single-channel entry of mono elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Channel {
    #[serde(rename = "Mono")]
    Mono,
    #[serde(rename = "Front Left")]
    FrontLeft,
    #[serde(rename = "Front Right")]
    FrontRight,
    #[serde(rename = "Rear Left")]
    RearLeft,
    #[serde(rename = "Rear Right")]
    RearRight,
    #[serde(rename = "Front Center")]
    FrontCenter,
    #[serde(rename = "Woofer")]
    Woofer,
    #[serde(rename = "Side Left")]
    SideLeft,
    #[serde(rename = "Side Right")]
    SideRight,
    #[serde(rename = "Rear Center")]
    RearCenter,
}

impl Channel {
    /// Positional channels in library order. Classification iterates this,
    /// never a numeric range.
    pub const POSITIONS: [Channel; 9] = [
        Channel::FrontLeft,
        Channel::FrontRight,
        Channel::RearLeft,
        Channel::RearRight,
        Channel::FrontCenter,
        Channel::Woofer,
        Channel::SideLeft,
        Channel::SideRight,
        Channel::RearCenter,
    ];

    /// Numeric id used by the host library.
    pub fn id(self) -> u32 {
        match self {
            Channel::Mono | Channel::FrontLeft => 0,
            Channel::FrontRight => 1,
            Channel::RearLeft => 2,
            Channel::RearRight => 3,
            Channel::FrontCenter => 4,
            Channel::Woofer => 5,
            Channel::SideLeft => 6,
            Channel::SideRight => 7,
            Channel::RearCenter => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Mono => "Mono",
            Channel::FrontLeft => "Front Left",
            Channel::FrontRight => "Front Right",
            Channel::RearLeft => "Rear Left",
            Channel::RearRight => "Rear Right",
            Channel::FrontCenter => "Front Center",
            Channel::Woofer => "Woofer",
            Channel::SideLeft => "Side Left",
            Channel::SideRight => "Side Right",
            Channel::RearCenter => "Rear Center",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_library_numbering() {
        let ids: Vec<u32> = Channel::POSITIONS.iter().map(|c| c.id()).collect();
        assert_eq!(ids, (0..9).collect::<Vec<u32>>());
    }

    #[test]
    fn mono_aliases_front_left() {
        assert_eq!(Channel::Mono.id(), Channel::FrontLeft.id());
        assert!(!Channel::POSITIONS.contains(&Channel::Mono));
    }

    #[test]
    fn serializes_display_names() {
        let json = serde_json::to_string(&[Channel::Mono, Channel::FrontCenter]).unwrap();
        assert_eq!(json, r#"["Mono","Front Center"]"#);
    }
}
