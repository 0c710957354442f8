use serde::{Deserialize, Serialize};

use super::element::ElementDescription;

/// Identity of one sound card, read once from its control interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    /// Host-assigned card slot number.
    pub index: u32,
    pub id: String,
    pub driver: String,
    pub name: String,
    pub longname: String,
    pub mixername: String,
    pub components: String,
}

impl CardInfo {
    /// Control device name for this card, e.g. `hw:0`.
    pub fn device_name(&self) -> String {
        device_name(self.index)
    }
}

/// Control device name of the card at `index`.
pub fn device_name(index: u32) -> String {
    format!("hw:{}", index)
}

/// Simple elements of a card's mixer, in library enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MixerReport {
    pub elements: Vec<ElementDescription>,
}

impl MixerReport {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Card identity plus its mixer report.
///
/// `mixer` is `None` when the mixer could not be opened, registered or
/// loaded; the card identity is still reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardReport {
    #[serde(flatten)]
    pub info: CardInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixer: Option<MixerReport>,
}
