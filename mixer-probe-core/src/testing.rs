//! In-memory host used by the unit tests.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::models::card::{device_name, CardInfo};
use crate::models::channel::{Channel, Direction};
use crate::models::config::MixerOptions;
use crate::models::element::ElementId;
use crate::models::error::ProbeError;
use crate::models::volume::VolumeRange;
use crate::traits::audio_host::{AudioHost, MixerSession};
use crate::traits::simple_element::{Representation, SimpleElement, VolumeQuery};

/// One direction of a fake element.
#[derive(Debug, Clone, Default)]
pub struct FakeSide {
    pub volume: bool,
    pub volume_joined: bool,
    pub switch: bool,
    pub switch_joined: bool,
    pub mono: bool,
    pub channels: Vec<Channel>,
    pub range: Option<VolumeRange>,
    pub levels: BTreeMap<u32, i64>,
    pub db: BTreeMap<u32, i64>,
    pub switches: BTreeMap<u32, bool>,
}

impl FakeSide {
    pub fn with_channels(mut self, channels: &[Channel]) -> Self {
        self.channels = channels.to_vec();
        self
    }

    pub fn with_volume(mut self, min: i64, max: i64, levels: &[(Channel, i64)]) -> Self {
        self.volume = true;
        self.range = Some(VolumeRange::new(min, max));
        self.levels = levels.iter().map(|(c, v)| (c.id(), *v)).collect();
        self
    }

    pub fn with_db(mut self, db: &[(Channel, i64)]) -> Self {
        self.db = db.iter().map(|(c, v)| (c.id(), *v)).collect();
        self
    }

    pub fn with_switch(mut self, switches: &[(Channel, bool)]) -> Self {
        self.switch = true;
        self.switches = switches.iter().map(|(c, v)| (c.id(), *v)).collect();
        self
    }

    pub fn mono(mut self) -> Self {
        self.mono = true;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    pub name: String,
    pub index: u32,
    pub inactive: bool,
    pub common_volume: bool,
    pub common_switch: bool,
    pub exclusive: bool,
    pub group: i32,
    pub playback: FakeSide,
    pub capture: FakeSide,
    pub enumerated: bool,
    pub enum_playback: bool,
    pub enum_capture: bool,
    pub items: Vec<String>,
    pub selection: Vec<u32>,
}

impl FakeElement {
    pub fn new(name: &str, index: u32) -> Self {
        Self {
            name: name.to_string(),
            index,
            ..Default::default()
        }
    }

    pub fn id(&self) -> ElementId {
        ElementId::new(self.name.clone(), self.index)
    }

    fn side(&self, direction: Direction) -> &FakeSide {
        match direction {
            Direction::Playback => &self.playback,
            Direction::Capture => &self.capture,
        }
    }
}

fn missing(query: &'static str) -> ProbeError {
    ProbeError::Query {
        query,
        reason: "Invalid argument".to_string(),
    }
}

impl SimpleElement for FakeElement {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn index(&self) -> u32 {
        self.index
    }

    fn is_active(&self) -> bool {
        !self.inactive
    }

    fn has_common_volume(&self) -> bool {
        self.common_volume
    }

    fn has_volume(&self, direction: Direction) -> bool {
        self.side(direction).volume
    }

    fn has_volume_joined(&self, direction: Direction) -> bool {
        self.side(direction).volume_joined
    }

    fn has_common_switch(&self) -> bool {
        self.common_switch
    }

    fn has_switch(&self, direction: Direction) -> bool {
        self.side(direction).switch
    }

    fn has_switch_joined(&self, direction: Direction) -> bool {
        self.side(direction).switch_joined
    }

    fn has_capture_switch_exclusive(&self) -> bool {
        self.exclusive
    }

    fn capture_group(&self) -> i32 {
        self.group
    }

    fn is_mono(&self, direction: Direction) -> bool {
        self.side(direction).mono
    }

    fn has_channel(&self, direction: Direction, channel: Channel) -> bool {
        self.side(direction)
            .channels
            .iter()
            .any(|c| c.id() == channel.id())
    }

    fn is_enumerated(&self) -> bool {
        self.enumerated
    }

    fn is_enum_playback(&self) -> bool {
        self.enum_playback
    }

    fn is_enum_capture(&self) -> bool {
        self.enum_capture
    }

    fn enum_item_count(&self) -> Result<u32, ProbeError> {
        Ok(self.items.len() as u32)
    }

    fn enum_item_name(&self, item: u32) -> Result<String, ProbeError> {
        self.items
            .get(item as usize)
            .cloned()
            .ok_or(ProbeError::EnumItem {
                item,
                reason: "Invalid argument".to_string(),
            })
    }

    fn selected_enum_item(&self, slot: u32) -> Result<u32, ProbeError> {
        self.selection
            .get(slot as usize)
            .copied()
            .ok_or_else(|| missing("selected enum item"))
    }

    fn volume_range(&self, query: VolumeQuery) -> Result<VolumeRange, ProbeError> {
        match query.representation {
            Representation::Raw => self
                .side(query.direction)
                .range
                .ok_or_else(|| missing("volume range")),
            Representation::Decibel => Err(missing("dB range")),
        }
    }

    fn volume(&self, query: VolumeQuery, channel: Channel) -> Result<i64, ProbeError> {
        let side = self.side(query.direction);
        let table = match query.representation {
            Representation::Raw => &side.levels,
            Representation::Decibel => &side.db,
        };
        table
            .get(&channel.id())
            .copied()
            .ok_or_else(|| missing("volume"))
    }

    fn switch(&self, direction: Direction, channel: Channel) -> Result<bool, ProbeError> {
        self.side(direction)
            .switches
            .get(&channel.id())
            .copied()
            .ok_or_else(|| missing("switch"))
    }
}

/// A card as seen by [`FakeHost`].
#[derive(Debug, Clone)]
pub struct FakeCard {
    pub index: u32,
    pub info_error: Option<ProbeError>,
    pub mixer_error: Option<ProbeError>,
    pub elements: Vec<FakeElement>,
    /// Ids listed by the mixer that cannot be re-resolved.
    pub ghosts: Vec<ElementId>,
}

impl FakeCard {
    pub fn new(index: u32, elements: Vec<FakeElement>) -> Self {
        Self {
            index,
            info_error: None,
            mixer_error: None,
            elements,
            ghosts: Vec::new(),
        }
    }

    pub fn info(&self) -> CardInfo {
        CardInfo {
            index: self.index,
            id: format!("Card{}", self.index),
            driver: "FakeDriver".to_string(),
            name: format!("Fake Card {}", self.index),
            longname: format!("Fake Card {} at fake bus", self.index),
            mixername: "Fake Codec".to_string(),
            components: "HDA:00000000".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct FakeHost {
    pub enumeration_error: Option<ProbeError>,
    pub cards: Vec<FakeCard>,
    /// Number of mixer sessions currently open.
    pub open_mixers: Rc<Cell<usize>>,
}

impl FakeHost {
    pub fn new(cards: Vec<FakeCard>) -> Self {
        Self {
            cards,
            ..Default::default()
        }
    }

    fn card(&self, index: u32) -> Option<&FakeCard> {
        self.cards.iter().find(|c| c.index == index)
    }
}

pub struct FakeMixer {
    device: String,
    order: Vec<ElementId>,
    elements: Vec<FakeElement>,
    open_mixers: Rc<Cell<usize>>,
}

impl Drop for FakeMixer {
    fn drop(&mut self) {
        self.open_mixers.set(self.open_mixers.get() - 1);
    }
}

impl MixerSession for FakeMixer {
    type Element<'a>
        = FakeElement
    where
        Self: 'a;

    fn device(&self) -> &str {
        &self.device
    }

    fn element_ids(&self) -> Vec<ElementId> {
        self.order.clone()
    }

    fn find_element(&self, id: &ElementId) -> Option<FakeElement> {
        self.elements.iter().find(|e| &e.id() == id).cloned()
    }
}

impl AudioHost for FakeHost {
    type Mixer = FakeMixer;

    fn card_indices(&self) -> Result<Vec<u32>, ProbeError> {
        if let Some(err) = &self.enumeration_error {
            return Err(err.clone());
        }
        Ok(self.cards.iter().map(|c| c.index).collect())
    }

    fn card_info(&self, index: u32) -> Result<CardInfo, ProbeError> {
        let card = self.card(index).ok_or_else(|| ProbeError::ControlOpen {
            device: device_name(index),
            reason: "No such device".to_string(),
        })?;
        match &card.info_error {
            Some(err) => Err(err.clone()),
            None => Ok(card.info()),
        }
    }

    fn open_mixer(&self, options: &MixerOptions) -> Result<FakeMixer, ProbeError> {
        let card = self
            .cards
            .iter()
            .find(|c| device_name(c.index) == options.device)
            .ok_or_else(|| ProbeError::MixerOpen {
                device: options.device.clone(),
                reason: "No such device".to_string(),
            })?;
        if let Some(err) = &card.mixer_error {
            return Err(err.clone());
        }

        let mut order = card.ghosts.clone();
        order.extend(card.elements.iter().map(FakeElement::id));

        self.open_mixers.set(self.open_mixers.get() + 1);
        Ok(FakeMixer {
            device: options.device.clone(),
            order,
            elements: card.elements.clone(),
            open_mixers: self.open_mixers.clone(),
        })
    }
}

/// Stereo playback volume element without switch or capture facets.
pub fn stereo_playback(name: &str, left: i64, right: i64) -> FakeElement {
    FakeElement {
        playback: FakeSide::default()
            .with_channels(&[Channel::FrontLeft, Channel::FrontRight])
            .with_volume(
                0,
                65535,
                &[(Channel::FrontLeft, left), (Channel::FrontRight, right)],
            ),
        ..FakeElement::new(name, 0)
    }
}

/// Capture source selector.
pub fn capture_source(items: &[&str], selected: u32) -> FakeElement {
    FakeElement {
        enumerated: true,
        enum_capture: true,
        items: items.iter().map(|s| s.to_string()).collect(),
        selection: vec![selected],
        ..FakeElement::new("Capture Source", 0)
    }
}
