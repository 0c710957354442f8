//! Element classification.
//!
//! Turns the capability flags of one simple element into an
//! [`ElementDescription`]. Every branch is a read-only query against the
//! element; the same element state always yields the same description.

use crate::models::capability::Capability;
use crate::models::channel::{Channel, Direction};
use crate::models::element::{
    ChannelValue, ElementDescription, ElementShape, EnumDescription, ValueDescription,
};
use crate::models::volume::{FacetReading, SwitchState, VolumeLimits, VolumeRange, VolumeReading};
use crate::processing::levels::percentage;
use crate::traits::simple_element::{SimpleElement, VolumeQuery};

/// Upper bound on enumerated selection slots (one per possible channel id).
const MAX_SELECTION_SLOTS: u32 = 32;

/// Describe one simple element.
pub fn classify<E: SimpleElement + ?Sized>(elem: &E) -> ElementDescription {
    let shape = if elem.is_enumerated() {
        ElementShape::Enumerated(describe_enum(elem))
    } else {
        ElementShape::Value(describe_value(elem))
    };

    ElementDescription {
        name: elem.name(),
        index: elem.index(),
        capabilities: capabilities(elem),
        shape,
        inactive: !elem.is_active(),
    }
}

/// Capability tags in emission order.
pub fn capabilities<E: SimpleElement + ?Sized>(elem: &E) -> Vec<Capability> {
    let mut caps = Vec::new();

    if elem.has_common_volume() {
        caps.push(Capability::Volume);
        if elem.has_volume_joined(Direction::Playback) {
            caps.push(Capability::VolumeJoined);
        }
    } else {
        if elem.has_volume(Direction::Playback) {
            caps.push(Capability::PlaybackVolume);
            if elem.has_volume_joined(Direction::Playback) {
                caps.push(Capability::PlaybackVolumeJoined);
            }
        }
        if elem.has_volume(Direction::Capture) {
            caps.push(Capability::CaptureVolume);
            if elem.has_volume_joined(Direction::Capture) {
                caps.push(Capability::CaptureVolumeJoined);
            }
        }
    }

    if elem.has_common_switch() {
        caps.push(Capability::Switch);
        if elem.has_switch_joined(Direction::Playback) {
            caps.push(Capability::SwitchJoined);
        }
    } else {
        if elem.has_switch(Direction::Playback) {
            caps.push(Capability::PlaybackSwitch);
            if elem.has_switch_joined(Direction::Playback) {
                caps.push(Capability::PlaybackSwitchJoined);
            }
        }
        if elem.has_switch(Direction::Capture) {
            caps.push(Capability::CaptureSwitch);
            if elem.has_switch_joined(Direction::Capture) {
                caps.push(Capability::CaptureSwitchJoined);
            }
            if elem.has_capture_switch_exclusive() {
                caps.push(Capability::CaptureSwitchExclusive);
            }
        }
    }

    if elem.is_enum_playback() {
        caps.push(Capability::PlaybackEnum);
    } else if elem.is_enum_capture() {
        caps.push(Capability::CaptureEnum);
    } else if elem.is_enumerated() {
        caps.push(Capability::Enum);
    }

    caps
}

fn describe_enum<E: SimpleElement + ?Sized>(elem: &E) -> EnumDescription {
    let count = elem.enum_item_count().unwrap_or_else(|e| {
        log::warn!("'{}',{}: {}", elem.name(), elem.index(), e);
        0
    });

    let alternatives = (0..count).map(|item| enum_label(elem, item)).collect();

    let mut selected = Vec::new();
    for slot in 0..MAX_SELECTION_SLOTS {
        let Ok(item) = elem.selected_enum_item(slot) else {
            break;
        };
        selected.push(enum_label(elem, item));
    }

    EnumDescription {
        alternatives,
        selected,
    }
}

fn enum_label<E: SimpleElement + ?Sized>(elem: &E, item: u32) -> String {
    elem.enum_item_name(item).unwrap_or_else(|e| {
        log::warn!("'{}',{}: {}", elem.name(), elem.index(), e);
        String::new()
    })
}

/// Flags of a value-shaped element, queried once.
#[derive(Debug, Clone, Copy)]
struct Facets {
    common_volume: bool,
    common_switch: bool,
    playback_volume: bool,
    playback_switch: bool,
    capture_volume: bool,
    capture_switch: bool,
}

impl Facets {
    fn query<E: SimpleElement + ?Sized>(elem: &E) -> Self {
        Self {
            common_volume: elem.has_common_volume(),
            common_switch: elem.has_common_switch(),
            playback_volume: elem.has_volume(Direction::Playback),
            playback_switch: elem.has_switch(Direction::Playback),
            capture_volume: elem.has_volume(Direction::Capture),
            capture_switch: elem.has_switch(Direction::Capture),
        }
    }

    fn volume(&self, direction: Direction) -> bool {
        match direction {
            Direction::Playback => self.playback_volume,
            Direction::Capture => self.capture_volume,
        }
    }

    fn switch(&self, direction: Direction) -> bool {
        match direction {
            Direction::Playback => self.playback_switch,
            Direction::Capture => self.capture_switch,
        }
    }
}

/// Volume ranges used to normalize readings.
#[derive(Debug, Clone, Copy, Default)]
struct Ranges {
    playback: Option<VolumeRange>,
    capture: Option<VolumeRange>,
}

impl Ranges {
    fn get(&self, direction: Direction) -> Option<VolumeRange> {
        match direction {
            Direction::Playback => self.playback,
            Direction::Capture => self.capture,
        }
    }
}

fn describe_value<E: SimpleElement + ?Sized>(elem: &E) -> ValueDescription {
    let facets = Facets::query(elem);
    let mut desc = ValueDescription::default();

    if elem.has_capture_switch_exclusive() {
        desc.capture_exclusive_group = Some(elem.capture_group());
    }

    if facets.playback_volume || facets.playback_switch {
        desc.playback_channels = Some(channel_list(elem, Direction::Playback));
    }
    if facets.capture_volume || facets.capture_switch {
        desc.capture_channels = Some(channel_list(elem, Direction::Capture));
    }

    let mut ranges = Ranges::default();
    if facets.playback_volume || facets.capture_volume {
        let mut limits = VolumeLimits::default();
        if facets.common_volume {
            ranges.playback = read_range(elem, Direction::Playback);
            ranges.capture = ranges.playback;
            limits.common = ranges.playback;
        } else {
            if facets.playback_volume {
                ranges.playback = read_range(elem, Direction::Playback);
                limits.playback = ranges.playback;
            }
            if facets.capture_volume {
                ranges.capture = read_range(elem, Direction::Capture);
                limits.capture = ranges.capture;
            }
        }
        desc.limits = Some(limits);
    }

    let pmono = is_mono_side(elem, &facets, Direction::Playback);
    let cmono = is_mono_side(elem, &facets, Direction::Capture);

    if pmono || cmono {
        let mut mono = ChannelValue::new(Channel::Mono);
        if facets.common_volume {
            mono.volume = read_volume(elem, Direction::Playback, Channel::Mono, ranges.playback);
        }
        if facets.common_switch {
            mono.switch = read_switch(elem, Direction::Playback, Channel::Mono);
        }
        if pmono {
            mono.playback = facet_reading(elem, &facets, &ranges, Direction::Playback, Channel::Mono);
        }
        if cmono {
            mono.capture = facet_reading(elem, &facets, &ranges, Direction::Capture, Channel::Mono);
        }
        if mono.is_empty() {
            log::debug!("'{}',{}: Mono has no readable facet", elem.name(), elem.index());
        } else {
            desc.channels.push(mono);
        }
    }

    if !(pmono && cmono) {
        for channel in Channel::POSITIONS {
            let playback = !pmono && elem.has_channel(Direction::Playback, channel);
            let capture = !cmono && elem.has_channel(Direction::Capture, channel);
            if !playback && !capture {
                continue;
            }

            let mut value = ChannelValue::new(channel);
            if !pmono && !cmono {
                if facets.common_volume {
                    value.volume = read_volume(elem, Direction::Playback, channel, ranges.playback);
                }
                if facets.common_switch {
                    value.switch = read_switch(elem, Direction::Playback, channel);
                }
            }
            if playback {
                value.playback = facet_reading(elem, &facets, &ranges, Direction::Playback, channel);
            }
            if capture {
                value.capture = facet_reading(elem, &facets, &ranges, Direction::Capture, channel);
            }

            if value.is_empty() {
                log::debug!("'{}',{}: {} has no readable facet", elem.name(), elem.index(), channel);
                continue;
            }
            desc.channels.push(value);
        }
    }

    desc
}

/// `["Mono"]` for mono sides, otherwise the supported positional channels.
fn channel_list<E: SimpleElement + ?Sized>(elem: &E, direction: Direction) -> Vec<Channel> {
    if elem.is_mono(direction) {
        return vec![Channel::Mono];
    }
    Channel::POSITIONS
        .into_iter()
        .filter(|&channel| elem.has_channel(direction, channel))
        .collect()
}

/// A side is handled as a single synthetic mono channel when it declares the
/// mono channel and either is flagged mono or carries no facet at all.
fn is_mono_side<E: SimpleElement + ?Sized>(elem: &E, facets: &Facets, direction: Direction) -> bool {
    elem.has_channel(direction, Channel::Mono)
        && (elem.is_mono(direction) || (!facets.volume(direction) && !facets.switch(direction)))
}

/// Direction-specific readings not already covered by a shared facet.
fn facet_reading<E: SimpleElement + ?Sized>(
    elem: &E,
    facets: &Facets,
    ranges: &Ranges,
    direction: Direction,
    channel: Channel,
) -> Option<FacetReading> {
    let mut reading = FacetReading::default();
    if !facets.common_volume && facets.volume(direction) {
        reading.volume = read_volume(elem, direction, channel, ranges.get(direction));
    }
    if !facets.common_switch && facets.switch(direction) {
        reading.switch = read_switch(elem, direction, channel);
    }
    reading.non_empty()
}

fn read_range<E: SimpleElement + ?Sized>(elem: &E, direction: Direction) -> Option<VolumeRange> {
    match elem.volume_range(VolumeQuery::raw(direction)) {
        Ok(range) => Some(range),
        Err(e) => {
            log::warn!("'{}',{}: {}", elem.name(), elem.index(), e);
            None
        }
    }
}

fn read_volume<E: SimpleElement + ?Sized>(
    elem: &E,
    direction: Direction,
    channel: Channel,
    range: Option<VolumeRange>,
) -> Option<VolumeReading> {
    let raw = match elem.volume(VolumeQuery::raw(direction), channel) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("'{}',{}: {} {}: {}", elem.name(), elem.index(), direction, channel, e);
            return None;
        }
    };

    let perc = range.map_or(0, |range| percentage(raw, range));

    // dB is optional; drivers without a dB scale simply omit it.
    let db = elem.volume(VolumeQuery::decibel(direction), channel).ok();

    Some(VolumeReading { raw, perc, db })
}

fn read_switch<E: SimpleElement + ?Sized>(
    elem: &E,
    direction: Direction,
    channel: Channel,
) -> Option<SwitchState> {
    match elem.switch(direction, channel) {
        Ok(on) => Some(SwitchState::from(on)),
        Err(e) => {
            log::warn!("'{}',{}: {} {} switch: {}", elem.name(), elem.index(), direction, channel, e);
            None
        }
    }
}
