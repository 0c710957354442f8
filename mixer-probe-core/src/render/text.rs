//! Human-readable console report.
//!
//! Layout per card:
//! ```text
//! card
//! get_id: PCH
//! ...
//! card 0: PCH [HDA Intel PCH]
//! Simple mixer control 'Master',0
//!   Capabilities: pvolume pvolume-joined pswitch pswitch-joined
//!   Playback channels: Mono
//!   Limits: Playback 0 - 87
//!   Mono: Playback 87 [100%] [0.00dB] [on]
//! ```

use std::fmt::{self, Write};

use crate::models::card::CardReport;
use crate::models::channel::Channel;
use crate::models::element::{ElementDescription, ElementShape, EnumDescription, ValueDescription};
use crate::models::volume::{FacetReading, SwitchState, VolumeLimits, VolumeReading};

/// Render the report for all cards.
pub fn render_report(cards: &[CardReport]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, cards);
    out
}

/// Write the report for all cards into `out`.
pub fn write_report<W: Write>(out: &mut W, cards: &[CardReport]) -> fmt::Result {
    for card in cards {
        write_card(out, card)?;
    }
    Ok(())
}

fn write_card<W: Write>(out: &mut W, card: &CardReport) -> fmt::Result {
    let info = &card.info;
    writeln!(out, "card")?;
    writeln!(out, "get_id: {}", info.id)?;
    writeln!(out, "get_driver: {}", info.driver)?;
    writeln!(out, "get_name: {}", info.name)?;
    writeln!(out, "get_longname: {}", info.longname)?;
    writeln!(out, "get_mixername: {}", info.mixername)?;
    writeln!(out, "get_components: {}", info.components)?;
    writeln!(out, "card {}: {} [{}]", info.index, info.id, info.name)?;

    if let Some(mixer) = &card.mixer {
        for elem in &mixer.elements {
            write_element(out, elem)?;
        }
    }
    Ok(())
}

fn write_element<W: Write>(out: &mut W, elem: &ElementDescription) -> fmt::Result {
    if elem.inactive {
        out.write_str("[INACTIVE] ")?;
    }
    writeln!(out, "Simple mixer control '{}',{}", elem.name, elem.index)?;

    out.write_str("  Capabilities:")?;
    for cap in &elem.capabilities {
        write!(out, " {}", cap)?;
    }
    out.write_char('\n')?;

    match &elem.shape {
        ElementShape::Enumerated(desc) => write_enum(out, desc),
        ElementShape::Value(desc) => write_value(out, desc),
    }
}

fn write_enum<W: Write>(out: &mut W, desc: &EnumDescription) -> fmt::Result {
    out.write_str("  Items:")?;
    for item in &desc.alternatives {
        write!(out, " '{}'", item)?;
    }
    out.write_char('\n')?;

    for (slot, item) in desc.selected.iter().enumerate() {
        writeln!(out, "  Item{}: '{}'", slot, item)?;
    }
    Ok(())
}

fn write_value<W: Write>(out: &mut W, desc: &ValueDescription) -> fmt::Result {
    if let Some(group) = desc.capture_exclusive_group {
        writeln!(out, "  Capture exclusive group: {}", group)?;
    }
    if let Some(channels) = &desc.playback_channels {
        write_channel_list(out, "Playback", channels)?;
    }
    if let Some(channels) = &desc.capture_channels {
        write_channel_list(out, "Capture", channels)?;
    }
    if let Some(limits) = &desc.limits {
        write_limits(out, limits)?;
    }

    for value in &desc.channels {
        write!(out, "  {}:", value.channel)?;
        if let Some(volume) = &value.volume {
            write_volume(out, volume)?;
        }
        if let Some(switch) = value.switch {
            write_switch(out, switch)?;
        }
        if let Some(playback) = &value.playback {
            write_facet(out, "Playback", playback)?;
        }
        if let Some(capture) = &value.capture {
            write_facet(out, "Capture", capture)?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

fn write_channel_list<W: Write>(out: &mut W, label: &str, channels: &[Channel]) -> fmt::Result {
    write!(out, "  {} channels:", label)?;
    let mut sep = "";
    for channel in channels {
        write!(out, "{} {}", sep, channel)?;
        sep = " -";
    }
    out.write_char('\n')
}

fn write_limits<W: Write>(out: &mut W, limits: &VolumeLimits) -> fmt::Result {
    out.write_str("  Limits:")?;
    if let Some(common) = &limits.common {
        write!(out, " {} - {}", common.min, common.max)?;
    } else {
        if let Some(playback) = &limits.playback {
            write!(out, " Playback {} - {}", playback.min, playback.max)?;
        }
        if let Some(capture) = &limits.capture {
            write!(out, " Capture {} - {}", capture.min, capture.max)?;
        }
    }
    out.write_char('\n')
}

fn write_facet<W: Write>(out: &mut W, label: &str, facet: &FacetReading) -> fmt::Result {
    if facet.is_empty() {
        return Ok(());
    }
    write!(out, " {}", label)?;
    if let Some(volume) = &facet.volume {
        write_volume(out, volume)?;
    }
    if let Some(switch) = facet.switch {
        write_switch(out, switch)?;
    }
    Ok(())
}

fn write_volume<W: Write>(out: &mut W, volume: &VolumeReading) -> fmt::Result {
    write!(out, " {} [{}%]", volume.raw, volume.perc)?;
    if let Some(db) = volume.db {
        write!(out, " [{}]", format_db(db))?;
    }
    Ok(())
}

fn write_switch<W: Write>(out: &mut W, switch: SwitchState) -> fmt::Result {
    write!(out, " [{}]", switch.as_str())
}

/// Format hundredths of a dB, e.g. `-150` as `-1.50dB`.
pub fn format_db(hundredths: i64) -> String {
    let sign = if hundredths < 0 { "-" } else { "" };
    let magnitude = hundredths.unsigned_abs();
    format!("{}{}.{:02}dB", sign, magnitude / 100, magnitude % 100)
}
