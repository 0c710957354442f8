//! # mixer-probe-core
//!
//! Platform-agnostic sound card and mixer inspection.
//!
//! Provides the report model, element classification, the probe pipeline,
//! text rendering and the JSON document. Platform backends (ALSA) implement
//! the `AudioHost` trait and plug into the generic `ProbeSession`.
//!
//! ## Architecture
//!
//! ```text
//! mixer-probe-core (this crate)
//! ├── traits/       ← AudioHost, MixerSession, SimpleElement
//! ├── models/       ← ProbeError, CardReport, ElementDescription, Capability, Channel, etc.
//! ├── processing/   ← element classifier, volume percentage
//! ├── session/      ← ProbeSession (generic orchestrator), mixer walker
//! ├── render/       ← text report
//! └── storage/      ← JSON document
//! ```

pub mod models;
pub mod processing;
pub mod render;
pub mod session;
pub mod storage;
pub mod traits;

#[cfg(test)]
mod testing;

// Re-export key types at crate root for convenience.
pub use models::capability::Capability;
pub use models::card::{CardInfo, CardReport, MixerReport};
pub use models::channel::{Channel, Direction};
pub use models::config::{MixerOptions, OutputFormat, ProbeConfiguration};
pub use models::element::{ChannelValue, ElementDescription, ElementId, ElementShape, EnumDescription, ValueDescription};
pub use models::error::ProbeError;
pub use models::volume::{FacetReading, SwitchState, VolumeLimits, VolumeRange, VolumeReading};
pub use processing::classifier::classify;
pub use render::text::render_report;
pub use session::probe::ProbeSession;
pub use traits::audio_host::{AudioHost, MixerSession};
pub use traits::simple_element::{Representation, SimpleElement, VolumeQuery};
