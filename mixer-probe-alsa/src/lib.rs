//! # mixer-probe-alsa
//!
//! ALSA backend for mixer-probe.
//!
//! Provides:
//! - `AlsaHost`: card enumeration, card identity and mixer sessions
//! - `Control`: card control interface (identity queries)
//! - `Mixer` / `AlsaElement`: simple mixer session and element views
//!
//! ## Platform Requirements
//! - Linux with alsa-lib (`libasound`) and its development headers
//!
//! ## Usage
//! ```ignore
//! use mixer_probe_alsa::AlsaHost;
//! use mixer_probe_core::ProbeSession;
//!
//! let session = ProbeSession::new(AlsaHost::new());
//! let cards = session.probe_cards()?;
//! ```

#[cfg(target_os = "linux")]
pub mod control;
#[cfg(target_os = "linux")]
pub mod device_enumerator;
#[cfg(target_os = "linux")]
pub mod error;
#[cfg(target_os = "linux")]
pub mod mixer;

#[cfg(target_os = "linux")]
pub use control::Control;
#[cfg(target_os = "linux")]
pub use device_enumerator::AlsaHost;
#[cfg(target_os = "linux")]
pub use error::AlsaError;
#[cfg(target_os = "linux")]
pub use mixer::{AlsaElement, Mixer};
