//! ALSA card enumeration and the [`AudioHost`] entry point.

use alsa_sys as alsa;
use libc::c_int;

use mixer_probe_core::models::card::{device_name, CardInfo};
use mixer_probe_core::models::config::MixerOptions;
use mixer_probe_core::models::error::ProbeError;
use mixer_probe_core::traits::audio_host::AudioHost;

use crate::control::Control;
use crate::error::errno;
use crate::mixer::Mixer;

/// Indices of all sound cards known to alsa-lib, ascending.
pub fn card_indices() -> Result<Vec<u32>, ProbeError> {
    let mut indices = Vec::new();
    let mut index: c_int = -1;

    loop {
        let result = unsafe { errno!(alsa::snd_card_next(&mut index)) };
        result.map_err(|e| ProbeError::Enumeration(e.to_string()))?;
        if index < 0 {
            break;
        }
        indices.push(index as u32);
    }

    Ok(indices)
}

/// The ALSA host.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlsaHost;

impl AlsaHost {
    pub fn new() -> Self {
        Self
    }
}

impl AudioHost for AlsaHost {
    type Mixer = Mixer;

    fn card_indices(&self) -> Result<Vec<u32>, ProbeError> {
        card_indices()
    }

    fn card_info(&self, index: u32) -> Result<CardInfo, ProbeError> {
        let device = device_name(index);
        log::debug!("opening control {}", device);
        let control = Control::open(&device)?;
        control.card_info(index)
    }

    fn open_mixer(&self, options: &MixerOptions) -> Result<Mixer, ProbeError> {
        Mixer::open(options)
    }
}
