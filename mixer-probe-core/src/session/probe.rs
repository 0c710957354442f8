use crate::models::card::{CardReport, MixerReport};
use crate::models::config::MixerOptions;
use crate::models::error::ProbeError;
use crate::session::walker::walk_mixer;
use crate::traits::audio_host::AudioHost;

/// Platform-agnostic probe pipeline.
///
/// Generic over the host backend via the `AudioHost` trait. Runs strictly
/// sequentially, one card at a time:
/// ```text
/// [card_indices] → [card_info] → [open_mixer] → [walk_mixer/classify] → CardReport
/// ```
pub struct ProbeSession<H: AudioHost> {
    host: H,
}

impl<H: AudioHost> ProbeSession<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Probe every card on the host.
    ///
    /// Fails only when enumeration fails or finds no card. Per-card failures
    /// are logged and the card is left out.
    pub fn probe_cards(&self) -> Result<Vec<CardReport>, ProbeError> {
        let indices = self.host.card_indices()?;
        if indices.is_empty() {
            return Err(ProbeError::NoCards);
        }

        let mut reports = Vec::with_capacity(indices.len());
        for index in indices {
            match self.probe_card(index) {
                Ok(report) => reports.push(report),
                Err(e) => log::error!("{}", e),
            }
        }
        Ok(reports)
    }

    /// Read one card's identity and mixer.
    ///
    /// A mixer that cannot be opened leaves `mixer` empty; the card itself is
    /// still reported.
    pub fn probe_card(&self, index: u32) -> Result<CardReport, ProbeError> {
        let info = self.host.card_info(index)?;

        let options = MixerOptions::for_device(info.device_name());
        let mixer = match self.probe_mixer(&options) {
            Ok(report) => Some(report),
            Err(e) => {
                log::error!("{}", e);
                None
            }
        };

        Ok(CardReport { info, mixer })
    }

    /// Open a mixer session, walk it and close it again.
    pub fn probe_mixer(&self, options: &MixerOptions) -> Result<MixerReport, ProbeError> {
        let mixer = self.host.open_mixer(options)?;
        Ok(walk_mixer(&mixer))
    }
}
