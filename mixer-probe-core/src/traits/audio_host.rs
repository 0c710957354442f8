use crate::models::card::CardInfo;
use crate::models::config::MixerOptions;
use crate::models::element::ElementId;
use crate::models::error::ProbeError;

use super::simple_element::SimpleElement;

/// An open mixer session bound to one device.
///
/// Backends close the underlying handle when the session is dropped.
pub trait MixerSession {
    type Element<'a>: SimpleElement
    where
        Self: 'a;

    /// Device the session is attached to.
    fn device(&self) -> &str;

    /// Identifiers of all loaded simple elements, in library order.
    fn element_ids(&self) -> Vec<ElementId>;

    /// Re-resolve an element by identifier.
    fn find_element(&self, id: &ElementId) -> Option<Self::Element<'_>>;
}

/// Entry point into a host audio subsystem.
///
/// Equivalent of the platform's control API: card enumeration, identity
/// queries and mixer sessions. Implemented by:
/// - `AlsaHost` (Linux, `mixer-probe-alsa`)
pub trait AudioHost {
    type Mixer: MixerSession;

    /// Indices of all cards, ascending.
    fn card_indices(&self) -> Result<Vec<u32>, ProbeError>;

    /// Open the card's control interface, read its identity and close it.
    fn card_info(&self, index: u32) -> Result<CardInfo, ProbeError>;

    /// Open, register and load a mixer session.
    fn open_mixer(&self, options: &MixerOptions) -> Result<Self::Mixer, ProbeError>;
}
