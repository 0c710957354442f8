use crate::models::card::MixerReport;
use crate::models::error::ProbeError;
use crate::processing::classifier::classify;
use crate::traits::audio_host::MixerSession;

/// Walk every simple element of an open mixer, in library order.
///
/// Elements that can no longer be resolved by id are logged and left out;
/// the walk always continues with the next element.
pub fn walk_mixer<M: MixerSession>(mixer: &M) -> MixerReport {
    let ids = mixer.element_ids();
    let mut elements = Vec::with_capacity(ids.len());

    for id in ids {
        match mixer.find_element(&id) {
            Some(elem) => elements.push(classify(&elem)),
            None => {
                let err = ProbeError::ElementNotFound {
                    device: mixer.device().to_string(),
                    name: id.name,
                    index: id.index,
                };
                log::error!("{}", err);
            }
        }
    }

    log::debug!("{}: {} simple elements", mixer.device(), elements.len());
    MixerReport { elements }
}
