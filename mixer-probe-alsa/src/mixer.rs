//! Simple mixer interface over alsa-lib.
//!
//! A [`Mixer`] is opened, attached to one device, registered for simple
//! elements and loaded. Elements borrowed from it are plain views that
//! query alsa-lib on every call.

use std::ffi::{CStr, CString};
use std::marker::PhantomData;
use std::ptr;

use alsa_sys as alsa;
use libc::{c_int, c_long, c_uint};

use mixer_probe_core::models::channel::{Channel, Direction};
use mixer_probe_core::models::config::{Abstraction, MixerOptions};
use mixer_probe_core::models::element::ElementId;
use mixer_probe_core::models::error::ProbeError;
use mixer_probe_core::models::volume::VolumeRange;
use mixer_probe_core::traits::audio_host::MixerSession;
use mixer_probe_core::traits::simple_element::{Representation, SimpleElement, VolumeQuery};

use crate::error::{errno, AlsaError};

/// Size of the buffer enumerated item labels are read into.
const LABEL_BUFFER: usize = 40;

type RangeFn = unsafe extern "C" fn(*mut alsa::snd_mixer_elem_t, *mut c_long, *mut c_long) -> c_int;
type ReadFn = unsafe extern "C" fn(
    *mut alsa::snd_mixer_elem_t,
    alsa::snd_mixer_selem_channel_id_t,
    *mut c_long,
) -> c_int;

/// Range and read entry points for one direction and representation.
struct VolumeOps {
    range: RangeFn,
    range_name: &'static str,
    read: ReadFn,
    read_name: &'static str,
}

/// Indexed by `[direction][representation]`.
static VOLUME_OPS: [[VolumeOps; 2]; 2] = [
    [
        VolumeOps {
            range: alsa::snd_mixer_selem_get_playback_volume_range,
            range_name: "snd_mixer_selem_get_playback_volume_range",
            read: alsa::snd_mixer_selem_get_playback_volume,
            read_name: "snd_mixer_selem_get_playback_volume",
        },
        VolumeOps {
            range: alsa::snd_mixer_selem_get_playback_dB_range,
            range_name: "snd_mixer_selem_get_playback_dB_range",
            read: alsa::snd_mixer_selem_get_playback_dB,
            read_name: "snd_mixer_selem_get_playback_dB",
        },
    ],
    [
        VolumeOps {
            range: alsa::snd_mixer_selem_get_capture_volume_range,
            range_name: "snd_mixer_selem_get_capture_volume_range",
            read: alsa::snd_mixer_selem_get_capture_volume,
            read_name: "snd_mixer_selem_get_capture_volume",
        },
        VolumeOps {
            range: alsa::snd_mixer_selem_get_capture_dB_range,
            range_name: "snd_mixer_selem_get_capture_dB_range",
            read: alsa::snd_mixer_selem_get_capture_dB,
            read_name: "snd_mixer_selem_get_capture_dB",
        },
    ],
];

fn volume_ops(query: VolumeQuery) -> &'static VolumeOps {
    let direction = match query.direction {
        Direction::Playback => 0,
        Direction::Capture => 1,
    };
    let representation = match query.representation {
        Representation::Raw => 0,
        Representation::Decibel => 1,
    };
    &VOLUME_OPS[direction][representation]
}

fn query_error(query: &'static str) -> impl Fn(AlsaError) -> ProbeError {
    move |e| ProbeError::Query {
        query,
        reason: e.to_string(),
    }
}

fn channel_id(channel: Channel) -> alsa::snd_mixer_selem_channel_id_t {
    channel.id() as alsa::snd_mixer_selem_channel_id_t
}

/// An open, loaded mixer session. Closed on drop.
pub struct Mixer {
    handle: ptr::NonNull<alsa::snd_mixer_t>,
    device: String,
}

impl Mixer {
    /// Open a mixer, attach it to `options.device`, register the simple
    /// element layer and load the elements.
    pub fn open(options: &MixerOptions) -> Result<Self, ProbeError> {
        let device = options.device.clone();
        let open_error = |reason: String| ProbeError::MixerOpen {
            device: device.clone(),
            reason,
        };
        let register_error = |e: AlsaError| ProbeError::MixerRegister {
            device: device.clone(),
            reason: e.to_string(),
        };
        let load_error = |e: AlsaError| ProbeError::MixerLoad {
            device: device.clone(),
            reason: e.to_string(),
        };

        let name = CString::new(device.as_str()).map_err(|e| open_error(e.to_string()))?;

        let mixer = unsafe {
            let mut handle = ptr::null_mut();
            errno!(alsa::snd_mixer_open(&mut handle, 0)).map_err(|e| open_error(e.to_string()))?;
            let handle =
                ptr::NonNull::new(handle).ok_or_else(|| open_error("null handle".to_string()))?;
            Self {
                handle,
                device: device.clone(),
            }
        };

        match options.abstraction {
            Abstraction::None => unsafe {
                errno!(alsa::snd_mixer_attach(mixer.handle.as_ptr(), name.as_ptr()))
                    .map_err(register_error)?;
                errno!(alsa::snd_mixer_selem_register(
                    mixer.handle.as_ptr(),
                    ptr::null_mut(),
                    ptr::null_mut(),
                ))
                .map_err(register_error)?;
            },
        }

        unsafe {
            errno!(alsa::snd_mixer_load(mixer.handle.as_ptr())).map_err(load_error)?;
        }

        log::debug!("mixer {} loaded", mixer.device);
        Ok(mixer)
    }
}

impl Drop for Mixer {
    fn drop(&mut self) {
        unsafe { alsa::snd_mixer_close(self.handle.as_ptr()) };
    }
}

impl MixerSession for Mixer {
    type Element<'a>
        = AlsaElement<'a>
    where
        Self: 'a;

    fn device(&self) -> &str {
        &self.device
    }

    fn element_ids(&self) -> Vec<ElementId> {
        let sid = match SelemId::new() {
            Ok(sid) => sid,
            Err(e) => {
                log::error!("Mixer {} simple element id: {}", self.device, e);
                return Vec::new();
            }
        };

        let mut ids = Vec::new();
        unsafe {
            let mut elem = alsa::snd_mixer_first_elem(self.handle.as_ptr());
            while !elem.is_null() {
                alsa::snd_mixer_selem_get_id(elem, sid.handle.as_ptr());
                ids.push(sid.element_id());
                elem = alsa::snd_mixer_elem_next(elem);
            }
        }
        ids
    }

    fn find_element(&self, id: &ElementId) -> Option<AlsaElement<'_>> {
        let name = CString::new(id.name.as_str()).ok()?;
        let sid = SelemId::new().ok()?;

        unsafe {
            alsa::snd_mixer_selem_id_set_name(sid.handle.as_ptr(), name.as_ptr());
            alsa::snd_mixer_selem_id_set_index(sid.handle.as_ptr(), id.index as c_uint);
            let elem = alsa::snd_mixer_find_selem(self.handle.as_ptr(), sid.handle.as_ptr());

            Some(AlsaElement {
                handle: ptr::NonNull::new(elem)?,
                name: id.name.clone(),
                index: id.index,
                _marker: PhantomData,
            })
        }
    }
}

/// Heap-allocated simple element identifier, freed on drop.
struct SelemId {
    handle: ptr::NonNull<alsa::snd_mixer_selem_id_t>,
}

impl SelemId {
    fn new() -> Result<Self, AlsaError> {
        unsafe {
            let mut handle = ptr::null_mut();
            errno!(alsa::snd_mixer_selem_id_malloc(&mut handle))?;
            let handle =
                ptr::NonNull::new(handle).ok_or_else(|| AlsaError::from_code(-libc::ENOMEM))?;
            Ok(Self { handle })
        }
    }

    fn element_id(&self) -> ElementId {
        unsafe {
            let name = alsa::snd_mixer_selem_id_get_name(self.handle.as_ptr());
            let name = if name.is_null() {
                String::new()
            } else {
                CStr::from_ptr(name).to_string_lossy().into_owned()
            };
            let index = alsa::snd_mixer_selem_id_get_index(self.handle.as_ptr());
            ElementId::new(name, index as u32)
        }
    }
}

impl Drop for SelemId {
    fn drop(&mut self) {
        unsafe { alsa::snd_mixer_selem_id_free(self.handle.as_ptr()) };
    }
}

/// A simple element borrowed from its [`Mixer`].
pub struct AlsaElement<'a> {
    handle: ptr::NonNull<alsa::snd_mixer_elem_t>,
    name: String,
    index: u32,
    _marker: PhantomData<&'a Mixer>,
}

impl AlsaElement<'_> {
    fn as_ptr(&self) -> *mut alsa::snd_mixer_elem_t {
        self.handle.as_ptr()
    }

    fn flag(&self, query: unsafe extern "C" fn(*mut alsa::snd_mixer_elem_t) -> c_int) -> bool {
        unsafe { query(self.as_ptr()) != 0 }
    }
}

impl SimpleElement for AlsaElement<'_> {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn index(&self) -> u32 {
        self.index
    }

    fn is_active(&self) -> bool {
        self.flag(alsa::snd_mixer_selem_is_active)
    }

    fn has_common_volume(&self) -> bool {
        self.flag(alsa::snd_mixer_selem_has_common_volume)
    }

    fn has_volume(&self, direction: Direction) -> bool {
        match direction {
            Direction::Playback => self.flag(alsa::snd_mixer_selem_has_playback_volume),
            Direction::Capture => self.flag(alsa::snd_mixer_selem_has_capture_volume),
        }
    }

    fn has_volume_joined(&self, direction: Direction) -> bool {
        match direction {
            Direction::Playback => self.flag(alsa::snd_mixer_selem_has_playback_volume_joined),
            Direction::Capture => self.flag(alsa::snd_mixer_selem_has_capture_volume_joined),
        }
    }

    fn has_common_switch(&self) -> bool {
        self.flag(alsa::snd_mixer_selem_has_common_switch)
    }

    fn has_switch(&self, direction: Direction) -> bool {
        match direction {
            Direction::Playback => self.flag(alsa::snd_mixer_selem_has_playback_switch),
            Direction::Capture => self.flag(alsa::snd_mixer_selem_has_capture_switch),
        }
    }

    fn has_switch_joined(&self, direction: Direction) -> bool {
        match direction {
            Direction::Playback => self.flag(alsa::snd_mixer_selem_has_playback_switch_joined),
            Direction::Capture => self.flag(alsa::snd_mixer_selem_has_capture_switch_joined),
        }
    }

    fn has_capture_switch_exclusive(&self) -> bool {
        self.flag(alsa::snd_mixer_selem_has_capture_switch_exclusive)
    }

    fn capture_group(&self) -> i32 {
        unsafe { alsa::snd_mixer_selem_get_capture_group(self.as_ptr()) }
    }

    fn is_mono(&self, direction: Direction) -> bool {
        match direction {
            Direction::Playback => self.flag(alsa::snd_mixer_selem_is_playback_mono),
            Direction::Capture => self.flag(alsa::snd_mixer_selem_is_capture_mono),
        }
    }

    fn has_channel(&self, direction: Direction, channel: Channel) -> bool {
        let channel = channel_id(channel);
        unsafe {
            match direction {
                Direction::Playback => {
                    alsa::snd_mixer_selem_has_playback_channel(self.as_ptr(), channel) != 0
                }
                Direction::Capture => {
                    alsa::snd_mixer_selem_has_capture_channel(self.as_ptr(), channel) != 0
                }
            }
        }
    }

    fn is_enumerated(&self) -> bool {
        self.flag(alsa::snd_mixer_selem_is_enumerated)
    }

    fn is_enum_playback(&self) -> bool {
        self.flag(alsa::snd_mixer_selem_is_enum_playback)
    }

    fn is_enum_capture(&self) -> bool {
        self.flag(alsa::snd_mixer_selem_is_enum_capture)
    }

    fn enum_item_count(&self) -> Result<u32, ProbeError> {
        let count = unsafe { errno!(alsa::snd_mixer_selem_get_enum_items(self.as_ptr())) };
        let count = count.map_err(query_error("snd_mixer_selem_get_enum_items"))?;
        Ok(count as u32)
    }

    fn enum_item_name(&self, item: u32) -> Result<String, ProbeError> {
        let mut buf = [0u8; LABEL_BUFFER];
        let result = unsafe {
            errno!(alsa::snd_mixer_selem_get_enum_item_name(
                self.as_ptr(),
                item as c_uint,
                buf.len() as _,
                buf.as_mut_ptr().cast(),
            ))
        };
        result.map_err(|e| ProbeError::EnumItem {
            item,
            reason: e.to_string(),
        })?;
        Ok(label_from_buffer(&mut buf))
    }

    fn selected_enum_item(&self, slot: u32) -> Result<u32, ProbeError> {
        let mut item: c_uint = 0;
        let result = unsafe {
            errno!(alsa::snd_mixer_selem_get_enum_item(
                self.as_ptr(),
                slot as alsa::snd_mixer_selem_channel_id_t,
                &mut item,
            ))
        };
        result.map_err(query_error("snd_mixer_selem_get_enum_item"))?;
        Ok(item as u32)
    }

    fn volume_range(&self, query: VolumeQuery) -> Result<VolumeRange, ProbeError> {
        let ops = volume_ops(query);
        let mut min: c_long = 0;
        let mut max: c_long = 0;
        let result = unsafe { errno!((ops.range)(self.as_ptr(), &mut min, &mut max)) };
        result.map_err(query_error(ops.range_name))?;
        Ok(VolumeRange::new(min as i64, max as i64))
    }

    fn volume(&self, query: VolumeQuery, channel: Channel) -> Result<i64, ProbeError> {
        let ops = volume_ops(query);
        let mut value: c_long = 0;
        let result = unsafe { errno!((ops.read)(self.as_ptr(), channel_id(channel), &mut value)) };
        result.map_err(query_error(ops.read_name))?;
        Ok(value as i64)
    }

    fn switch(&self, direction: Direction, channel: Channel) -> Result<bool, ProbeError> {
        let mut value: c_int = 0;
        let channel = channel_id(channel);
        let (result, query) = match direction {
            Direction::Playback => (
                unsafe {
                    errno!(alsa::snd_mixer_selem_get_playback_switch(self.as_ptr(), channel, &mut value))
                },
                "snd_mixer_selem_get_playback_switch",
            ),
            Direction::Capture => (
                unsafe {
                    errno!(alsa::snd_mixer_selem_get_capture_switch(self.as_ptr(), channel, &mut value))
                },
                "snd_mixer_selem_get_capture_switch",
            ),
        };
        result.map_err(query_error(query))?;
        Ok(value != 0)
    }
}

/// Read a nul-terminated label out of `buf`, forcing termination at the
/// last byte. A multibyte character cut by the termination is dropped.
fn label_from_buffer(buf: &mut [u8; LABEL_BUFFER]) -> String {
    buf[LABEL_BUFFER - 1] = 0;
    let bytes = match CStr::from_bytes_until_nul(buf) {
        Ok(label) => label.to_bytes(),
        Err(_) => return String::new(),
    };
    match std::str::from_utf8(bytes) {
        Ok(label) => label.to_string(),
        Err(e) if e.error_len().is_none() => {
            String::from_utf8_lossy(&bytes[..e.valid_up_to()]).into_owned()
        }
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}
