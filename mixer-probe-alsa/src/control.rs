//! Card control interface: identity queries only.

use std::ffi::{CStr, CString};
use std::ptr;

use alsa_sys as alsa;
use libc::c_char;

use mixer_probe_core::models::card::CardInfo;
use mixer_probe_core::models::error::ProbeError;

use crate::error::{errno, AlsaError};

/// An open control handle, closed on drop.
pub struct Control {
    handle: ptr::NonNull<alsa::snd_ctl_t>,
    device: String,
}

impl Control {
    /// Open the control interface of `device`, e.g. `hw:0`.
    pub fn open(device: &str) -> Result<Self, ProbeError> {
        let open_error = |reason: String| ProbeError::ControlOpen {
            device: device.to_string(),
            reason,
        };

        let name = CString::new(device).map_err(|e| open_error(e.to_string()))?;

        unsafe {
            let mut handle = ptr::null_mut();
            errno!(alsa::snd_ctl_open(&mut handle, name.as_ptr(), 0))
                .map_err(|e| open_error(e.to_string()))?;
            let handle =
                ptr::NonNull::new(handle).ok_or_else(|| open_error("null handle".to_string()))?;

            Ok(Self {
                handle,
                device: device.to_string(),
            })
        }
    }

    /// Read the card identity.
    ///
    /// `index` is the card slot the control was opened for.
    pub fn card_info(&self, index: u32) -> Result<CardInfo, ProbeError> {
        let info_error = |e: AlsaError| ProbeError::CardInfo {
            device: self.device.clone(),
            reason: e.to_string(),
        };

        let info = CardInfoHandle::new().map_err(info_error)?;

        unsafe {
            errno!(alsa::snd_ctl_card_info(self.handle.as_ptr(), info.handle.as_ptr()))
                .map_err(info_error)?;
        }

        Ok(CardInfo {
            index,
            id: info.field(alsa::snd_ctl_card_info_get_id),
            driver: info.field(alsa::snd_ctl_card_info_get_driver),
            name: info.field(alsa::snd_ctl_card_info_get_name),
            longname: info.field(alsa::snd_ctl_card_info_get_longname),
            mixername: info.field(alsa::snd_ctl_card_info_get_mixername),
            components: info.field(alsa::snd_ctl_card_info_get_components),
        })
    }
}

impl Drop for Control {
    fn drop(&mut self) {
        unsafe { alsa::snd_ctl_close(self.handle.as_ptr()) };
    }
}

type InfoField = unsafe extern "C" fn(*const alsa::snd_ctl_card_info_t) -> *const c_char;

/// Heap-allocated `snd_ctl_card_info_t`, freed on drop.
struct CardInfoHandle {
    handle: ptr::NonNull<alsa::snd_ctl_card_info_t>,
}

impl CardInfoHandle {
    fn new() -> Result<Self, AlsaError> {
        unsafe {
            let mut handle = ptr::null_mut();
            errno!(alsa::snd_ctl_card_info_malloc(&mut handle))?;
            let handle =
                ptr::NonNull::new(handle).ok_or_else(|| AlsaError::from_code(-libc::ENOMEM))?;
            Ok(Self { handle })
        }
    }

    fn field(&self, get: InfoField) -> String {
        unsafe {
            let ptr = get(self.handle.as_ptr());
            if ptr.is_null() {
                return String::new();
            }
            CStr::from_ptr(ptr).to_string_lossy().into_owned()
        }
    }
}

impl Drop for CardInfoHandle {
    fn drop(&mut self) {
        unsafe { alsa::snd_ctl_card_info_free(self.handle.as_ptr()) };
    }
}
