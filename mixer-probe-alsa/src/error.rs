use std::ffi::CStr;

use alsa_sys as alsa;
use libc::c_int;
use thiserror::Error;

/// Failed alsa-lib call: the negative return code and its description.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AlsaError {
    pub code: c_int,
    pub message: String,
}

impl AlsaError {
    pub fn from_code(code: c_int) -> Self {
        Self {
            code,
            message: strerror(code),
        }
    }
}

/// Description of an alsa-lib error code, as given by `snd_strerror`.
pub fn strerror(code: c_int) -> String {
    unsafe {
        let ptr = alsa::snd_strerror(code);
        if ptr.is_null() {
            return format!("error {}", code);
        }
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}

/// Convert an alsa-lib return code into a `Result`.
macro_rules! errno {
    ($expr:expr) => {{
        let result: ::libc::c_int = $expr;

        if result < 0 {
            Err($crate::error::AlsaError::from_code(result))
        } else {
            Ok(result)
        }
    }};
}

pub(crate) use errno;
