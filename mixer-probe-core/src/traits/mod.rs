pub mod audio_host;
pub mod simple_element;
