pub mod capability;
pub mod card;
pub mod channel;
pub mod config;
pub mod element;
pub mod error;
pub mod volume;
