pub mod probe;
pub mod walker;
