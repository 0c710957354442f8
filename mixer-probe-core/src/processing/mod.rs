pub mod classifier;
pub mod levels;
