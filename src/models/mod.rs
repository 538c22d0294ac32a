//! Data models

pub mod material;
pub mod prediction;

pub use material::*;
pub use prediction::*;
