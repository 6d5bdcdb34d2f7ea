//! User-facing notification types

pub mod payload;
pub use payload::*;
