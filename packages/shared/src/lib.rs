//! Utilities shared by the Tsudoi crates.

pub mod logger;
pub mod time;
