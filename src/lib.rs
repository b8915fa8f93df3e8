pub mod config;
pub mod error;
pub mod lut;
pub mod types;

pub use lut::{generate, generate_from_bytes};
