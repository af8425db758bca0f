#![doc = include_str!("../README.md")]

mod error;
pub mod geo;
pub mod indices;
pub mod kdbush;
mod point;

pub use error::KdbushError;
pub use kdbush::{KDBush, KDBushIndex, DEFAULT_NODE_SIZE};
pub use point::Point;
