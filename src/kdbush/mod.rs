//! An implementation of a static, flat k-d tree over 2D points.

#![warn(missing_docs)]

mod builder;
mod index;
mod select;
mod r#trait;

pub use builder::DEFAULT_NODE_SIZE;
pub use index::KDBush;
pub use r#trait::KDBushIndex;
