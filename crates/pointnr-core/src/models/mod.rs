//! Data models for extracted points and filter bounds.

pub mod bounds;
pub mod point;

pub use bounds::Bounds;
pub use point::PointRecord;
