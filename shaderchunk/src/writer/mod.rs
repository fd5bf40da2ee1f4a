//! Shading language writers.

pub mod wgsl;
