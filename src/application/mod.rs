//! Application layer: the render pipeline, its content seam and the print sink.

pub mod content;
pub mod error;
pub mod output;
pub mod render;
