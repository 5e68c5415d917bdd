//! Caption shaping, rasterization and outlined drawing.

pub mod engine;
pub mod outline;
