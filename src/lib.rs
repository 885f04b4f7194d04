pub mod grid;
pub mod render;
pub mod rule;
pub mod svg;

/// Cell state. Always `0` (dead) or `1` (live).
pub type Cell = u8;
