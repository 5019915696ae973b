pub mod canvas;
pub mod frame;
pub mod geometry;
pub mod graphics;
pub mod palette;
pub mod sink;
