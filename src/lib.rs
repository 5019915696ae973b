//! Renders one JPEG frame per stage of a solved sliding-vehicle puzzle.
//!
//! The solver writes a JSON document with the field size and the list of
//! board states. Every vehicle is drawn as an inset rectangle coloured by its
//! size and direction; the first car of each state is the hero and is drawn
//! last in its own colour.

pub mod error;
pub mod puzzle;
pub mod render;
pub mod sequencer;
pub mod settings;

pub use error::{Error, Result};
pub use puzzle::{Direction, Field, Role, Solution, Stage, Vehicle};
pub use render::frame::FrameRenderer;
pub use render::geometry::Layout;
pub use render::sink::{FrameSink, JpegDirSink, MemorySink};
pub use sequencer::Sequencer;
pub use settings::Config;
