use crate::error::Result;
use crate::puzzle::{Solution, Stage};
use crate::render::frame::FrameRenderer;
use crate::render::sink::FrameSink;
use log::{debug, info};

pub struct Sequencer {
    renderer: FrameRenderer,
    prefix: String,
}

impl Sequencer {
    pub fn new(renderer: FrameRenderer, prefix: impl Into<String>) -> Self {
        Self {
            renderer,
            prefix: prefix.into(),
        }
    }

    pub fn frame_id(&self, index: usize) -> String {
        format!("{}{}", self.prefix, index)
    }

    /// Renders every stage in order and hands it to `sink`.
    ///
    /// Stops at the first invalid stage; frames written before it are kept.
    /// Returns the number of frames written.
    pub fn run<K: FrameSink>(&self, solution: &Solution, sink: &mut K) -> Result<usize> {
        for (index, raw) in solution.stages.iter().enumerate() {
            let stage = Stage::from_raw(index, raw)?;
            let field = solution.field_for(&stage);
            debug!(
                "stage {}: {}x{} field, {} villains",
                index,
                field.width,
                field.height,
                stage.villains.len()
            );

            let frame = self.renderer.render(field, &stage);
            let id = self.frame_id(index);
            sink.write_frame(&id, &frame)?;
            info!("rendered {}", id);
        }

        Ok(solution.stages.len())
    }
}
