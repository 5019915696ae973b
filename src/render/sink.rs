use crate::error::Result;
use crate::settings::JPEG_QUALITY;
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use log::debug;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Receives finished frames. `id` is unique per stage.
pub trait FrameSink {
    fn write_frame(&mut self, id: &str, frame: &RgbImage) -> Result<()>;
}

/// Writes every frame as `<dir>/<id>.jpg` at `JPEG_QUALITY`.
pub struct JpegDirSink {
    dir: PathBuf,
}

impl JpegDirSink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        fs::create_dir_all(dir.as_ref())?;
        Ok(JpegDirSink {
            dir: dir.as_ref().to_path_buf(),
        })
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.jpg"))
    }
}

impl FrameSink for JpegDirSink {
    fn write_frame(&mut self, id: &str, frame: &RgbImage) -> Result<()> {
        let path = self.path_for(id);
        let mut writer = BufWriter::new(fs::File::create(&path)?);
        JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY).encode_image(frame)?;
        writer.flush()?;
        debug!("wrote {:?}", path);
        Ok(())
    }
}

/// Keeps frames in memory, in the order they were written.
#[derive(Default)]
pub struct MemorySink {
    pub frames: Vec<(String, RgbImage)>,
}

impl FrameSink for MemorySink {
    fn write_frame(&mut self, id: &str, frame: &RgbImage) -> Result<()> {
        self.frames.push((id.to_string(), frame.clone()));
        Ok(())
    }
}
