use carframes::settings::{INPUT_PATH, OUTPUT_PREFIX};
use carframes::{Config, FrameRenderer, JpegDirSink, Result, Sequencer, Solution};
use log::{error, info};
use std::process::ExitCode;

fn run() -> Result<usize> {
    let config = Config::load()?;
    let solution = Solution::load(INPUT_PATH)?;
    info!(
        "loaded {} stages on a {}x{} field from {}",
        solution.stages.len(),
        solution.field.width,
        solution.field.height,
        INPUT_PATH
    );

    let mut sink = JpegDirSink::new(&config.general.output_dir)?;
    let sequencer = Sequencer::new(FrameRenderer::new(config.layout), OUTPUT_PREFIX);
    sequencer.run(&solution, &mut sink)
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    match run() {
        Ok(frames) => {
            info!("wrote {} frames", frames);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
