use crate::error::Result;
use crate::render::geometry::Layout;
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "carframes";

pub const INPUT_PATH: &str = "solution.json";
pub const OUTPUT_PREFIX: &str = "solution";
pub const JPEG_QUALITY: u8 = 95;

#[derive(Deserialize, Debug, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub output_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub general: GeneralConfig,
    pub layout: Layout,
}

impl Config {
    /// Reads `carframes.toml` from the working directory if present.
    /// Missing keys keep their defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(SETTINGS_FILE)
    }

    pub fn load_from(name: &str) -> Result<Self> {
        let config: Config = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .build()?
            .try_deserialize()?;
        config.layout.validate()?;
        Ok(config)
    }
}
