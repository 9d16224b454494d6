use config::{Config, ConfigError, Environment, File, FileFormat};
use pitch_navigation::{GridConfig, WorldPoint};
use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Startup settings for the pitch driver.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub pitch: GridConfig,
    #[serde(default)]
    pub occupancy: OccupancySettings,
    pub probe: Option<ProbeSettings>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OccupancySettings {
    /// World points whose nodes are marked blocked after the grid is built.
    #[serde(default)]
    pub blocked: Vec<WorldPoint>,
}

#[derive(Debug, Deserialize)]
pub struct ProbeSettings {
    pub point: WorldPoint,
}

/// Loads settings from a TOML file, overridden by `PITCH__*` environment
/// variables (e.g. `PITCH__PITCH__NODE_RADIUS=0.25`).
pub fn load_settings(path: &str) -> Result<Settings, ConfigError> {
    info!("Attempting to load configuration from {}", path);

    let settings = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(true))
        .add_source(
            Environment::with_prefix("PITCH")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .and_then(|config| config.try_deserialize::<Settings>());

    match settings {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

/// Parses settings from an in-memory TOML document.
pub fn parse_settings(source: &str) -> Result<Settings, ConfigError> {
    Config::builder()
        .add_source(File::from_str(source, FileFormat::Toml))
        .build()?
        .try_deserialize()
}
