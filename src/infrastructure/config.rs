use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DataSettings {
    pub observations: PathBuf,
    pub geometry: PathBuf,
    /// Feature property holding the district name
    pub feature_id_key: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            observations: PathBuf::from("data/weather_data_cleaned.csv"),
            geometry: PathBuf::from("data/bangladesh_districts.geojson"),
            feature_id_key: "ADM2_EN".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load `config/dashboard.toml` (optional) overlaid with `WEATHER_MAP__*`
/// environment variables
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(environment());

    build_app_config(builder)
}

/// `WEATHER_MAP__SERVER__PORT=9000` sets `server.port`
fn environment() -> config::Environment {
    config::Environment::with_prefix("WEATHER_MAP")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn build_app_config(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> anyhow::Result<AppConfig> {
    let settings = builder.build()?;
    Ok(settings.try_deserialize()?)
}
