use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub data: DataSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Locations of the delimited catalog tables
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    pub restaurants_path: String,
    pub cuisines_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with BYTEFINDER)
    /// 5. `RESTAURANTS_CSV` / `CUISINES_CSV` for the data files
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BYTEFINDER__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("BYTEFINDER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_env_data_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    ///
    /// Same layering as [`Settings::load`], with `path` in place of the
    /// `config/` files.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("BYTEFINDER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_env_data_overrides(settings)?;

        settings.try_deserialize()
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)?
        .set_default("data.restaurants_path", "csv/restaurants.csv")?
        .set_default("data.cuisines_path", "csv/cuisines.csv")?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())
}

/// Let the conventional plain variables point at other data files
fn apply_env_data_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    apply_data_overrides(
        settings,
        env::var("RESTAURANTS_CSV").ok(),
        env::var("CUISINES_CSV").ok(),
    )
}

fn apply_data_overrides(
    settings: Config,
    restaurants_path: Option<String>,
    cuisines_path: Option<String>,
) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Some(path) = restaurants_path {
        builder = builder.set_override("data.restaurants_path", path)?;
    }
    if let Some(path) = cuisines_path {
        builder = builder.set_override("data.cuisines_path", path)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Settings {
        with_defaults(Config::builder())
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_without_file() {
        let settings = from_toml("");

        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8080);
        assert!(settings.server.workers.is_none());
        assert_eq!(settings.data.restaurants_path, "csv/restaurants.csv");
        assert_eq!(settings.data.cuisines_path, "csv/cuisines.csv");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let settings = from_toml(
            r#"
            [server]
            port = 9090
            workers = 2

            [data]
            restaurants_path = "/srv/data/restaurants.csv"
            "#,
        );

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.workers, Some(2));
        assert_eq!(settings.data.restaurants_path, "/srv/data/restaurants.csv");
        assert_eq!(settings.data.cuisines_path, "csv/cuisines.csv");
    }

    #[test]
    fn test_data_overrides_win_over_file() {
        let base = with_defaults(Config::builder())
            .unwrap()
            .add_source(File::from_str(
                "[data]\nrestaurants_path = \"from/file.csv\"",
                FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let settings: Settings =
            apply_data_overrides(base, Some("from/env.csv".to_string()), None)
                .unwrap()
                .try_deserialize()
                .unwrap();

        assert_eq!(settings.data.restaurants_path, "from/env.csv");
        assert_eq!(settings.data.cuisines_path, "csv/cuisines.csv");
    }

    #[test]
    fn test_load_from_custom_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bytefinder.toml");
        std::fs::write(
            &path,
            "[server]\nport = 7070\n\n[logging]\nformat = \"json\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();

        assert_eq!(settings.server.port, 7070);
        assert_eq!(settings.logging.format, "json");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "pretty");
    }
}
