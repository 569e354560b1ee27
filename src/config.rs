//! Configuration management for the book inventory server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// One JSON dump file per entity mapping
#[derive(Debug, Deserialize, Clone)]
pub struct DumpsConfig {
    pub admins: PathBuf,
    pub authors: PathBuf,
    pub books: PathBuf,
    pub genres: PathBuf,
    pub instances: PathBuf,
    pub languages: PathBuf,
    pub productions: PathBuf,
    pub readers: PathBuf,
    pub users: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// Optional second output next to the console
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub dumps: DumpsConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from defaults, files and environment variables,
    /// then validate it.
    ///
    /// `config/default.*` is optional; `config_file`, when given, must exist.
    /// Environment variables use the `INVENTORY_` prefix and `__` between
    /// sections, e.g. `INVENTORY_SERVER__PORT=9000`.
    pub fn load(config_file: Option<&Path>) -> AppResult<Self> {
        let config = Self::builder(config_file)
            .and_then(|builder| builder.build())
            .and_then(|config| config.try_deserialize::<AppConfig>())
            .map_err(|e| AppError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn builder(
        config_file: Option<&Path>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let server = ServerConfig::default();
        let logging = LoggingConfig::default();

        let mut builder = Config::builder()
            .set_default("server.host", server.host)?
            .set_default("server.port", i64::from(server.port))?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format)?
            .add_source(File::with_name("config/default").required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        Ok(builder.add_source(
            Environment::with_prefix("INVENTORY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        ))
    }

    /// Check the fields the loader and listener depend on
    pub fn validate(&self) -> AppResult<()> {
        self.server.socket_addr()?;

        let dumps = [
            ("admins", &self.dumps.admins),
            ("authors", &self.dumps.authors),
            ("books", &self.dumps.books),
            ("genres", &self.dumps.genres),
            ("instances", &self.dumps.instances),
            ("languages", &self.dumps.languages),
            ("productions", &self.dumps.productions),
            ("readers", &self.dumps.readers),
            ("users", &self.dumps.users),
        ];
        for (name, path) in dumps {
            if path.as_os_str().is_empty() {
                return Err(AppError::Config(format!("dumps.{} path is empty", name)));
            }
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(AppError::Config(format!(
                "logging.format must be \"pretty\" or \"json\", got \"{}\"",
                other
            ))),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| AppError::Config(format!("invalid server host \"{}\"", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}
