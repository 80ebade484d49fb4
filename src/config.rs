use crate::constants::{
    DEFAULT_CONFIG_PATH, DEFAULT_GRAPHIQL, DEFAULT_HOST, DEFAULT_LOG_FILTER, DEFAULT_PORT,
};
use crate::error::{AppError, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Serve the interactive GraphiQL page
    pub graphiql: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            graphiql: DEFAULT_GRAPHIQL,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid listen address '{}:{}': {}", self.host, self.port, e)))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for the daily-rolling JSON log; console only when unset
    pub directory: Option<PathBuf>,
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// JSON seed file; the built-in data set is used when unset
    pub seed_file: Option<PathBuf>,
}

impl Config {
    /// Loads `path` if given (it must exist), else `config.toml` if present, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;

        Self::from_toml(&config_content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 5000);
        assert!(config.server.graphiql);
        assert_eq!(config.data.seed_file, None);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 8080
            graphiql = false

            [data]
            seed_file = "seed.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert!(!config.server.graphiql);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.data.seed_file, Some(PathBuf::from("seed.json")));
    }

    #[test]
    fn invalid_toml_is_reported() {
        let err = Config::from_toml("[server\nport = 1").unwrap_err();
        assert!(matches!(err, AppError::Toml(_)));
    }

    #[test]
    fn wrong_value_type_is_reported() {
        let err = Config::from_toml("[server]\nport = \"high\"").unwrap_err();
        assert!(matches!(err, AppError::Toml(_)));
    }

    #[test]
    fn explicit_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn load_reads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\ndirectory = \"logs\"\nfilter = \"debug\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.logging.directory, Some(PathBuf::from("logs")));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn socket_addr_combines_host_and_port() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 4000,
            graphiql: true,
        };
        assert_eq!(server.socket_addr().unwrap(), "127.0.0.1:4000".parse().unwrap());

        let bad = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(bad.socket_addr(), Err(AppError::Config(_))));
    }
}
