use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::HostError;

pub const DEFAULT_CONFIG_FILE: &str = "skycast.toml";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5001";
pub const DEFAULT_STATIC_DIR: &str = "workspace/frontend/dist";
pub const DEFAULT_BACKGROUND_DIR: &str = "Bgimg";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Host configuration.
///
/// Layered lowest to highest: built-in defaults, the optional TOML file,
/// `SKYCAST_*` environment variables (a `.env` file is honoured), then CLI flags.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HostConfig {
    /// Address the server binds to (IP:PORT)
    pub bind_address: String,
    /// Directory holding the compiled frontend (`index.html`, wasm, js)
    pub static_dir: PathBuf,
    /// Directory served under `/bgimg`
    pub background_dir: PathBuf,
    /// Per-request timeout
    pub request_timeout_secs: u64,
}

/// Values given on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct HostOverrides {
    pub bind_address: Option<String>,
    pub static_dir: Option<PathBuf>,
    pub background_dir: Option<PathBuf>,
}

impl HostConfig {
    /// Load configuration from `file` (if it exists) and the environment
    pub fn load(file: &Path) -> Result<Self, HostError> {
        dotenvy::dotenv().ok();
        debug!("Loading configuration from {}", file.display());

        let settings = Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("static_dir", DEFAULT_STATIC_DIR)?
            .set_default("background_dir", DEFAULT_BACKGROUND_DIR)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .add_source(File::from(file).required(false))
            .add_source(Environment::with_prefix("SKYCAST").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn with_overrides(mut self, overrides: HostOverrides) -> Self {
        if let Some(bind_address) = overrides.bind_address {
            self.bind_address = bind_address;
        }
        if let Some(static_dir) = overrides.static_dir {
            self.static_dir = static_dir;
        }
        if let Some(background_dir) = overrides.background_dir {
            self.background_dir = background_dir;
        }
        self
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }

    /// Check everything needed to start serving.
    ///
    /// A missing background directory only logs a warning: `/bgimg` then answers 404.
    pub fn validate(&self) -> Result<SocketAddr, HostError> {
        let addr: SocketAddr = self
            .bind_address
            .parse()
            .map_err(|_| HostError::InvalidBindAddress(self.bind_address.clone()))?;

        if !self.static_dir.is_dir() {
            return Err(HostError::MissingStaticDir(self.static_dir.clone()));
        }
        if !self.index_path().is_file() {
            return Err(HostError::MissingIndex(self.index_path()));
        }
        if !self.background_dir.is_dir() {
            warn!(
                "Background directory {} does not exist; /bgimg will return 404",
                self.background_dir.display()
            );
        }

        Ok(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn frontend_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<div id=\"app\"></div>").unwrap();
        dir
    }

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = HostConfig::load(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert_eq!(config.background_dir, PathBuf::from(DEFAULT_BACKGROUND_DIR));
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("skycast.toml");
        fs::write(
            &file,
            "static_dir = \"/srv/skycast\"\nrequest_timeout_secs = 5\n",
        )
        .unwrap();

        let config = HostConfig::load(&file).unwrap();
        assert_eq!(config.static_dir, PathBuf::from("/srv/skycast"));
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.background_dir, PathBuf::from(DEFAULT_BACKGROUND_DIR));
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = HostConfig {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            static_dir: PathBuf::from("dist"),
            background_dir: PathBuf::from("Bgimg"),
            request_timeout_secs: 30,
        }
        .with_overrides(HostOverrides {
            bind_address: Some("0.0.0.0:8080".to_string()),
            static_dir: None,
            background_dir: Some(PathBuf::from("/srv/backgrounds")),
        });

        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.background_dir, PathBuf::from("/srv/backgrounds"));
    }

    #[test]
    fn test_validate_accepts_built_frontend() {
        let dir = frontend_dir();
        let config = HostConfig {
            bind_address: "127.0.0.1:0".to_string(),
            static_dir: dir.path().to_path_buf(),
            background_dir: dir.path().join("missing"),
            request_timeout_secs: 30,
        };

        let addr = config.validate().unwrap();
        assert_eq!(addr.port(), 0);
    }

    #[test]
    fn test_validate_rejects_bad_address() {
        let dir = frontend_dir();
        let config = HostConfig {
            bind_address: "localhost".to_string(),
            static_dir: dir.path().to_path_buf(),
            background_dir: dir.path().to_path_buf(),
            request_timeout_secs: 30,
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, HostError::InvalidBindAddress(_)));
    }

    #[test]
    fn test_validate_requires_index_page() {
        let dir = tempfile::tempdir().unwrap();
        let config = HostConfig {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            static_dir: dir.path().to_path_buf(),
            background_dir: dir.path().to_path_buf(),
            request_timeout_secs: 30,
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, HostError::MissingIndex(_)));
        assert!(err.to_string().contains("index.html"));
    }
}
