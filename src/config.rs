use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Document root that request paths are resolved against
    pub root: String,
    /// Name of the fallback document inside the root
    pub fallback: String,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    pub show_headers: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
}

impl Config {
    /// Load configuration from an optional file (name without extension),
    /// `SPASERVE_`-prefixed environment variables, and built-in defaults
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SPASERVE"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.root", ".")?
            .set_default("server.fallback", "index.html")?
            .set_default("logging.access_log", false)?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared per-process state handed to every request
///
/// The document root is canonicalized once here so the handler never
/// depends on the process working directory after startup.
pub struct AppState {
    pub config: Config,
    pub root: PathBuf,
}

impl AppState {
    /// Build state from a loaded config, canonicalizing the document root
    pub fn new(config: Config) -> std::io::Result<Self> {
        let root = Path::new(&config.server.root).canonicalize()?;
        Ok(Self { config, root })
    }

    /// Absolute path of the fallback document
    pub fn fallback_path(&self) -> PathBuf {
        self.root.join(&self.config.server.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Nonexistent file name exercises the default chain
        let cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.root, ".");
        assert_eq!(cfg.server.fallback, "index.html");
        assert!(!cfg.logging.access_log);
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::load_from("no-such-config-file").unwrap();
        cfg.server.host = "127.0.0.1".to_string();
        cfg.server.port = 9090;
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 9090);
    }

    #[test]
    fn test_state_canonicalizes_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = Config::load_from("no-such-config-file").unwrap();
        cfg.server.root = dir.path().to_string_lossy().into_owned();
        let state = AppState::new(cfg).unwrap();
        assert!(state.root.is_absolute());
        assert!(state.fallback_path().ends_with("index.html"));
    }

    #[test]
    fn test_state_rejects_missing_root() {
        let mut cfg = Config::load_from("no-such-config-file").unwrap();
        cfg.server.root = "/definitely/not/a/real/root".to_string();
        assert!(AppState::new(cfg).is_err());
    }
}
