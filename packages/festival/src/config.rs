use thiserror::Error;

pub const DEFAULT_BASE_PATH: &str = "Tantraz2025";
pub const DEFAULT_DEV_PORT: u16 = 8000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("FESTIVAL_DEV_PORT must be a port number, got `{0}`")]
    InvalidPort(String),
}

/// Packaging settings: where the site is mounted and where `dx serve` listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_path: String,
    pub dev_port: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            dev_port: DEFAULT_DEV_PORT,
        }
    }
}

impl SiteConfig {
    /// Read `FESTIVAL_BASE_PATH` / `FESTIVAL_DEV_PORT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_path = std::env::var("FESTIVAL_BASE_PATH").ok();
        let dev_port = std::env::var("FESTIVAL_DEV_PORT").ok();
        Self::from_values(base_path.as_deref(), dev_port.as_deref())
    }

    /// The same variables as seen by the compiler; the only source inside the wasm bundle.
    pub fn build_time() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("FESTIVAL_BASE_PATH"),
            option_env!("FESTIVAL_DEV_PORT"),
        )
    }

    pub fn from_values(base_path: Option<&str>, dev_port: Option<&str>) -> Result<Self, ConfigError> {
        let base_path = base_path
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_PATH)
            .to_string();
        let dev_port = match dev_port {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
            _ => DEFAULT_DEV_PORT,
        };
        Ok(Self {
            base_path,
            dev_port,
        })
    }

    /// Base path with a single leading slash and no trailing one; empty for the root.
    pub fn route_prefix(&self) -> String {
        let trimmed = self.base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }

    pub fn dev_url(&self) -> String {
        format!("http://127.0.0.1:{}{}", self.dev_port, self.route_prefix())
    }
}
