use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub database: DatabaseConfig,

    pub security: SecurityConfig,

    pub observability: ObservabilityConfig,

    pub compat: CompatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,

    /// IANA zone every datetime column is converted to before it leaves the API
    pub display_timezone: String,

    /// Number of tokio worker threads (default: 0)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            display_timezone: "Asia/Tokyo".to_string(),
            worker_threads: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,

    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Full connection URL. Takes precedence over the host/credential fields,
    /// e.g. `sqlite:data/teamx.db?mode=rwc` for local development.
    pub url: Option<String>,

    pub host: String,

    pub username: String,

    #[serde(skip_serializing)]
    pub password: String,

    pub name: String,

    /// Root certificate used to verify the MySQL server
    pub ssl_ca: Option<String>,

    pub connect_timeout_seconds: u64,

    /// Create missing tables at startup. Existing tables are left untouched.
    pub migrate_on_start: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            username: String::new(),
            password: String::new(),
            name: "teamxdata".to_string(),
            ssl_ca: Some("DigiCertGlobalRootCA.crt.pem".to_string()),
            connect_timeout_seconds: 10,
            migrate_on_start: true,
        }
    }
}

impl DatabaseConfig {
    /// Renders the URL handed to the driver for every connection.
    pub fn connection_url(&self) -> Result<String> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }

        let mut url = url::Url::parse(&format!("mysql://{}/{}", self.host, self.name))
            .with_context(|| format!("Invalid database host: {}", self.host))?;

        if !self.username.is_empty() {
            url.set_username(&self.username)
                .map_err(|()| anyhow::anyhow!("Database username cannot be encoded"))?;
        }
        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|()| anyhow::anyhow!("Database password cannot be encoded"))?;
        }

        if let Some(ca) = &self.ssl_ca {
            url.query_pairs_mut()
                .append_pair("ssl-mode", "VERIFY_CA")
                .append_pair("ssl-ca", ca);
        }

        Ok(url.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Argon2 memory cost in KiB (default: 8192 = 8MB)
    pub argon2_memory_cost_kib: u32,

    /// Argon2 time cost (iterations)
    pub argon2_time_cost: u32,

    pub argon2_parallelism: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            argon2_memory_cost_kib: 8192,
            argon2_time_cost: 3,
            argon2_parallelism: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatConfig {
    /// `/geteventdate/{id}` has always answered with the group's open
    /// assignments instead of the service's events. Clients may depend on it.
    pub event_route_serves_assignments: bool,
}

impl Default for CompatConfig {
    fn default() -> Self {
        Self {
            event_route_serves_assignments: true,
        }
    }
}

impl Config {
    /// Loads `.env`, the first config file found, then environment overrides.
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from: {}", path.display());
        }

        let mut config = Self::load_file()?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        for path in Self::config_paths() {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(&path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Overrides file values with the process environment. Variable names
    /// match the ones existing deployments already export.
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = var("host") {
            self.database.host = host;
        }
        if let Some(username) = var("database_username") {
            self.database.username = username;
        }
        if let Some(password) = var("database_password") {
            self.database.password = password;
        }
        if let Some(ca) = var("ssl_ca") {
            self.database.ssl_ca = Some(ca).filter(|s| !s.is_empty());
        }
        if let Some(url) = var("DATABASE_URL") {
            self.database.url = Some(url);
        }
        if let Some(port) = var("PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("teamx").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".teamx").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            Self::default().save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.url.is_none() && self.database.host.trim().is_empty() {
            anyhow::bail!("Database host cannot be empty when no database URL is set");
        }

        if self.server.port == 0 {
            anyhow::bail!("Server port must be > 0");
        }

        self.display_timezone()?;

        Ok(())
    }

    pub fn display_timezone(&self) -> Result<chrono_tz::Tz> {
        self.general
            .display_timezone
            .parse::<chrono_tz::Tz>()
            .map_err(|e| {
                anyhow::anyhow!(
                    "Unknown display timezone '{}': {e}",
                    self.general.display_timezone
                )
            })
    }
}
