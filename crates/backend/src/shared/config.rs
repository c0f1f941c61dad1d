use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Env var with an explicit config path
pub const CONFIG_ENV: &str = "SALES_DASHBOARD_CONFIG";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Built frontend served as the fallback route
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: "dist".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Sales endpoint, queried with `regiao` and `ano`
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: "https://labdados.com/produtos".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter directives, overridden by RUST_LOG
    pub filter: String,
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,hyper=warn,reqwest=warn".to_string(),
            dir: "target/logs".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[upstream]
url = "https://labdados.com/produtos"
timeout_secs = 30

[logging]
filter = "info,hyper=warn,reqwest=warn"
dir = "target/logs"
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Path in `SALES_DASHBOARD_CONFIG`
/// 2. Next to the executable (for production)
/// 3. Current working directory
/// 4. Falls back to embedded default config
///
/// Runs before the tracing subscriber exists, so the chosen source is
/// returned alongside the config for the caller to log.
pub fn load_config() -> anyhow::Result<(Config, String)> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let config = read_config(Path::new(&path))?;
        return Ok((config, path));
    }

    for candidate in candidate_paths() {
        if candidate.exists() {
            let config = read_config(&candidate)?;
            return Ok((config, candidate.display().to_string()));
        }
    }

    let config = parse_config(DEFAULT_CONFIG)?;
    Ok((config, "embedded default".to_string()))
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    fn validate(&self) -> anyhow::Result<()> {
        if self.upstream.timeout_secs == 0 {
            anyhow::bail!("upstream.timeout_secs must be greater than 0");
        }
        Ok(())
    }
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read config {}: {}", path.display(), e))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join("config.toml"));
        }
    }
    paths.push(PathBuf::from("config.toml"));
    paths
}
