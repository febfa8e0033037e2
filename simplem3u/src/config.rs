use std::{
    env,
    fs::File,
    io,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub listen_addr: String,
    /// Where the configured playlist location is persisted
    pub store_path: PathBuf,
    /// Static files served for `/` and any unmatched path
    pub public_dir: PathBuf,
    /// Seconds before a playlist fetch is abandoned
    pub fetch_timeout: u64,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpConfig {
    pub user_agent: Option<String>,
    pub proxy: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:10000".into(),
            store_path: "media.json".into(),
            public_dir: "public".into(),
            fetch_timeout: 10,
            http: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Replaces the port of `listen_addr`, keeping its host.
    pub fn with_port(mut self, port: u16) -> Result<Self> {
        let mut addr: SocketAddr = self
            .listen_addr
            .parse()
            .with_context(|| format!("Invalid listen address {}", self.listen_addr))?;
        addr.set_port(port);
        self.listen_addr = addr.to_string();
        Ok(self)
    }
}

/// Loads the YAML config at `path`. A missing file yields the defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let file = match File::open(path.as_ref()) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(e.into()),
    };
    let config: Config = serde_yaml::from_reader(file)
        .with_context(|| format!("Parse config {}", path.as_ref().display()))?;
    Ok(config)
}

/// Loads the config, then applies the `PORT` environment variable.
pub fn load_config_from_env(path: impl AsRef<Path>) -> Result<Config> {
    let config = load_config(path)?;
    match env::var("PORT") {
        Ok(port) => {
            let port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT {}", port))?;
            config.with_port(port)
        }
        Err(_) => Ok(config),
    }
}
