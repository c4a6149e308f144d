use elective_types::Elective;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config.example.toml";

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub electives: Vec<Elective>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AuthConfig {
    pub token: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig {
                token: "change-me-on-first-run".into(),
            },
            electives: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

pub fn load(path: &str) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse(&contents).unwrap_or_else(|e| {
            tracing::warn!("failed to parse config {path}: {e}, using defaults");
            Config::default()
        }),
        Err(e) => {
            tracing::warn!("failed to read config {path}: {e}, using defaults");
            Config::default()
        }
    }
}

pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

/// Reads `--config <path>` from the argument list.
pub fn path_from_args(args: &[String]) -> String {
    args.iter()
        .position(|a| a == "--config")
        .and_then(|idx| args.get(idx + 1))
        .cloned()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.into())
}
