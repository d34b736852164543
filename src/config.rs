use std::collections::BTreeMap;
use std::fs;
use log::LevelFilter;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub vars: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file_level: String,
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
            file_level: "debug".to_string(),
            dir: None,
        }
    }
}

impl LoggingConfig {
    pub fn console_level(&self) -> Result<LevelFilter, Box<dyn std::error::Error>> {
        parse_level(&self.level)
    }

    pub fn file_level(&self) -> Result<LevelFilter, Box<dyn std::error::Error>> {
        parse_level(&self.file_level)
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, Box<dyn std::error::Error>> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| format!("Unknown log level '{}'", level).into())
}

pub fn load_config(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path, e))?;
    parse_config(&content).map_err(|e| format!("Failed to parse config file '{}': {}", path, e).into())
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}
