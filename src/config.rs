use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vivarium_core::{Rule, Topology};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// Random seeding weight: a cell starts alive with probability
    /// 1 / (random_weight + 1).
    pub random_weight: u32,
    /// RNG seed. Unset means seed from entropy.
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HistoryConfig {
    pub enabled: bool,
    pub dir: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub topology: Topology,
    pub rule: Rule,
    pub history: HistoryConfig,
    pub target_fps: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                rows: 40,
                cols: 80,
                random_weight: 5,
                seed: None,
            },
            topology: Topology::Toroidal,
            rule: Rule::default(),
            history: HistoryConfig {
                enabled: false,
                dir: "historic".to_string(),
            },
            target_fps: 30,
        }
    }
}

impl AppConfig {
    /// Loads from the given toml file, writing and using the defaults
    /// if it does not exist yet.
    pub fn load(path: &str) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
        let default = Self::default();
        if !Path::new(path).exists() {
            if let Ok(text) = toml::to_string(&default) {
                let _ = fs::write(path, text);
            }
        }
        default
    }
}
