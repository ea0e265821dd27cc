use config::{Config, ConfigError, File};
use std::string::String;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub template_path: String,
    pub benchmark_name: String,
    pub normalization: NormalizationSettings,
}

/// reference maxima taken from a random-search sweep of the reference
/// benchmark, used to normalize the composite target values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationSettings {
    pub max_area: f64,
    pub max_cycle: f64,
    pub max_power: f64,
}

impl Settings {
    pub fn new(config_path: Vec<String>) -> Result<Self, ConfigError> {
        let mut s = Config::builder();
        for i in config_path {
            s = s.add_source(File::with_name(&i));
        }
        s.build()?.try_deserialize()
    }
}
