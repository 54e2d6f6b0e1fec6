use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::err::{NetworkError, NetworkResult};

/// Shape and learning rate of a network.
///
/// Always valid once constructed : every count and the learning rate are positive.
/// Deserialization goes through the same checks as [`Topology::new`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TopologyCfg")]
pub struct Topology {
    input_count: usize,
    hidden_layers: Vec<usize>,
    output_count: usize,
    learning_rate: f64,
}

/// Unchecked form of a topology as written in config files
#[derive(Deserialize)]
struct TopologyCfg {
    input_count: usize,
    #[serde(default)]
    hidden_layers: Vec<usize>,
    output_count: usize,
    learning_rate: f64,
}

impl TryFrom<TopologyCfg> for Topology {
    type Error = NetworkError;

    fn try_from(cfg: TopologyCfg) -> Result<Self, Self::Error> {
        Topology::new(
            cfg.input_count,
            cfg.hidden_layers,
            cfg.output_count,
            cfg.learning_rate,
        )
    }
}

impl Topology {
    pub fn new(
        input_count: usize,
        hidden_layers: Vec<usize>,
        output_count: usize,
        learning_rate: f64,
    ) -> NetworkResult<Self> {
        if input_count == 0 {
            return Err(NetworkError::InvalidConfiguration(
                "input count must be positive".to_owned(),
            ));
        }

        if output_count == 0 {
            return Err(NetworkError::InvalidConfiguration(
                "output count must be positive".to_owned(),
            ));
        }

        if let Some(idx) = hidden_layers.iter().position(|size| *size == 0) {
            return Err(NetworkError::InvalidConfiguration(format!(
                "hidden layer {} has no neurons",
                idx
            )));
        }

        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(NetworkError::InvalidConfiguration(format!(
                "learning rate must be a positive number, got {}",
                learning_rate
            )));
        }

        Ok(Self {
            input_count,
            hidden_layers,
            output_count,
            learning_rate,
        })
    }

    pub fn from_yaml_str(cfg: &str) -> NetworkResult<Self> {
        Ok(serde_yaml::from_str(cfg)?)
    }

    pub fn from_json_str(cfg: &str) -> NetworkResult<Self> {
        Ok(serde_json::from_str(cfg)?)
    }

    /// Loads a topology from a `.yaml`, `.yml` or `.json` file
    pub fn from_file<P: AsRef<Path>>(filepath: P) -> NetworkResult<Self> {
        let filepath = filepath.as_ref();

        let mut cfg = String::new();
        File::open(filepath)?.read_to_string(&mut cfg)?;

        let ext = filepath
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let topology = match ext.as_deref() {
            Some("json") => Self::from_json_str(&cfg)?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&cfg)?,
            _ => {
                return Err(NetworkError::Config(format!(
                    "unknown config format : {}",
                    filepath.display()
                )))
            }
        };

        debug!("Loaded topology {} from {}", topology, filepath.display());

        Ok(topology)
    }

    pub fn to_yaml_string(&self) -> NetworkResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn input_count(&self) -> usize {
        self.input_count
    }

    pub fn hidden_layers(&self) -> &[usize] {
        &self.hidden_layers
    }

    pub fn output_count(&self) -> usize {
        self.output_count
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}-{:?}-{} @ {}",
            self.input_count, self.hidden_layers, self.output_count, self.learning_rate
        )
    }
}
