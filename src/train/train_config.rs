use serde::{Serialize, Deserialize};

use crate::network::error::NetworkError;
use crate::network::topology::Topology;
use crate::random::RngKind;

/// Configuration for a training run.
///
/// # Fields
/// - `hidden_count`  — hidden units; input/output sizes come from the dataset
/// - `learning_rate` — step size for every online update
/// - `iterations`    — steps taken by `train_cycle`
/// - `epochs`        — full shuffled passes taken by `train_epochs`
/// - `log_every`     — `train_cycle` logs the mean loss every this many steps;
///                     `0` disables the periodic log
/// - `rng`           — generator for weight initialization and shuffling
///
/// Any field missing from a JSON config falls back to its default, so `{}` is
/// the reference logic-gate run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub hidden_count: usize,
    pub learning_rate: f64,
    pub iterations: usize,
    pub epochs: usize,
    pub log_every: usize,
    pub rng: RngKind,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            hidden_count: 2,
            learning_rate: 1.0,
            iterations: 4000,
            epochs: 10,
            log_every: 1000,
            rng: RngKind::default(),
        }
    }
}

impl TrainConfig {
    /// Topology for a dataset with the given input and output widths,
    /// rejecting an empty hidden layer.
    pub fn topology(&self, input_count: usize, output_count: usize) -> Result<Topology, NetworkError> {
        let topology = Topology::new(input_count, self.hidden_count, output_count);
        topology.validate()?;
        Ok(topology)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a config from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
