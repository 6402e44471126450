pub mod math;
pub mod activation;
pub mod loss;
pub mod network;
pub mod random;
pub mod data;
pub mod train;
pub mod report;
pub mod logging;

// Convenience re-exports
pub use math::index::idx;
pub use activation::sigmoid::Sigmoid;
pub use network::{Network, NetworkError, Topology};
pub use data::{DataItem, logic_gate_table};
pub use random::{ParkMiller, RngKind};
pub use train::{Trainer, TrainConfig, train_cycle, train_epochs};
