pub mod trainer;
pub mod epoch_stats;
pub mod train_config;
pub mod loop_fn;

pub use trainer::Trainer;
pub use epoch_stats::EpochStats;
pub use train_config::TrainConfig;
pub use loop_fn::{mean_loss, train_cycle, train_epochs};
