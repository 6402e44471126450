use serde::{Serialize, Deserialize};

/// Summary of one shuffled pass produced by `train_epochs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Samples whose largest output matches the largest target component.
    pub correct: usize,
    /// Samples evaluated.
    pub total: usize,
    /// `correct / total`, in [0, 1].
    pub accuracy: f64,
    /// Mean of the winning output value over all samples.
    pub average_confidence: f64,
}
