/// One training example: an input vector and the target the network should
/// produce for it.
#[derive(Debug, Clone, PartialEq)]
pub struct DataItem {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl DataItem {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> DataItem {
        DataItem { input, target }
    }

    /// Index of the largest target component (the labelled class for one-hot
    /// targets).
    pub fn label(&self) -> usize {
        argmax(&self.target).0
    }
}

/// `(index, value)` of the maximum element; `(0, NaN)` for an empty slice.
pub fn argmax(v: &[f64]) -> (usize, f64) {
    v.iter()
        .copied()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or((0, f64::NAN))
}
