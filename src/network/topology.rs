use serde::{Serialize, Deserialize};

use crate::network::error::NetworkError;

/// Layer sizes of a single-hidden-layer network.
///
/// `input_count` is the length of every input vector; the other two are the
/// number of sigmoid units in each layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub input_count: usize,
    pub hidden_count: usize,
    pub output_count: usize,
}

impl Topology {
    pub fn new(input_count: usize, hidden_count: usize, output_count: usize) -> Topology {
        Topology { input_count, hidden_count, output_count }
    }

    /// Rejects topologies with an empty layer.
    pub fn validate(&self) -> Result<(), NetworkError> {
        let layers = [
            ("input_count", self.input_count),
            ("hidden_count", self.hidden_count),
            ("output_count", self.output_count),
        ];
        for (what, count) in layers {
            if count == 0 {
                return Err(NetworkError::InvalidInput { what, expected: 1, actual: 0 });
            }
        }
        Ok(())
    }

    pub fn weights_hidden_len(&self) -> usize {
        self.input_count * self.hidden_count
    }

    pub fn weights_output_len(&self) -> usize {
        self.hidden_count * self.output_count
    }
}

#[cfg(test)]
mod tests {
    use super::Topology;
    use crate::network::error::NetworkError;

    #[test]
    fn weight_lengths_follow_counts() {
        let t = Topology::new(2, 3, 6);
        assert_eq!(t.weights_hidden_len(), 6);
        assert_eq!(t.weights_output_len(), 18);
    }

    #[test]
    fn empty_hidden_layer_is_rejected() {
        let err = Topology::new(2, 0, 6).validate().unwrap_err();
        assert_eq!(err, NetworkError::InvalidInput { what: "hidden_count", expected: 1, actual: 0 });
    }

    #[test]
    fn round_trips_through_json() {
        let t = Topology::new(256, 28, 10);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"input_count":256,"hidden_count":28,"output_count":10}"#);
        let back: Topology = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
