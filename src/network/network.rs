use crate::activation::sigmoid::Sigmoid;
use crate::math::index::idx;
use crate::network::error::NetworkError;
use crate::network::topology::Topology;

/// A fully-connected network with one sigmoid hidden layer and one sigmoid
/// output layer.
///
/// Weights are stored flat and row-major:
/// - `weights_hidden[idx(input, hidden, hidden_count)]`
/// - `weights_output[idx(hidden, output, output_count)]`
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    topology: Topology,
    weights_hidden: Vec<f64>,
    biases_hidden: Vec<f64>,
    weights_output: Vec<f64>,
    biases_output: Vec<f64>,
}

impl Network {
    /// Builds a network from explicit parameters, checking every array
    /// against `topology`.
    pub fn new(
        topology: Topology,
        weights_hidden: Vec<f64>,
        biases_hidden: Vec<f64>,
        weights_output: Vec<f64>,
        biases_output: Vec<f64>,
    ) -> Result<Network, NetworkError> {
        topology.validate()?;
        NetworkError::check_len("weights_hidden", topology.weights_hidden_len(), weights_hidden.len())?;
        NetworkError::check_len("biases_hidden", topology.hidden_count, biases_hidden.len())?;
        NetworkError::check_len("weights_output", topology.weights_output_len(), weights_output.len())?;
        NetworkError::check_len("biases_output", topology.output_count, biases_output.len())?;

        Ok(Network {
            topology,
            weights_hidden,
            biases_hidden,
            weights_output,
            biases_output,
        })
    }

    /// A network whose weights and biases are all zero.
    pub fn zeros(topology: Topology) -> Network {
        Network {
            topology,
            weights_hidden: vec![0.0; topology.weights_hidden_len()],
            biases_hidden: vec![0.0; topology.hidden_count],
            weights_output: vec![0.0; topology.weights_output_len()],
            biases_output: vec![0.0; topology.output_count],
        }
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn input_count(&self) -> usize {
        self.topology.input_count
    }

    pub fn hidden_count(&self) -> usize {
        self.topology.hidden_count
    }

    pub fn output_count(&self) -> usize {
        self.topology.output_count
    }

    pub fn weights_hidden(&self) -> &[f64] {
        &self.weights_hidden
    }

    pub fn biases_hidden(&self) -> &[f64] {
        &self.biases_hidden
    }

    pub fn weights_output(&self) -> &[f64] {
        &self.weights_output
    }

    pub fn biases_output(&self) -> &[f64] {
        &self.biases_output
    }

    /// Forward pass into freshly allocated buffers; returns the output layer.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>, NetworkError> {
        let mut hidden = vec![0.0; self.hidden_count()];
        let mut output = vec![0.0; self.output_count()];
        self.predict_into(input, &mut hidden, &mut output)?;
        Ok(output)
    }

    /// Forward pass into caller-owned buffers.
    ///
    /// `hidden` receives the hidden-layer activations and `output` the
    /// output-layer activations; both are fully overwritten.
    pub fn predict_into(
        &self,
        input: &[f64],
        hidden: &mut [f64],
        output: &mut [f64],
    ) -> Result<(), NetworkError> {
        let Topology { input_count, hidden_count, output_count } = self.topology;
        NetworkError::check_len("input", input_count, input.len())?;
        NetworkError::check_len("hidden buffer", hidden_count, hidden.len())?;
        NetworkError::check_len("output buffer", output_count, output.len())?;

        for c in 0..hidden_count {
            let mut sum = 0.0;
            for r in 0..input_count {
                sum += input[r] * self.weights_hidden[idx(r, c, hidden_count)];
            }
            hidden[c] = Sigmoid::function(sum + self.biases_hidden[c]);
        }

        for c in 0..output_count {
            let mut sum = 0.0;
            for r in 0..hidden_count {
                sum += hidden[r] * self.weights_output[idx(r, c, output_count)];
            }
            output[c] = Sigmoid::function(sum + self.biases_output[c]);
        }

        Ok(())
    }

    /// Mutable views of all four parameter arrays, in the order
    /// (weights_hidden, biases_hidden, weights_output, biases_output).
    pub(crate) fn parameters_mut(&mut self) -> (&mut [f64], &mut [f64], &mut [f64], &mut [f64]) {
        (
            self.weights_hidden.as_mut_slice(),
            self.biases_hidden.as_mut_slice(),
            self.weights_output.as_mut_slice(),
            self.biases_output.as_mut_slice(),
        )
    }
}
