use crate::activation::sigmoid::Sigmoid;
use crate::loss::mse::MseLoss;
use crate::math::index::idx;
use crate::network::error::NetworkError;
use crate::network::network::Network;
use crate::network::topology::Topology;

/// Online backpropagation over an owned [`Network`].
///
/// The four scratch buffers are reused across calls and only hold meaningful
/// values right after the most recent [`Trainer::train`].
#[derive(Debug, Clone)]
pub struct Trainer {
    network: Network,
    hidden: Vec<f64>,
    output: Vec<f64>,
    grad_hidden: Vec<f64>,
    grad_output: Vec<f64>,
}

impl Trainer {
    /// Creates a randomly initialized network and a trainer around it.
    ///
    /// Every hidden weight, then every output weight, is drawn as
    /// `random() - 0.5`. Biases start at zero.
    pub fn create<F>(input_count: usize, hidden_count: usize, output_count: usize, mut random: F) -> Trainer
    where
        F: FnMut() -> f64,
    {
        let topology = Topology::new(input_count, hidden_count, output_count);
        let mut network = Network::zeros(topology);
        {
            let (weights_hidden, _, weights_output, _) = network.parameters_mut();
            for w in weights_hidden.iter_mut() {
                *w = random() - 0.5;
            }
            for w in weights_output.iter_mut() {
                *w = random() - 0.5;
            }
        }

        Trainer::with_buffers(network)
    }

    /// Wraps a network built elsewhere. `hidden_count` and `output_count` must
    /// agree with the network's topology.
    pub fn from_network(network: Network, hidden_count: usize, output_count: usize) -> Result<Trainer, NetworkError> {
        NetworkError::check_len("hidden_count", network.hidden_count(), hidden_count)?;
        NetworkError::check_len("output_count", network.output_count(), output_count)?;
        Ok(Trainer::with_buffers(network))
    }

    fn with_buffers(network: Network) -> Trainer {
        let hidden_count = network.hidden_count();
        let output_count = network.output_count();
        Trainer {
            network,
            hidden: vec![0.0; hidden_count],
            output: vec![0.0; output_count],
            grad_hidden: vec![0.0; hidden_count],
            grad_output: vec![0.0; output_count],
        }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn into_network(self) -> Network {
        self.network
    }

    /// Hidden activations from the last forward pass.
    pub fn hidden(&self) -> &[f64] {
        &self.hidden
    }

    /// Output activations from the last forward pass.
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    pub fn grad_hidden(&self) -> &[f64] {
        &self.grad_hidden
    }

    pub fn grad_output(&self) -> &[f64] {
        &self.grad_output
    }

    /// One step of gradient descent on the squared error of a single sample.
    ///
    /// Lengths are checked before anything is written, so a rejected call
    /// leaves the network untouched.
    pub fn train(&mut self, input: &[f64], target: &[f64], learning_rate: f64) -> Result<(), NetworkError> {
        let Topology { input_count, hidden_count, output_count } = self.network.topology();
        NetworkError::check_len("input", input_count, input.len())?;
        NetworkError::check_len("target", output_count, target.len())?;

        self.network.predict_into(input, &mut self.hidden, &mut self.output)?;

        for c in 0..output_count {
            let a = self.output[c];
            self.grad_output[c] = MseLoss::derivative(a, target[c]) * Sigmoid::derivative_from_output(a);
        }

        // Reads weights_output before any of them are updated below.
        let weights_output = self.network.weights_output();
        for r in 0..hidden_count {
            let mut sum = 0.0;
            for c in 0..output_count {
                sum += self.grad_output[c] * weights_output[idx(r, c, output_count)];
            }
            self.grad_hidden[r] = sum * Sigmoid::derivative_from_output(self.hidden[r]);
        }

        let (weights_hidden, biases_hidden, weights_output, biases_output) = self.network.parameters_mut();

        for r in 0..hidden_count {
            for c in 0..output_count {
                weights_output[idx(r, c, output_count)] -= learning_rate * self.grad_output[c] * self.hidden[r];
            }
        }

        for r in 0..input_count {
            for c in 0..hidden_count {
                weights_hidden[idx(r, c, hidden_count)] -= learning_rate * self.grad_hidden[c] * input[r];
            }
        }

        for c in 0..output_count {
            biases_output[c] -= learning_rate * self.grad_output[c];
        }

        for c in 0..hidden_count {
            biases_hidden[c] -= learning_rate * self.grad_hidden[c];
        }

        Ok(())
    }
}
