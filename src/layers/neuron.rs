use std::fmt;

use rand::{Rng, RngCore};

use crate::activation::{sigmoid, sigmoid_deriv};
use crate::err::{NetworkError, NetworkResult};

/// Role of a neuron or a layer inside the network, bookkeeping only
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NeuronType {
    Input,
    Normal,
    Output,
}

impl Default for NeuronType {
    fn default() -> Self {
        NeuronType::Normal
    }
}

impl fmt::Display for NeuronType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            NeuronType::Input => "Input",
            NeuronType::Normal => "Normal",
            NeuronType::Output => "Output",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug)]
pub struct Neuron {
    weights: Vec<f64>,
    output: f64,
    delta: f64,
    neuron_type: NeuronType,
}

impl Neuron {
    /// Neuron with `input_count` weights drawn from [-1, 1]
    pub fn new(input_count: usize, neuron_type: NeuronType, rng: &mut dyn RngCore) -> Self {
        let weights = (0..input_count)
            .map(|_| rng.gen_range(-1.0..=1.0))
            .collect();

        Self::with_weights(weights, neuron_type)
    }

    pub fn with_weights(weights: Vec<f64>, neuron_type: NeuronType) -> Self {
        Self {
            weights,
            output: 0.0,
            delta: 0.0,
            neuron_type,
        }
    }

    /// Computes sigmoid of the weighted input sum and keeps it as the output
    pub fn feed_forward(&mut self, inputs: &[f64]) -> NetworkResult<f64> {
        if inputs.len() != self.weights.len() {
            return Err(NetworkError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }

        let sum: f64 = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(w, x)| w * x)
            .sum();

        self.output = sigmoid(sum);
        Ok(self.output)
    }

    /// One gradient step for `error` flowing into this neuron.
    ///
    /// `inputs` are the signals the neuron received on the last forward pass,
    /// i.e. the current outputs of the previous layer.
    pub fn learn(&mut self, error: f64, learning_rate: f64, inputs: &[f64]) {
        debug_assert_eq!(inputs.len(), self.weights.len());

        self.delta = error * sigmoid_deriv(self.output);

        for (w, x) in self.weights.iter_mut().zip(inputs) {
            *w -= self.delta * learning_rate * x;
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn output(&self) -> f64 {
        self.output
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn neuron_type(&self) -> NeuronType {
        self.neuron_type
    }

    pub fn input_count(&self) -> usize {
        self.weights.len()
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({:.4})", self.neuron_type, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn random_weights_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let n = Neuron::new(64, NeuronType::Normal, &mut rng);

        assert_eq!(n.input_count(), 64);
        assert!(n.weights().iter().all(|w| (-1.0..=1.0).contains(w)));
        assert_eq!(n.output(), 0.0);
        assert_eq!(n.delta(), 0.0);
    }

    #[test]
    fn same_seed_same_weights() {
        let a = Neuron::new(5, NeuronType::Output, &mut ChaCha8Rng::seed_from_u64(3));
        let b = Neuron::new(5, NeuronType::Output, &mut ChaCha8Rng::seed_from_u64(3));

        assert_eq!(a.weights(), b.weights());
    }

    #[test]
    fn feed_forward_weighted_sigmoid() {
        let mut n = Neuron::with_weights(vec![0.5, -1.0], NeuronType::Normal);
        let out = n.feed_forward(&[1.0, 0.5]).unwrap();

        assert_relative_eq!(out, 0.5); // 0.5 * 1 - 1 * 0.5 = 0
        assert_relative_eq!(n.output(), out);

        let out = n.feed_forward(&[1.0, -1.0]).unwrap();
        assert_relative_eq!(out, sigmoid(1.5));
    }

    #[test]
    fn feed_forward_rejects_wrong_length() {
        let mut n = Neuron::with_weights(vec![0.1, 0.2, 0.3], NeuronType::Normal);
        n.feed_forward(&[1.0, 1.0, 1.0]).unwrap();
        let before = n.output();

        let res = n.feed_forward(&[1.0]);

        assert!(matches!(
            res,
            Err(NetworkError::DimensionMismatch {
                expected: 3,
                actual: 1
            })
        ));
        assert_eq!(n.output(), before);
    }

    #[test]
    fn learn_updates_delta_and_weights() {
        let mut n = Neuron::with_weights(vec![0.2, -0.4], NeuronType::Output);
        let inputs = [1.0, 0.5];
        let out = n.feed_forward(&inputs).unwrap();

        n.learn(0.3, 0.1, &inputs);

        let delta = 0.3 * out * (1.0 - out);
        assert_relative_eq!(n.delta(), delta);
        assert_relative_eq!(n.weights()[0], 0.2 - delta * 0.1 * 1.0);
        assert_relative_eq!(n.weights()[1], -0.4 - delta * 0.1 * 0.5);
        // learning doesn't recompute the output
        assert_relative_eq!(n.output(), out);
    }

    #[test]
    fn learn_moves_output_towards_target() {
        let mut n = Neuron::with_weights(vec![0.3, 0.3], NeuronType::Output);
        let inputs = [1.0, 1.0];
        let target = 0.9;

        let before = n.feed_forward(&inputs).unwrap();
        n.learn(before - target, 0.5, &inputs);
        let after = n.feed_forward(&inputs).unwrap();

        assert!((after - target).abs() < (before - target).abs());
    }

    #[test]
    fn type_display() {
        assert_eq!(NeuronType::Input.to_string(), "Input");
        assert_eq!(NeuronType::default(), NeuronType::Normal);
        assert_eq!(NeuronType::Output.to_string(), "Output");

        let mut n = Neuron::with_weights(vec![0.0], NeuronType::Output);
        n.feed_forward(&[1.0]).unwrap();
        assert_eq!(n.to_string(), "Output(0.5000)");
    }
}
