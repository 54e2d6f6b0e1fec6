use std::fmt;
use std::time::Instant;

use log::{debug, info};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::dataset::LabeledEntry;
use crate::err::{NetworkError, NetworkResult};
use crate::layers::{Layer, Neuron, NeuronType};
use crate::topology::Topology;

const LOG_EPOCH_STEP: usize = 500;

/// Feedforward network of sigmoid neurons trained by online backpropagation.
///
/// Layers are input, one per hidden size of the topology, and output. They are built
/// once on construction and never resized, only weights, outputs and deltas change.
#[derive(Clone, Debug)]
pub struct NeuralNetwork {
    topology: Topology,
    layers: Vec<Layer>,
}

impl NeuralNetwork {
    pub fn new(topology: Topology, rng: &mut dyn RngCore) -> Self {
        let mut layers = Vec::with_capacity(topology.hidden_layers().len() + 2);

        layers.push(Self::create_layer(
            topology.input_count(),
            1,
            NeuronType::Input,
            rng,
        ));

        let mut prev_size = topology.input_count();

        for size in topology.hidden_layers() {
            layers.push(Self::create_layer(*size, prev_size, NeuronType::Normal, rng));
            prev_size = *size;
        }

        layers.push(Self::create_layer(
            topology.output_count(),
            prev_size,
            NeuronType::Output,
            rng,
        ));

        debug!("[ok] NeuralNetwork created : {}", topology);

        Self { topology, layers }
    }

    /// Network with weights drawn from a generator seeded with `seed`
    pub fn with_seed(topology: Topology, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new(topology, &mut rng)
    }

    fn create_layer(
        size: usize,
        input_count: usize,
        neuron_type: NeuronType,
        rng: &mut dyn RngCore,
    ) -> Layer {
        let neurons = (0..size)
            .map(|_| Neuron::new(input_count, neuron_type, rng))
            .collect();

        Layer::new(neurons, neuron_type)
    }

    /// Runs the forward pass and returns the winning output neuron.
    ///
    /// With a single output that neuron is returned whatever its value, otherwise the
    /// neuron with the greatest output, the first one on ties.
    pub fn feed_forward(&mut self, input_signals: &[f64]) -> NetworkResult<&Neuron> {
        self.check_input(input_signals)?;

        self.send_signals_to_input_neurons(input_signals)?;
        self.feed_forward_all_layers_after_input()?;

        let winner = self.winner_index();
        Ok(&self.output_layer().neurons()[winner])
    }

    /// Index of the winning output neuron for `input_signals`
    pub fn predict(&mut self, input_signals: &[f64]) -> NetworkResult<usize> {
        self.feed_forward(input_signals)?;
        Ok(self.winner_index())
    }

    /// Output layer signals of the last forward pass
    pub fn output_signals(&self) -> Vec<f64> {
        self.output_layer().signals()
    }

    /// Trains for `epoch_count` passes over `dataset`, updating weights after every sample.
    ///
    /// Returns the summed squared error of all steps divided by `epoch_count`.
    pub fn learn(&mut self, dataset: &[LabeledEntry], epoch_count: usize) -> NetworkResult<f64> {
        if epoch_count == 0 {
            return Err(NetworkError::InvalidConfiguration(
                "epoch count must be positive".to_owned(),
            ));
        }

        for entry in dataset {
            self.check_input(&entry.input)?;
        }

        info!(
            "Training {} for {} epochs on {} samples",
            self.topology,
            epoch_count,
            dataset.len()
        );

        let bench_time = Instant::now();
        let mut error = 0.0;

        for epoch in 0..epoch_count {
            let mut epoch_err = 0.0;

            for entry in dataset {
                let step_err = self.backpropagation(entry.expected, &entry.input)?;
                error += step_err;
                epoch_err += step_err;
            }

            if (epoch + 1) % LOG_EPOCH_STEP == 0 {
                debug!("On epoch {} , error is : {}", epoch + 1, epoch_err);
            }
        }

        let result = error / epoch_count as f64;

        info!(
            "Trained for error : {} in {} ms",
            result,
            bench_time.elapsed().as_millis()
        );

        Ok(result)
    }

    /// One online training step, returns the squared error of the winning output
    fn backpropagation(&mut self, expected: f64, inputs: &[f64]) -> NetworkResult<f64> {
        let actual = self.feed_forward(inputs)?.output();
        let difference = actual - expected;
        let learning_rate = self.topology.learning_rate();

        let last = self.layers.len() - 1;
        let prev_signals = self.layers[last - 1].signals();

        for neuron in self.layers[last].neurons_mut() {
            neuron.learn(difference, learning_rate, &prev_signals);
        }

        // input neurons only pass signals on, the walk stops at the first hidden layer
        for idx in (1..last).rev() {
            let prev_signals = self.layers[idx - 1].signals();

            let (head, tail) = self.layers.split_at_mut(idx + 1);
            let layer = &mut head[idx];
            let next_layer = &tail[0];

            for (j, neuron) in layer.neurons_mut().iter_mut().enumerate() {
                for next_neuron in next_layer.neurons() {
                    let error = next_neuron.weights()[j] * next_neuron.delta();
                    neuron.learn(error, learning_rate, &prev_signals);
                }
            }
        }

        Ok(difference * difference)
    }

    fn send_signals_to_input_neurons(&mut self, input_signals: &[f64]) -> NetworkResult<()> {
        for (neuron, signal) in self.layers[0].neurons_mut().iter_mut().zip(input_signals) {
            neuron.feed_forward(&[*signal])?;
        }

        Ok(())
    }

    fn feed_forward_all_layers_after_input(&mut self) -> NetworkResult<()> {
        for idx in 1..self.layers.len() {
            let prev_signals = self.layers[idx - 1].signals();

            for neuron in self.layers[idx].neurons_mut() {
                neuron.feed_forward(&prev_signals)?;
            }
        }

        Ok(())
    }

    fn check_input(&self, input_signals: &[f64]) -> NetworkResult<()> {
        if input_signals.len() != self.topology.input_count() {
            return Err(NetworkError::DimensionMismatch {
                expected: self.topology.input_count(),
                actual: input_signals.len(),
            });
        }

        Ok(())
    }

    fn winner_index(&self) -> usize {
        let neurons = self.output_layer().neurons();

        let mut winner = 0;
        for (idx, neuron) in neurons.iter().enumerate().skip(1) {
            if neuron.output() > neurons[winner].output() {
                winner = idx;
            }
        }

        winner
    }

    fn output_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

impl fmt::Display for NeuralNetwork {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "NeuralNetwork {}", self.topology)?;

        for (idx, layer) in self.layers.iter().enumerate() {
            writeln!(f, "  [{}] {} : {} neurons", idx, layer, layer.neuron_count())?;
        }

        Ok(())
    }
}
