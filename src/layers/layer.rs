use std::fmt;

use super::neuron::{Neuron, NeuronType};

#[derive(Clone, Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
    layer_type: NeuronType,
}

impl Layer {
    pub fn new(neurons: Vec<Neuron>, layer_type: NeuronType) -> Self {
        Self {
            neurons,
            layer_type,
        }
    }

    /// Outputs of the last forward pass, in neuron order
    pub fn signals(&self) -> Vec<f64> {
        self.neurons.iter().map(|n| n.output()).collect()
    }

    pub fn neuron_count(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub(crate) fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }

    pub fn layer_type(&self) -> NeuronType {
        self.layer_type
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.layer_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::sigmoid;
    use approx::assert_relative_eq;

    #[test]
    fn empty_layer() {
        let l = Layer::new(Vec::new(), NeuronType::Normal);

        assert_eq!(l.neuron_count(), 0);
        assert!(l.signals().is_empty());
    }

    #[test]
    fn signals_follow_neuron_order() {
        let mut l = Layer::new(
            vec![
                Neuron::with_weights(vec![1.0], NeuronType::Normal),
                Neuron::with_weights(vec![-2.0], NeuronType::Normal),
                Neuron::with_weights(vec![0.0], NeuronType::Normal),
            ],
            NeuronType::Normal,
        );

        assert_eq!(l.signals(), vec![0.0, 0.0, 0.0]);

        for n in l.neurons_mut() {
            n.feed_forward(&[0.5]).unwrap();
        }

        let signals = l.signals();
        assert_eq!(signals.len(), l.neuron_count());
        assert_relative_eq!(signals[0], sigmoid(0.5));
        assert_relative_eq!(signals[1], sigmoid(-1.0));
        assert_relative_eq!(signals[2], 0.5);
    }

    #[test]
    fn display_is_layer_type() {
        let l = Layer::new(Vec::new(), NeuronType::Output);
        assert_eq!(l.to_string(), "Output");
    }
}
