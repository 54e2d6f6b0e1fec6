mod layer;
mod neuron;

pub use layer::*;
pub use neuron::*;
