/// Folder
pub mod layers;

/// Files
pub mod activation;
pub mod dataset;
pub mod err;
pub mod network;
pub mod topology;

pub mod prelude {
    pub use crate::dataset::{dataset_from_pairs, LabeledEntry};
    pub use crate::err::{NetworkError, NetworkResult};
    pub use crate::layers::{Layer, Neuron, NeuronType};
    pub use crate::network::NeuralNetwork;
    pub use crate::topology::Topology;
}
