/// Single training sample : expected value of the winning output and the input signals
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledEntry {
    pub expected: f64,
    pub input: Vec<f64>,
}

impl LabeledEntry {
    pub fn new(expected: f64, input: Vec<f64>) -> Self {
        Self { expected, input }
    }
}

impl From<(f64, Vec<f64>)> for LabeledEntry {
    fn from((expected, input): (f64, Vec<f64>)) -> Self {
        Self::new(expected, input)
    }
}

/// Builds a dataset from `(expected, inputs)` pairs
pub fn dataset_from_pairs<I>(pairs: I) -> Vec<LabeledEntry>
where
    I: IntoIterator<Item = (f64, Vec<f64>)>,
{
    pairs.into_iter().map(LabeledEntry::from).collect()
}
