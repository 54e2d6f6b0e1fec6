pub fn sigmoid(val: f64) -> f64 {
    1.0 / (1.0 + (-val).exp())
}

/// Derivative of the sigmoid, taken from its already computed output.
pub fn sigmoid_deriv(out: f64) -> f64 {
    out * (1.0 - out)
}
