/// Logistic activation shared by the hidden and output layers.
pub struct Sigmoid;

impl Sigmoid {
    /// σ(x) = 1 / (1 + e^-x)
    ///
    /// No clamping is applied: for large |x| the result saturates to exactly
    /// 0.0 or 1.0 in f64.
    #[inline]
    pub fn function(x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }

    /// σ'(x) written in terms of the activation `a = σ(x)`: a·(1 − a).
    ///
    /// The backward pass already holds the activations from the forward pass,
    /// so it never needs the pre-activation sum.
    #[inline]
    pub fn derivative_from_output(a: f64) -> f64 {
        a * (1.0 - a)
    }
}
