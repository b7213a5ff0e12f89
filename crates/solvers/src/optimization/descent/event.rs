/// Event emitted by a descent solver after each accepted step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<const N: usize> {
    /// Step counter (1-based).
    pub iter: usize,

    /// The iterate reached by this step.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub objective: f64,

    /// How much closer to the optimum this step moved the objective.
    ///
    /// Never negative, since an accepted step satisfies the sufficient-decrease
    /// condition. It can be zero when the decrease is below the rounding of
    /// the objective. When maximizing this is the increase in the objective.
    pub improvement: f64,

    /// The search direction the step was taken along.
    pub direction: [f64; N],

    /// The accepted step size `t ∈ (0, 1]`.
    pub step_size: f64,

    /// How many times the line search shrank the step.
    pub backtracks: usize,

    /// The convergence measure at the point this step left from.
    ///
    /// The gradient norm for gradient and coordinate descent; half the
    /// squared Newton decrement for Newton's method.
    pub measure: f64,
}
