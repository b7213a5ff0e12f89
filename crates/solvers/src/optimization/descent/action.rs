/// Actions an observer can take during a descent solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current step and return the point just reached.
    StopEarly,
}
