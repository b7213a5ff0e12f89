/// A visited point and its objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iterate<const N: usize> {
    pub x: [f64; N],
    pub objective: f64,
}

/// The ordered sequence of iterates a solver visited, start point first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory<const N: usize> {
    iterates: Vec<Iterate<N>>,
}

impl<const N: usize> Trajectory<N> {
    pub(super) fn new() -> Self {
        Self {
            iterates: Vec::new(),
        }
    }

    pub(super) fn push(&mut self, x: [f64; N], objective: f64) {
        self.iterates.push(Iterate { x, objective });
    }

    /// Returns the recorded iterates in visiting order.
    #[must_use]
    pub fn iterates(&self) -> &[Iterate<N>] {
        &self.iterates
    }

    /// Returns the number of recorded iterates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }

    /// Iterates over the recorded points.
    pub fn points(&self) -> impl Iterator<Item = &[f64; N]> + '_ {
        self.iterates.iter().map(|it| &it.x)
    }

    /// Iterates over the recorded objective values.
    pub fn objectives(&self) -> impl Iterator<Item = f64> + '_ {
        self.iterates.iter().map(|it| it.objective)
    }
}

impl<'a, const N: usize> IntoIterator for &'a Trajectory<N> {
    type Item = &'a Iterate<N>;
    type IntoIter = std::slice::Iter<'a, Iterate<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iterates.iter()
    }
}
