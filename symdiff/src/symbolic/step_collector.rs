//! Recording the steps a pass takes.

/// A type that collects the steps of an algorithm.
///
/// Passes such as [`simplify_with`](super::simplify::simplify_with) report every rule they apply
/// to a collector. [`StepCollector`] is implemented for `()`, which discards the steps, and for
/// [`Vec`], which records them in order.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
