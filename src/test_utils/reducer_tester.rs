use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::reducer::Reducer;

/// An error returned when a reduction path of the reducer produces the wrong
/// output.
#[derive(Debug)]
pub enum PredError {
    /// Incorrect [`Output`] produced by the reducer.
    ///
    /// [`Output`]: crate::reducer::Reducer::Output
    IncorrectOutput,
}

impl PredError {
    fn of_method(self, name: &'static str) -> OfMethod {
        OfMethod {
            name,
            pred_error: self,
        }
    }
}

/// Helper to convert [`PredError`] into [`TestCaseError`].
struct OfMethod {
    name: &'static str,
    pred_error: PredError,
}

impl From<OfMethod> for TestCaseError {
    fn from(OfMethod { name, pred_error }: OfMethod) -> Self {
        Self::Fail(format!("`{name}` is implemented incorrectly: {pred_error:?}").into())
    }
}

/// Strategy for the cut points of a partitioning. Out-of-range cuts are
/// clamped to the input length, so partitions may be empty.
pub fn any_cuts() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0_usize..24, ..4)
}

/// Runs a reducer through every way of feeding it and checks each output
/// against `pred`:
///
/// - `accumulate()` item by item,
/// - `accumulate_many()`,
/// - `reduce()`,
/// - the input split at `cuts` and combined left to right
///   (`reduce_partitions()`),
/// - the same partitions combined right to left, which only associativity
///   makes equal,
/// - for unordered reducers, the partitions combined in reverse order.
pub struct BasicReducerTester<ItFac, R, Pred, I>
// `where` bound is needed otherwise we get "type annotation needed" for the input iterator.
where
    I: Iterator,
    R: Reducer<Item = I::Item>,
    ItFac: FnMut() -> I,
    Pred: FnMut(I, R::Output) -> Result<(), PredError>,
{
    pub iter_factory: ItFac,
    pub reducer: R,
    pub cuts: Vec<usize>,
    pub pred: Pred,
}

impl<ItFac, R, Pred, I> BasicReducerTester<ItFac, R, Pred, I>
where
    I: Iterator,
    R: Reducer<Item = I::Item>,
    ItFac: FnMut() -> I,
    Pred: FnMut(I, R::Output) -> Result<(), PredError>,
{
    pub fn test_reducer(&mut self) -> TestCaseResult {
        let reducer = &self.reducer;

        // `accumulate()`
        let mut accumulator = reducer.seed();
        for item in (self.iter_factory)() {
            reducer.accumulate(&mut accumulator, item);
        }
        (self.pred)((self.iter_factory)(), reducer.finish(accumulator))
            .map_err(|e| e.of_method("accumulate()"))?;

        // `accumulate_many()`
        let mut accumulator = reducer.seed();
        reducer.accumulate_many(&mut accumulator, (self.iter_factory)());
        (self.pred)((self.iter_factory)(), reducer.finish(accumulator))
            .map_err(|e| e.of_method("accumulate_many()"))?;

        // `reduce()`
        (self.pred)(
            (self.iter_factory)(),
            reducer.reduce((self.iter_factory)()),
        )
        .map_err(|e| e.of_method("reduce()"))?;

        // `combine()`, grouped from the left.
        let partitions = self.partitions();
        (self.pred)(
            (self.iter_factory)(),
            self.reducer.reduce_partitions(partitions),
        )
        .map_err(|e| e.of_method("combine() from the left"))?;

        // `combine()`, grouped from the right.
        let accumulators: Vec<_> = self
            .partitions()
            .into_iter()
            .map(|partition| {
                let mut accumulator = self.reducer.seed();
                self.reducer.accumulate_many(&mut accumulator, partition);
                accumulator
            })
            .collect();
        let combined = accumulators
            .into_iter()
            .rev()
            .reduce(|right, left| self.reducer.combine(left, right))
            .unwrap_or_else(|| self.reducer.seed());
        (self.pred)((self.iter_factory)(), self.reducer.finish(combined))
            .map_err(|e| e.of_method("combine() from the right"))?;

        // `combine()` in reverse partition order, which unordered reducers allow.
        if self.reducer.characteristics().is_unordered() {
            let mut partitions = self.partitions();
            partitions.reverse();
            (self.pred)(
                (self.iter_factory)(),
                self.reducer.reduce_partitions(partitions),
            )
            .map_err(|e| e.of_method("combine() in reverse order"))?;
        }

        Ok(())
    }

    /// Splits a fresh input at the (sorted, clamped) cuts.
    fn partitions(&mut self) -> Vec<Vec<I::Item>> {
        let mut rest: Vec<_> = (self.iter_factory)().collect();
        let mut cuts: Vec<_> = self.cuts.iter().map(|&cut| cut.min(rest.len())).collect();
        cuts.sort_unstable();

        let mut partitions = Vec::with_capacity(cuts.len() + 1);
        for &cut in cuts.iter().rev() {
            partitions.push(rest.split_off(cut));
        }
        partitions.push(rest);
        partitions.reverse();
        partitions
    }
}
