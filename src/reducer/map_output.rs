use std::fmt::{self, Debug};

use super::{Characteristics, Reducer};

/// A [`Reducer`] that transforms the finished result.
///
/// This `struct` is created by [`Reducer::map_output()`] and
/// [`Reducer::frozen()`]. See their documentation for more.
#[derive(Clone)]
pub struct MapOutput<R, F> {
    reducer: R,
    f: F,
}

impl<R, F> MapOutput<R, F> {
    pub(super) fn new(reducer: R, f: F) -> Self {
        Self { reducer, f }
    }
}

impl<R, F, T> Reducer for MapOutput<R, F>
where
    R: Reducer,
    F: Fn(R::Output) -> T,
{
    type Item = R::Item;
    type Accumulator = R::Accumulator;
    type Output = T;

    #[inline]
    fn characteristics(&self) -> Characteristics {
        self.reducer.characteristics().without_identity_finish()
    }

    #[inline]
    fn seed(&self) -> Self::Accumulator {
        self.reducer.seed()
    }

    #[inline]
    fn accumulate(&self, accumulator: &mut Self::Accumulator, item: Self::Item) {
        self.reducer.accumulate(accumulator, item);
    }

    #[inline]
    fn combine(&self, left: Self::Accumulator, right: Self::Accumulator) -> Self::Accumulator {
        self.reducer.combine(left, right)
    }

    #[inline]
    fn finish(&self, accumulator: Self::Accumulator) -> Self::Output {
        (self.f)(self.reducer.finish(accumulator))
    }

    #[inline]
    fn accumulate_many(
        &self,
        accumulator: &mut Self::Accumulator,
        items: impl IntoIterator<Item = Self::Item>,
    ) {
        self.reducer.accumulate_many(accumulator, items);
    }
}

impl<R, F> Debug for MapOutput<R, F>
where
    R: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapOutput")
            .field("reducer", &self.reducer)
            .finish()
    }
}
