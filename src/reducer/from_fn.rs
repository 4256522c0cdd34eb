use std::{
    fmt::{self, Debug},
    marker::PhantomData,
};

use super::{Characteristics, Reducer};

/// A [`Reducer`] built from three closures.
///
/// This `struct` is created by [`from_fn()`]. See its documentation for more.
pub struct FromFn<T, S, A, C> {
    seed: S,
    accumulate: A,
    combine: C,
    characteristics: Characteristics,
    _marker: PhantomData<fn(T)>,
}

/// Creates a [`Reducer`] from a seed factory, an accumulate step and a
/// combine step. The accumulator is the result.
///
/// The reducer is ordered. Call [`unordered()`](FromFn::unordered) if the
/// result does not depend on item order.
///
/// # Examples
///
/// ```
/// use collect_algebra::{prelude::*, reducer};
///
/// // Tracks the longest word, preferring the earliest among equals.
/// let longest = reducer::from_fn(
///     || None,
///     |longest: &mut Option<&'static str>, word: &'static str| {
///         if longest.is_none_or(|longest| word.len() > longest.len()) {
///             *longest = Some(word);
///         }
///     },
///     |left, right| match (left, right) {
///         (Some(l), Some(r)) if r.len() > l.len() => Some(r),
///         (None, right) => right,
///         (left, _) => left,
///     },
/// );
///
/// let words = ["a", "tale", "of", "two", "cities"];
/// assert_eq!(longest.reduce(words), Some("cities"));
///
/// let parts = [&words[..3], &words[3..]].map(|part| part.iter().copied());
/// assert_eq!(longest.reduce_partitions(parts), Some("cities"));
/// ```
#[inline]
pub fn from_fn<T, Acc, S, A, C>(seed: S, accumulate: A, combine: C) -> FromFn<T, S, A, C>
where
    S: Fn() -> Acc,
    A: Fn(&mut Acc, T),
    C: Fn(Acc, Acc) -> Acc,
{
    FromFn {
        seed,
        accumulate,
        combine,
        characteristics: Characteristics::ORDERED.with_identity_finish(),
        _marker: PhantomData,
    }
}

impl<T, S, A, C> FromFn<T, S, A, C> {
    /// Declares that the result does not depend on item order.
    #[inline]
    pub fn unordered(self) -> Self {
        Self {
            characteristics: Characteristics::UNORDERED.with_identity_finish(),
            ..self
        }
    }
}

impl<T, Acc, S, A, C> Reducer for FromFn<T, S, A, C>
where
    S: Fn() -> Acc,
    A: Fn(&mut Acc, T),
    C: Fn(Acc, Acc) -> Acc,
{
    type Item = T;
    type Accumulator = Acc;
    type Output = Acc;

    #[inline]
    fn characteristics(&self) -> Characteristics {
        self.characteristics
    }

    #[inline]
    fn seed(&self) -> Acc {
        (self.seed)()
    }

    #[inline]
    fn accumulate(&self, accumulator: &mut Acc, item: T) {
        (self.accumulate)(accumulator, item);
    }

    #[inline]
    fn combine(&self, left: Acc, right: Acc) -> Acc {
        (self.combine)(left, right)
    }

    #[inline]
    fn finish(&self, accumulator: Acc) -> Acc {
        accumulator
    }
}

impl<T, S: Clone, A: Clone, C: Clone> Clone for FromFn<T, S, A, C> {
    fn clone(&self) -> Self {
        Self {
            seed: self.seed.clone(),
            accumulate: self.accumulate.clone(),
            combine: self.combine.clone(),
            characteristics: self.characteristics,
            _marker: PhantomData,
        }
    }
}

impl<T, S, A, C> Debug for FromFn<T, S, A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("characteristics", &self.characteristics)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::reducer::from_fn;
    use crate::test_utils::{BasicReducerTester, PredError, any_cuts};

    proptest! {
        #[test]
        fn all_reduce_methods_sum(
            nums in propvec(any::<i32>(), ..16),
            cuts in any_cuts(),
        ) {
            all_reduce_methods_sum_impl(nums, cuts)?;
        }
    }

    fn all_reduce_methods_sum_impl(nums: Vec<i32>, cuts: Vec<usize>) -> TestCaseResult {
        BasicReducerTester {
            iter_factory: || nums.iter().copied(),
            reducer: from_fn(
                || 0_i64,
                |sum: &mut i64, num: i32| *sum += i64::from(num),
                |left, right| left + right,
            )
            .unordered(),
            cuts,
            pred: |iter, output| {
                if iter.map(i64::from).sum::<i64>() != output {
                    Err(PredError::IncorrectOutput)
                } else {
                    Ok(())
                }
            },
        }
        .test_reducer()
    }
}
