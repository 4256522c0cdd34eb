//! The reduction protocol: seed, accumulate, combine, finish.
//!
//! A [`Reducer`] describes *how* a sequence is folded into a result, without
//! holding any of the intermediate state itself. The state lives in an
//! accumulator the reducer seeds on demand, so one reducer can drive any
//! number of independent reductions, for example one per partition of a
//! parallel fold, whose accumulators are then [`combine`]d.
//!
//! ```
//! use collect_algebra::{prelude::*, reducers};
//!
//! let words = ["b", "a", "c", "a"];
//! let sorted = reducers::to_sorted_list();
//!
//! // One pass over everything...
//! let whole = sorted.reduce(words);
//!
//! // ...or partitions reduced independently, then combined in source order.
//! let partitions = [&words[..1], &words[1..]].map(|part| part.iter().copied());
//! let parts = sorted.reduce_partitions(partitions);
//!
//! assert_eq!(whole, ["a", "a", "b", "c"]);
//! assert_eq!(whole, parts);
//! ```
//!
//! Ready-made reducers are in [`reducers`](crate::reducers). Ad hoc ones are
//! built from closures with [`from_fn()`].
//!
//! [`combine`]: Reducer::combine

mod characteristics;
mod from_fn;
mod iterator_ext;
mod map_output;
#[allow(clippy::module_inception)]
mod reducer;
mod reduction;

pub use characteristics::*;
pub use from_fn::*;
pub use iterator_ext::*;
pub use map_output::*;
pub use reducer::*;
pub use reduction::*;
