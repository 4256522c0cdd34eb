//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the most frequently used traits.
//!
//! # Example
//!
//! ```
//! use collect_algebra::prelude::*;
//! ```

pub use crate::container::{Container, Freeze};
pub use crate::reducer::{IteratorExt, Reducer};
