//! # seqtools: lazy, pull-based sequence helpers
//!
//! Build sequences that compute one value per request, compose them, and
//! drive them either step by step or as ordinary iterators.
//!
//! ## Core Traits
//!
//! - **[`Seq`]**: a stateful sequence handle; [`Seq::advance`] returns a [`Step`]
//! - **[`Iterable`]**: the capability every sequence argument needs
//!
//! ## Example
//!
//! ```
//! use seqtools::prelude::*;
//!
//! // Every third number from 10, skipping the ones below 20, five at most.
//! let picked: Vec<u32> = count_from(10u32)
//!     .drop_while(|n| *n < 20)
//!     .i_slice(SliceBounds::new(0, 3, Some(5)))?
//!     .into_iter()
//!     .collect();
//! assert_eq!(picked, vec![20, 23, 26, 29, 32]);
//! # Ok::<(), SeqError>(())
//! ```
//!
//! ## Common Functions
//!
//! **Producers:**
//! - [`count(start, step, stop)`](build::count) - arithmetic progression
//! - [`repeat(value, times)`](build::repeat) - the same value again and again
//! - [`cycle(source)`](build::cycle) - replay a finite source forever
//!
//! **Transformers:**
//! - [`chain(a, b)`](compose::chain) - one sequence after another
//! - [`compress(data, selectors)`](compose::compress) - keep values with a truthy selector
//! - [`drop_while(source, predicate)`](compose::drop_while) - skip a matching prefix
//! - [`i_filter`](compose::i_filter) / [`i_filter_false`](compose::i_filter_false) - keep matches / non-matches
//! - [`i_slice(source, bounds)`](compose::i_slice) - strided subsequence
//! - [`i_map(f, a, b)`](compose::i_map) - combine two sequences pairwise
//!
//! **Runtime-checked arguments:** see [`dynamic`].

pub mod build;
pub mod check;
pub mod compose;
pub mod dynamic;
mod error;
pub mod iter;
pub mod pair;
pub mod prelude;
mod seq;
mod step;
pub mod value;

pub use check::{is_iterable, Iterable};
pub use error::{Result, SeqError};
pub use seq::*;
pub use step::*;
pub use value::Value;
