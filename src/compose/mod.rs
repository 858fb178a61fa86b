//! Transformers: sequences built from other sequences
//!
//! Every constructor here takes plain iterables; the same transformations are
//! available as [`Seq`](crate::Seq) methods for composing sequences directly.

mod chain;
mod filter;
mod map;
mod slice;

pub use chain::{chain, chain_all, Chain, ChainAll};
pub use filter::{compress, drop_while, i_filter, i_filter_false, Compress, DropWhile, Filter};
pub use map::{i_map, Map2};
pub use slice::{i_slice, Slice, SliceBounds};
