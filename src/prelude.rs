//! Commonly used imports
//!
//! Use `use seqtools::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Seq, SeqError, Step};

// Producers
pub use crate::build::{count, count_by, count_from, cycle, repeat};

// Pairing
pub use crate::pair::{enumerate, zip, zip_all};

// Transformers
pub use crate::compose::{
    chain, chain_all, compress, drop_while, i_filter, i_filter_false, i_map, i_slice, SliceBounds,
};

// Interop and checks
pub use crate::check::{is_iterable, Iterable};
pub use crate::iter::pull;
pub use crate::value::{Truthy, Value};
