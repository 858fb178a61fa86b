//! Producers: sequences built from scratch
//!
//! This module provides [`count`], [`repeat`] and [`cycle`].

mod count;
mod cycle;
mod repeat;

pub use count::{count, count_by, count_from, Count};
pub use cycle::{cycle, Cycle};
pub use repeat::{repeat, Repeat};
