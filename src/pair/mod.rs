//! Pairing helpers
//!
//! Positional pairing of several sequences ([`zip`], [`zip_all`]) and
//! position tagging ([`enumerate`]).

mod enumerate;
mod zip;

pub use enumerate::{enumerate, Enumerate};
pub use zip::{zip, zip_all, Zip, ZipAll};
