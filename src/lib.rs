//!
//! `numeric_array`: a generic one-dimensional numeric array
//!
//! The single component of this crate is [`NumericArray`], a resizable
//! contiguous container of numeric elements with value semantics and
//! in-place element-wise arithmetic (`+=`, `-=`, `*=`, `/=` with scalars
//! and with other arrays of the same length).
//!
//! The container keeps no internal synchronization; concurrent mutation
//! from multiple threads requires external locking by the caller.
//!
pub mod array;

pub use array::NumericArray;

#[macro_use]
extern crate approx;
