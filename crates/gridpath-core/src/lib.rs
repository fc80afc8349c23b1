//! **gridpath-core**: lattice geometry shared by the *gridpath* crates.
//!
//! This crate provides the integer [`Point`] and the half-open rectangle
//! [`Range`] used to address cells of a search grid, along with the row-major
//! index conversions the grid arena relies on.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
