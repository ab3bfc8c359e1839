//! Grid primitives shared by the maze collaborators.
//!
//! - [`coord`]: integer cell coordinates and the fixed set of agent moves ([`Direction`]).

pub mod coord;

pub use coord::{Coord, Direction};
