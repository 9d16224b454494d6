#![warn(missing_docs)]
#![doc = "Node grid for pitch navigation."]
#![doc = ""]
#![doc = "This crate lays a regular grid of nodes over a rectangular pitch in the"]
#![doc = "world x-z plane, maps world points to nodes, and enumerates the"]
#![doc = "8-connected neighbors of a node for a path planner to expand."]

pub mod error;
pub mod map;

pub use error::GridError;
pub use map::{Cell, Grid, GridConfig, GridPoint, WorldPoint};
