//! Map-related functionality for navigation.
//!
//! This module provides the pitch grid, its nodes, and the point types used
//! to address them in grid and world space.

pub mod cell;
pub mod grid;
pub mod point_types;

pub use cell::Cell;
pub use grid::{Grid, GridConfig};
pub use point_types::{GridPoint, WorldPoint};
