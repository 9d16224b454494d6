//! A single node of the pitch grid.

use super::{GridPoint, WorldPoint};

/// One addressable node of a [`Grid`](super::Grid).
///
/// The lattice index and world position are fixed when the grid is built.
/// The occupancy flag and the two search costs are left for collaborators:
/// an occupancy system sets `blocked`, a path planner owns the costs.
///
/// Cells only come from a built grid, so they can be serialized but not
/// deserialized:
///
/// ```compile_fail
/// fn deserializable<T: serde::de::DeserializeOwned>() {}
/// deserializable::<pitch_navigation::Cell>();
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cell {
    index: GridPoint,
    world_position: WorldPoint,
    /// Whether the node is occupied.
    pub blocked: bool,
    /// Estimated cost from this node to the goal (h).
    pub heuristic_cost: i32,
    /// Cost accumulated from the start node to this node (g).
    pub distance_cost: i32,
}

impl Cell {
    pub(crate) fn new(index: GridPoint, world_position: WorldPoint) -> Self {
        Cell {
            index,
            world_position,
            blocked: false,
            heuristic_cost: 0,
            distance_cost: 0,
        }
    }

    /// Position of the node in the lattice.
    pub fn index(&self) -> GridPoint {
        self.index
    }

    /// Center of the node in world space.
    pub fn world_position(&self) -> WorldPoint {
        self.world_position
    }

    /// Returns true if the node is not blocked.
    pub fn is_walkable(&self) -> bool {
        !self.blocked
    }

    /// Total search cost (f = g + h).
    pub fn total_cost(&self) -> i32 {
        self.heuristic_cost + self.distance_cost
    }

    /// Zeroes both search costs.
    pub fn reset_costs(&mut self) {
        self.heuristic_cost = 0;
        self.distance_cost = 0;
    }
}
