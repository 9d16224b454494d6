//! Pitch grid implementation for navigation and path planning.
//!
//! This module lays a uniform lattice of nodes over a rectangular pitch in the
//! world x-z plane. The grid is built once from a [`GridConfig`] and its
//! geometry never changes afterwards; only the per-node occupancy flag and
//! search costs are mutable.

#![warn(missing_docs)]

use tracing::{debug, trace};

use super::{Cell, GridPoint, WorldPoint};
use crate::error::GridError;

/// Largest node count accepted along either axis; indices up to this are exact as `f32`.
pub const MAX_AXIS_CELLS: usize = 1 << 24;

/// Offsets of the 8-connected neighborhood, x offset outer, z offset inner.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Physical description of a pitch, from which a [`Grid`] is built.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Center of the pitch in world coordinates.
    pub origin: WorldPoint,
    /// Extent of the pitch along the world x axis (m).
    pub width: f32,
    /// Extent of the pitch along the world z axis (m).
    pub height: f32,
    /// Half the side length of one node (m).
    pub node_radius: f32,
}

impl GridConfig {
    /// Construct a new grid configuration.
    pub const fn new(origin: WorldPoint, width: f32, height: f32, node_radius: f32) -> Self {
        GridConfig {
            origin,
            width,
            height,
            node_radius,
        }
    }

    /// Full side length of one node (m).
    pub fn node_diameter(&self) -> f32 {
        self.node_radius * 2.0
    }

    /// Checks that the configuration describes a buildable grid.
    pub fn validate(&self) -> Result<(), GridError> {
        self.cell_counts().map(|_| ())
    }

    /// Number of nodes along the x and z axes.
    ///
    /// Each count is `pitch extent / node diameter` rounded to the nearest
    /// integer, halfway cases away from zero.
    ///
    /// # Returns
    /// * `Result<(usize, usize), GridError>` - The `(x, z)` counts or an error
    ///   if the configuration is invalid
    pub fn cell_counts(&self) -> Result<(usize, usize), GridError> {
        if !self.origin.is_finite() {
            return Err(GridError::InvalidConfiguration("Origin must be finite"));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(GridError::InvalidConfiguration(
                "Pitch width must be positive and finite",
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(GridError::InvalidConfiguration(
                "Pitch height must be positive and finite",
            ));
        }
        if !self.node_radius.is_finite() || self.node_radius <= 0.0 {
            return Err(GridError::InvalidConfiguration(
                "Node radius must be positive and finite",
            ));
        }

        let diameter = self.node_diameter();
        let x_count = (self.width / diameter).round();
        let z_count = (self.height / diameter).round();

        if x_count < 1.0 || z_count < 1.0 {
            return Err(GridError::InvalidConfiguration(
                "Pitch is too small to hold a single node",
            ));
        }

        if x_count > MAX_AXIS_CELLS as f32 || z_count > MAX_AXIS_CELLS as f32 {
            return Err(GridError::InvalidConfiguration(
                "Pitch dimensions too large, would cause overflow",
            ));
        }

        let (x_count, z_count) = (x_count as usize, z_count as usize);

        // Check for potential overflow in cell allocation
        x_count
            .checked_mul(z_count)
            .and_then(|total| total.checked_mul(std::mem::size_of::<Cell>()))
            .filter(|bytes| *bytes <= isize::MAX as usize)
            .ok_or(GridError::InvalidConfiguration(
                "Pitch dimensions too large, would cause overflow",
            ))?;

        Ok((x_count, z_count))
    }
}

/// A regular lattice of nodes covering a rectangular pitch.
///
/// Nodes are stored densely; node `(x, z)` lives at `x + z * x_count`.
/// The `Display` view prints z rows top to bottom, highest z first.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    /// Configuration the grid was built from.
    config: GridConfig,
    /// Number of nodes along the world x axis.
    x_count: usize,
    /// Number of nodes along the world z axis.
    z_count: usize,
    /// Vector storing every node of the lattice
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid over a pitch centered at `origin`.
    ///
    /// # Arguments
    /// * `origin` - Center of the pitch in world coordinates
    /// * `width` - Extent of the pitch along the world x axis
    /// * `height` - Extent of the pitch along the world z axis
    /// * `node_radius` - Half the side length of one node
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - The built grid or an error if parameters are invalid
    pub fn build(
        origin: WorldPoint,
        width: f32,
        height: f32,
        node_radius: f32,
    ) -> Result<Self, GridError> {
        Self::from_config(&GridConfig::new(origin, width, height, node_radius))
    }

    /// Builds a grid from a [`GridConfig`].
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        let (x_count, z_count) = config.cell_counts()?;

        let radius = config.node_radius;
        let diameter = config.node_diameter();
        let bottom_left_x = config.origin.x - config.width / 2.0;
        let bottom_left_z = config.origin.z - config.height / 2.0;

        let mut cells = Vec::new();
        cells.try_reserve_exact(x_count * z_count).map_err(|_| {
            GridError::InvalidConfiguration("Pitch dimensions too large, would cause overflow")
        })?;
        for z in 0..z_count {
            for x in 0..x_count {
                let world_position = WorldPoint::new(
                    bottom_left_x + x as f32 * diameter + radius,
                    config.origin.y,
                    bottom_left_z + z as f32 * diameter + radius,
                );
                cells.push(Cell::new(GridPoint::new(x, z), world_position));
            }
        }

        debug!(
            x_count,
            z_count,
            width = config.width,
            height = config.height,
            node_radius = radius,
            "Built pitch grid"
        );

        Ok(Grid {
            config: *config,
            x_count,
            z_count,
            cells,
        })
    }

    /// Gets the configuration the grid was built from.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Gets the center of the pitch.
    pub fn origin(&self) -> WorldPoint {
        self.config.origin
    }

    /// Gets the pitch extent along the world x axis.
    pub fn width(&self) -> f32 {
        self.config.width
    }

    /// Gets the pitch extent along the world z axis.
    pub fn height(&self) -> f32 {
        self.config.height
    }

    /// Gets the node radius.
    pub fn node_radius(&self) -> f32 {
        self.config.node_radius
    }

    /// Gets the node side length.
    pub fn node_diameter(&self) -> f32 {
        self.config.node_diameter()
    }

    /// Number of nodes along the world x axis.
    pub fn x_count(&self) -> usize {
        self.x_count
    }

    /// Number of nodes along the world z axis.
    pub fn z_count(&self) -> usize {
        self.z_count
    }

    /// Gets the total number of nodes in the grid.
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Gets every node of the grid, x varying fastest.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the `(min, max)` corners of the pitch in world coordinates.
    pub fn world_bounds(&self) -> (WorldPoint, WorldPoint) {
        let origin = self.config.origin;
        let half_width = self.config.width / 2.0;
        let half_height = self.config.height / 2.0;
        (
            WorldPoint::new(origin.x - half_width, origin.y, origin.z - half_height),
            WorldPoint::new(origin.x + half_width, origin.y, origin.z + half_height),
        )
    }

    fn contains(&self, index: GridPoint) -> bool {
        index.x < self.x_count && index.z < self.z_count
    }

    fn linear_index(&self, index: GridPoint) -> usize {
        index.x + index.z * self.x_count
    }

    /// Gets the node at a grid index.
    pub fn get(&self, index: GridPoint) -> Result<&Cell, GridError> {
        if !self.contains(index) {
            return Err(GridError::OutOfBounds("Grid index outside the lattice"));
        }
        Ok(&self.cells[self.linear_index(index)])
    }

    /// Gets a mutable reference to the node at a grid index.
    pub fn get_mut(&mut self, index: GridPoint) -> Result<&mut Cell, GridError> {
        if !self.contains(index) {
            return Err(GridError::OutOfBounds("Grid index outside the lattice"));
        }
        let linear = self.linear_index(index);
        Ok(&mut self.cells[linear])
    }

    /// Converts world coordinates to the index of the node containing them.
    ///
    /// Points outside the pitch are clamped onto its nearest edge or corner,
    /// so every finite point maps to some node. The `y` component is ignored.
    ///
    /// # Returns
    /// * `Result<GridPoint, GridError>` - The node index, or an error if the
    ///   point has a non-finite component
    pub fn world_to_grid(&self, world: WorldPoint) -> Result<GridPoint, GridError> {
        if !world.is_finite() {
            return Err(GridError::InvalidWorldCoordinates(
                "World point must have finite components",
            ));
        }

        let config = &self.config;
        let percent_x = (world.x - config.origin.x + config.width / 2.0) / config.width;
        let percent_z = (world.z - config.origin.z + config.height / 2.0) / config.height;

        if !(0.0..=1.0).contains(&percent_x) || !(0.0..=1.0).contains(&percent_z) {
            trace!(%world, "Clamping point outside the pitch");
        }

        let percent_x = percent_x.clamp(0.0, 1.0);
        let percent_z = percent_z.clamp(0.0, 1.0);

        let x = ((self.x_count - 1) as f32 * percent_x).round() as usize;
        let z = ((self.z_count - 1) as f32 * percent_z).round() as usize;

        Ok(GridPoint::new(
            x.min(self.x_count - 1),
            z.min(self.z_count - 1),
        ))
    }

    /// Converts a grid index to the world position of that node's center.
    pub fn grid_to_world(&self, index: GridPoint) -> Result<WorldPoint, GridError> {
        self.get(index).map(Cell::world_position)
    }

    /// Gets the node containing a world point. See [`Grid::world_to_grid`].
    pub fn cell_at(&self, world: WorldPoint) -> Result<&Cell, GridError> {
        let index = self.world_to_grid(world)?;
        Ok(&self.cells[self.linear_index(index)])
    }

    /// Gets a mutable reference to the node containing a world point.
    pub fn cell_at_mut(&mut self, world: WorldPoint) -> Result<&mut Cell, GridError> {
        let index = self.world_to_grid(world)?;
        let linear = self.linear_index(index);
        Ok(&mut self.cells[linear])
    }

    /// Iterates over the 8-connected neighbors of `cell`.
    ///
    /// Candidates are visited x offset outer, z offset inner, and those
    /// falling outside the lattice are skipped, so edge nodes yield 5
    /// neighbors and corner nodes 3. `cell` is expected to belong to this
    /// grid; for any other cell only its in-range candidates are yielded.
    pub fn neighbors_of<'a>(&'a self, cell: &Cell) -> impl Iterator<Item = &'a Cell> + use<'a> {
        let center = cell.index();
        NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dz)| {
            let x = center.x.checked_add_signed(dx)?;
            let z = center.z.checked_add_signed(dz)?;
            self.get(GridPoint::new(x, z)).ok()
        })
    }

    /// Sets the occupancy flag of the node at a grid index.
    pub fn set_blocked(&mut self, index: GridPoint, blocked: bool) -> Result<(), GridError> {
        self.get_mut(index)?.blocked = blocked;
        Ok(())
    }

    /// Gets the number of blocked nodes.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.blocked).count()
    }

    /// Marks every node walkable.
    pub fn clear_blocked(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.blocked = false);
    }

    /// Zeroes the search costs of every node, ready for a new planning run.
    pub fn reset_costs(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset_costs);
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Grid ({}x{}, node diameter: {:.3}m)",
            self.x_count,
            self.z_count,
            self.node_diameter()
        )?;
        writeln!(f, "Origin: {}", self.config.origin)?;

        // Print one z row per line, highest z first so the bottom-left node prints bottom-left
        for row in self.cells.chunks(self.x_count).rev() {
            for cell in row {
                write!(f, "{} ", if cell.blocked { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
