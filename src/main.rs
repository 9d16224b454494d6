mod settings;

use anyhow::Context;
use pitch_navigation::{Grid, WorldPoint};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| settings::DEFAULT_CONFIG_PATH.to_string());
    let settings = settings::load_settings(&path)
        .with_context(|| format!("Failed to load configuration from {}", path))?;

    let mut grid = Grid::from_config(&settings.pitch).context("Failed to build pitch grid")?;
    info!(
        x_count = grid.x_count(),
        z_count = grid.z_count(),
        total_cells = grid.total_cells(),
        "Pitch grid ready"
    );

    let blocked = apply_occupancy(&mut grid, &settings.occupancy.blocked)?;
    info!(blocked, "Applied initial occupancy");

    println!("{}", grid);

    if let Some(probe) = settings.probe {
        report_probe(&grid, probe.point)?;
    }

    Ok(())
}

/// Marks the node under each point blocked. Returns the number of blocked nodes.
fn apply_occupancy(grid: &mut Grid, points: &[WorldPoint]) -> anyhow::Result<usize> {
    let (min, max) = grid.world_bounds();
    for point in points {
        if point.x < min.x || point.x > max.x || point.z < min.z || point.z > max.z {
            warn!(%point, "Blocked point lies outside the pitch, clamping to its edge");
        }
        grid.cell_at_mut(*point)
            .with_context(|| format!("Invalid blocked point {}", point))?
            .blocked = true;
    }
    Ok(grid.blocked_count())
}

fn report_probe(grid: &Grid, point: WorldPoint) -> anyhow::Result<()> {
    let cell = grid
        .cell_at(point)
        .with_context(|| format!("Invalid probe point {}", point))?;
    info!(
        %point,
        index = %cell.index(),
        center = %cell.world_position(),
        blocked = cell.blocked,
        "Probe node"
    );

    for neighbor in grid.neighbors_of(cell) {
        info!(
            index = %neighbor.index(),
            walkable = neighbor.is_walkable(),
            "Probe neighbor"
        );
    }
    Ok(())
}
