use pitch_navigation::{Grid, GridPoint, WorldPoint};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .init();

    // A 20m x 12m pitch centered on the world origin, 1m nodes
    let mut grid = Grid::build(WorldPoint::new(0.0, 0.0, 0.0), 20.0, 12.0, 0.5)?;

    // Block a wall across the middle, leaving a gap at the top
    for z in 0..grid.z_count() - 2 {
        grid.set_blocked(GridPoint::new(10, z), true)?;
    }

    let (min, max) = grid.world_bounds();
    println!("Pitch bounds: {} to {}", min, max);
    println!("{}", grid);

    let probe = WorldPoint::new(-0.3, 0.0, 2.2);
    let cell = grid.cell_at(probe)?;
    println!(
        "World position {} maps to node {} centered at {}",
        probe,
        cell.index(),
        cell.world_position()
    );

    for neighbor in grid.neighbors_of(cell) {
        println!(
            "  neighbor {} {}",
            neighbor.index(),
            if neighbor.is_walkable() { "walkable" } else { "blocked" }
        );
    }

    // Far outside the pitch clamps onto the nearest corner
    let far = grid.cell_at(WorldPoint::new(500.0, 0.0, -500.0))?;
    println!("Far point clamps to node {}", far.index());

    Ok(())
}
