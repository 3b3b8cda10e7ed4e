use maze_rust::config::{Cli, Config};
use maze_rust::map::Map;
use maze_rust::solver::{OptimalTiles, ShortestRoute, Solver};

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    let config = if let Some(config_file) = cli.config.as_ref() {
        let config_str = std::fs::read_to_string(config_file)?;
        Config::from_yaml_str(&config_str)
            .with_context(|| format!("error with config file: {config_file}"))?
    } else {
        info!("No config file specified, using default config");
        Config::default()
    }
    .override_from_command_line(&cli)?;

    let map = Map::from_file(&config.input_path)
        .with_context(|| format!("error loading maze {}", config.input_path))?;

    if matches!(config.solver.as_str(), "shortest" | "both") {
        let mut shortest_solver = ShortestRoute::new(&map);
        match shortest_solver.solve() {
            Some(solution) => println!("The answer to part #1 is {}", solution.cost),
            None => bail!("no route from start to goal"),
        }
    }

    if matches!(config.solver.as_str(), "tiles" | "both") {
        let mut tiles_solver = OptimalTiles::new(&map);
        match tiles_solver.solve() {
            Some(solution) => {
                let tiles = solution.tiles.unwrap_or_default();
                println!("The answer to part #2 is {}", tiles.len());
            }
            None => bail!("no route from start to goal"),
        }
    }

    Ok(())
}
