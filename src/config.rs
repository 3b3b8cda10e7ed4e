use anyhow::anyhow;
use clap::Parser;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(
    name = "Rust Maze",
    about = "Reindeer maze shortest-route solver implemented in Rust.",
    version = "1.0"
)]
pub struct Cli {
    #[arg(long, help = "Path to the YAML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Path to the maze input file")]
    pub input_path: Option<String>,

    #[arg(long, help = "Solver to run: shortest, tiles or both")]
    pub solver: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input_path: String,
    pub solver: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: "input.txt".to_string(),
            solver: "both".to_string(),
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn override_from_command_line(mut self, cli: &Cli) -> anyhow::Result<Self> {
        if let Some(input_path) = cli.input_path.as_ref() {
            self.input_path = input_path.clone();
        }
        if let Some(solver) = cli.solver.as_ref() {
            self.solver = solver.clone();
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        match self.solver.as_str() {
            "shortest" | "tiles" | "both" => Ok(()),
            other => Err(anyhow!(
                "unknown solver {other:?}, expected shortest, tiles or both"
            )),
        }
    }
}
