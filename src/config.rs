use std::path::PathBuf;

use clap::Parser;

/// Dataset read when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "unicorn_insight_dataset.csv";

#[derive(Parser, Debug)]
#[command(
    name = "unicorn-insight",
    version,
    about = "Explore unicorn valuations by industry and export one industry to CSV"
)]
pub struct Cli {
    /// CSV dataset to load
    #[arg(default_value = DEFAULT_INPUT)]
    pub input_path: PathBuf,
    /// Directory the filtered CSV is written to
    #[arg(default_value = ".")]
    pub output_dir: PathBuf,
}

/// Where the pipeline reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            input_path: cli.input_path,
            output_dir: cli.output_dir,
        }
    }
}
