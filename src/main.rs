mod app;
mod config;
mod data;
mod state;
mod ui;

use std::io::{self, Write};
use std::process::ExitCode;

use app::UnicornApp;
use clap::Parser;
use config::{Cli, Settings};

fn main() -> ExitCode {
    env_logger::init();

    let settings = Settings::from(Cli::parse());
    log::debug!("Starting with {settings:?}");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    match UnicornApp::new(settings).run(&mut input, &mut out) {
        Ok(summary) => {
            log::info!(
                "Exported {} '{}' rows to {}",
                summary.rows_exported,
                summary.industry,
                summary.export_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Run failed: {e:#}");
            let _ = writeln!(out, "{e:#}");
            ExitCode::FAILURE
        }
    }
}
