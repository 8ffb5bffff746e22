use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, debug};

mod app;
mod cli;

use app::App;
use cli::Args;

fn main() {
    let env_file = cli::load_env_file();
    let args = Args::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Some(path) = env_file {
        debug!("loaded environment from {}", path.display());
    }

    let result = App::new(args.settings()).and_then(|app| {
        let analysis = app.run()?;
        Ok((app, analysis))
    });
    match result {
        Ok((app, analysis)) => {
            if analysis.temperature.is_none() {
                eprintln!("Could not retrieve weather data for recommendations.");
            }
            println!("Report written to {}", app.settings().report_path.display());
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
