use std::process;

use clap::Parser;

use highdim::analysis::run_analysis;
use highdim::args::HighDimArgs;
use highdim::config_loader::load_config;

fn main() {
    let args = HighDimArgs::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(default_filter));

    let config = match load_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let params = match args.into_params(config) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match run_analysis(&params) {
        Ok(outcome) => {
            log::debug!("run seed: {}", outcome.seed);
            println!("Analysis Complete");
            println!("Check {}/ for results", outcome.output_dir.display());
        }
        Err(e) => {
            log::error!("analysis failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
