use proposal_engine::cli::{self, Command, USAGE};
use proposal_engine::{Config, init_logger};
use std::process::ExitCode;

fn main() -> ExitCode {
    // 1. Environment (.env is optional)
    dotenvy::dotenv().ok();

    // 2. Configuration and logging
    let config = Config::from_env();
    init_logger(&config);

    // 3. Parse and run
    let command = match Command::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    tracing::debug!(?command, environment = %config.environment, "Running command");

    match cli::run(&command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Command failed: {:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
