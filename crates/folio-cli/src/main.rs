//! folio - portfolio admin CLI
//!
//! Creates and edits portfolio projects through the site's admin API.
//!
//! # Examples
//!
//! ```bash
//! # Show a project
//! folio project get 65f1c0de0012ab34cd56 --pretty
//!
//! # Create a project
//! folio project create --title "Weather Station" --subtitle "Sensors" \
//!     --description "Charts readings." --github-url https://github.com/me/weather \
//!     --live-url https://weather.example.com --image ./cover.png
//!
//! # Change only the title
//! folio project edit 65f1c0de0012ab34cd56 --title "Weather Station v2"
//! ```

use folio_admin::{HttpGateway, LogNotifier, project_schema};
use folio_cli::{Cli, CliError, initialize_logger, run};
use folio_config::Config;

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.server.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let log_file = match config.log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let colored = config.logging.colored && std::io::stderr().is_terminal();
    if let Err(e) = initialize_logger(config.logging.level, log_file, colored) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let gateway = match HttpGateway::from_config(&config.api) {
        Ok(gateway) => gateway,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(
        cli.command,
        &gateway,
        project_schema(&config.validation),
        &LogNotifier,
    )
    .await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(CliError::Invalid { errors, .. }) => {
            eprintln!("Error: project not saved");
            for (field, message) in errors.iter() {
                eprintln!("  {}: {}", field, message);
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load and validate config; an explicit `--server` wins over every other source.
fn load_config(server: Option<&str>) -> Result<Config, CliError> {
    let mut config = Config::load()?;
    if let Some(url) = server {
        config.api.base_url = url.to_string();
    }
    config.validate()?;
    Ok(config)
}
