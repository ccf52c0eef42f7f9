use std::io;
use std::process::ExitCode;

use env_logger::Env;
use log::{
    error,
    info,
    LevelFilter
};

use riemann::configuration::Configuration;
use riemann::manager::manager::IManager;
use riemann::shell::shell::Shell;

const CONFIG_ENV_VAR: &str = "RIEMANN_CONFIG";

fn main() -> ExitCode {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok());
    let configuration = match &config_path {
        Some(path) => match Configuration::from_reader(path) {
            Ok(configuration) => configuration,
            Err(error) => {
                eprintln!("failed to load configuration '{}': {}", path, error);
                return ExitCode::FAILURE;
            }
        },
        None => Configuration::new()
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_level(LevelFilter::from(configuration.logging().level()))
        .init();

    info!("riemann v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &config_path {
        info!(
            "configuration loaded from {} with presets [{}]",
            path,
            configuration.integrator_manager().names().join(", ")
        );
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), &configuration);
    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("shell terminated: {}", error);
            ExitCode::FAILURE
        }
    }
}
