use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process::ExitCode;
use tracing::debug;

use lisky::commands::{ConfigSetter, ERROR_PREFIX};
use lisky::config::{resolve_config_path, ConfigLoader, ConfigVariable};
use lisky::output::{self, OutputFormat};

// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "lisky",
    version,
    about = "A command line interface for Lisk.",
    long_about = "Lisky keeps its settings in a small JSON configuration file. Use `set` to change them."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sets configuration <variable> to <value>.
    Set {
        /// Name of the configuration variable
        variable: String,
        /// New value; booleans accept only `true` or `false`
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

fn main() -> ExitCode {
    lisky::logging::init();

    let matches = Cli::command()
        .mut_subcommand("set", |cmd| cmd.long_about(set_description()))
        .get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    match cli.command {
        Command::Set { variable, value } => run_set(&variable, &value),
    }
}

fn run_set(variable: &str, value: &str) -> ExitCode {
    let loader = match ConfigLoader::load() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("{ERROR_PREFIX}: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!("Using config file {}", loader.config_path().display());

    let (mut config, store) = loader.into_parts();
    let setter = ConfigSetter::new(store);

    let result = match setter.set(&mut config, variable, value) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{ERROR_PREFIX}: {e}");
            return ExitCode::FAILURE;
        }
    };

    match output::render(&result, OutputFormat::from_config(&config)) {
        Ok(rendered) => {
            println!("{}", rendered.stdout);
            if let Some(warning) = rendered.stderr {
                eprintln!("{warning}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{ERROR_PREFIX}: {e}");
            ExitCode::FAILURE
        }
    }
}

// --- Help text ---
fn set_description() -> String {
    let variables = ConfigVariable::names().collect::<Vec<_>>().join(", ");
    let location = resolve_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "~/.lisky/config.json".to_string());

    format!(
        "Sets configuration <variable> to <value>. Variables available: {variables}. \
         Configuration is persisted in `{location}`.\n\n\
         Examples:\n\
         - set json true\n\
         - set name my_custom_lisky\n\
         - set liskJS.testnet true"
    )
}
