use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Parser, Subcommand};
use log::{error, LevelFilter};
use minilang_logger::LoggerSettings;
use commands::ast::ast;
use commands::demo::demo;
use commands::run::{parse_var, run};
use config::{load_config, Config};

mod commands;
mod config;

#[derive(Parser, Debug)]
#[command(name = "minilang", version)]
#[command(about = "Runs programs written in minilang, a tiny imperative language.")]
struct Cli {
    /// TOML file with logging settings and initial variables
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log debug information to the console
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    subcommand: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse and execute a program
    Run {
        path: String,

        /// Seed a variable before running, e.g. --var fact=5
        #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
        vars: Vec<(String, f64)>,

        /// Print every variable after the program finishes
        #[arg(long)]
        dump_vars: bool,
    },
    /// Parse a program and print its syntax tree as JSON
    Ast {
        path: String,

        #[arg(long)]
        compact: bool,
    },
    /// Run the bundled factorial and loop examples
    Demo,
}

fn init_logging(config: &Config, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let console_level = if verbose {
        LevelFilter::Debug
    } else {
        config.logging.console_level()?
    };

    let settings = LoggerSettings {
        console_level,
        log_dir: config.logging.dir.clone().map(PathBuf::from),
        file_level: config.logging.file_level()?,
    };
    minilang_logger::init(&settings)?;
    Ok(())
}

fn execute(cli: Cli, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    match cli.subcommand {
        Commands::Run { path, vars, dump_vars } => {
            let seeds = config.vars.into_iter().chain(vars);
            run(&path, seeds, dump_vars)
        },
        Commands::Ast { path, compact } => ast(&path, compact),
        Commands::Demo => demo(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(load_config).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config, cli.verbose) {
        eprintln!("Failed to initialise logging: {}", e);
        return ExitCode::FAILURE;
    }

    match execute(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
