use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};

use bang::chain::{parse_links, run_chain};
use bang::config::DEFAULT_MAX_DEPTH;
use bang::{Config, Error, ErrorKind};

/// Run a bang program, optionally chaining its outputs into more programs.
#[derive(Parser, Debug)]
#[command(name = "bang", version)]
struct Cli {
    /// Maximum evaluation depth before a program is aborted
    #[arg(long, env = "BANG_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Program to run first
    file: PathBuf,

    /// Chain links, each written as `-oi NAMES FILE`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    links: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    // bad links are rejected before the first program runs
    let links = parse_links(&cli.links)?;
    let config = Config::default().with_max_depth(cli.max_depth);
    let load = |path: &Path| -> Result<String, Error> {
        std::fs::read_to_string(path)
            .map_err(|e| Error::new(ErrorKind::IO, format!("{}: {}", path.display(), e)))
    };
    run_chain(&cli.file, &links, &config, load, &mut |_, out| {
        println!("{}", out)
    })?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
