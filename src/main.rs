//! octconf - CLI

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use octconf::util::config::{load_config_from, load_user_config, UserConfig};
use octconf::util::logger::{self, LogLevel};
use octconf::{convert_with, Options, NAME, VERSION};

/// Convert octal definition files into flat `name = value` configuration
#[derive(Parser, Debug)]
#[command(name = NAME)]
#[command(version = VERSION)]
#[command(about, long_about = None)]
struct Args {
    /// Input file, `-` or omitted for stdin
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum array nesting and reference chain depth
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Config file (defaults to ~/.config/octconf/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level: debug, info, warn, error
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let level = if args.verbose {
        LogLevel::Debug
    } else {
        args.log_level.unwrap_or(config.log.level)
    };
    logger::init_with_level(level);

    let mut options = Options::from(&config);
    if let Some(max_depth) = args.max_depth {
        options.max_depth = max_depth;
    }

    let source = read_input(args.input.as_deref())?;
    let output = convert_with(&source, &options)?;
    write_output(args.output.as_deref(), &output)
}

fn load_config(path: Option<&Path>) -> Result<UserConfig> {
    match path {
        Some(path) => load_config_from(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => load_user_config().context("failed to load user config"),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
    }
}

fn write_output(
    path: Option<&Path>,
    output: &str,
) -> Result<()> {
    match path {
        Some(path) => fs::write(path, format!("{}\n", output))
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", output).context("failed to write stdout")?;
            stdout.flush().context("failed to write stdout")
        }
    }
}
