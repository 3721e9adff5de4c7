use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use android_strings_gen::{Config, Generator};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the configured paths are resolved against
    #[arg(short, long, default_value = ".")]
    base_dir: PathBuf,

    /// Abort on the first failing language instead of continuing
    #[arg(long)]
    fail_fast: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    let mut config = config.resolved_against(&args.base_dir);
    if args.fail_fast {
        config.fail_fast = true;
    }

    match Generator::new(config).run() {
        Ok(summary) if summary.is_success() => {
            println!("Generated {} resource file(s)", summary.written.len());
            ExitCode::SUCCESS
        }
        Ok(summary) => {
            for (language, err) in &summary.failed {
                eprintln!("Error: {}: {}", language, err);
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
