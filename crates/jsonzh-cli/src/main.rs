mod commands;
mod demo;

use std::{io, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use jsonzh::{Codec, CodecError, Locale};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "jsonzh", about = "Typed JSON codec tools")]
struct Cli {
    /// Language of error stage tags; defaults to JSONZH_LOCALE, then English.
    #[arg(long, global = true)]
    locale: Option<Locale>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Runs one of the bundled round-trip demos.
    Demo {
        #[arg(value_enum)]
        which: DemoKind,
    },
    /// Reports whether a JSON document parses.
    Check {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Parses a JSON document and prints it re-encoded.
    Fmt {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DemoKind {
    Person,
    Product,
    Config,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("{path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("jsonzh: {err}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let codec = match cli.locale {
        Some(locale) => Codec::new(locale),
        None => Codec::from_env(),
    };
    tracing::debug!(locale = %codec.locale(), "resolved codec");

    match cli.command {
        Command::Demo { which } => match which {
            DemoKind::Person => demo::person(&codec),
            DemoKind::Product => demo::product(&codec),
            DemoKind::Config => demo::config(&codec),
        },
        Command::Check { file } => {
            let input = commands::read_input(file.as_deref())?;
            commands::check(&codec, &input)?;
            println!("ok");
            Ok(())
        }
        Command::Fmt { file, pretty } => {
            let input = commands::read_input(file.as_deref())?;
            println!("{}", commands::normalize(&codec.pretty(pretty), &input)?);
            Ok(())
        }
    }
}
