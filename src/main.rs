// Command-line front end for extfile

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use extfile::config::Config;
use extfile::file::{ExtendedFile, LocalFile};
use extfile::hash::{CompareEngine, HashAlgorithm, HashComputer, HashResult};
use extfile::logging;

#[derive(Parser)]
#[command(name = "extfile")]
#[command(about = "Hash, compare, inspect and delete files", long_about = None)]
struct Cli {
    /// Configuration file (defaults to <config dir>/extfile/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the digest of a file
    Hash {
        file: PathBuf,

        /// Hash algorithm (e.g. sha-256, md5, sha3-512)
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Uppercase hex output
        #[arg(long)]
        upper: bool,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether two files have the same content
    Compare {
        left: PathBuf,
        right: PathBuf,

        /// Hash algorithm for digest comparison
        #[arg(short, long, conflicts_with = "deep")]
        algorithm: Option<String>,

        /// Compare byte by byte instead of by digest
        #[arg(long)]
        deep: bool,
    },

    /// Print the size of a file
    Size {
        file: PathBuf,

        /// Print the raw byte count
        #[arg(long)]
        raw: bool,
    },

    /// Delete a file or directory
    Rm {
        path: PathBuf,

        /// Delete directory contents recursively
        #[arg(short, long)]
        recursive: bool,
    },

    /// Print the detected MIME type
    Mime { file: PathBuf },

    /// Print the extension of a file name
    Ext {
        file: PathBuf,

        /// Everything after the first period (tar.gz rather than gz)
        #[arg(long)]
        compound: bool,
    },

    /// List supported hash algorithms
    Algorithms {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    logging::init(&config.logging, cli.verbose);

    match cli.command {
        Commands::Hash { file, algorithm, upper, json } => {
            let algorithm = resolve_algorithm(algorithm.as_deref(), &config)?;
            let digest = HashComputer::new().digest(&LocalFile::new(&file), algorithm)?;
            let result = HashResult::new(&digest, file, upper);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}  {}", result.hash, result.file_path.display());
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Compare { left, right, algorithm, deep } => {
            let engine = CompareEngine::with_buffer_size(config.buffer_size);
            let (left, right) = (LocalFile::new(&left), LocalFile::new(&right));

            let (equal, method) = if deep {
                (engine.matches_deep(&left, &right)?, "byte-for-byte".to_string())
            } else {
                let algorithm = resolve_algorithm(algorithm.as_deref(), &config)?;
                (engine.matches(&left, &right, algorithm)?, algorithm.to_string())
            };

            if equal {
                println!("{} ({})", "identical".green(), method);
                Ok(ExitCode::SUCCESS)
            } else {
                println!("{} ({})", "different".yellow(), method);
                Ok(ExitCode::FAILURE)
            }
        }

        Commands::Size { file, raw } => {
            let human_readable = !raw && config.human_readable;
            println!("{}", ExtendedFile::new(file).size_with(human_readable)?);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Rm { path, recursive } => {
            let target = ExtendedFile::new(&path);
            if target.rm(recursive) {
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("{} could not delete {}", "failed:".red(), path.display());
                Ok(ExitCode::FAILURE)
            }
        }

        Commands::Mime { file } => {
            println!("{}", ExtendedFile::new(file).mime_type()?);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Ext { file, compound } => {
            let file = ExtendedFile::new(file);
            let extension = if compound { file.compound_extension() } else { file.extension() };
            println!("{}", extension);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Algorithms { json } => {
            let algorithms = HashAlgorithm::list_algorithms();
            if json {
                println!("{}", serde_json::to_string_pretty(&algorithms)?);
            } else {
                for info in algorithms {
                    let marker = if info.cryptographic { "" } else { " (non-cryptographic)" };
                    println!(
                        "{:<12} {:>3} bits  {}{}",
                        info.name,
                        info.output_bits,
                        info.aliases.join(", "),
                        marker
                    );
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn resolve_algorithm(name: Option<&str>, config: &Config) -> Result<HashAlgorithm> {
    match name {
        Some(name) => Ok(HashAlgorithm::select(name)?),
        None => Ok(config.default_algorithm),
    }
}
