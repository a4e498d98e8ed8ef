use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use sigprint::commands::check::CheckResult;

#[derive(Parser)]
#[command(name = "sigprint")]
#[command(about = "Fingerprints for package signing certificates and signatures")]
#[command(version)]
struct Cli {
    /// Log diagnostics (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SHA-256 fingerprint of a DER or PEM certificate
    Certificate {
        /// Certificate file
        file: PathBuf,
        /// Print a JSON report instead of the bare fingerprint
        #[arg(long)]
        json: bool,
    },
    /// Print the MD5 checksum of a signature
    Signature {
        /// Signature bytes as hex characters
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,
        /// Read the signature hex characters from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Check if a certificate matches a fingerprint
    Check {
        /// Expected fingerprint (uppercase hex)
        fingerprint: String,
        /// Certificate file
        file: PathBuf,
    },
    /// Compare two certificates by fingerprint
    Compare {
        /// First certificate
        file1: PathBuf,
        /// Second certificate
        file2: PathBuf,
    },
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Certificate { file, json } => {
            match sigprint::commands::certificate::run(&file) {
                Ok(report) => {
                    if json {
                        match serde_json::to_string_pretty(&report) {
                            Ok(out) => println!("{}", out),
                            Err(e) => {
                                eprintln!("Error: {}", e);
                                process::exit(2);
                            }
                        }
                    } else if report.is_available() {
                        println!("{}", report.fingerprint);
                    } else {
                        println!(
                            "Fingerprint unavailable: {}",
                            report.reason.as_deref().unwrap_or("unknown")
                        );
                    }
                    if !report.is_available() {
                        process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
        Commands::Signature { text, file } => {
            let result = match file {
                Some(file) => sigprint::commands::signature::run_file(&file),
                None => sigprint::commands::signature::run(text.as_deref().unwrap_or_default()),
            };
            match result {
                Ok(hash) => println!("{}", hash),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
        Commands::Check { fingerprint, file } => {
            match sigprint::commands::check::run(&fingerprint, &file) {
                Ok(CheckResult::Match) => {
                    println!("Fingerprint match");
                }
                Ok(CheckResult::NoMatch { actual }) => {
                    println!("Fingerprints differ");
                    println!("Expected fingerprint: {}", fingerprint);
                    println!("Actual fingerprint: {}", actual);
                    process::exit(1);
                }
                Ok(CheckResult::Unavailable(reason)) => {
                    println!("Fingerprint unavailable: {}", reason);
                    process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
        Commands::Compare { file1, file2 } => {
            match sigprint::commands::compare::run(&file1, &file2) {
                Ok(result) => {
                    for report in [&result.first, &result.second] {
                        match &report.reason {
                            None => println!("{}: {}", report.file, report.fingerprint),
                            Some(reason) => println!("{}: unavailable ({})", report.file, reason),
                        }
                    }
                    if result.matches {
                        println!("Certificates match");
                    } else {
                        println!("Certificates differ");
                        process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
    }
}
