use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use cyrillic_caesar::{ALPHABET_SIZE, CandidateSet, brute_force_decrypt, decrypt, encrypt, rank};
use tracing::{Level, debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Command-line arguments for the Cyrillic Caesar cipher program.
#[derive(Parser, Debug)]
#[command(version, about = "Caesar cipher for Cyrillic text")]
struct Cli {
    /// Path to the input file
    #[arg(short, long, help = "Path to the input file")]
    file: PathBuf,

    /// Path to the output file where the result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: PathBuf,

    /// Mode of operation
    #[arg(short, long, value_enum, help = "Mode of operation (encrypt/decrypt/brute-force)")]
    mode: OperationMode,

    /// Shift for encrypt and decrypt; may be negative
    #[arg(short, long, allow_hyphen_values = true, help = "Key for the cipher (shift)")]
    key: Option<i32>,

    /// Sample plain text used to pick the shift automatically in brute-force mode
    #[arg(short, long, help = "Path to a reference text file (brute-force only)")]
    reference: Option<PathBuf>,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OperationMode {
    /// Encrypt with a known key
    Encrypt,
    /// Decrypt with a known key
    Decrypt,
    /// Try every key, scored against a reference text or chosen interactively
    BruteForce,
}

/// Main entry point for the Cyrillic Caesar cipher program.
fn main() -> Result<()> {
    // Logs go to stderr; stdout carries results and the candidate listing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli: Cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&cli, &mut stdin.lock(), &mut stdout.lock())
}

/// Executes the selected mode.
///
/// `input` is only read in brute-force mode without a usable reference, to
/// obtain the shift chosen by the user. All messages go to `output`.
fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, output: &mut W) -> Result<()> {
    let content: String = read_input(&cli.file)?;

    match cli.mode {
        OperationMode::Encrypt | OperationMode::Decrypt => {
            let Some(key) = cli.key else {
                bail!("A key (--key) is required to encrypt or decrypt");
            };

            let (result, verb) = if cli.mode == OperationMode::Encrypt {
                info!(key, "Encrypting");
                (encrypt(&content, key), "encrypted")
            } else {
                info!(key, "Decrypting");
                (decrypt(&content, key), "decrypted")
            };

            write_output(&cli.output, &result)?;
            writeln!(output, "Text {} and saved to {}", verb, cli.output.display())?;
        }
        OperationMode::BruteForce => {
            if cli.key.is_some() {
                warn!("--key is ignored in brute-force mode");
            }

            let reference: Option<String> = read_reference(cli.reference.as_deref())?;
            if let Some(reference) = &reference {
                log_ranking(&content, reference);
            }

            let mut prompt_error: Option<io::Error> = None;
            let result = brute_force_decrypt(&content, reference.as_deref(), |candidates| {
                prompt_selection(candidates, input, output).unwrap_or_else(|err| {
                    prompt_error = Some(err);
                    None
                })
            });

            if let Some(err) = prompt_error {
                return Err(err).context("Failed to read the shift selection");
            }
            let decrypted = result.context("Could not determine the correct shift")?;

            write_output(&cli.output, &decrypted.text)?;
            writeln!(
                output,
                "Text decrypted with key {} and saved to {}",
                decrypted.shift,
                cli.output.display()
            )?;
            writeln!(output, "Decrypted text: {}", decrypted.text)?;
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("Input file not found: {}", path.display());
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Reads the reference text. A path that does not exist falls back to interactive selection.
fn read_reference(path: Option<&Path>) -> Result<Option<String>> {
    match path {
        Some(path) if path.exists() => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read reference {}", path.display()))?;
            Ok(Some(text))
        }
        Some(path) => {
            warn!(path = %path.display(), "Reference file not found, falling back to manual selection");
            Ok(None)
        }
        None => Ok(None),
    }
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}

fn log_ranking(content: &str, reference: &str) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    // An empty reference is reported by brute_force_decrypt itself
    if let Ok(ranking) = rank(content, reference) {
        for (shift, distance) in ranking {
            debug!(shift, distance, "Candidate score");
        }
    }
}

/// Lists every candidate and asks the user which shift is correct.
///
/// # Returns
///
/// The parsed shift, or `None` on end of input or a non-numeric answer.
/// Range checking is left to the caller.
fn prompt_selection<R: BufRead, W: Write>(
    candidates: &CandidateSet,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<i32>> {
    writeln!(output, "All possible decryptions:")?;
    for candidate in candidates.iter() {
        writeln!(output, "Shift {}: {}", candidate.shift, candidate.text)?;
    }

    writeln!(output, "Enter the shift (0-{}) that looks correct:", ALPHABET_SIZE - 1)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(parse_selection(&line))
}

fn parse_selection(line: &str) -> Option<i32> {
    line.trim().parse().ok()
}
