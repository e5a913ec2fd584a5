//! qmul Command-Line Interface
//!
//! Builds Quantum Fourier Transform circuits and the register layout of a
//! QFT-based multiplier, and checks them on a statevector simulator.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{multiply, qft, simulate, version};
use config::{Config, OutputFormat};

/// qmul - QFT circuit construction for quantum multiplication
#[derive(Parser)]
#[command(name = "qmul")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (YAML)
    #[arg(long, global = true, env = "QMUL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a Quantum Fourier Transform circuit
    Qft {
        /// Number of qubits
        #[arg(short = 'n', long)]
        qubits: u32,

        /// Build the inverse transform instead
        #[arg(long)]
        inverse: bool,

        /// Output format
        #[arg(short, long, value_enum, env = "QMUL_FORMAT")]
        format: Option<OutputFormat>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Encode two operands and transform the product register
    Multiply {
        /// First operand
        a: u64,

        /// Second operand
        b: u64,

        /// Output format
        #[arg(short, long, value_enum, env = "QMUL_FORMAT")]
        format: Option<OutputFormat>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Simulate the QFT of a basis state and print the amplitudes
    Simulate {
        /// Number of qubits
        #[arg(short = 'n', long)]
        qubits: u32,

        /// Input basis state |k⟩
        #[arg(short, long, default_value = "0")]
        basis_state: u64,

        /// Simulate the inverse transform instead
        #[arg(long)]
        inverse: bool,
    },

    /// Show version information
    Version,
}

/// Log filter: `-v` flags, then `RUST_LOG`, then the config file, then `warn`.
fn log_filter(verbose: u8, config: &Config) -> EnvFilter {
    let level = match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };
    if let Some(level) = level {
        return EnvFilter::new(level);
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(config.logging.level.as_deref().unwrap_or("warn"))
}

fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    match cli.command {
        Commands::Qft {
            qubits,
            inverse,
            format,
            output,
        } => qft::execute(
            qubits,
            inverse,
            format.unwrap_or(config.output.format),
            output.as_deref(),
            &config.qft,
        ),

        Commands::Multiply {
            a,
            b,
            format,
            output,
        } => multiply::execute(
            a,
            b,
            format.unwrap_or(config.output.format),
            output.as_deref(),
        ),

        Commands::Simulate {
            qubits,
            basis_state,
            inverse,
        } => simulate::execute(qubits, basis_state, inverse, &config.simulate),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, &config))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &config) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_qft() {
        let cli = Cli::try_parse_from(["qmul", "qft", "-n", "4", "--format", "qasm2"]).unwrap();
        match cli.command {
            Commands::Qft {
                qubits,
                inverse,
                format,
                output,
            } => {
                assert_eq!(qubits, 4);
                assert!(!inverse);
                assert_eq!(format, Some(OutputFormat::Qasm2));
                assert!(output.is_none());
            }
            _ => panic!("expected qft"),
        }
    }

    #[test]
    fn test_parse_qft_requires_qubits() {
        assert!(Cli::try_parse_from(["qmul", "qft"]).is_err());
    }

    #[test]
    fn test_parse_multiply() {
        let cli = Cli::try_parse_from(["qmul", "-vv", "multiply", "6", "7", "-o", "m.json"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Multiply { a, b, output, .. } => {
                assert_eq!((a, b), (6, 7));
                assert_eq!(output, Some(PathBuf::from("m.json")));
            }
            _ => panic!("expected multiply"),
        }
    }

    #[test]
    fn test_parse_multiply_rejects_negative() {
        assert!(Cli::try_parse_from(["qmul", "multiply", "-3", "2"]).is_err());
    }

    #[test]
    fn test_parse_simulate_defaults() {
        let cli = Cli::try_parse_from(["qmul", "simulate", "--qubits", "3"]).unwrap();
        match cli.command {
            Commands::Simulate {
                qubits,
                basis_state,
                inverse,
            } => {
                assert_eq!(qubits, 3);
                assert_eq!(basis_state, 0);
                assert!(!inverse);
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn test_parse_global_config() {
        let cli =
            Cli::try_parse_from(["qmul", "version", "--config", "/tmp/qmul.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/qmul.yaml")));
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["qmul", "qft", "-n", "2", "-f", "svg"]).is_err());
    }

    #[test]
    fn test_verbose_overrides_config_level() {
        let mut config = Config::default();
        config.logging.level = Some("error".into());
        assert_eq!(log_filter(3, &config).to_string(), "trace");
    }
}
