//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qmul_ir::Circuit;
use qmul_qasm::{emit, emit_qasm2};

use crate::config::OutputFormat;

/// One-line description of a circuit's size.
pub fn summary(circuit: &Circuit) -> String {
    let ops = circuit
        .count_ops()
        .iter()
        .map(|(name, count)| format!("{name}={count}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{}: {} qubits, {} clbits, {} instructions, depth {} [{ops}]",
        circuit.name(),
        circuit.num_qubits(),
        circuit.num_clbits(),
        circuit.len(),
        circuit.depth()
    )
}

/// Render a circuit in the requested format.
pub fn render(circuit: &Circuit, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n\n{}", summary(circuit), circuit.draw())),
        OutputFormat::Qasm3 => emit(circuit).context("Failed to emit OpenQASM 3"),
        OutputFormat::Qasm2 => emit_qasm2(circuit).context("Failed to emit OpenQASM 2"),
        OutputFormat::Json => {
            let mut json = circuit.to_json().context("Failed to serialize circuit")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write rendered output to `output`, or to stdout when absent.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            eprintln!(
                "{} Wrote {}",
                style("✓").green().bold(),
                style(path.display()).green()
            );
        }
        None => print!("{content}"),
    }
    Ok(())
}
