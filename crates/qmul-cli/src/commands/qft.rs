//! QFT command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use qmul_arith::{QftGateCounts, build_inverse_qft, build_qft};
use qmul_ir::Circuit;

use super::common::{render, write_output};
use crate::config::{OutputFormat, QftConfig};

/// Build the (inverse) QFT circuit on `qubits` qubits.
pub fn build(qubits: u32, inverse: bool) -> Result<Circuit> {
    let name = if inverse { "inverse_qft" } else { "qft" };
    let mut circuit = Circuit::with_size(name, qubits, 0);
    let n = qubits as usize;
    let built = if inverse {
        build_inverse_qft(&mut circuit, n).map(|_| ())
    } else {
        build_qft(&mut circuit, n).map(|_| ())
    };
    built.with_context(|| format!("Failed to build {name} on {qubits} qubits"))?;
    Ok(circuit)
}

/// Execute the qft command.
pub fn execute(
    qubits: u32,
    inverse: bool,
    format: OutputFormat,
    output: Option<&Path>,
    config: &QftConfig,
) -> Result<()> {
    if qubits > config.max_qubits {
        anyhow::bail!(
            "Refusing to build a QFT on {qubits} qubits (qft.max_qubits = {})",
            config.max_qubits
        );
    }

    eprintln!(
        "{} Building {}QFT on {} qubits",
        style("→").cyan().bold(),
        if inverse { "inverse " } else { "" },
        style(qubits).yellow()
    );

    let circuit = build(qubits, inverse)?;
    let counts = QftGateCounts::for_width(qubits as usize);
    info!(
        qubits,
        inverse,
        hadamards = counts.hadamards,
        controlled_phases = counts.controlled_phases,
        swaps = counts.swaps,
        "built qft"
    );
    eprintln!(
        "  {} H, {} CP, {} SWAP, depth {}",
        counts.hadamards,
        counts.controlled_phases,
        counts.swaps,
        circuit.depth()
    );

    write_output(&render(&circuit, format)?, output)
}
