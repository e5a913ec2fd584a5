//! Multiply command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qmul_arith::MultiplierLayout;

use super::common::{render, write_output};
use crate::config::OutputFormat;

/// Execute the multiply command.
pub fn execute(a: u64, b: u64, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let layout = MultiplierLayout::new(a, b).context("Invalid operands")?;

    eprintln!(
        "{} Preparing multiplier for {} × {}",
        style("→").cyan().bold(),
        style(a).yellow(),
        style(b).yellow()
    );
    for line in describe(&layout) {
        eprintln!("  {line}");
    }

    let circuit = layout.prepare().context("Failed to prepare multiplier")?;
    eprintln!(
        "  {} The controlled-rotation stage is not generated; the circuit ends after the product-register QFT",
        style("note:").yellow().bold()
    );

    write_output(&render(&circuit, format)?, output)
}

/// Human-readable description of a multiplier layout.
pub fn describe(layout: &MultiplierLayout) -> Vec<String> {
    let range = |r: std::ops::Range<u32>| format!("q[{}..{}]", r.start, r.end);
    vec![
        format!("Operand width: {} bits", layout.operand_bits()),
        format!(
            "a    = {} ({}) on {}",
            layout.a(),
            layout.padded_binary(layout.a()),
            range(layout.a_range())
        ),
        format!(
            "b    = {} ({}) on {}",
            layout.b(),
            layout.padded_binary(layout.b()),
            range(layout.b_range())
        ),
        format!(
            "prod = {} qubits on {}, {} classical bits",
            layout.product_range().len(),
            range(layout.product_range()),
            layout.num_clbits()
        ),
        format!(
            "Total: {} qubits, expected product {}",
            layout.num_qubits(),
            layout.expected_product()
        ),
    ]
}
