//! Simulate command implementation.

use std::f64::consts::PI;

use anyhow::{Context, Result};
use console::style;
use num_complex::Complex64;
use tracing::info;

use qmul_sim::Statevector;

use super::qft::build;
use crate::config::SimulateConfig;

/// Rows printed before the listing is cut short.
const MAX_ROWS: usize = 32;

/// Amplitude of `|y⟩` in `QFT|x⟩` (or its inverse) on `n` qubits.
pub fn fourier_amplitude(n: u32, x: u64, y: u64, inverse: bool) -> Complex64 {
    let dim = 2f64.powi(n as i32);
    let sign = if inverse { -1.0 } else { 1.0 };
    let phase = sign * 2.0 * PI * ((x as u128 * y as u128) % (1u128 << n)) as f64 / dim;
    Complex64::from_polar(1.0 / dim.sqrt(), phase)
}

/// Largest distance between the simulated state and the closed-form transform.
pub fn max_deviation(state: &Statevector, basis_state: u64, inverse: bool) -> f64 {
    let n = state.num_qubits() as u32;
    state
        .amplitudes()
        .iter()
        .enumerate()
        .map(|(y, amp)| (amp - fourier_amplitude(n, basis_state, y as u64, inverse)).norm())
        .fold(0.0, f64::max)
}

/// Execute the simulate command.
pub fn execute(
    qubits: u32,
    basis_state: u64,
    inverse: bool,
    config: &SimulateConfig,
) -> Result<()> {
    if qubits > config.max_qubits {
        anyhow::bail!(
            "Refusing to simulate {qubits} qubits (simulate.max_qubits = {})",
            config.max_qubits
        );
    }

    let circuit = build(qubits, inverse)?;
    eprintln!(
        "{} Simulating {} on |{}⟩ ({} qubits)",
        style("→").cyan().bold(),
        circuit.name(),
        style(basis_state).yellow(),
        qubits
    );

    let state = Statevector::run_from(&circuit, basis_state).context("Simulation failed")?;
    let deviation = max_deviation(&state, basis_state, inverse);
    info!(qubits, basis_state, deviation, "simulated");

    let precision = config.precision;
    let width = qubits as usize;
    println!(
        "{:>8}  {:>width$}  {:>w$}  {:>w$}  {:>w$}",
        "index",
        "bits",
        "re",
        "im",
        "prob",
        width = width.max(4),
        w = precision + 3
    );
    for (index, amp) in state.amplitudes().iter().enumerate().take(MAX_ROWS) {
        println!(
            "{:>8}  {:>width$}  {:>w$.precision$}  {:>w$.precision$}  {:>w$.precision$}",
            index,
            format!("{index:0width$b}", width = width),
            amp.re,
            amp.im,
            amp.norm_sqr(),
            width = width.max(4),
            w = precision + 3,
        );
    }
    let total = state.amplitudes().len();
    if total > MAX_ROWS {
        println!("  ... and {} more amplitudes", total - MAX_ROWS);
    }

    let marker = if deviation < 1e-9 {
        style("✓").green().bold()
    } else {
        style("✗").red().bold()
    };
    println!(
        "\n{marker} Max deviation from closed-form transform: {deviation:.3e}"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourier_amplitude() {
        let amp = fourier_amplitude(2, 1, 1, false);
        assert!((amp - Complex64::new(0.0, 0.5)).norm() < 1e-12);
        let amp = fourier_amplitude(2, 1, 1, true);
        assert!((amp - Complex64::new(0.0, -0.5)).norm() < 1e-12);
    }

    #[test]
    fn test_simulated_qft_matches_closed_form() {
        for inverse in [false, true] {
            let circuit = build(4, inverse).unwrap();
            for x in 0..16 {
                let state = Statevector::run_from(&circuit, x).unwrap();
                assert!(max_deviation(&state, x, inverse) < 1e-9, "x={x}");
            }
        }
    }

    #[test]
    fn test_respects_max_qubits() {
        let config = SimulateConfig {
            max_qubits: 4,
            precision: 6,
        };
        let err = execute(5, 0, false, &config).unwrap_err();
        assert!(err.to_string().contains("max_qubits"));
    }

    #[test]
    fn test_basis_state_out_of_range() {
        let err = execute(2, 9, false, &SimulateConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("out of range"));
    }
}
