//! Simulator errors.

use thiserror::Error;

/// Errors raised by the statevector simulator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SimError {
    /// The state would not fit in memory.
    #[error("Cannot simulate {requested} qubits, limit is {max}")]
    TooManyQubits { requested: usize, max: usize },

    /// Basis state index outside `0..2^n`.
    #[error("Basis state {state} out of range for {num_qubits} qubits")]
    BasisStateOutOfRange { state: u64, num_qubits: usize },

    /// Gate arity or qubit index does not fit the state.
    #[error("Invalid operands {qubits:?} for '{gate_name}' on {num_qubits} qubits")]
    InvalidOperands {
        gate_name: String,
        qubits: Vec<usize>,
        num_qubits: usize,
    },

    /// Circuit and statevector disagree on qubit count.
    #[error("Circuit has {circuit} qubits but statevector has {state}")]
    WidthMismatch { circuit: usize, state: usize },
}

/// Result type for simulation.
pub type SimResult<T> = Result<T, SimError>;
