//! Error types for the QASM emitters.

use thiserror::Error;

/// Errors that can occur while emitting QASM.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmitError {
    #[error("Measurement has {qubits} qubits but {clbits} classical bits")]
    MeasureArity { qubits: usize, clbits: usize },

    #[error("Cannot emit non-finite angle {angle} for '{gate_name}'")]
    NonFiniteAngle { gate_name: String, angle: f64 },

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result type for emission.
pub type EmitResult<T> = Result<T, EmitError>;
