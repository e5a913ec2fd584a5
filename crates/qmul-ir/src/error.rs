//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors raised while appending instructions to a circuit.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not allocated in the circuit.
    #[error("Qubit {qubit} not found in circuit{}", format_gate_context(.gate_name))]
    QubitNotFound {
        qubit: QubitId,
        gate_name: Option<String>,
    },

    /// Classical bit not allocated in the circuit.
    #[error("Classical bit {clbit} not found in circuit{}", format_gate_context(.gate_name))]
    ClbitNotFound {
        clbit: ClbitId,
        gate_name: Option<String>,
    },

    /// The same qubit appears twice in one instruction.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        qubit: QubitId,
        gate_name: Option<String>,
    },

    /// Gate applied to the wrong number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        gate_name: String,
        expected: u32,
        got: u32,
    },

    /// Rotation angle is NaN or infinite.
    #[error("Gate '{gate_name}' has non-finite angle {angle}")]
    NonFiniteAngle { gate_name: String, angle: f64 },

    /// Wire ids must equal their position in the wire list.
    #[error("Wire at position {position} has id {id}")]
    MisnumberedWire { position: usize, id: u32 },

    /// Serialized circuit could not be parsed.
    #[error("Invalid circuit JSON: {0}")]
    Json(String),
}

#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_gate_context() {
        let err = IrError::QubitNotFound {
            qubit: QubitId(4),
            gate_name: Some("cp".into()),
        };
        assert_eq!(err.to_string(), "Qubit q4 not found in circuit (gate: cp)");

        let err = IrError::DuplicateQubit {
            qubit: QubitId(1),
            gate_name: None,
        };
        assert_eq!(err.to_string(), "Duplicate qubit q1 in operation");

        let err = IrError::MisnumberedWire { position: 0, id: 3 };
        assert_eq!(err.to_string(), "Wire at position 0 has id 3");
    }
}
