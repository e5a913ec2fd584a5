//! Error types for circuit arithmetic.

use qmul_ir::IrError;
use thiserror::Error;

/// Errors that can occur while building QFT or multiplier circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArithError {
    /// The register has fewer slots than the transform needs.
    #[error("Insufficient qubits: need {needed}, have {available}")]
    InsufficientQubits { needed: usize, available: usize },

    /// A local index does not address a slot of the register.
    #[error("Index {index} out of bounds for register of width {width}")]
    IndexOutOfBounds { index: usize, width: usize },

    /// An operand does not fit the supported operand width.
    #[error("Operand {value} needs {bits} bits, at most {max_bits} are supported")]
    OperandTooWide { value: u64, bits: u32, max_bits: u32 },

    /// The underlying circuit rejected an instruction.
    #[error("Circuit error: {0}")]
    Circuit(#[from] IrError),
}

/// Result type for arithmetic circuit construction.
pub type ArithResult<T> = Result<T, ArithError>;
