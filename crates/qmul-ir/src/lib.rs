//! qmul Circuit Representation
//!
//! This crate provides the circuit type that the QFT and multiplier builders
//! append to. A [`Circuit`] owns its allocated qubits and classical bits and
//! an ordered list of [`Instruction`]s. Append order is the program order:
//! instructions are validated when appended and never reordered afterwards.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`], optionally
//!   grouped into named registers
//! - **Gates**: [`StandardGate`] (X, H, P, CP, SWAP)
//! - **Instructions**: [`Instruction`] combining a gate with its operands
//! - **Circuit**: [`Circuit`] fluent builder with depth, op counts, JSON and a
//!   text drawer
//!
//! # Example
//!
//! ```rust
//! use qmul_ir::{Circuit, QubitId};
//! use std::f64::consts::PI;
//!
//! let mut circuit = Circuit::with_size("qft2", 2, 0);
//! circuit
//!     .h(QubitId(1))?
//!     .cp(PI / 2.0, QubitId(0), QubitId(1))?
//!     .h(QubitId(0))?
//!     .swap(QubitId(0), QubitId(1))?;
//!
//! assert_eq!(circuit.len(), 4);
//! println!("{}", circuit.draw());
//! # Ok::<(), qmul_ir::IrError>(())
//! ```

pub mod angle;
pub mod circuit;
pub mod draw;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use angle::PiFraction;
pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
