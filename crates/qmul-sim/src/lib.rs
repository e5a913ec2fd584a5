//! qmul Statevector Simulator
//!
//! Dense statevector simulation of [`qmul_ir::Circuit`]s, used to check that
//! generated circuits implement the intended unitary.
//!
//! ```rust
//! use qmul_ir::{Circuit, QubitId};
//! use qmul_sim::Statevector;
//!
//! let mut circuit = Circuit::with_size("flip", 2, 0);
//! circuit.x(QubitId(1))?;
//! let state = Statevector::run(&circuit)?;
//! assert!((state.probabilities()[0b10] - 1.0).abs() < 1e-12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use statevector::{MAX_QUBITS, Statevector};
