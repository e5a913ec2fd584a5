//! OpenQASM output for qmul circuits.
//!
//! Two dialects are supported:
//!
//! - [`emit`]: OpenQASM 3.0 against `stdgates.inc`
//! - [`emit_qasm2`]: OpenQASM 2.0 against `qelib1.inc`, with `p`/`cp`
//!   written as `u1`/`cu1`
//!
//! Angles of the form `±π/2^k` are printed as exact fractions.
//!
//! ```rust
//! use qmul_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("demo", 2, 0);
//! circuit.h(QubitId(1))?.cp(std::f64::consts::FRAC_PI_2, QubitId(0), QubitId(1))?;
//! let qasm = qmul_qasm::emit(&circuit)?;
//! assert!(qasm.contains("cp(pi/2) q[0], q[1];"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod emitter;
pub mod error;

pub use emitter::{emit, emit_qasm2};
pub use error::{EmitError, EmitResult};
