//! qmul Circuit Arithmetic
//!
//! Builders that append arithmetic building blocks to a register:
//!
//! - [`build_qft`] / [`build_inverse_qft`]: the Quantum Fourier Transform and
//!   its adjoint on the leading `n` slots of any [`PhaseRegister`]
//! - [`MultiplierLayout`]: operand encoding and product-register QFT for a
//!   QFT-based multiplier
//!
//! Builders only depend on the [`PhaseRegister`] capability. A
//! [`qmul_ir::Circuit`] is a register whose slots are its qubits;
//! [`RegisterView`] addresses an arbitrary subset of a circuit's qubits.

pub mod error;
pub mod multiplier;
pub mod qft;
pub mod register;

pub use error::{ArithError, ArithResult};
pub use multiplier::{MAX_OPERAND_BITS, MultiplierLayout, bit_width};
pub use qft::{
    QftGateCounts, build_inverse_qft, build_qft, controlled_phase_angle, qft_rotations,
    swap_registers,
};
pub use register::{PhaseRegister, RegisterView};
