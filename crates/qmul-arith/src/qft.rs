//! Quantum Fourier Transform construction.
//!
//! The transform on the first `n` slots of a register is emitted in two
//! stages:
//!
//! 1. **Rotations.** For each level `k` from `n - 1` down to `0`: a Hadamard
//!    on slot `k`, then for every `q < k` (ascending) a controlled phase of
//!    `π / 2^(k - q)` with control `q` and target `k`.
//! 2. **Swaps.** Slot `i` is swapped with slot `n - i - 1` for
//!    `i < n / 2`, reversing the output order.
//!
//! The gate sequence is deterministic and is appended exactly in this order.
//!
//! ```rust
//! use qmul_arith::build_qft;
//! use qmul_ir::Circuit;
//!
//! let mut circuit = Circuit::with_size("qft", 4, 0);
//! build_qft(&mut circuit, 4)?;
//! assert_eq!(circuit.len(), 4 + 6 + 2);
//! # Ok::<(), qmul_arith::ArithError>(())
//! ```

use std::f64::consts::PI;

use tracing::{debug, instrument};

use crate::error::{ArithError, ArithResult};
use crate::register::PhaseRegister;

/// Expected gate counts of an `n`-qubit QFT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QftGateCounts {
    /// One per level, `n`.
    pub hadamards: usize,
    /// `n(n-1)/2`.
    pub controlled_phases: usize,
    /// `floor(n/2)`.
    pub swaps: usize,
}

impl QftGateCounts {
    /// Counts for a transform on `n` slots.
    pub fn for_width(n: usize) -> Self {
        Self {
            hadamards: n,
            controlled_phases: n * n.saturating_sub(1) / 2,
            swaps: n / 2,
        }
    }

    /// Gates emitted by the rotation stage: `n + n(n-1)/2`.
    pub fn rotation_gates(&self) -> usize {
        self.hadamards + self.controlled_phases
    }

    pub fn total(&self) -> usize {
        self.rotation_gates() + self.swaps
    }
}

/// Phase angle between target level `k` and control `q < k`: `π / 2^(k-q)`.
pub fn controlled_phase_angle(k: usize, q: usize) -> f64 {
    debug_assert!(q < k, "control must precede target");
    let distance = i32::try_from(k - q).unwrap_or(i32::MAX);
    PI / 2f64.powi(distance)
}

fn check_width<R: PhaseRegister + ?Sized>(register: &R, n: usize) -> ArithResult<()> {
    let available = register.width();
    if n > available {
        return Err(ArithError::InsufficientQubits {
            needed: n,
            available,
        });
    }
    Ok(())
}

// Caller has checked the width.
fn append_rotations<R: PhaseRegister + ?Sized>(register: &mut R, n: usize) -> ArithResult<()> {
    for k in (0..n).rev() {
        debug!(level = k, controls = k, "qft rotation level");
        register.add_hadamard(k)?;
        for q in 0..k {
            register.add_controlled_phase(controlled_phase_angle(k, q), q, k)?;
        }
    }
    Ok(())
}

// Caller has checked the width.
fn append_swaps<R: PhaseRegister + ?Sized>(register: &mut R, n: usize) -> ArithResult<()> {
    for i in 0..n / 2 {
        debug!(a = i, b = n - i - 1, "qft swap");
        register.add_swap(i, n - i - 1)?;
    }
    Ok(())
}

/// Append the rotation stage of the QFT on slots `0..n`.
#[instrument(skip(register), level = "debug")]
pub fn qft_rotations<R: PhaseRegister + ?Sized>(register: &mut R, n: usize) -> ArithResult<&mut R> {
    check_width(register, n)?;
    append_rotations(register, n)?;
    Ok(register)
}

/// Append the bit-reversal swap stage on slots `0..n`.
#[instrument(skip(register), level = "debug")]
pub fn swap_registers<R: PhaseRegister + ?Sized>(
    register: &mut R,
    n: usize,
) -> ArithResult<&mut R> {
    check_width(register, n)?;
    append_swaps(register, n)?;
    Ok(register)
}

/// Append a full QFT on the first `n` slots of `register`.
///
/// Fails with [`ArithError::InsufficientQubits`] before appending anything
/// if the register has fewer than `n` slots. `n == 0` appends nothing.
/// Calling this twice appends two independent transforms.
#[instrument(skip(register), level = "debug")]
pub fn build_qft<R: PhaseRegister + ?Sized>(register: &mut R, n: usize) -> ArithResult<&mut R> {
    check_width(register, n)?;
    append_rotations(register, n)?;
    append_swaps(register, n)?;
    Ok(register)
}

/// Append the inverse QFT on the first `n` slots of `register`.
///
/// This is the gate-by-gate adjoint of [`build_qft`]: the swap stage first,
/// then the rotation levels in ascending order with negated angles, each
/// level's phases in descending control order followed by its Hadamard.
#[instrument(skip(register), level = "debug")]
pub fn build_inverse_qft<R: PhaseRegister + ?Sized>(
    register: &mut R,
    n: usize,
) -> ArithResult<&mut R> {
    check_width(register, n)?;

    for i in (0..n / 2).rev() {
        register.add_swap(i, n - i - 1)?;
    }

    for k in 0..n {
        debug!(level = k, "inverse qft rotation level");
        for q in (0..k).rev() {
            register.add_controlled_phase(-controlled_phase_angle(k, q), q, k)?;
        }
        register.add_hadamard(k)?;
    }

    Ok(register)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Gate recorded by [`Recorder`].
    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        H(usize),
        Cp(f64, usize, usize),
        Swap(usize, usize),
    }

    /// Register that only logs calls.
    #[derive(Debug)]
    struct Recorder {
        width: usize,
        width_queries: Cell<usize>,
        ops: Vec<Op>,
    }

    impl Recorder {
        fn new(width: usize) -> Self {
            Self {
                width,
                width_queries: Cell::new(0),
                ops: vec![],
            }
        }
    }

    impl PhaseRegister for Recorder {
        fn width(&self) -> usize {
            self.width_queries.set(self.width_queries.get() + 1);
            self.width
        }

        fn add_hadamard(&mut self, index: usize) -> ArithResult<()> {
            self.ops.push(Op::H(index));
            Ok(())
        }

        fn add_controlled_phase(
            &mut self,
            angle: f64,
            control: usize,
            target: usize,
        ) -> ArithResult<()> {
            self.ops.push(Op::Cp(angle, control, target));
            Ok(())
        }

        fn add_swap(&mut self, a: usize, b: usize) -> ArithResult<()> {
            self.ops.push(Op::Swap(a, b));
            Ok(())
        }
    }

    #[test]
    fn test_zero_width_is_noop() {
        let mut reg = Recorder::new(3);
        build_qft(&mut reg, 0).unwrap();
        assert!(reg.ops.is_empty());
    }

    #[test]
    fn test_single_qubit() {
        let mut reg = Recorder::new(1);
        build_qft(&mut reg, 1).unwrap();
        assert_eq!(reg.ops, vec![Op::H(0)]);
    }

    #[test]
    fn test_two_qubit_sequence() {
        let mut reg = Recorder::new(2);
        build_qft(&mut reg, 2).unwrap();
        assert_eq!(
            reg.ops,
            vec![Op::H(1), Op::Cp(PI / 2.0, 0, 1), Op::H(0), Op::Swap(0, 1)]
        );
    }

    #[test]
    fn test_three_qubit_sequence() {
        let mut reg = Recorder::new(3);
        build_qft(&mut reg, 3).unwrap();
        assert_eq!(
            reg.ops,
            vec![
                Op::H(2),
                Op::Cp(PI / 4.0, 0, 2),
                Op::Cp(PI / 2.0, 1, 2),
                Op::H(1),
                Op::Cp(PI / 2.0, 0, 1),
                Op::H(0),
                Op::Swap(0, 2),
            ]
        );
    }

    #[test]
    fn test_only_leading_slots_touched() {
        let mut reg = Recorder::new(6);
        build_qft(&mut reg, 4).unwrap();
        let max_index = reg
            .ops
            .iter()
            .map(|op| match *op {
                Op::H(i) => i,
                Op::Cp(_, c, t) => c.max(t),
                Op::Swap(a, b) => a.max(b),
            })
            .max()
            .unwrap();
        assert_eq!(max_index, 3);
    }

    #[test]
    fn test_insufficient_width_appends_nothing() {
        let mut reg = Recorder::new(2);
        let err = build_qft(&mut reg, 3).unwrap_err();
        assert!(matches!(
            err,
            ArithError::InsufficientQubits {
                needed: 3,
                available: 2
            }
        ));
        assert!(reg.ops.is_empty());
    }

    #[test]
    fn test_not_idempotent() {
        let mut reg = Recorder::new(3);
        build_qft(&mut reg, 3).unwrap();
        let once = reg.ops.clone();
        build_qft(&mut reg, 3).unwrap();
        assert_eq!(reg.ops.len(), 2 * once.len());
        assert_eq!(&reg.ops[once.len()..], once.as_slice());
    }

    #[test]
    fn test_stages_compose() {
        let mut staged = Recorder::new(4);
        qft_rotations(&mut staged, 4).unwrap();
        swap_registers(&mut staged, 4).unwrap();

        let mut full = Recorder::new(4);
        build_qft(&mut full, 4).unwrap();
        assert_eq!(staged.ops, full.ops);
    }

    #[test]
    fn test_full_build_checks_width_once() {
        let mut reg = Recorder::new(5);
        build_qft(&mut reg, 5).unwrap();
        assert_eq!(reg.width_queries.get(), 1);
        assert_eq!(reg.ops.len(), QftGateCounts::for_width(5).total());

        let mut reg = Recorder::new(5);
        build_inverse_qft(&mut reg, 5).unwrap();
        assert_eq!(reg.width_queries.get(), 1);
    }

    #[test]
    fn test_inverse_is_reversed_adjoint() {
        let mut forward = Recorder::new(4);
        build_qft(&mut forward, 4).unwrap();
        let mut inverse = Recorder::new(4);
        build_inverse_qft(&mut inverse, 4).unwrap();

        let adjoint: Vec<Op> = forward
            .ops
            .iter()
            .rev()
            .map(|op| match *op {
                Op::Cp(angle, c, t) => Op::Cp(-angle, c, t),
                ref other => other.clone(),
            })
            .collect();
        assert_eq!(inverse.ops, adjoint);
    }

    #[test]
    fn test_gate_counts() {
        let counts = QftGateCounts::for_width(5);
        assert_eq!(counts.hadamards, 5);
        assert_eq!(counts.controlled_phases, 10);
        assert_eq!(counts.swaps, 2);
        assert_eq!(counts.rotation_gates(), 15);
        assert_eq!(counts.total(), 17);
        assert_eq!(QftGateCounts::for_width(0).total(), 0);
    }

    #[test]
    fn test_controlled_phase_angle() {
        assert!((controlled_phase_angle(1, 0) - PI / 2.0).abs() < 1e-12);
        assert!((controlled_phase_angle(5, 1) - PI / 16.0).abs() < 1e-12);
    }
}
