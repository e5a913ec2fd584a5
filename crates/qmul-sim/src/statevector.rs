//! Statevector simulation engine.
//!
//! Qubit `i` is bit `i` of the basis index (little-endian), so the basis state
//! `|k⟩` of an `n`-qubit register has amplitude index `k`.

use num_complex::Complex64;
use tracing::debug;

use qmul_ir::{Circuit, Instruction, InstructionKind, StandardGate};

use crate::error::{SimError, SimResult};

/// Largest register the simulator will allocate (2^26 amplitudes, 1 GiB).
pub const MAX_QUBITS: usize = 26;

/// A pure state of `num_qubits` qubits.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
}

impl Statevector {
    /// Create the all-zero state `|0…0⟩`.
    pub fn new(num_qubits: usize) -> SimResult<Self> {
        Self::from_basis_state(num_qubits, 0)
    }

    /// Create the computational basis state `|state⟩`.
    pub fn from_basis_state(num_qubits: usize, state: u64) -> SimResult<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(SimError::TooManyQubits {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        let size = 1usize << num_qubits;
        let index = usize::try_from(state)
            .ok()
            .filter(|&i| i < size)
            .ok_or(SimError::BasisStateOutOfRange { state, num_qubits })?;

        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[index] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Run `circuit` on `|0…0⟩`.
    pub fn run(circuit: &Circuit) -> SimResult<Self> {
        Self::run_from(circuit, 0)
    }

    /// Run `circuit` on the basis state `|state⟩`.
    pub fn run_from(circuit: &Circuit, state: u64) -> SimResult<Self> {
        let mut sv = Self::from_basis_state(circuit.num_qubits(), state)?;
        sv.apply_circuit(circuit)?;
        Ok(sv)
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Amplitudes indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Measurement probability of each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Inner product `⟨self|other⟩`.
    pub fn inner(&self, other: &Statevector) -> Complex64 {
        self.amplitudes
            .iter()
            .zip(&other.amplitudes)
            .map(|(a, b)| a.conj() * b)
            .sum()
    }

    /// Whether every amplitude is within `tolerance` of `other`'s.
    pub fn approx_eq(&self, other: &Statevector, tolerance: f64) -> bool {
        self.num_qubits == other.num_qubits
            && self
                .amplitudes
                .iter()
                .zip(&other.amplitudes)
                .all(|(a, b)| (a - b).norm() <= tolerance)
    }

    /// Apply every instruction of `circuit` in order.
    pub fn apply_circuit(&mut self, circuit: &Circuit) -> SimResult<()> {
        if circuit.num_qubits() != self.num_qubits {
            return Err(SimError::WidthMismatch {
                circuit: circuit.num_qubits(),
                state: self.num_qubits,
            });
        }
        debug!(
            circuit = circuit.name(),
            instructions = circuit.len(),
            "simulating circuit"
        );
        for instruction in circuit.instructions() {
            self.apply(instruction)?;
        }
        Ok(())
    }

    /// Apply an instruction to the statevector.
    ///
    /// Measurements and barriers leave the state untouched.
    pub fn apply(&mut self, instruction: &Instruction) -> SimResult<()> {
        let InstructionKind::Gate(gate) = &instruction.kind else {
            return Ok(());
        };
        let qubits: Vec<usize> = instruction.qubits.iter().map(|q| q.index()).collect();
        if qubits.len() != gate.num_qubits() as usize
            || qubits.iter().any(|&q| q >= self.num_qubits)
        {
            return Err(SimError::InvalidOperands {
                gate_name: gate.name().to_string(),
                qubits,
                num_qubits: self.num_qubits,
            });
        }
        self.apply_gate(gate, &qubits);
        Ok(())
    }

    fn apply_gate(&mut self, gate: &StandardGate, qubits: &[usize]) {
        match *gate {
            StandardGate::X => self.apply_x(qubits[0]),
            StandardGate::H => self.apply_h(qubits[0]),
            StandardGate::P(theta) => self.apply_phase(qubits[0], theta),
            StandardGate::CP(theta) => self.apply_cp(qubits[0], qubits[1], theta),
            StandardGate::Swap => self.apply_swap(qubits[0], qubits[1]),
        }
    }

    // =========================================================================
    // Gate kernels
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = std::f64::consts::FRAC_1_SQRT_2;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::cis(theta);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp *= phase;
            }
        }
    }

    fn apply_cp(&mut self, control: usize, target: usize, theta: f64) {
        let mask = (1 << control) | (1 << target);
        let phase = Complex64::cis(theta);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask == mask {
                *amp *= phase;
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..self.amplitudes.len() {
            if i & mask1 != 0 && i & mask2 == 0 {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }
}
