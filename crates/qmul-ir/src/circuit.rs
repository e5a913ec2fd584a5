//! High-level circuit builder API.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::draw;
use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{Clbit, ClbitId, Qubit, QubitId};

/// A quantum circuit: allocated wires plus an ordered instruction list.
///
/// Instructions are kept in the order they were appended. That order defines
/// the unitary, so nothing in this type reorders or merges them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    name: String,
    qubits: Vec<Qubit>,
    clbits: Vec<Clbit>,
    instructions: Vec<Instruction>,
}

/// A wire key used when computing depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Wire {
    Qubit(QubitId),
    Clbit(ClbitId),
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            clbits: vec![],
            instructions: vec![],
        }
    }

    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        let mut circuit = Self::new(name);
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        for _ in 0..num_clbits {
            circuit.add_clbit();
        }
        circuit
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = self.next_qubit_id();
        self.qubits.push(Qubit::new(id));
        id
    }

    /// Add a named quantum register of `size` qubits.
    pub fn add_qreg(&mut self, name: impl Into<String>, size: u32) -> Vec<QubitId> {
        let name = name.into();
        (0..size)
            .map(|i| {
                let id = self.next_qubit_id();
                self.qubits.push(Qubit::with_register(id, &name, i));
                id
            })
            .collect()
    }

    /// Add a single classical bit to the circuit.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = self.next_clbit_id();
        self.clbits.push(Clbit::new(id));
        id
    }

    /// Add a named classical register of `size` bits.
    pub fn add_creg(&mut self, name: impl Into<String>, size: u32) -> Vec<ClbitId> {
        let name = name.into();
        (0..size)
            .map(|i| {
                let id = self.next_clbit_id();
                self.clbits.push(Clbit::with_register(id, &name, i));
                id
            })
            .collect()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn next_qubit_id(&self) -> QubitId {
        QubitId(self.qubits.len() as u32)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn next_clbit_id(&self) -> ClbitId {
        ClbitId(self.clbits.len() as u32)
    }

    // =========================================================================
    // Gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::H, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::X, qubit))?;
        Ok(self)
    }

    /// Apply phase gate.
    pub fn p(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::P(theta), qubit))?;
        Ok(self)
    }

    /// Apply controlled-phase gate.
    pub fn cp(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(
            StandardGate::CP(theta),
            control,
            target,
        ))?;
        Ok(self)
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::Swap, q1, q2))?;
        Ok(self)
    }

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.apply(Instruction::measure(qubit, clbit))?;
        Ok(self)
    }

    /// Apply a barrier to the given qubits.
    pub fn barrier(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.apply(Instruction::barrier(qubits))?;
        Ok(self)
    }

    /// Validate and append an instruction.
    ///
    /// On error the circuit is left unchanged.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<()> {
        self.validate(&instruction)?;
        trace!(
            gate = instruction.name(),
            qubits = ?instruction.qubits,
            "append instruction"
        );
        self.instructions.push(instruction);
        Ok(())
    }

    fn validate(&self, instruction: &Instruction) -> IrResult<()> {
        let gate_name = || Some(instruction.name().to_string());

        if let InstructionKind::Gate(gate) = &instruction.kind {
            #[allow(clippy::cast_possible_truncation)]
            let got = instruction.qubits.len() as u32;
            if got != gate.num_qubits() {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().into(),
                    expected: gate.num_qubits(),
                    got,
                });
            }
            if let Some(angle) = gate.angle() {
                if !angle.is_finite() {
                    return Err(IrError::NonFiniteAngle {
                        gate_name: gate.name().into(),
                        angle,
                    });
                }
            }
        }

        for (i, &qubit) in instruction.qubits.iter().enumerate() {
            if qubit.index() >= self.qubits.len() {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: gate_name(),
                });
            }
            if instruction.qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate_name(),
                });
            }
        }

        for &clbit in &instruction.clbits {
            if clbit.0 as usize >= self.clbits.len() {
                return Err(IrError::ClbitNotFound {
                    clbit,
                    gate_name: gate_name(),
                });
            }
        }

        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Circuit name, used as the diagram and JSON label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of allocated qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Number of allocated classical bits.
    pub fn num_clbits(&self) -> usize {
        self.clbits.len()
    }

    /// Qubits in id order.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Classical bits in id order.
    pub fn clbits(&self) -> &[Clbit] {
        &self.clbits
    }

    /// Instructions in append order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions, barriers included.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether no instruction has been appended.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Circuit depth: the longest chain of operations along any wire.
    ///
    /// Barriers synchronize the wires they cover but do not add a layer.
    pub fn depth(&self) -> usize {
        let mut front: FxHashMap<Wire, usize> = FxHashMap::default();
        let mut depth = 0;

        for inst in &self.instructions {
            let wires: Vec<Wire> = inst
                .qubits
                .iter()
                .map(|&q| Wire::Qubit(q))
                .chain(inst.clbits.iter().map(|&c| Wire::Clbit(c)))
                .collect();
            let start = wires
                .iter()
                .map(|w| front.get(w).copied().unwrap_or(0))
                .max()
                .unwrap_or(0);
            let level = if inst.is_barrier() { start } else { start + 1 };
            for wire in wires {
                front.insert(wire, level);
            }
            depth = depth.max(level);
        }

        depth
    }

    /// Count instructions by name.
    pub fn count_ops(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for inst in &self.instructions {
            *counts.entry(inst.name().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Render the circuit as a text diagram.
    pub fn draw(&self) -> String {
        draw::render(self)
    }

    /// Serialize the circuit to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a circuit from JSON.
    ///
    /// The wires and every instruction are checked exactly as [`Circuit::apply`]
    /// checks them, so a decoded circuit upholds the same invariants as a built one.
    pub fn from_json(source: &str) -> IrResult<Self> {
        let decoded: Self =
            serde_json::from_str(source).map_err(|e| IrError::Json(e.to_string()))?;

        check_numbering(decoded.qubits.iter().map(|q| q.id.0))?;
        check_numbering(decoded.clbits.iter().map(|c| c.id.0))?;

        let mut circuit = Self {
            name: decoded.name,
            qubits: decoded.qubits,
            clbits: decoded.clbits,
            instructions: Vec::with_capacity(decoded.instructions.len()),
        };
        for instruction in decoded.instructions {
            circuit.apply(instruction)?;
        }
        Ok(circuit)
    }
}

fn check_numbering(ids: impl Iterator<Item = u32>) -> IrResult<()> {
    for (position, id) in ids.enumerate() {
        if id as usize != position {
            return Err(IrError::MisnumberedWire { position, id });
        }
    }
    Ok(())
}
