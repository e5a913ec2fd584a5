//! QASM emitters for serializing circuits.

use std::fmt::Write;

use qmul_ir::{Circuit, ClbitId, Instruction, InstructionKind, PiFraction, QubitId, StandardGate};
use tracing::debug;

use crate::error::{EmitError, EmitResult};

/// Emit a circuit as OpenQASM 3.0 source code.
pub fn emit(circuit: &Circuit) -> EmitResult<String> {
    Emitter::new(Dialect::Qasm3).emit_circuit(circuit)
}

/// Emit a circuit as OpenQASM 2.0 source code.
///
/// Register declarations use the QASM2 style (`qreg q[n];` / `creg c[n];`),
/// measurements use `measure q[i] -> c[j];` and phase gates are written with
/// the `qelib1.inc` names `u1` and `cu1`.
pub fn emit_qasm2(circuit: &Circuit) -> EmitResult<String> {
    Emitter::new(Dialect::Qasm2).emit_circuit(circuit)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    Qasm2,
    Qasm3,
}

struct Emitter {
    dialect: Dialect,
    output: String,
}

impl Emitter {
    fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            output: String::new(),
        }
    }

    fn emit_circuit(mut self, circuit: &Circuit) -> EmitResult<String> {
        match self.dialect {
            Dialect::Qasm3 => {
                writeln!(self.output, "OPENQASM 3.0;")?;
                writeln!(self.output, "include \"stdgates.inc\";")?;
            }
            Dialect::Qasm2 => {
                writeln!(self.output, "OPENQASM 2.0;")?;
                writeln!(self.output, "include \"qelib1.inc\";")?;
            }
        }
        writeln!(self.output)?;

        let num_qubits = circuit.num_qubits();
        let num_clbits = circuit.num_clbits();
        if num_qubits > 0 {
            match self.dialect {
                Dialect::Qasm3 => writeln!(self.output, "qubit[{num_qubits}] q;")?,
                Dialect::Qasm2 => writeln!(self.output, "qreg q[{num_qubits}];")?,
            }
        }
        if num_clbits > 0 {
            match self.dialect {
                Dialect::Qasm3 => writeln!(self.output, "bit[{num_clbits}] c;")?,
                Dialect::Qasm2 => writeln!(self.output, "creg c[{num_clbits}];")?,
            }
        }
        if num_qubits > 0 || num_clbits > 0 {
            writeln!(self.output)?;
        }

        for instruction in circuit.instructions() {
            self.emit_instruction(instruction)?;
        }

        debug!(
            circuit = circuit.name(),
            dialect = ?self.dialect,
            bytes = self.output.len(),
            "emitted qasm"
        );
        Ok(self.output)
    }

    fn emit_instruction(&mut self, instruction: &Instruction) -> EmitResult<()> {
        match &instruction.kind {
            InstructionKind::Gate(gate) => {
                let name = self.gate_name(gate);
                let qubits = emit_qubits(&instruction.qubits);
                match gate.angle() {
                    Some(angle) => {
                        let param = emit_angle(gate.name(), angle)?;
                        writeln!(self.output, "{name}({param}) {qubits};")?;
                    }
                    None => writeln!(self.output, "{name} {qubits};")?,
                }
            }

            InstructionKind::Measure => {
                if instruction.qubits.len() != instruction.clbits.len() {
                    return Err(EmitError::MeasureArity {
                        qubits: instruction.qubits.len(),
                        clbits: instruction.clbits.len(),
                    });
                }
                for (q, c) in instruction.qubits.iter().zip(&instruction.clbits) {
                    let (q, c) = (emit_qubit(*q), emit_clbit(*c));
                    match self.dialect {
                        Dialect::Qasm3 => writeln!(self.output, "{c} = measure {q};")?,
                        Dialect::Qasm2 => writeln!(self.output, "measure {q} -> {c};")?,
                    }
                }
            }

            InstructionKind::Barrier => {
                let qubits = emit_qubits(&instruction.qubits);
                if qubits.is_empty() {
                    writeln!(self.output, "barrier;")?;
                } else {
                    writeln!(self.output, "barrier {qubits};")?;
                }
            }
        }

        Ok(())
    }

    fn gate_name(&self, gate: &StandardGate) -> &'static str {
        match (self.dialect, gate) {
            (Dialect::Qasm2, StandardGate::P(_)) => "u1",
            (Dialect::Qasm2, StandardGate::CP(_)) => "cu1",
            _ => gate.name(),
        }
    }
}

/// `pi/2^k` fractions where possible, otherwise six decimals.
fn emit_angle(gate_name: &str, angle: f64) -> EmitResult<String> {
    if !angle.is_finite() {
        return Err(EmitError::NonFiniteAngle {
            gate_name: gate_name.to_string(),
            angle,
        });
    }
    Ok(match PiFraction::from_radians(angle) {
        Some(fraction) => fraction.render("pi"),
        None => format!("{angle:.6}"),
    })
}

fn emit_qubit(qubit: QubitId) -> String {
    format!("q[{}]", qubit.0)
}

fn emit_clbit(clbit: ClbitId) -> String {
    format!("c[{}]", clbit.0)
}

fn emit_qubits(qubits: &[QubitId]) -> String {
    qubits
        .iter()
        .map(|q| emit_qubit(*q))
        .collect::<Vec<_>>()
        .join(", ")
}
