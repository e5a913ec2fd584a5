//! Gate sinks the QFT builder can append to.
//!
//! The builder only needs three operations addressed by local slot index, so
//! it is written against [`PhaseRegister`] rather than a concrete circuit.
//! [`Circuit`] implements it directly (slot `i` is qubit `i`), and
//! [`RegisterView`] maps local slots onto an arbitrary ordered list of a
//! circuit's qubits.

use qmul_ir::{Circuit, IrError, QubitId};

use crate::error::{ArithError, ArithResult};

/// A register that accepts Hadamard, controlled-phase and swap gates.
pub trait PhaseRegister {
    /// Number of addressable slots.
    fn width(&self) -> usize;

    /// Append a Hadamard on slot `index`.
    fn add_hadamard(&mut self, index: usize) -> ArithResult<()>;

    /// Append a controlled-phase rotation by `angle` radians.
    fn add_controlled_phase(&mut self, angle: f64, control: usize, target: usize)
    -> ArithResult<()>;

    /// Append a swap between slots `a` and `b`.
    fn add_swap(&mut self, a: usize, b: usize) -> ArithResult<()>;
}

fn circuit_qubit(circuit: &Circuit, index: usize) -> ArithResult<QubitId> {
    let width = circuit.num_qubits();
    if index >= width {
        return Err(ArithError::IndexOutOfBounds { index, width });
    }
    u32::try_from(index)
        .map(QubitId)
        .map_err(|_| ArithError::IndexOutOfBounds { index, width })
}

impl PhaseRegister for Circuit {
    fn width(&self) -> usize {
        self.num_qubits()
    }

    fn add_hadamard(&mut self, index: usize) -> ArithResult<()> {
        let qubit = circuit_qubit(self, index)?;
        self.h(qubit)?;
        Ok(())
    }

    fn add_controlled_phase(
        &mut self,
        angle: f64,
        control: usize,
        target: usize,
    ) -> ArithResult<()> {
        let control = circuit_qubit(self, control)?;
        let target = circuit_qubit(self, target)?;
        self.cp(angle, control, target)?;
        Ok(())
    }

    fn add_swap(&mut self, a: usize, b: usize) -> ArithResult<()> {
        let a = circuit_qubit(self, a)?;
        let b = circuit_qubit(self, b)?;
        self.swap(a, b)?;
        Ok(())
    }
}

/// A window onto some of a circuit's qubits, addressed by local index.
///
/// Slot `i` of the view is `qubits[i]`. Used to apply a transform to a
/// register that does not start at qubit 0, such as the product register of
/// a multiplier.
pub struct RegisterView<'a> {
    circuit: &'a mut Circuit,
    qubits: Vec<QubitId>,
}

impl<'a> RegisterView<'a> {
    /// Create a view, checking that every qubit exists in `circuit` and
    /// appears only once.
    pub fn new(
        circuit: &'a mut Circuit,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> ArithResult<Self> {
        let qubits: Vec<QubitId> = qubits.into_iter().collect();
        let available = circuit.num_qubits();
        for (i, &qubit) in qubits.iter().enumerate() {
            if qubit.index() >= available {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: None,
                }
                .into());
            }
            if qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: None,
                }
                .into());
            }
        }
        Ok(Self { circuit, qubits })
    }

    /// The circuit qubit behind local slot `index`.
    pub fn qubit(&self, index: usize) -> ArithResult<QubitId> {
        self.qubits
            .get(index)
            .copied()
            .ok_or(ArithError::IndexOutOfBounds {
                index,
                width: self.qubits.len(),
            })
    }

    /// Circuit qubit behind each slot.
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    pub fn circuit(&self) -> &Circuit {
        &*self.circuit
    }
}

impl PhaseRegister for RegisterView<'_> {
    fn width(&self) -> usize {
        self.qubits.len()
    }

    fn add_hadamard(&mut self, index: usize) -> ArithResult<()> {
        let qubit = self.qubit(index)?;
        self.circuit.h(qubit)?;
        Ok(())
    }

    fn add_controlled_phase(
        &mut self,
        angle: f64,
        control: usize,
        target: usize,
    ) -> ArithResult<()> {
        let control = self.qubit(control)?;
        let target = self.qubit(target)?;
        self.circuit.cp(angle, control, target)?;
        Ok(())
    }

    fn add_swap(&mut self, a: usize, b: usize) -> ArithResult<()> {
        let a = self.qubit(a)?;
        let b = self.qubit(b)?;
        self.circuit.swap(a, b)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qmul_ir::StandardGate;
    use std::f64::consts::PI;

    #[test]
    fn test_circuit_as_register() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.add_hadamard(1).unwrap();
        circuit.add_controlled_phase(PI / 2.0, 0, 1).unwrap();
        circuit.add_swap(0, 1).unwrap();

        assert_eq!(PhaseRegister::width(&circuit), 2);
        let inst = &circuit.instructions()[1];
        assert_eq!(inst.as_gate(), Some(&StandardGate::CP(PI / 2.0)));
        assert_eq!(inst.qubits, vec![QubitId(0), QubitId(1)]);
    }

    #[test]
    fn test_circuit_index_out_of_bounds() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let err = circuit.add_hadamard(2).unwrap_err();
        assert!(matches!(
            err,
            ArithError::IndexOutOfBounds { index: 2, width: 2 }
        ));
    }

    #[test]
    fn test_view_maps_local_indices() {
        let mut circuit = Circuit::with_size("test", 5, 0);
        {
            let mut view = RegisterView::new(&mut circuit, [QubitId(3), QubitId(4)]).unwrap();
            assert_eq!(view.width(), 2);
            view.add_hadamard(0).unwrap();
            view.add_swap(0, 1).unwrap();
            assert!(view.add_hadamard(2).is_err());
        }

        let ops: Vec<_> = circuit.instructions().iter().map(|i| i.qubits.clone()).collect();
        assert_eq!(ops, vec![vec![QubitId(3)], vec![QubitId(3), QubitId(4)]]);
    }

    #[test]
    fn test_view_rejects_duplicate_qubit() {
        let mut circuit = Circuit::with_size("test", 4, 0);
        let err = RegisterView::new(&mut circuit, [QubitId(3), QubitId(3)])
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ArithError::Circuit(IrError::DuplicateQubit {
                qubit: QubitId(3),
                ..
            })
        ));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_view_rejects_missing_qubit() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let err = RegisterView::new(&mut circuit, [QubitId(0), QubitId(7)])
            .err()
            .unwrap();
        assert!(matches!(err, ArithError::Circuit(_)));
    }
}
