//! Gate set used by the QFT and multiplier builders.

use serde::{Deserialize, Serialize};

/// Gates with known semantics.
///
/// Angles are stored in radians. Controlled gates take their operands as
/// `[control, target]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Pauli-X gate.
    X,
    /// Hadamard gate.
    H,
    /// Phase gate diag(1, e^{iθ}).
    P(f64),
    /// Controlled phase gate.
    CP(f64),
    /// SWAP gate.
    Swap,
}

impl StandardGate {
    /// Lowercase gate name, as written in OpenQASM.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::X => "x",
            StandardGate::H => "h",
            StandardGate::P(_) => "p",
            StandardGate::CP(_) => "cp",
            StandardGate::Swap => "swap",
        }
    }

    /// Number of qubits this gate acts on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::X | StandardGate::H | StandardGate::P(_) => 1,
            StandardGate::CP(_) | StandardGate::Swap => 2,
        }
    }

    /// Rotation angle, for parameterized gates.
    #[inline]
    pub fn angle(&self) -> Option<f64> {
        match self {
            StandardGate::P(theta) | StandardGate::CP(theta) => Some(*theta),
            _ => None,
        }
    }

    /// Whether both operands of a two-qubit gate can be exchanged without
    /// changing the unitary.
    pub fn is_symmetric(&self) -> bool {
        matches!(self, StandardGate::CP(_) | StandardGate::Swap)
    }

    /// The adjoint of this gate.
    #[must_use]
    pub fn inverse(&self) -> Self {
        match self {
            StandardGate::P(theta) => StandardGate::P(-theta),
            StandardGate::CP(theta) => StandardGate::CP(-theta),
            other => *other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_standard_gate_properties() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CP(PI).num_qubits(), 2);
        assert_eq!(StandardGate::Swap.name(), "swap");
        assert_eq!(StandardGate::CP(PI / 2.0).angle(), Some(PI / 2.0));
        assert_eq!(StandardGate::H.angle(), None);
    }

    #[test]
    fn test_inverse_negates_angles() {
        assert_eq!(StandardGate::CP(PI / 4.0).inverse(), StandardGate::CP(-PI / 4.0));
        assert_eq!(StandardGate::H.inverse(), StandardGate::H);
        assert_eq!(StandardGate::Swap.inverse(), StandardGate::Swap);
    }
}
