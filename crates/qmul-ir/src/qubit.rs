//! Qubit and classical bit types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a qubit within a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl QubitId {
    /// The index as a `usize`, for addressing wires and amplitudes.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// Position of a classical bit within a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClbitId(pub u32);

impl fmt::Display for ClbitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

impl From<u32> for ClbitId {
    fn from(id: u32) -> Self {
        ClbitId(id)
    }
}

/// A qubit slot, optionally belonging to a named register.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Qubit {
    /// Position in the circuit's qubit list.
    pub id: QubitId,
    /// Name of the owning register, if any.
    pub register: Option<String>,
    /// Offset within the owning register.
    pub index: Option<u32>,
}

impl Qubit {
    /// A qubit outside any named register.
    pub fn new(id: QubitId) -> Self {
        Self {
            id,
            register: None,
            index: None,
        }
    }

    /// A qubit at `index` within register `register`.
    pub fn with_register(id: QubitId, register: impl Into<String>, index: u32) -> Self {
        Self {
            id,
            register: Some(register.into()),
            index: Some(index),
        }
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.register, self.index) {
            (Some(reg), Some(idx)) => write!(f, "{reg}[{idx}]"),
            _ => write!(f, "{}", self.id),
        }
    }
}

/// A classical bit, optionally belonging to a named register.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clbit {
    /// Position in the circuit's classical bit list.
    pub id: ClbitId,
    /// Name of the owning register, if any.
    pub register: Option<String>,
    /// Offset within the owning register.
    pub index: Option<u32>,
}

impl Clbit {
    /// A classical bit outside any named register.
    pub fn new(id: ClbitId) -> Self {
        Self {
            id,
            register: None,
            index: None,
        }
    }

    /// A classical bit at `index` within register `register`.
    pub fn with_register(id: ClbitId, register: impl Into<String>, index: u32) -> Self {
        Self {
            id,
            register: Some(register.into()),
            index: Some(index),
        }
    }
}

impl fmt::Display for Clbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.register, self.index) {
            (Some(reg), Some(idx)) => write!(f, "{reg}[{idx}]"),
            _ => write!(f, "{}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_display() {
        assert_eq!(Qubit::new(QubitId(3)).to_string(), "q3");
        assert_eq!(Qubit::with_register(QubitId(5), "prod", 1).to_string(), "prod[1]");
    }

    #[test]
    fn test_clbit_display() {
        assert_eq!(Clbit::new(ClbitId(0)).to_string(), "c0");
        assert_eq!(Clbit::with_register(ClbitId(2), "c", 2).to_string(), "c[2]");
    }

    #[test]
    fn test_qubit_ordering() {
        assert!(QubitId(1) < QubitId(2));
        assert_eq!(QubitId(7).index(), 7);
    }
}
