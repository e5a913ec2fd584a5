//! Register layout for a QFT-based multiplier.
//!
//! Two classical operands are written into quantum registers and the product
//! register is moved into the Fourier basis:
//!
//! | register | qubits               | contents                          |
//! |----------|----------------------|-----------------------------------|
//! | `a`      | `0..m`               | first operand, MSB on first qubit  |
//! | `b`      | `m..2m`              | second operand, MSB on first qubit |
//! | `prod`   | `2m..4m+1`           | `2m + 1` product qubits, QFT'd     |
//! | `c`      | classical, `2m + 1`  | readout of `prod`                  |
//!
//! where `m` is the bit width of the wider operand.
//!
//! The controlled-rotation stage that would accumulate `a · b` into the
//! product register is not part of this layout.

use std::ops::Range;

use qmul_ir::{Circuit, QubitId};
use tracing::{debug, info};

use crate::error::{ArithError, ArithResult};
use crate::qft::build_qft;
use crate::register::RegisterView;

/// Widest supported operand. Keeps `4m + 1` qubits and the product value
/// within `u32` and `u64` respectively.
pub const MAX_OPERAND_BITS: u32 = 31;

/// Number of binary digits needed to write `value`. Zero needs one digit.
pub fn bit_width(value: u64) -> u32 {
    (u64::BITS - value.leading_zeros()).max(1)
}

/// Qubit layout for multiplying two classical operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplierLayout {
    a: u64,
    b: u64,
    operand_bits: u32,
}

impl MultiplierLayout {
    /// Lay out registers for `a · b`.
    pub fn new(a: u64, b: u64) -> ArithResult<Self> {
        for value in [a, b] {
            let bits = bit_width(value);
            if bits > MAX_OPERAND_BITS {
                return Err(ArithError::OperandTooWide {
                    value,
                    bits,
                    max_bits: MAX_OPERAND_BITS,
                });
            }
        }

        let operand_bits = bit_width(a).max(bit_width(b));
        debug!(a, b, operand_bits, "multiplier layout");
        Ok(Self { a, b, operand_bits })
    }

    pub fn a(&self) -> u64 {
        self.a
    }

    pub fn b(&self) -> u64 {
        self.b
    }

    /// Width `m` of each operand register.
    pub fn operand_bits(&self) -> u32 {
        self.operand_bits
    }

    /// Bits needed for the product, `2m`.
    pub fn product_bits(&self) -> u32 {
        2 * self.operand_bits
    }

    /// Total qubits, `2 · product_bits + 1`.
    pub fn num_qubits(&self) -> u32 {
        2 * self.product_bits() + 1
    }

    /// Classical bits for reading out the product register.
    pub fn num_clbits(&self) -> u32 {
        self.product_bits() + 1
    }

    /// Qubits of operand `a`.
    pub fn a_range(&self) -> Range<u32> {
        0..self.operand_bits
    }

    /// Qubits of operand `b`.
    pub fn b_range(&self) -> Range<u32> {
        self.operand_bits..2 * self.operand_bits
    }

    /// Qubits of the product register, `product_bits + 1` wide.
    pub fn product_range(&self) -> Range<u32> {
        self.product_bits()..self.num_qubits()
    }

    /// The classical product the finished circuit should read out.
    pub fn expected_product(&self) -> u64 {
        self.a * self.b
    }

    /// `value` as a zero-padded binary string of `operand_bits` digits.
    pub fn padded_binary(&self, value: u64) -> String {
        format!("{value:0width$b}", width = self.operand_bits as usize)
    }

    /// Qubits that receive an X gate while encoding both operands.
    pub fn encoded_qubits(&self) -> Vec<QubitId> {
        let encode = |value: u64, range: Range<u32>| {
            self.padded_binary(value)
                .chars()
                .zip(range)
                .filter(|(digit, _)| *digit == '1')
                .map(|(_, qubit)| QubitId(qubit))
                .collect::<Vec<_>>()
        };

        let mut qubits = encode(self.a, self.a_range());
        qubits.extend(encode(self.b, self.b_range()));
        qubits
    }

    /// Build the circuit up to and including the QFT of the product register.
    pub fn prepare(&self) -> ArithResult<Circuit> {
        let mut circuit = Circuit::new("multiplier");
        circuit.add_qreg("a", self.operand_bits);
        circuit.add_qreg("b", self.operand_bits);
        let prod = circuit.add_qreg("prod", self.num_clbits());
        circuit.add_creg("c", self.num_clbits());

        for qubit in self.encoded_qubits() {
            circuit.x(qubit)?;
        }

        let width = prod.len();
        let mut view = RegisterView::new(&mut circuit, prod)?;
        build_qft(&mut view, width)?;

        info!(
            a = self.a,
            b = self.b,
            qubits = circuit.num_qubits(),
            instructions = circuit.len(),
            "prepared multiplier circuit"
        );
        Ok(circuit)
    }
}
