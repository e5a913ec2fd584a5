//! End-to-end checks of the multiplier preparation.

use qmul_arith::{MultiplierLayout, QftGateCounts, bit_width};
use qmul_ir::Circuit;
use qmul_sim::Statevector;

#[test]
fn test_register_names_cover_every_qubit() {
    let layout = MultiplierLayout::new(6, 5).unwrap();
    let circuit = layout.prepare().unwrap();

    let names: Vec<String> = circuit.qubits().iter().map(ToString::to_string).collect();
    assert_eq!(&names[..3], &["a[0]", "a[1]", "a[2]"]);
    assert_eq!(&names[3..6], &["b[0]", "b[1]", "b[2]"]);
    assert_eq!(names[6], "prod[0]");
    assert_eq!(names[12], "prod[6]");
    assert_eq!(circuit.clbits().len(), 7);
}

#[test]
fn test_operands_survive_product_qft() {
    // The product register starts in |0⟩, so after the QFT it is uniform and
    // the operand registers still hold the encoded values.
    let layout = MultiplierLayout::new(2, 3).unwrap();
    let circuit = layout.prepare().unwrap();
    let state = Statevector::run(&circuit).unwrap();

    // a = "10" puts q0, b = "11" puts q2 and q3.
    let operand_bits = 0b1101;
    let product_states = 1 << layout.num_clbits();
    for (index, p) in state.probabilities().iter().enumerate() {
        let expected = if index & 0b1111 == operand_bits {
            1.0 / f64::from(product_states)
        } else {
            0.0
        };
        assert!((p - expected).abs() < 1e-9, "index {index:b}");
    }
}

#[test]
fn test_gate_budget() {
    for (a, b) in [(0, 0), (1, 1), (7, 2), (255, 3)] {
        let layout = MultiplierLayout::new(a, b).unwrap();
        let circuit = layout.prepare().unwrap();
        let encoded = a.count_ones() + b.count_ones();
        let qft = QftGateCounts::for_width(layout.num_clbits() as usize).total();
        assert_eq!(circuit.len(), encoded as usize + qft, "{a} * {b}");
    }
}

#[test]
fn test_layout_round_trips_through_json() {
    let circuit = MultiplierLayout::new(4, 4).unwrap().prepare().unwrap();
    let json = circuit.to_json().unwrap();
    assert_eq!(Circuit::from_json(&json).unwrap(), circuit);
    assert_eq!(bit_width(4), 3);
}
