//! Plain-text circuit diagrams.
//!
//! Each qubit is one row. Instructions are packed into columns as early as
//! possible; a multi-qubit instruction reserves every wire between its
//! outermost operands so vertical connectors never overlap.

use crate::angle::PiFraction;
use crate::circuit::Circuit;
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};

#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Empty,
    Label(String),
    Control,
    SwapEnd,
    Cross,
    Barrier,
}

impl Cell {
    fn text(&self) -> &str {
        match self {
            Cell::Empty => "",
            Cell::Label(s) => s,
            Cell::Control => "■",
            Cell::SwapEnd => "X",
            Cell::Cross => "┼",
            Cell::Barrier => "░",
        }
    }

    fn width(&self) -> usize {
        self.text().chars().count()
    }
}

struct Column {
    cells: Vec<Cell>,
    /// `links[w]` joins wire `w` to wire `w + 1`.
    links: Vec<bool>,
}

impl Column {
    fn new(num_wires: usize) -> Self {
        Self {
            cells: vec![Cell::Empty; num_wires],
            links: vec![false; num_wires.saturating_sub(1)],
        }
    }

    fn width(&self) -> usize {
        self.cells.iter().map(Cell::width).max().unwrap_or(0).max(1)
    }
}

/// Format an angle for display, preferring `π/2^k` fractions.
pub(crate) fn format_angle(theta: f64) -> String {
    match PiFraction::from_radians(theta) {
        Some(fraction) => fraction.render("π"),
        None => format!("{theta:.3}"),
    }
}

fn operand_cells(inst: &Instruction) -> Vec<Cell> {
    match &inst.kind {
        InstructionKind::Gate(gate) => match gate {
            StandardGate::X => vec![Cell::Label("X".into())],
            StandardGate::H => vec![Cell::Label("H".into())],
            StandardGate::P(theta) => vec![Cell::Label(format!("P({})", format_angle(*theta)))],
            StandardGate::CP(theta) => vec![
                Cell::Control,
                Cell::Label(format!("P({})", format_angle(*theta))),
            ],
            StandardGate::Swap => vec![Cell::SwapEnd, Cell::SwapEnd],
        },
        InstructionKind::Measure => inst
            .clbits
            .iter()
            .map(|c| Cell::Label(format!("M→{c}")))
            .collect(),
        InstructionKind::Barrier => vec![Cell::Barrier; inst.qubits.len()],
    }
}

fn layout(circuit: &Circuit) -> Vec<Column> {
    let num_wires = circuit.num_qubits();
    let mut front = vec![0usize; num_wires];
    let mut columns: Vec<Column> = vec![];

    for inst in circuit.instructions() {
        let Some(lo) = inst.qubits.iter().map(|q| q.index()).min() else {
            continue;
        };
        let hi = inst.qubits.iter().map(|q| q.index()).max().unwrap_or(lo);

        let level = front[lo..=hi].iter().copied().max().unwrap_or(0);
        while columns.len() <= level {
            columns.push(Column::new(num_wires));
        }
        let column = &mut columns[level];

        let is_barrier = inst.is_barrier();
        for wire in lo..=hi {
            if !is_barrier {
                column.cells[wire] = Cell::Cross;
            }
            front[wire] = level + 1;
        }
        for (qubit, cell) in inst.qubits.iter().zip(operand_cells(inst)) {
            column.cells[qubit.index()] = cell;
        }
        if !is_barrier {
            for link in &mut column.links[lo..hi] {
                *link = true;
            }
        }
    }

    columns
}

/// Render `circuit` as a text diagram, one row per qubit.
pub fn render(circuit: &Circuit) -> String {
    let labels: Vec<String> = circuit.qubits().iter().map(ToString::to_string).collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let columns = layout(circuit);
    let widths: Vec<usize> = columns.iter().map(Column::width).collect();

    let mut out = String::new();
    for (wire, label) in labels.iter().enumerate() {
        let mut row = format!("{label:<label_width$}: ");
        for (column, &width) in columns.iter().zip(&widths) {
            let text = column.cells[wire].text();
            row.push_str(&format!("─{text:─^width$}─"));
        }
        row.push('─');
        out.push_str(&row);
        out.push('\n');

        if wire + 1 < labels.len() {
            let mut gap = " ".repeat(label_width + 2);
            for (column, &width) in columns.iter().zip(&widths) {
                let text = if column.links[wire] { "│" } else { "" };
                gap.push_str(&format!(" {text:^width$} "));
            }
            out.push_str(gap.trim_end());
            out.push('\n');
        }
    }

    out
}
