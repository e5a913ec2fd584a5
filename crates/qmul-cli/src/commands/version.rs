//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - QFT circuit construction for quantum multiplication",
        style("qmul").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qmul-ir     Ordered circuit representation");
    println!("  qmul-arith  QFT builder and multiplier layout");
    println!("  qmul-qasm   OpenQASM 2/3 emitter");
    println!("  qmul-sim    Statevector simulator");
    println!("  qmul-cli    Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
