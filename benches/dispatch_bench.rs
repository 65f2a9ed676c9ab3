//! Benchmark to measure the per-line cost of command dispatch.
//!
//! Compares calling the calculator state directly against going through the
//! dispatcher (tokenise, lookup, parse arguments, format the reply), and
//! reports how history growth affects the `hist` display.
//!
//! Run with: cargo bench --bench dispatch_bench

use calcshell::{CalculatorState, Dispatcher};
use std::time::Instant;

const SCRIPT: [&str; 10] = [
    "add 10 5",
    "c* 2",
    "c- 5",
    "sqrt 144",
    "sin 30",
    "pow 2 10",
    "ms 100",
    "m+ 25",
    "mr",
    "fact 10",
];

fn main() {
    let iterations = 10_000;

    let mut direct = CalculatorState::new();
    let start = Instant::now();
    for _ in 0..iterations {
        direct.add(10.0, 5.0);
        direct.chain_multiply(2.0);
        direct.chain_subtract(5.0);
        let _ = direct.square_root(144.0);
        direct.sin(30.0);
        direct.power(2.0, 10.0);
        direct.memory_store(100.0);
        direct.memory_add(25.0);
        direct.memory_recall();
        let _ = direct.factorial(10.0);
        direct.clear_history();
    }
    let direct_elapsed = start.elapsed();

    let mut dispatcher = Dispatcher::new(CalculatorState::new());
    dispatcher.start();
    let start = Instant::now();
    for _ in 0..iterations {
        for line in SCRIPT.iter() {
            let _ = dispatcher.dispatch(line);
        }
        let _ = dispatcher.dispatch("clear");
    }
    let dispatch_elapsed = start.elapsed();

    let lines = iterations * SCRIPT.len();
    let direct_per_line = direct_elapsed.as_nanos() as f64 / lines as f64;
    let dispatch_per_line = dispatch_elapsed.as_nanos() as f64 / lines as f64;

    println!("=== Command Dispatch Benchmark ===");
    println!("Lines per iteration: {}", SCRIPT.len());
    println!("Iterations: {}", iterations);
    println!();
    println!("Direct state calls:  {:?} ({:.1} ns/op)", direct_elapsed, direct_per_line);
    println!("Dispatched commands: {:?} ({:.1} ns/line)", dispatch_elapsed, dispatch_per_line);
    println!(
        "Dispatch overhead:   {:.1} ns/line",
        dispatch_per_line - direct_per_line
    );
    println!();

    println!("=== History Display ===");
    for &size in [10usize, 100, 1_000].iter() {
        let mut dispatcher = Dispatcher::new(CalculatorState::new());
        dispatcher.start();
        for i in 0..size {
            let _ = dispatcher.dispatch(&format!("add {} 1", i));
        }
        let start = Instant::now();
        for _ in 0..100 {
            let _ = dispatcher.dispatch("hist");
        }
        let elapsed = start.elapsed();
        println!(
            "{:>5} entries: {:.2} µs per 'hist'",
            size,
            elapsed.as_nanos() as f64 / 100.0 / 1_000.0
        );
    }
}
