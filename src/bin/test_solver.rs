//! Reconstructs a seeded generator from its output stream.
//!
//! Usage: `test_solver <seed>` (seed must be non-zero)
//!
//! Feeds a solver from a source generator until reconstruction, then prints
//! both state tables side by side for manual verification. Exits zero iff the
//! reconstructed generator equals the source.

use std::env;
use std::process;

use unrandom_rs::{reconstruct, ReferenceGenerator};

fn main() {
    let args: Vec<String> = env::args().collect();
    let exe = args.first().map(String::as_str).unwrap_or("test_solver");
    if args.len() != 2 {
        eprintln!("usage: {} <seed>", exe);
        process::exit(2);
    }

    let Ok(seed) = args[1].parse::<u32>() else {
        eprintln!("usage: {} <seed>", exe);
        process::exit(2);
    };
    if seed == 0 {
        println!("Please provide a non-zero seed");
        process::exit(1);
    }

    println!("testing seed: {}", seed);
    let mut source = ReferenceGenerator::new(seed);
    let (steps, solved) = reconstruct(|| source.advance());

    let matched = source == solved;
    println!(
        "{} generator from seed {}",
        if matched { "reconstructed" } else { "failed to reconstruct" },
        seed
    );
    println!("from {} samples", steps);

    println!("{:>3} {:>8} {:>8}", "pos", "source", "solved");
    let src_table = source.table();
    let sol_table = solved.table();
    for i in 0..31u32 {
        println!(
            "{:>3} {:08X} {:08X}",
            i as i32 - 30,
            src_table.get(i),
            sol_table.get(i)
        );
    }

    process::exit(if matched { 0 } else { 1 });
}
