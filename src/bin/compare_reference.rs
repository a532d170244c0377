//! Validates the windowed generator against the flat scalar recursion.
//!
//! Usage: `compare_reference <seed> <count>`
//!
//! Produces `count` outputs from a generator seeded with `seed` and checks
//! each against the scalar state sequence at the warm-up offset. The first 64
//! iterations also print the upcoming state word and its parity, which is
//! handy when eyeballing carry events.

use std::env;
use std::process;

use unrandom_rs::scalar;
use unrandom_rs::ReferenceGenerator;

fn usage(exe: &str) -> ! {
    eprintln!("usage: {} <seed> <count>", exe);
    process::exit(2);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let exe = args.first().map(String::as_str).unwrap_or("compare_reference");
    if args.len() != 3 {
        usage(exe);
    }

    let Ok(seed) = args[1].parse::<u32>() else {
        usage(exe);
    };
    let Ok(count) = args[2].parse::<i64>() else {
        usage(exe);
    };
    if count < 0 {
        return;
    }
    let count = count as usize;

    let mut gen = ReferenceGenerator::new(seed);
    let reference = scalar::state_sequence(seed, scalar::OUTPUT_OFFSET + count);

    for i in 0..count {
        if i < 64 {
            let state = gen.peek_state();
            println!("[{:02}] = {:010} | {}", i, state, state & 1);
        }

        let expected = reference[i + scalar::OUTPUT_OFFSET] >> 1;
        let generated = gen.advance();

        if generated != expected {
            println!("Mismatch from [{}]: got {}, expected {}", i, generated, expected);
            process::exit(1);
        }
    }

    println!("All tested values matched the reference implementation");
}
