//! Reconstruction soundness over randomly drawn seeds.

use proptest::prelude::*;

use unrandom_rs::{ReferenceGenerator, Solver};

const PROPTEST_CASES: u32 = 24;

/// Feeds before we declare the solver stuck. Convergence typically takes a
/// few thousand feeds; this leaves two orders of magnitude of headroom.
const FEED_BUDGET: u64 = 64 * 1024;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(crate::cases(PROPTEST_CASES)))]

    #[test]
    fn any_nonzero_seed_reconstructs_exactly(seed in 1u32..) {
        let mut source = ReferenceGenerator::new(seed);
        let mut solver = Solver::new();

        let mut solved = None;
        let mut steps = 0u64;
        while solved.is_none() {
            steps += 1;
            prop_assert!(steps <= FEED_BUDGET, "no convergence for seed {}", seed);
            solved = solver.feed(source.advance());
        }
        let mut solved = solved.unwrap();

        prop_assert_eq!(&solved, &source, "wrong state for seed {}", seed);
        for _ in 0..4096 {
            prop_assert_eq!(solved.advance(), source.advance());
        }
    }

    #[test]
    fn outputs_are_always_31_bit(seed in 1u32.., lookahead in 1usize..2000) {
        let mut gen = ReferenceGenerator::new(seed);
        for _ in 0..lookahead {
            prop_assert!(gen.advance() <= ReferenceGenerator::MAX);
        }
    }
}
