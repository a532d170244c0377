//! Online recovery of a generator's internal state from its output stream.
//!
//! # How the attack works
//!
//! The target's state obeys `s_i = s_{i-3} + s_{i-31} (mod 2^32)`, but each
//! output discards the low bit: `o_i = s_i >> 1`. Working mod 2^31,
//!
//! ```text
//! o_i = o_{i-3} + o_{i-31} + (s_{i-3} mod 2) * (s_{i-31} mod 2)
//! ```
//!
//! so whenever an observed output exceeds the carry-free prediction
//! `o_{i-3} + o_{i-31}` by one, the low bits of the two lagged states must
//! both be 1 (and the new state's low bit is 0). Each state's parity is a
//! GF(2)-linear combination of the 31 initial parities `p_0 .. p_30`, so
//! every such carry event yields linear equations in those unknowns.
//!
//! The solver tracks a 31-deep window of outputs alongside a parallel window
//! of symbolic parity vectors (bit `i` of a vector is the coefficient of
//! `p_i`), and accumulates carry-event equations in an augmented
//! [`SemiCanonicalMatrix`] whose bit 31 carries the constant term. Because
//! each inserted row immediately eliminates its pivot column everywhere, the
//! moment rank hits 31 every row isolates a single unknown and the system
//! reads off directly, with no back-substitution pass. The recovered initial
//! parities are pushed through the symbolic window to obtain the current
//! parities, which supply the discarded low bits: the full state is then
//! `(output << 1) | parity` per window slot.
//!
//! Seed 0 produces an all-zero state this scheme cannot (and need not)
//! handle; glibc never degenerates that way for the seeds it accepts.

use crate::generator::{ReferenceGenerator, STATE_WORDS};
use crate::gf2::SemiCanonicalMatrix;
use crate::stdx::CyclicQueue;

/// Number of independent equations needed to pin down `p_0 .. p_30`.
const FULL_RANK: u32 = 31;

/// Accumulated linear system over the initial parities.
///
/// Rows are augmented: bits 0..31 are coefficients of `p_0 .. p_30`, bit 31
/// is the constant term (the equation's right-hand side).
#[derive(Clone, Debug, Default)]
struct EquationSystem {
    rank: u32,
    matrix: SemiCanonicalMatrix,
}

impl EquationSystem {
    /// Records `sum(c_i * p_i) = rhs (mod 2)` where `c_i` is bit `i` of
    /// `coefficients`.
    ///
    /// Linearly dependent equations are absorbed without effect. Returns true
    /// once the system is solvable.
    fn push(&mut self, coefficients: u32, rhs: bool) -> bool {
        let row = coefficients | (u32::from(rhs) << 31);
        self.rank += u32::from(self.matrix.push_row(row));
        self.rank == FULL_RANK
    }
}

/// Observes generator outputs and reconstructs the emitting generator.
///
/// Feed it successive outputs of a [`ReferenceGenerator`] (or of the real
/// `random()`); once enough carry events have been observed to determine all
/// 31 initial parities, [`feed`](Solver::feed) returns a generator whose
/// output continues bit-identically to the source's.
///
/// A solver yields at most one generator and is not reusable afterwards.
#[derive(Clone, Debug)]
pub struct Solver {
    /// The 31 most recent outputs observed.
    history: CyclicQueue<u32, STATE_WORDS>,
    /// Symbolic parity vectors for the states aligned with `history`.
    parity: CyclicQueue<u32, STATE_WORDS>,
    equations: EquationSystem,
}

impl Solver {
    /// Constructs a solver ready to be fed output.
    ///
    /// The parity window replays the generator's initialization in the
    /// symbolic domain: basis vectors for `p_0 .. p_30`, the three
    /// front-to-back rotations, then 310 warm-up advances where addition
    /// reduces to XOR. After that the window stays in lockstep with the
    /// source generator's state, one advance per fed value.
    pub fn new() -> Self {
        let mut parity: CyclicQueue<u32, STATE_WORDS> = CyclicQueue::new();
        for i in 0..STATE_WORDS {
            parity.push(1u32 << i);
        }

        for _ in 31..34 {
            let front = *parity.front();
            parity.pop_and_push(front);
        }

        let mut solver = Self {
            history: CyclicQueue::new(),
            parity,
            equations: EquationSystem::default(),
        };
        for _ in 34..344 {
            solver.advance_parity();
        }
        solver
    }

    /// Feeds one output `value` (must be below 2^31) from the source.
    ///
    /// Returns the reconstructed generator once the observed carry events
    /// determine the full initial-parity system, `None` before that.
    pub fn feed(&mut self, value: u32) -> Option<ReferenceGenerator> {
        debug_assert!(value <= ReferenceGenerator::MAX, "fed value out of range");

        if !self.history.is_full() {
            self.history.push(value);
            self.advance_parity();
            return None;
        }

        let o31 = *self.history.from_back(30); // o_{i-31}
        let o3 = *self.history.from_back(2); // o_{i-3}

        let q31 = *self.parity.from_back(30); // parity of s_{i-31}
        let q3 = *self.parity.from_back(2); // parity of s_{i-3}
        let q0 = q31 ^ q3;

        self.history.pop_and_push(value);
        self.parity.pop_and_push(q0);

        let expected = (o31 + o3) & ReferenceGenerator::MAX;
        if value != expected {
            // A carry event: both lagged low bits were 1. Anything other
            // than an excess of exactly one means the stream did not come
            // from the modeled generator.
            debug_assert_eq!(
                value,
                expected.wrapping_add(1) & ReferenceGenerator::MAX,
                "output stream inconsistent with the modeled recurrence"
            );

            // Both facts are recorded; the matrix silently absorbs whichever
            // is linearly dependent. The implied third fact (the new state's
            // parity is 0) is a combination of these two and q0.
            if self.equations.push(q31, true) || self.equations.push(q3, true) {
                return Some(self.solve());
            }
        }

        None
    }

    /// Slides the symbolic window one state forward.
    fn advance_parity(&mut self) {
        let q = *self.parity.from_back(2) ^ *self.parity.from_back(30);
        self.parity.pop_and_push(q);
    }

    /// Rebuilds the source generator's current state table.
    ///
    /// Requires full rank. The recovered parity bits (oldest in the LSB)
    /// supply the low bit each output discarded.
    fn solve(&self) -> ReferenceGenerator {
        debug_assert_eq!(self.equations.rank, FULL_RANK);

        let mut parity_bits = self.solve_parities();
        let mut table = [0u32; STATE_WORDS];
        for (slot, &output) in table.iter_mut().zip(self.history.iter()) {
            *slot = (output << 1) | (parity_bits & 1);
            parity_bits >>= 1;
        }

        ReferenceGenerator::from_table(table)
    }

    /// Recovers the current parities of the window's 31 states.
    ///
    /// At full rank each non-zero matrix row isolates one unknown, with its
    /// value in the constant-term bit; that reads out the initial parities
    /// directly. Applying each symbolic vector to them (dot product over
    /// GF(2)) yields the concrete parity of the state it stands for, packed
    /// oldest-first from the LSB.
    fn solve_parities(&self) -> u32 {
        debug_assert_eq!(self.equations.rank, FULL_RANK);

        let mut initial_parities = 0u32;
        for i in 0..32 {
            let row = self.equations.matrix.row(i);
            debug_assert!(row.count_ones() <= 2, "row must isolate one unknown");
            initial_parities |= (row >> 31) << i;
        }

        let mut parities = 0u32;
        for (i, &coefficients) in self.parity.iter().enumerate() {
            parities |= ((coefficients & initial_parities).count_ones() & 1) << i;
        }
        parities
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives a fresh [`Solver`] from `source` until reconstruction succeeds.
///
/// Returns the number of values consumed and the reconstructed generator.
/// Diverges if the source never produces enough carry events, which does not
/// happen for any non-degenerate generator stream.
pub fn reconstruct(mut source: impl FnMut() -> u32) -> (u64, ReferenceGenerator) {
    let mut solver = Solver::new();
    let mut steps = 0u64;
    loop {
        steps += 1;
        if let Some(gen) = solver.feed(source()) {
            return (steps, gen);
        }
    }
}
