//! Model of the additive lagged-Fibonacci generator behind glibc `random()`.
//!
//! This is the default TYPE_3 configuration: a 31-word state table advanced by
//! `s_i = s_{i-3} + s_{i-31} (mod 2^32)`, emitting the top 31 bits of each new
//! state word. Peter Selinger's exposition covers the construction in detail:
//! <https://www.mathstat.dal.ca/~selinger/random/>
//!
//! Bit-exactness is the point of this module. The seed expansion must multiply
//! through a *signed* 32-bit interpretation of the previous word in 64-bit
//! arithmetic, and the recurrence must wrap mod 2^32; get either wrong and the
//! output diverges from glibc within a few steps.

use crate::stdx::CyclicQueue;

/// Number of 32-bit words in the generator's state table.
pub const STATE_WORDS: usize = 31;

/// Index of the first emitted output in the flat state sequence: 31 seeded
/// words, 3 copied words, then 310 discarded warm-up results.
pub const WARMUP_END: u32 = 344;

/// The glibc TYPE_3 `random()` generator.
///
/// The state table always holds exactly the last 31 words of the recurrence.
/// Outputs lie in `[0, 2^31 - 1]`; the low bit of each state word is
/// discarded on emission.
///
/// Two generators compare equal iff their tables do; equal generators produce
/// identical output forever, which is what makes reconstruction checkable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceGenerator {
    table: CyclicQueue<u32, STATE_WORDS>,
}

impl ReferenceGenerator {
    /// Smallest value `advance` can return.
    pub const MIN: u32 = 0;
    /// Largest value `advance` can return.
    pub const MAX: u32 = u32::MAX >> 1;

    /// Builds a generator from `seed`, mirroring glibc's `srandom`.
    ///
    /// Seed expansion fills the table with `t[0] = seed` and
    /// `t[i] = 16807 * t[i-1] mod 2147483647`, where the multiplication reads
    /// the previous word as a signed 32-bit value and runs in 64-bit signed
    /// arithmetic; negative residues are corrected by adding the modulus.
    /// Three front-to-back rotations then alias positions 31..34 onto 0..3,
    /// and 310 warm-up advances discard the directly seed-dependent outputs.
    ///
    /// Seed 0 collapses the expansion to an all-zero table and is not
    /// meaningful; callers are expected to reject it.
    pub fn new(seed: u32) -> Self {
        let mut table: CyclicQueue<u32, STATE_WORDS> = CyclicQueue::new();
        table.push(seed);
        for _ in 1..STATE_WORDS {
            // The i32 cast keeps the sign of the operation.
            let prev = *table.back() as i32;
            let mut value = (16807i64 * i64::from(prev)) % 2_147_483_647;
            if value < 0 {
                value += 2_147_483_647;
            }
            table.push(value as u32);
        }

        for _ in 31..34 {
            let front = *table.front();
            table.pop_and_push(front);
        }

        let mut gen = Self { table };
        for _ in 34..WARMUP_END {
            gen.advance();
        }
        gen
    }

    /// Builds a generator directly from a 31-word state table.
    ///
    /// `table[0]` is the oldest state word, `table[30]` the newest. The
    /// solver uses this to materialize a reconstructed generator.
    pub fn from_table(table: [u32; STATE_WORDS]) -> Self {
        let mut queue = CyclicQueue::new();
        for word in table {
            queue.push(word);
        }
        Self { table: queue }
    }

    /// Returns the next state word without advancing.
    #[inline]
    pub fn peek_state(&self) -> u32 {
        self.table
            .from_back(2)
            .wrapping_add(*self.table.from_back(30))
    }

    /// Returns the next output value without advancing.
    #[inline]
    pub fn peek(&self) -> u32 {
        self.peek_state() >> 1
    }

    /// Advances the state by one word and returns the emitted output.
    #[inline]
    pub fn advance(&mut self) -> u32 {
        let next = self.peek_state();
        self.table.pop_and_push(next);
        next >> 1
    }

    /// Borrows the internal state table, oldest word first.
    pub fn table(&self) -> &CyclicQueue<u32, STATE_WORDS> {
        &self.table
    }
}
