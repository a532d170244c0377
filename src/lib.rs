//! State reconstruction for glibc's default `random()` generator.
//!
//! Given a stream of outputs from the TYPE_3 additive lagged-Fibonacci
//! generator (31-word state, `s_i = s_{i-3} + s_{i-31} mod 2^32`, top 31 bits
//! emitted), this crate recovers the complete internal state without knowing
//! the seed, then hands back a generator that continues the stream
//! bit-identically.
//!
//! High-level flow:
//! 1) [`ReferenceGenerator`] models the target exactly: seed expansion,
//!    warm-up, recurrence, low-bit discard.
//! 2) [`Solver::feed`] consumes outputs one at a time, keeping a 31-deep
//!    output window and a parallel window of symbolic parity vectors.
//! 3) Carry events (output exceeding the carry-free prediction by one) yield
//!    GF(2) equations over the 31 initial state parities, accumulated in an
//!    incrementally row-reduced matrix.
//! 4) At rank 31 the system reads off directly; the recovered parities
//!    supply the discarded low bits and the window supplies the rest.
//!
//! The core performs no I/O, never allocates after construction, and is
//! strictly single-threaded. Everything observable is deterministic in the
//! fed values.

pub mod generator;
pub mod gf2;
pub mod scalar;
pub mod solver;
pub mod stdx;

pub use generator::ReferenceGenerator;
pub use solver::{reconstruct, Solver};
